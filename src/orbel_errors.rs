use thiserror::Error;

/// Errors raised by the element conversions.
///
/// The conversions are pure functions with no retry path: every variant below means the caller
/// supplied a state or parameter for which the requested transformation is mathematically
/// undefined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbelError {
    #[error("Degenerate geometry: {0} vector has near-zero magnitude and no usable direction")]
    DegenerateGeometry(&'static str),

    #[error("Invalid tolerance: {0} (must be non-negative)")]
    InvalidTolerance(f64),

    #[error("Invalid gravitational parameter: {0} (must be strictly positive)")]
    InvalidGravitationalParameter(f64),

    #[error("Invalid eccentricity: {0} (must be non-negative)")]
    InvalidEccentricity(f64),

    #[error("Conic section has non-positive semi-latus rectum: {0}")]
    InvalidSemiLatusRectum(f64),

    #[error("True anomaly {0} rad lies at or beyond the asymptotes of the conic")]
    UnreachableTrueAnomaly(f64),
}
