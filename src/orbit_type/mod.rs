//! # Orbital state representations
//!
//! This module defines the typed counterparts of the raw [`nalgebra::Vector6`] columns consumed
//! by [`crate::conversion`]:
//!
//! - [`cartesian_element`](crate::orbit_type::cartesian_element) — Cartesian state `(r, v)`,
//!   the position/velocity pair of the orbiting body.
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) — Classical Keplerian elements
//!   `(a, e, i, Ω, ω, ν)`, the osculating description of the same state.
//!
//! The [`OrbitShape`](crate::orbit_type::OrbitShape) enum classifies an element set with respect
//! to the singularities of the classical representation, so callers can tell which elements of a
//! converted orbit carry a convention (`ω = 0`, `Ω = 0`, semi-latus rectum in slot 0) rather than
//! a measured angle.
//!
//! ## Typical workflow
//!
//! ```rust
//! use nalgebra::Vector3;
//! use orbel::constants::EARTH_GRAVITATIONAL_PARAMETER;
//! use orbel::orbit_type::cartesian_element::CartesianElements;
//! use orbel::orbit_type::keplerian_element::KeplerianElements;
//!
//! // Low Earth orbit state (meters and meters per second)
//! let state = CartesianElements::new(
//!     Vector3::new(7000.0e3, 0.0, 0.0),
//!     Vector3::new(0.0, 6.0e3, 4.0e3),
//! );
//!
//! // Build the osculating elements from the state
//! if let Ok(kep) = KeplerianElements::from_cartesian(&state, EARTH_GRAVITATIONAL_PARAMETER) {
//!     println!("semi-major axis = {} m", kep.semi_major_axis);
//!     println!("shape = {}", kep.shape());
//! }
//! ```

use std::fmt;

use crate::constants::Radian;

/// Typed Cartesian position/velocity state and related accessors.
pub mod cartesian_element;

/// Classical Keplerian elements structure and utilities.
pub mod keplerian_element;

/// Geometric regime of an osculating orbit with respect to the singularities of the
/// classical Keplerian element set.
///
/// Variants
/// --------
/// * `Generic` — No singularity applies; every element is well defined.
/// * `Parabolic` — `|e - 1|` below tolerance; slot 0 of an element vector holds the
///   semi-latus rectum instead of the (infinite) semi-major axis.
/// * `Circular` — `e` below tolerance; `ω` is conventionally `0` and `ν` is measured from
///   the ascending node.
/// * `Equatorial` — `i` below tolerance; `Ω` is conventionally `0` and `ω` is measured from
///   the x-axis.
/// * `CircularEquatorial` — Both of the above; `ν` is measured from the x-axis.
///
/// A circular or equatorial orbit is never reported as `Parabolic`: `e ≈ 0` excludes `e ≈ 1`,
/// and an equatorial parabola is classified by its dominant angular singularity.
///
/// See also
/// --------
/// * [`crate::conversion::cartesian_to_keplerian_with_tolerance`] – where the conventions are applied.
/// * [`keplerian_element::KeplerianElements::shape`] – classification of a typed element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitShape {
    Generic,
    Parabolic,
    Circular,
    Equatorial,
    CircularEquatorial,
}

impl OrbitShape {
    /// Classify an orbit from its eccentricity and inclination.
    ///
    /// Arguments
    /// ---------
    /// * `eccentricity`: osculating eccentricity, `e ≥ 0`
    /// * `inclination`: osculating inclination in radians
    /// * `tolerance`: threshold below which a quantity counts as zero
    ///
    /// Return
    /// ------
    /// * The [`OrbitShape`] variant matching the two singularity tests.
    pub fn classify(eccentricity: f64, inclination: Radian, tolerance: f64) -> Self {
        let circular = eccentricity.abs() < tolerance;
        let equatorial = inclination.abs() < tolerance;

        match (circular, equatorial) {
            (true, true) => OrbitShape::CircularEquatorial,
            (true, false) => OrbitShape::Circular,
            (false, true) => OrbitShape::Equatorial,
            (false, false) => {
                if (eccentricity - 1.0).abs() < tolerance {
                    OrbitShape::Parabolic
                } else {
                    OrbitShape::Generic
                }
            }
        }
    }

    /// True when the periapsis is undefined and `ω` carries the zero convention.
    pub fn is_circular(self) -> bool {
        matches!(self, OrbitShape::Circular | OrbitShape::CircularEquatorial)
    }

    /// True when the ascending node is undefined and `Ω` carries the zero convention.
    pub fn is_equatorial(self) -> bool {
        matches!(
            self,
            OrbitShape::Equatorial | OrbitShape::CircularEquatorial
        )
    }
}

impl fmt::Display for OrbitShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrbitShape::Generic => "generic",
            OrbitShape::Parabolic => "parabolic",
            OrbitShape::Circular => "circular",
            OrbitShape::Equatorial => "equatorial",
            OrbitShape::CircularEquatorial => "circular equatorial",
        };
        write!(f, "{label}")
    }
}
