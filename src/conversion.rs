//! # Conversions between Cartesian states and Keplerian orbital elements
//!
//! This module implements the two directions of the classical osculating-element transformation:
//!
//! - [`cartesian_to_keplerian`] — position/velocity state → Keplerian elements,
//! - [`keplerian_to_cartesian`] — Keplerian elements → position/velocity state.
//!
//! Both work on plain [`Vector6`] columns so they can be chained with other linear-algebra code;
//! the typed wrappers in [`crate::orbit_type`] offer the same operations on named structures.
//!
//! ## Element layout
//!
//! A Cartesian state vector is laid out as `[x, y, z, vx, vy, vz]` and a Keplerian element
//! vector as:
//!
//! | Index | Element |
//! |-------|---------|
//! | 0 | semi-major axis `a` (or semi-latus rectum `p` when parabolic) |
//! | 1 | eccentricity `e` |
//! | 2 | inclination `i` |
//! | 3 | argument of periapsis `ω` |
//! | 4 | longitude of the ascending node `Ω` |
//! | 5 | true anomaly `ν` |
//!
//! The named `*_INDEX` constants in this module encode that layout. Any consistent unit system
//! works: with positions in meters, velocities in m/s and `μ` in m³/s², slot 0 comes out in
//! meters; with AU, AU/day and AU³/day² it comes out in AU. Angles are always in radians.
//!
//! ## Limit cases
//!
//! Orbits that sit on a singularity of the classical element set are mapped to conventional
//! values instead of NaNs. A configurable `tolerance` decides when a quantity counts as zero:
//!
//! - **parabolic** (`|e - 1| < tolerance`): slot 0 holds the semi-latus rectum, the semi-major
//!   axis being infinite,
//! - **equatorial** (`|i| < tolerance`): the ascending node is undefined and `Ω` is reported
//!   as `0`, with `ω` measured from the x-axis,
//! - **circular** (`|e| < tolerance`): the periapsis is undefined and `ω` is reported as `0`,
//!   with `ν` measured from the ascending node (or from the x-axis when also equatorial).
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector6;
//! use orbel::constants::EARTH_GRAVITATIONAL_PARAMETER;
//! use orbel::conversion::{cartesian_to_keplerian, ECCENTRICITY_INDEX, SEMI_MAJOR_AXIS_INDEX};
//!
//! let radius = 7000.0e3;
//! let circular_speed = (EARTH_GRAVITATIONAL_PARAMETER / radius).sqrt();
//! let state = Vector6::new(radius, 0.0, 0.0, 0.0, circular_speed, 0.0);
//!
//! let keplerian = cartesian_to_keplerian(&state, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
//! assert!((keplerian[SEMI_MAJOR_AXIS_INDEX] - radius).abs() < 1e-3);
//! assert!(keplerian[ECCENTRICITY_INDEX] < 1e-9);
//! ```

use nalgebra::{Rotation3, Vector3, Vector6};

use crate::constants::DPI;
use crate::orbel_errors::OrbelError;

/// x position component in a Cartesian state vector
pub const X_POSITION_INDEX: usize = 0;
/// y position component in a Cartesian state vector
pub const Y_POSITION_INDEX: usize = 1;
/// z position component in a Cartesian state vector
pub const Z_POSITION_INDEX: usize = 2;
/// x velocity component in a Cartesian state vector
pub const X_VELOCITY_INDEX: usize = 3;
/// y velocity component in a Cartesian state vector
pub const Y_VELOCITY_INDEX: usize = 4;
/// z velocity component in a Cartesian state vector
pub const Z_VELOCITY_INDEX: usize = 5;

/// Semi-major axis in a Keplerian element vector
pub const SEMI_MAJOR_AXIS_INDEX: usize = 0;
/// Semi-latus rectum in a Keplerian element vector, shares slot 0 with the semi-major axis
/// and applies to parabolic orbits only
pub const SEMI_LATUS_RECTUM_INDEX: usize = 0;
/// Eccentricity in a Keplerian element vector
pub const ECCENTRICITY_INDEX: usize = 1;
/// Inclination in a Keplerian element vector
pub const INCLINATION_INDEX: usize = 2;
/// Argument of periapsis in a Keplerian element vector
pub const ARGUMENT_OF_PERIAPSIS_INDEX: usize = 3;
/// Longitude of the ascending node in a Keplerian element vector
pub const LONGITUDE_OF_ASCENDING_NODE_INDEX: usize = 4;
/// True anomaly in a Keplerian element vector
pub const TRUE_ANOMALY_INDEX: usize = 5;

/// Tolerance used by the limit-case checks when none is supplied, ten machine epsilons.
pub const DEFAULT_TOLERANCE: f64 = 10.0 * f64::EPSILON;

/// Convert a Cartesian state to classical Keplerian elements with [`DEFAULT_TOLERANCE`].
///
/// See [`cartesian_to_keplerian_with_tolerance`] for the full contract.
///
/// Arguments
/// ---------
/// * `cartesian_elements`: state vector `[x, y, z, vx, vy, vz]`
/// * `gravitational_parameter`: gravitational parameter μ of the central body
///
/// Return
/// ------
/// * `Result<Vector6<f64>, OrbelError>`: the Keplerian element vector `[a, e, i, ω, Ω, ν]`
///
/// See also
/// --------
/// * [`keplerian_to_cartesian`] – the inverse transformation
/// * [`crate::orbit_type::keplerian_element::KeplerianElements`] – typed wrapper around the same operation
pub fn cartesian_to_keplerian(
    cartesian_elements: &Vector6<f64>,
    gravitational_parameter: f64,
) -> Result<Vector6<f64>, OrbelError> {
    cartesian_to_keplerian_with_tolerance(
        cartesian_elements,
        gravitational_parameter,
        DEFAULT_TOLERANCE,
    )
}

/// Convert a Cartesian state to classical Keplerian elements.
///
/// The transformation handles every conic section. Orbits close to one of the singularities of
/// the classical element set (parabolic, circular, equatorial, or both of the latter) are
/// detected with `tolerance` and mapped to the conventional values described in the
/// [module documentation](self).
///
/// Arguments
/// ---------
/// * `cartesian_elements`: state vector `[x, y, z, vx, vy, vz]`
/// * `gravitational_parameter`: gravitational parameter μ of the central body
/// * `tolerance`: threshold below which a dimensionless quantity counts as zero
///
/// Return
/// ------
/// * `Result<Vector6<f64>, OrbelError>`: the Keplerian element vector `[a, e, i, ω, Ω, ν]`,
///   with `e ≥ 0`, `i ∈ [0, π]` and the three angles in `[0, 2π)`
///
/// Errors
/// ------
/// * [`OrbelError::InvalidTolerance`] if `tolerance` is negative
/// * [`OrbelError::InvalidGravitationalParameter`] if `gravitational_parameter` is not positive
/// * [`OrbelError::DegenerateGeometry`] if the position, the velocity, the angular momentum or
///   the line of nodes has near-zero magnitude (radial trajectories, rest states, exactly
///   retrograde equatorial orbits)
///
/// See also
/// --------
/// * [`keplerian_to_cartesian_with_tolerance`] – the inverse transformation
/// * [`crate::orbit_type::OrbitShape`] – classification of the limit cases
pub fn cartesian_to_keplerian_with_tolerance(
    cartesian_elements: &Vector6<f64>,
    gravitational_parameter: f64,
    tolerance: f64,
) -> Result<Vector6<f64>, OrbelError> {
    if tolerance < 0.0 {
        return Err(OrbelError::InvalidTolerance(tolerance));
    }
    if gravitational_parameter <= 0.0 {
        return Err(OrbelError::InvalidGravitationalParameter(
            gravitational_parameter,
        ));
    }

    let position: Vector3<f64> = cartesian_elements.fixed_rows::<3>(0).into_owned();
    let velocity: Vector3<f64> = cartesian_elements.fixed_rows::<3>(3).into_owned();

    if position.norm() < tolerance {
        return Err(OrbelError::DegenerateGeometry("position"));
    }
    if velocity.norm() < tolerance {
        return Err(OrbelError::DegenerateGeometry("velocity"));
    }

    // Orbital angular momentum and semi-latus rectum
    let angular_momentum = position.cross(&velocity);
    if angular_momentum.norm() < tolerance {
        return Err(OrbelError::DegenerateGeometry("angular momentum"));
    }
    let semi_latus_rectum = angular_momentum.norm_squared() / gravitational_parameter;

    // Line of nodes, normalized only after the equatorial check below
    let node_vector = Vector3::z().cross(&angular_momentum.normalize());

    // Laplace-Runge-Lenz vector, pointing towards periapsis with magnitude e
    let mut eccentricity_vector =
        velocity.cross(&angular_momentum) / gravitational_parameter - position.normalize();
    let eccentricity = eccentricity_vector.norm();

    // A parabolic orbit has no finite semi-major axis, slot 0 stores the semi-latus
    // rectum instead
    let semi_major_axis = if (eccentricity - 1.0).abs() < tolerance {
        semi_latus_rectum
    } else {
        semi_latus_rectum / (1.0 - eccentricity * eccentricity)
    };

    let inclination = (angular_momentum.z / angular_momentum.norm()).acos();

    // Quadrant signal for the argument of periapsis. On an equatorial orbit the z component
    // of the eccentricity vector vanishes identically and the y component takes over.
    let mut periapsis_signal = eccentricity_vector.z;

    let ascending_node = if inclination.abs() < tolerance {
        // Equatorial orbit: the line of nodes is undefined, conventionally pinned to
        // the x-axis
        periapsis_signal = eccentricity_vector.y;
        Vector3::x()
    } else if node_vector.norm() < tolerance {
        // z × h vanished without the equatorial convention applying, i ≈ π
        return Err(OrbelError::DegenerateGeometry("ascending node"));
    } else {
        node_vector.normalize()
    };

    let mut longitude_of_ascending_node = ascending_node.x.acos();
    if ascending_node.y < 0.0 {
        longitude_of_ascending_node = DPI - longitude_of_ascending_node;
    }

    // Quadrant signal for the true anomaly. On a circular orbit r·v vanishes identically
    // and is replaced below.
    let mut true_anomaly_signal = position.dot(&velocity);

    let argument_of_periapsis = if eccentricity.abs() < tolerance {
        // Circular orbit: the periapsis is undefined, the true anomaly is measured from
        // the ascending node instead
        eccentricity_vector = ascending_node;

        true_anomaly_signal = if ascending_node == Vector3::x() {
            position.y
        } else {
            position.z
        };

        0.0
    } else {
        let mut argument_of_periapsis = eccentricity_vector
            .normalize()
            .dot(&ascending_node)
            .acos();
        if periapsis_signal < 0.0 {
            argument_of_periapsis = DPI - argument_of_periapsis;
        }
        argument_of_periapsis
    };

    let mut cos_true_anomaly = position
        .normalize()
        .dot(&eccentricity_vector.normalize());

    // Keep floating-point overshoot out of the arccosine domain at the two anomalies
    // the limit cases land on
    if (cos_true_anomaly - 1.0).abs() < tolerance {
        cos_true_anomaly = 1.0;
    }
    if cos_true_anomaly.abs() < tolerance {
        cos_true_anomaly = 0.0;
    }

    let mut true_anomaly = cos_true_anomaly.acos();
    if true_anomaly_signal < 0.0 {
        true_anomaly = DPI - true_anomaly;
    }

    Ok(Vector6::new(
        semi_major_axis,
        eccentricity,
        inclination,
        argument_of_periapsis,
        longitude_of_ascending_node,
        true_anomaly,
    ))
}

/// Convert classical Keplerian elements to a Cartesian state with [`DEFAULT_TOLERANCE`].
///
/// See [`keplerian_to_cartesian_with_tolerance`] for the full contract.
///
/// Arguments
/// ---------
/// * `keplerian_elements`: element vector `[a, e, i, ω, Ω, ν]` (`[p, e, i, ω, Ω, ν]` when parabolic)
/// * `gravitational_parameter`: gravitational parameter μ of the central body
///
/// Return
/// ------
/// * `Result<Vector6<f64>, OrbelError>`: the Cartesian state vector `[x, y, z, vx, vy, vz]`
///
/// See also
/// --------
/// * [`cartesian_to_keplerian`] – the inverse transformation
pub fn keplerian_to_cartesian(
    keplerian_elements: &Vector6<f64>,
    gravitational_parameter: f64,
) -> Result<Vector6<f64>, OrbelError> {
    keplerian_to_cartesian_with_tolerance(
        keplerian_elements,
        gravitational_parameter,
        DEFAULT_TOLERANCE,
    )
}

/// Convert classical Keplerian elements to a Cartesian state.
///
/// The state is assembled in the perifocal frame from the conic equation and rotated into the
/// inertial frame through the 3-1-3 sequence (`Ω` about z, `i` about x, `ω` about z). Slot 0 of
/// the input follows the same convention as the forward transformation: it is read as the
/// semi-latus rectum when `|e - 1| < tolerance` and as the semi-major axis otherwise.
///
/// Arguments
/// ---------
/// * `keplerian_elements`: element vector `[a, e, i, ω, Ω, ν]` (`[p, e, i, ω, Ω, ν]` when parabolic)
/// * `gravitational_parameter`: gravitational parameter μ of the central body
/// * `tolerance`: threshold below which a dimensionless quantity counts as zero
///
/// Return
/// ------
/// * `Result<Vector6<f64>, OrbelError>`: the Cartesian state vector `[x, y, z, vx, vy, vz]`
///
/// Errors
/// ------
/// * [`OrbelError::InvalidTolerance`] if `tolerance` is negative
/// * [`OrbelError::InvalidGravitationalParameter`] if `gravitational_parameter` is not positive
/// * [`OrbelError::InvalidEccentricity`] if `e < 0`
/// * [`OrbelError::InvalidSemiLatusRectum`] if the conic implied by slots 0 and 1 has `p ≤ 0`,
///   e.g. an elliptic eccentricity paired with a negative semi-major axis
/// * [`OrbelError::UnreachableTrueAnomaly`] if `1 + e cos ν` is not positive, which puts `ν` at
///   or beyond the asymptotes of a hyperbolic or parabolic orbit
pub fn keplerian_to_cartesian_with_tolerance(
    keplerian_elements: &Vector6<f64>,
    gravitational_parameter: f64,
    tolerance: f64,
) -> Result<Vector6<f64>, OrbelError> {
    if tolerance < 0.0 {
        return Err(OrbelError::InvalidTolerance(tolerance));
    }
    if gravitational_parameter <= 0.0 {
        return Err(OrbelError::InvalidGravitationalParameter(
            gravitational_parameter,
        ));
    }

    let eccentricity = keplerian_elements[ECCENTRICITY_INDEX];
    if eccentricity < 0.0 {
        return Err(OrbelError::InvalidEccentricity(eccentricity));
    }

    let inclination = keplerian_elements[INCLINATION_INDEX];
    let argument_of_periapsis = keplerian_elements[ARGUMENT_OF_PERIAPSIS_INDEX];
    let longitude_of_ascending_node = keplerian_elements[LONGITUDE_OF_ASCENDING_NODE_INDEX];
    let true_anomaly = keplerian_elements[TRUE_ANOMALY_INDEX];

    // Slot 0 already holds the semi-latus rectum for a parabolic set, recover it from
    // the semi-major axis otherwise
    let semi_latus_rectum = if (eccentricity - 1.0).abs() < tolerance {
        keplerian_elements[SEMI_LATUS_RECTUM_INDEX]
    } else {
        keplerian_elements[SEMI_MAJOR_AXIS_INDEX] * (1.0 - eccentricity * eccentricity)
    };
    if semi_latus_rectum <= 0.0 {
        return Err(OrbelError::InvalidSemiLatusRectum(semi_latus_rectum));
    }

    let denominator = 1.0 + eccentricity * true_anomaly.cos();
    if denominator < tolerance {
        return Err(OrbelError::UnreachableTrueAnomaly(true_anomaly));
    }
    let radial_distance = semi_latus_rectum / denominator;

    // State in the perifocal frame, x towards periapsis, z along the angular momentum
    let position_perifocal = Vector3::new(
        radial_distance * true_anomaly.cos(),
        radial_distance * true_anomaly.sin(),
        0.0,
    );
    let speed_scale = (gravitational_parameter / semi_latus_rectum).sqrt();
    let velocity_perifocal = Vector3::new(
        -speed_scale * true_anomaly.sin(),
        speed_scale * (eccentricity + true_anomaly.cos()),
        0.0,
    );

    let perifocal_to_inertial =
        Rotation3::from_axis_angle(&Vector3::z_axis(), longitude_of_ascending_node)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_periapsis);

    let position = perifocal_to_inertial * position_perifocal;
    let velocity = perifocal_to_inertial * velocity_perifocal;

    Ok(Vector6::new(
        position.x, position.y, position.z, velocity.x, velocity.y, velocity.z,
    ))
}
