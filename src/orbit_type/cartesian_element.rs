//! # Cartesian orbital state
//!
//! This module defines the [`CartesianElements`] struct, the typed form of the
//! `[x, y, z, vx, vy, vz]` state vector consumed by [`crate::conversion`].
//!
//! ## Units
//!
//! Any consistent unit system works (meters with m/s, AU with AU/day, ...); the gravitational
//! parameter passed to the conversions must use the same length and time units.
//!
//! ## Provided functionality
//!
//! - Scalar accessors for the quantities the two-body problem conserves or constrains:
//!   [`radial_distance`](CartesianElements::radial_distance), [`speed`](CartesianElements::speed),
//!   [`specific_angular_momentum`](CartesianElements::specific_angular_momentum),
//!   [`specific_orbital_energy`](CartesianElements::specific_orbital_energy).
//! - Lossless mapping to and from [`nalgebra::Vector6`] through the [`From`] implementations,
//!   following the component layout of [`crate::conversion`].

use nalgebra::{Vector3, Vector6};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conversion::{X_POSITION_INDEX, X_VELOCITY_INDEX};

/// Cartesian position/velocity state of an orbiting body.
///
/// Units
/// -----
/// * `position`: length units of the caller's system.
/// * `velocity`: matching length per time units.
///
/// See also
/// --------
/// * [`crate::orbit_type::keplerian_element::KeplerianElements`] – the osculating description.
/// * [`crate::conversion::cartesian_to_keplerian`] – conversion on the raw vectors.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CartesianElements {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl CartesianElements {
    /// Build a state from its position and velocity vectors.
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// Distance from the center of the reference frame.
    pub fn radial_distance(&self) -> f64 {
        self.position.norm()
    }

    /// Magnitude of the velocity vector.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Specific orbital angular momentum `h = r × v`, constant along a two-body orbit.
    pub fn specific_angular_momentum(&self) -> Vector3<f64> {
        self.position.cross(&self.velocity)
    }

    /// Specific orbital energy `v²/2 - μ/r`, negative for bound orbits, zero for parabolic
    /// ones and positive for hyperbolic ones.
    ///
    /// Arguments
    /// ---------
    /// * `gravitational_parameter`: gravitational parameter μ of the central body
    pub fn specific_orbital_energy(&self, gravitational_parameter: f64) -> f64 {
        self.velocity.norm_squared() / 2.0 - gravitational_parameter / self.position.norm()
    }
}

impl From<&Vector6<f64>> for CartesianElements {
    fn from(state: &Vector6<f64>) -> Self {
        CartesianElements {
            position: state.fixed_rows::<3>(X_POSITION_INDEX).into_owned(),
            velocity: state.fixed_rows::<3>(X_VELOCITY_INDEX).into_owned(),
        }
    }
}

impl From<Vector6<f64>> for CartesianElements {
    fn from(state: Vector6<f64>) -> Self {
        CartesianElements::from(&state)
    }
}

impl From<&CartesianElements> for Vector6<f64> {
    fn from(cartesian: &CartesianElements) -> Self {
        Vector6::new(
            cartesian.position.x,
            cartesian.position.y,
            cartesian.position.z,
            cartesian.velocity.x,
            cartesian.velocity.y,
            cartesian.velocity.z,
        )
    }
}

impl From<CartesianElements> for Vector6<f64> {
    fn from(cartesian: CartesianElements) -> Self {
        Vector6::from(&cartesian)
    }
}

impl fmt::Display for CartesianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cartesian State")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  r   (position) = [{:.6}, {:.6}, {:.6}]",
            self.position.x, self.position.y, self.position.z
        )?;
        writeln!(
            f,
            "  v   (velocity) = [{:.6}, {:.6}, {:.6}]",
            self.velocity.x, self.velocity.y, self.velocity.z
        )
    }
}
