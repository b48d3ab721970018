//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct, the **classical orbital element
//! representation** widely used in celestial mechanics, together with its conversions from and
//! to the Cartesian state.
//!
//! ## What are Keplerian elements?
//!
//! The six Keplerian elements are:
//!
//! 1. **a** – Semi-major axis
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (radians)
//! 4. **Ω** – Longitude of ascending node (radians)
//! 5. **ω** – Argument of periapsis (radians)
//! 6. **ν** – True anomaly (radians)
//!
//! They describe the osculating two-body orbit passing through a state at one instant. The set
//! is anomaly-bearing: converting a state back and forth reproduces the state itself, not a
//! propagation of it.
//!
//! ## Degeneracies
//!
//! Classical Keplerian elements suffer from singularities:
//!
//! - **Parabolic orbits (`e → 1`)**: the semi-major axis diverges.
//!   → `semi_major_axis` holds the semi-latus rectum instead.
//! - **Circular orbits (`e → 0`)**: the periapsis argument ω becomes undefined.
//!   → conventionally set to `0.0`, with ν measured from the ascending node.
//! - **Equatorial orbits (`i → 0`)**: the ascending node Ω becomes undefined.
//!   → conventionally set to `0.0`, with ω measured from the x-axis.
//!
//! [`KeplerianElements::shape`] reports which of these conventions applies to a given set.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use orbel::constants::EARTH_GRAVITATIONAL_PARAMETER;
//! use orbel::orbit_type::cartesian_element::CartesianElements;
//! use orbel::orbit_type::keplerian_element::KeplerianElements;
//!
//! let state = CartesianElements::new(
//!     Vector3::new(7000.0e3, 0.0, 0.0),
//!     Vector3::new(0.0, 6.0e3, 4.0e3),
//! );
//!
//! let kep = KeplerianElements::from_cartesian(&state, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
//! let back = kep.to_cartesian(EARTH_GRAVITATIONAL_PARAMETER).unwrap();
//!
//! assert!((back.position - state.position).norm() < 1e-3);
//! ```
//!
//! ## See also
//!
//! - [`crate::conversion`] – the same transformations on raw `Vector6` columns.
//! - [`crate::orbit_type::OrbitShape`] – classification of the singular regimes.

use nalgebra::Vector6;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::Radian;
use crate::conversion::{
    cartesian_to_keplerian_with_tolerance, keplerian_to_cartesian_with_tolerance,
    ARGUMENT_OF_PERIAPSIS_INDEX, DEFAULT_TOLERANCE, ECCENTRICITY_INDEX, INCLINATION_INDEX,
    LONGITUDE_OF_ASCENDING_NODE_INDEX, SEMI_MAJOR_AXIS_INDEX, TRUE_ANOMALY_INDEX,
};
use crate::orbel_errors::OrbelError;
use crate::orbit_type::cartesian_element::CartesianElements;
use crate::orbit_type::OrbitShape;

/// Keplerian orbital elements (osculating, two-body).
///
/// Units
/// -----
/// * `semi_major_axis`: length units of the caller's system; holds the semi-latus rectum
///   for parabolic orbits.
/// * `eccentricity`: unitless.
/// * `inclination`: radians, in `[0, π]`.
/// * `ascending_node_longitude`: radians (Ω), in `[0, 2π)`.
/// * `periapsis_argument`: radians (ω), in `[0, 2π)`.
/// * `true_anomaly`: radians (ν), in `[0, 2π)`.
///
/// Notes
/// -----
/// This struct represents the classical Keplerian element set (a, e, i, Ω, ω, ν) at the
/// instant of the state it was derived from. There is no epoch field and no propagation:
/// the true anomaly pins the position on the conic.
///
/// See also
/// --------
/// * [`CartesianElements`] – The position/velocity description of the same state.
/// * [`OrbitShape`] – Which singularity conventions apply to a set.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub true_anomaly: Radian,
}

impl KeplerianElements {
    /// Build the osculating elements of a Cartesian state with
    /// [`DEFAULT_TOLERANCE`](crate::conversion::DEFAULT_TOLERANCE).
    ///
    /// Arguments
    /// ---------
    /// * `cartesian`: position/velocity state of the orbiting body
    /// * `gravitational_parameter`: gravitational parameter μ of the central body
    ///
    /// Return
    /// ------
    /// * `Result<KeplerianElements, OrbelError>`: the osculating element set.
    ///
    /// See also
    /// --------
    /// * [`KeplerianElements::from_cartesian_with_tolerance`] – explicit limit-case threshold.
    /// * [`crate::conversion::cartesian_to_keplerian`] – same operation on raw vectors.
    pub fn from_cartesian(
        cartesian: &CartesianElements,
        gravitational_parameter: f64,
    ) -> Result<Self, OrbelError> {
        Self::from_cartesian_with_tolerance(cartesian, gravitational_parameter, DEFAULT_TOLERANCE)
    }

    /// Build the osculating elements of a Cartesian state.
    ///
    /// Arguments
    /// ---------
    /// * `cartesian`: position/velocity state of the orbiting body
    /// * `gravitational_parameter`: gravitational parameter μ of the central body
    /// * `tolerance`: threshold below which a dimensionless quantity counts as zero
    ///
    /// Return
    /// ------
    /// * `Result<KeplerianElements, OrbelError>`: the osculating element set, with the
    ///   singular regimes mapped to the conventions described in the module documentation.
    pub fn from_cartesian_with_tolerance(
        cartesian: &CartesianElements,
        gravitational_parameter: f64,
        tolerance: f64,
    ) -> Result<Self, OrbelError> {
        let keplerian = cartesian_to_keplerian_with_tolerance(
            &Vector6::from(cartesian),
            gravitational_parameter,
            tolerance,
        )?;
        Ok(Self::from(&keplerian))
    }

    /// Rebuild the Cartesian state pinned by these elements with
    /// [`DEFAULT_TOLERANCE`](crate::conversion::DEFAULT_TOLERANCE).
    ///
    /// Arguments
    /// ---------
    /// * `gravitational_parameter`: gravitational parameter μ of the central body
    ///
    /// Return
    /// ------
    /// * `Result<CartesianElements, OrbelError>`: the position/velocity state at `true_anomaly`.
    ///
    /// See also
    /// --------
    /// * [`KeplerianElements::to_cartesian_with_tolerance`] – explicit limit-case threshold.
    /// * [`crate::conversion::keplerian_to_cartesian`] – same operation on raw vectors.
    pub fn to_cartesian(
        &self,
        gravitational_parameter: f64,
    ) -> Result<CartesianElements, OrbelError> {
        self.to_cartesian_with_tolerance(gravitational_parameter, DEFAULT_TOLERANCE)
    }

    /// Rebuild the Cartesian state pinned by these elements.
    ///
    /// Arguments
    /// ---------
    /// * `gravitational_parameter`: gravitational parameter μ of the central body
    /// * `tolerance`: threshold below which a dimensionless quantity counts as zero
    ///
    /// Return
    /// ------
    /// * `Result<CartesianElements, OrbelError>`: the position/velocity state at `true_anomaly`.
    pub fn to_cartesian_with_tolerance(
        &self,
        gravitational_parameter: f64,
        tolerance: f64,
    ) -> Result<CartesianElements, OrbelError> {
        let state = keplerian_to_cartesian_with_tolerance(
            &Vector6::from(self),
            gravitational_parameter,
            tolerance,
        )?;
        Ok(CartesianElements::from(&state))
    }

    /// Classify this element set with [`DEFAULT_TOLERANCE`](crate::conversion::DEFAULT_TOLERANCE).
    pub fn shape(&self) -> OrbitShape {
        self.shape_with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Classify this element set against the singularities of the classical representation.
    pub fn shape_with_tolerance(&self, tolerance: f64) -> OrbitShape {
        OrbitShape::classify(self.eccentricity, self.inclination, tolerance)
    }

    /// Semi-latus rectum of the conic, `p = a (1 - e²)`.
    ///
    /// For parabolic sets `semi_major_axis` already stores `p` and is returned unchanged.
    pub fn semi_latus_rectum(&self) -> f64 {
        if (self.eccentricity - 1.0).abs() < DEFAULT_TOLERANCE {
            self.semi_major_axis
        } else {
            self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
        }
    }
}

impl From<&Vector6<f64>> for KeplerianElements {
    /// Read an element vector laid out as in [`crate::conversion`] (by reference).
    fn from(keplerian: &Vector6<f64>) -> Self {
        KeplerianElements {
            semi_major_axis: keplerian[SEMI_MAJOR_AXIS_INDEX],
            eccentricity: keplerian[ECCENTRICITY_INDEX],
            inclination: keplerian[INCLINATION_INDEX],
            ascending_node_longitude: keplerian[LONGITUDE_OF_ASCENDING_NODE_INDEX],
            periapsis_argument: keplerian[ARGUMENT_OF_PERIAPSIS_INDEX],
            true_anomaly: keplerian[TRUE_ANOMALY_INDEX],
        }
    }
}

impl From<Vector6<f64>> for KeplerianElements {
    /// Read an element vector laid out as in [`crate::conversion`] (by value).
    fn from(keplerian: Vector6<f64>) -> Self {
        KeplerianElements::from(&keplerian)
    }
}

impl From<&KeplerianElements> for Vector6<f64> {
    /// Write the element vector laid out as in [`crate::conversion`] (by reference).
    fn from(keplerian: &KeplerianElements) -> Self {
        Vector6::new(
            keplerian.semi_major_axis,
            keplerian.eccentricity,
            keplerian.inclination,
            keplerian.periapsis_argument,
            keplerian.ascending_node_longitude,
            keplerian.true_anomaly,
        )
    }
}

impl From<KeplerianElements> for Vector6<f64> {
    /// Write the element vector laid out as in [`crate::conversion`] (by value).
    fn from(keplerian: KeplerianElements) -> Self {
        Vector6::from(&keplerian)
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        writeln!(f, "Keplerian Elements ({})", self.shape())?;
        writeln!(f, "-------------------------------------------")?;
        if (self.eccentricity - 1.0).abs() < DEFAULT_TOLERANCE {
            writeln!(
                f,
                "  p   (semi-latus rectum)     = {:.6}",
                self.semi_major_axis
            )?;
        } else {
            writeln!(
                f,
                "  a   (semi-major axis)       = {:.6}",
                self.semi_major_axis
            )?;
        }
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  ν   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly * rad_to_deg
        )
    }
}

#[cfg(test)]
pub(crate) mod test_keplerian_element {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector3;

    use super::*;
    use crate::constants::EARTH_GRAVITATIONAL_PARAMETER;

    fn reference_elements() -> KeplerianElements {
        KeplerianElements {
            semi_major_axis: 7000.0e3,
            eccentricity: 0.1,
            inclination: 0.5,
            ascending_node_longitude: 1.0,
            periapsis_argument: 2.0,
            true_anomaly: 3.0,
        }
    }

    #[test]
    fn test_vector6_round_trip_keeps_the_layout() {
        let elements = reference_elements();
        let vector = Vector6::from(&elements);

        assert_eq!(vector[SEMI_MAJOR_AXIS_INDEX], elements.semi_major_axis);
        assert_eq!(vector[ECCENTRICITY_INDEX], elements.eccentricity);
        assert_eq!(vector[INCLINATION_INDEX], elements.inclination);
        assert_eq!(
            vector[ARGUMENT_OF_PERIAPSIS_INDEX],
            elements.periapsis_argument
        );
        assert_eq!(
            vector[LONGITUDE_OF_ASCENDING_NODE_INDEX],
            elements.ascending_node_longitude
        );
        assert_eq!(vector[TRUE_ANOMALY_INDEX], elements.true_anomaly);
        assert_eq!(KeplerianElements::from(vector), elements);
    }

    #[test]
    fn test_cartesian_round_trip_through_the_typed_api() {
        let elements = reference_elements();
        let state = elements
            .to_cartesian(EARTH_GRAVITATIONAL_PARAMETER)
            .expect("reference elements describe a valid ellipse");
        let back = KeplerianElements::from_cartesian(&state, EARTH_GRAVITATIONAL_PARAMETER)
            .expect("state just built from elements must convert back");

        assert_relative_eq!(
            back.semi_major_axis,
            elements.semi_major_axis,
            max_relative = 1e-10
        );
        assert_abs_diff_eq!(back.eccentricity, elements.eccentricity, epsilon = 1e-12);
        assert_abs_diff_eq!(back.inclination, elements.inclination, epsilon = 1e-12);
        assert_abs_diff_eq!(
            back.ascending_node_longitude,
            elements.ascending_node_longitude,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(
            back.periapsis_argument,
            elements.periapsis_argument,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(back.true_anomaly, elements.true_anomaly, epsilon = 1e-10);
    }

    #[test]
    fn test_from_cartesian_matches_the_raw_conversion() {
        let state = CartesianElements::new(
            Vector3::new(7000.0e3, 0.0, 0.0),
            Vector3::new(0.0, 6.0e3, 4.0e3),
        );

        let typed = KeplerianElements::from_cartesian(&state, EARTH_GRAVITATIONAL_PARAMETER)
            .expect("bound inclined state");
        let raw = crate::conversion::cartesian_to_keplerian(
            &Vector6::from(&state),
            EARTH_GRAVITATIONAL_PARAMETER,
        )
        .expect("bound inclined state");

        assert_eq!(Vector6::from(&typed), raw);
    }

    #[test]
    fn test_shape_classification() {
        let mut elements = reference_elements();
        assert_eq!(elements.shape(), OrbitShape::Generic);

        elements.eccentricity = 0.0;
        assert_eq!(elements.shape(), OrbitShape::Circular);

        elements.inclination = 0.0;
        assert_eq!(elements.shape(), OrbitShape::CircularEquatorial);

        elements.eccentricity = 1.0;
        assert_eq!(elements.shape(), OrbitShape::Equatorial);

        elements.inclination = 0.5;
        assert_eq!(elements.shape(), OrbitShape::Parabolic);
        assert_eq!(elements.shape_with_tolerance(1e-9), OrbitShape::Parabolic);
    }

    #[test]
    fn test_semi_latus_rectum_follows_the_slot_convention() {
        let elements = reference_elements();
        assert_relative_eq!(
            elements.semi_latus_rectum(),
            7000.0e3 * (1.0 - 0.01),
            max_relative = 1e-14
        );

        let parabolic = KeplerianElements {
            semi_major_axis: 14000.0e3,
            eccentricity: 1.0,
            inclination: 0.5,
            ascending_node_longitude: 0.0,
            periapsis_argument: 0.0,
            true_anomaly: 0.0,
        };
        // Slot 0 of a parabolic set already holds p
        assert_eq!(parabolic.semi_latus_rectum(), 14000.0e3);
    }

    #[test]
    fn test_display_labels_the_parabolic_slot() {
        let elements = reference_elements();
        let text = format!("{elements}");
        assert!(text.starts_with("Keplerian Elements (generic)"));
        assert!(text.contains("a   (semi-major axis)"));

        let parabolic = KeplerianElements {
            eccentricity: 1.0,
            ..reference_elements()
        };
        let text = format!("{parabolic}");
        assert!(text.contains("p   (semi-latus rectum)"));
    }
}
