//! # Constants and type definitions for orbel
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orbel` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (days ↔ seconds, AU ↔ km)
//! - Scalar type aliases used across the crate
//!
//! The element conversions themselves take the gravitational parameter of the central body as an
//! argument and work in any consistent unit system; the values below are provided for callers
//! assembling states and for the test suites.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Universal gravitational constant in m³ kg⁻¹ s⁻²
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67259e-11;

/// Number of seconds in a Julian day
pub const JULIAN_DAY_IN_SECONDS: f64 = 86_400.0;

/// Number of days in a Julian year
pub const JULIAN_YEAR_IN_DAYS: f64 = 365.25;

/// Number of seconds in a Julian year
pub const JULIAN_YEAR_IN_SECONDS: f64 = JULIAN_YEAR_IN_DAYS * JULIAN_DAY_IN_SECONDS;

/// Julian day number of the proleptic Gregorian epoch, 0001-01-01 00:00
pub const GREGORIAN_EPOCH_IN_JULIAN_DAYS: f64 = 1_721_425.5;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: Kilometer = 149_597_870.7;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the heliocentric gravitational parameter in AU³/day²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Gravitational parameter of the Earth in m³/s²
pub const EARTH_GRAVITATIONAL_PARAMETER: f64 = 3.986004418e14;

/// Gravitational parameter of the Sun in m³/s²
pub const SUN_GRAVITATIONAL_PARAMETER: f64 = 1.32712440018e20;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
