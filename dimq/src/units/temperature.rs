//! Temperature units and scale conversions.
//!
//! Temperatures are absolute and stored in kelvin. Celsius and Fahrenheit are affine scales, not multiples of the
//! kelvin, so they are handled by conversion functions instead of unit constants.
//!
//! ```rust
//! use dimq::units::temperature::{from_celsius, to_fahrenheit};
//!
//! let boiling = from_celsius(100.0);
//! assert!((boiling.value() - 373.15).abs() < 1e-9);
//! assert!((to_fahrenheit(boiling) - 212.0).abs() < 1e-9);
//! ```

use dimq_core::{Temperature, KELVIN};

/// Offset between the Kelvin and Celsius scales.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Same as the base unit.
pub const DEGREE_KELVIN: Temperature = KELVIN;

/// Size of one Rankine (and Fahrenheit) degree.
pub const RANKINE: Temperature = KELVIN.scale(5.0 / 9.0);

/// Absolute temperature for a Celsius reading.
pub const fn from_celsius(celsius: f64) -> Temperature {
    Temperature::new(celsius + CELSIUS_OFFSET)
}

/// Celsius reading of an absolute temperature.
pub const fn to_celsius(t: Temperature) -> f64 {
    t.value() - CELSIUS_OFFSET
}

/// Absolute temperature for a Fahrenheit reading.
pub const fn from_fahrenheit(fahrenheit: f64) -> Temperature {
    from_celsius((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Fahrenheit reading of an absolute temperature.
pub const fn to_fahrenheit(t: Temperature) -> f64 {
    to_celsius(t) * 9.0 / 5.0 + 32.0
}
