//! Fundamental physical constants (CODATA 2010 values).
//!
//! Each constant exists as a typed quantity and as a raw `*_VALUE` in coherent SI units. The speed of light and the
//! gravitational constant are derived from the Planck units, which keeps their dimensions checked by the compiler.
//!
//! ```rust
//! use dimq::constants::{GRAVITATIONAL_CONSTANT, MASS_OF_EARTH, SPEED_OF_LIGHT};
//! use dimq::Length;
//!
//! assert!((SPEED_OF_LIGHT.value() - 2.997_924_58e8).abs() < 1e3);
//!
//! // Surface gravity from G·M / r².
//! let r = Length::new(6.371e6);
//! let g = GRAVITATIONAL_CONSTANT * MASS_OF_EARTH / (r * r);
//! assert_eq!(g.to_string().split(' ').nth(1), Some("m/s^2"));
//! ```

use dimq_core::{
    Charge, GravitationalConstantUnit, Length, Mass, Permeability, Permittivity, Resistance, Speed, Temperature, Time,
};

// ─────────────────────────────────────────────────────────────────────────────
// Universal
// ─────────────────────────────────────────────────────────────────────────────

/// Characteristic impedance of vacuum, Ω.
pub const VACUUM_IMPEDANCE_VALUE: f64 = 376.730313461;
/// Characteristic impedance of vacuum (Z₀).
pub const VACUUM_IMPEDANCE: Resistance = Resistance::new(VACUUM_IMPEDANCE_VALUE);

/// Electric constant, F/m.
pub const ELECTRIC_CONSTANT_VALUE: f64 = 8.854187817e-12;
/// Electric constant, vacuum permittivity (ε₀).
pub const ELECTRIC_CONSTANT: Permittivity = Permittivity::new(ELECTRIC_CONSTANT_VALUE);

/// Magnetic constant, H/m.
pub const MAGNETIC_CONSTANT_VALUE: f64 = 12.566370614e-7;
/// Magnetic constant, vacuum permeability (μ₀).
pub const MAGNETIC_CONSTANT: Permeability = Permeability::new(MAGNETIC_CONSTANT_VALUE);

// ─────────────────────────────────────────────────────────────────────────────
// Electromagnetic and atomic
// ─────────────────────────────────────────────────────────────────────────────

/// Elementary charge, C.
pub const ELEMENTARY_CHARGE_VALUE: f64 = 1.602176565e-19;
/// Elementary charge (e).
pub const ELEMENTARY_CHARGE: Charge = Charge::new(ELEMENTARY_CHARGE_VALUE);
/// Charge of the electron (−e).
pub const ELECTRON_CHARGE: Charge = Charge::new(-ELEMENTARY_CHARGE_VALUE);

/// Electron mass, kg.
pub const ELECTRON_MASS_VALUE: f64 = 9.10938291e-31;
/// Electron mass (mₑ).
pub const ELECTRON_MASS: Mass = Mass::new(ELECTRON_MASS_VALUE);

// ─────────────────────────────────────────────────────────────────────────────
// Planck units
// ─────────────────────────────────────────────────────────────────────────────

/// Planck length, m.
pub const PLANCK_LENGTH_VALUE: f64 = 1.61619997e-35;
/// Planck length.
pub const PLANCK_LENGTH: Length = Length::new(PLANCK_LENGTH_VALUE);

/// Planck mass, kg.
pub const PLANCK_MASS_VALUE: f64 = 2.1765113e-8;
/// Planck mass.
pub const PLANCK_MASS: Mass = Mass::new(PLANCK_MASS_VALUE);

/// Planck time, s.
pub const PLANCK_TIME_VALUE: f64 = 5.3910632e-44;
/// Planck time.
pub const PLANCK_TIME: Time = Time::new(PLANCK_TIME_VALUE);

/// Planck charge, C.
pub const PLANCK_CHARGE_VALUE: f64 = 1.87554595641e-18;
/// Planck charge.
pub const PLANCK_CHARGE: Charge = Charge::new(PLANCK_CHARGE_VALUE);

/// Planck temperature, K.
pub const PLANCK_TEMPERATURE_VALUE: f64 = 1.41683385e32;
/// Planck temperature.
pub const PLANCK_TEMPERATURE: Temperature = Temperature::new(PLANCK_TEMPERATURE_VALUE);

/// Speed of light in vacuum, one Planck length per Planck time.
pub const SPEED_OF_LIGHT: Speed = PLANCK_LENGTH.per(PLANCK_TIME);
/// Speed of light, m/s.
pub const SPEED_OF_LIGHT_VALUE: f64 = SPEED_OF_LIGHT.value();

/// Newtonian constant of gravitation, lₚ³ / (mₚ tₚ²).
pub const GRAVITATIONAL_CONSTANT: GravitationalConstantUnit = PLANCK_LENGTH
    .times(PLANCK_LENGTH)
    .times(PLANCK_LENGTH)
    .per(PLANCK_MASS)
    .per(PLANCK_TIME)
    .per(PLANCK_TIME);
/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT_VALUE: f64 = GRAVITATIONAL_CONSTANT.value();

// ─────────────────────────────────────────────────────────────────────────────
// Astronomical
// ─────────────────────────────────────────────────────────────────────────────

/// Mass of the Earth, kg.
pub const MASS_OF_EARTH_VALUE: f64 = 5.97219e24;
/// Mass of the Earth.
pub const MASS_OF_EARTH: Mass = Mass::new(MASS_OF_EARTH_VALUE);
