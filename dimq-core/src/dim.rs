//! Named dimensions.
//!
//! The seven SI base dimensions are marker enums declared with `#[derive(Dimension)]`. Every derived dimension is a
//! type alias built from the constructors in [`crate::dimension`], so equivalent chains (for example
//! `Prod<Mass, Acceleration>` and [`Force`]) share the same [`DimensionVector`](crate::DimensionVector).
//!
//! ```rust
//! use dimq_core::{dim, Dimension};
//!
//! assert_eq!(<dim::Force as Dimension>::SYMBOL, Some("N"));
//! assert_eq!(<dim::Energy as Dimension>::VECTOR, <dim::MomentOfForce as Dimension>::VECTOR);
//! ```

use crate::dimension::{Prod, Quot, Recip};
use dimq_derive::Dimension;

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Length (L).
#[derive(Debug, Dimension)]
#[dimension(length = 1)]
pub enum Length {}

/// Mass (M).
#[derive(Debug, Dimension)]
#[dimension(mass = 1)]
pub enum Mass {}

/// Time (T).
#[derive(Debug, Dimension)]
#[dimension(time = 1)]
pub enum Time {}

/// Electric current (I).
#[derive(Debug, Dimension)]
#[dimension(current = 1)]
pub enum Current {}

/// Thermodynamic temperature (Θ).
#[derive(Debug, Dimension)]
#[dimension(temperature = 1)]
pub enum Temperature {}

/// Amount of substance (N).
#[derive(Debug, Dimension)]
#[dimension(substance = 1)]
pub enum Substance {}

/// Luminous intensity (J).
#[derive(Debug, Dimension)]
#[dimension(luminous_intensity = 1)]
pub enum LuminousIntensity {}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless
// ─────────────────────────────────────────────────────────────────────────────

/// A pure number; displays no unit.
#[derive(Debug, Dimension)]
#[dimension()]
pub enum Dimensionless {}

/// Plane angle; dimensionless, displayed as `rad`.
#[derive(Debug, Dimension)]
#[dimension(symbol = "rad")]
pub enum Angle {}

/// Solid angle; dimensionless, displayed as `rad` like plane angles.
#[derive(Debug, Dimension)]
#[dimension(symbol = "rad")]
pub enum SolidAngle {}

/// Ratio of two masses.
pub type MassFraction = Quot<Mass, Mass>;

// ─────────────────────────────────────────────────────────────────────────────
// Geometry, kinematics and mechanics
// ─────────────────────────────────────────────────────────────────────────────

/// L².
pub type Area = Prod<Length, Length>;
/// L³.
pub type Volume = Prod<Area, Length>;
/// L T⁻¹.
pub type Speed = Quot<Length, Time>;
/// L T⁻².
pub type Acceleration = Quot<Speed, Time>;
/// L⁻¹.
pub type WaveNumber = Recip<Length>;
/// T⁻¹.
pub type Frequency = Recip<Time>;
/// M L⁻³.
pub type MassDensity = Quot<Mass, Volume>;
/// L³ M⁻¹.
pub type SpecificVolume = Quot<Volume, Mass>;
/// Newton.
pub type Force = Prod<Mass, Acceleration>;
/// Pascal.
pub type Pressure = Quot<Force, Area>;
/// Joule.
pub type Energy = Prod<Force, Length>;
/// Watt.
pub type Power = Quot<Energy, Time>;
/// Pascal second.
pub type DynamicViscosity = Prod<Pressure, Time>;
/// Newton metre; same vector as [`Energy`].
pub type MomentOfForce = Prod<Force, Length>;
/// Newton per metre.
pub type SurfaceTension = Quot<Force, Length>;
/// Radian per second.
pub type AngularVelocity = Quot<Angle, Time>;
/// Radian per second squared.
pub type AngularAcceleration = Quot<AngularVelocity, Time>;
/// Joule per cubic metre.
pub type EnergyDensity = Quot<Energy, Volume>;
/// Joule per kilogram.
pub type SpecificEnergy = Quot<Energy, Mass>;
/// L³ M⁻¹ T⁻², the unit of the gravitational constant.
pub type GravitationalConstantUnit = Quot<Quot<SpecificVolume, Time>, Time>;

// ─────────────────────────────────────────────────────────────────────────────
// Electromagnetism
// ─────────────────────────────────────────────────────────────────────────────

/// Ampere per square metre.
pub type CurrentDensity = Quot<Current, Area>;
/// Ampere per metre.
pub type MagneticFieldStrength = Quot<Current, Length>;
/// Coulomb.
pub type Charge = Prod<Current, Time>;
/// Volt.
pub type Voltage = Quot<Power, Current>;
/// Farad.
pub type Capacitance = Quot<Charge, Voltage>;
/// Ohm.
pub type Resistance = Quot<Voltage, Current>;
/// Siemens.
pub type Conductance = Recip<Resistance>;
/// Weber.
pub type MagneticFlux = Prod<Voltage, Time>;
/// Tesla.
pub type MagneticField = Quot<MagneticFlux, Area>;
/// Henry.
pub type Inductance = Quot<MagneticFlux, Current>;
/// Volt per metre.
pub type ElectricFieldStrength = Quot<Voltage, Length>;
/// Coulomb per cubic metre.
pub type ElectricChargeDensity = Quot<Charge, Volume>;
/// Coulomb per square metre.
pub type ElectricFluxDensity = Quot<Charge, Area>;
/// Farad per metre.
pub type Permittivity = Quot<Capacitance, Length>;
/// Henry per metre.
pub type Permeability = Quot<Inductance, Length>;
/// Coulomb per kilogram.
pub type Exposure = Quot<Charge, Mass>;

// ─────────────────────────────────────────────────────────────────────────────
// Thermodynamics and chemistry
// ─────────────────────────────────────────────────────────────────────────────

/// Watt per square metre.
pub type Irradiance = Quot<Power, Area>;
/// Same as [`Irradiance`].
pub type HeatFluxDensity = Irradiance;
/// Joule per kelvin.
pub type Entropy = Quot<Energy, Temperature>;
/// Same as [`Entropy`].
pub type HeatCapacity = Entropy;
/// Joule per kilogram kelvin.
pub type SpecificEntropy = Quot<Entropy, Mass>;
/// Same as [`SpecificEntropy`].
pub type SpecificHeatCapacity = SpecificEntropy;
/// Watt per metre kelvin.
pub type ThermalConductivity = Quot<Power, Prod<Length, Temperature>>;
/// Mole per cubic metre.
pub type SubstanceConcentration = Quot<Substance, Volume>;
/// Joule per mole.
pub type MolarEnergy = Quot<Energy, Substance>;
/// Joule per mole kelvin.
pub type MolarEntropy = Quot<MolarEnergy, Temperature>;
/// Same as [`MolarEntropy`].
pub type MolarHeatCapacity = MolarEntropy;
/// Katal.
pub type CatalyticActivity = Quot<Substance, Time>;
/// Katal per cubic metre.
pub type CatalyticConcentration = Quot<CatalyticActivity, Volume>;

// ─────────────────────────────────────────────────────────────────────────────
// Photometry, radiometry and radiation
// ─────────────────────────────────────────────────────────────────────────────

/// Candela per square metre.
pub type Luminance = Quot<LuminousIntensity, Area>;
/// Lumen (candela steradian).
pub type LuminousFlux = Prod<LuminousIntensity, SolidAngle>;
/// Lux.
pub type Illuminance = Quot<LuminousFlux, Area>;
/// Watt per steradian.
pub type RadiantIntensity = Quot<Power, SolidAngle>;
/// Watt per steradian square metre.
pub type Radiance = Quot<RadiantIntensity, Area>;
/// Becquerel; same type as [`Frequency`].
pub type Radioactivity = Frequency;
/// Gray.
pub type AbsorbedDose = Quot<Energy, Mass>;
/// Sievert; same type as [`AbsorbedDose`].
pub type EquivalentDose = AbsorbedDose;
/// Gray per second.
pub type AbsorbedDoseRate = Quot<AbsorbedDose, Time>;
