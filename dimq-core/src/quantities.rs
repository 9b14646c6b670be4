//! Quantity aliases for every named dimension, plus the SI base units.
//!
//! Each alias is `Quantity<dim::X>`; the values stored are always in the coherent SI unit of `X`. The base-unit
//! constants have magnitude one and are the building blocks of every other unit table.

use crate::dim;
use crate::quantity::Quantity;

macro_rules! quantity_aliases {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("A quantity of dimension [`dim::", stringify!($name), "`].")]
            pub type $name = Quantity<dim::$name>;
        )*
    };
}

quantity_aliases!(
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Substance,
    LuminousIntensity,
    Dimensionless,
    Angle,
    SolidAngle,
    MassFraction,
    Area,
    Volume,
    Speed,
    Acceleration,
    WaveNumber,
    Frequency,
    MassDensity,
    SpecificVolume,
    Force,
    Pressure,
    Energy,
    Power,
    DynamicViscosity,
    MomentOfForce,
    SurfaceTension,
    AngularVelocity,
    AngularAcceleration,
    EnergyDensity,
    SpecificEnergy,
    GravitationalConstantUnit,
    CurrentDensity,
    MagneticFieldStrength,
    Charge,
    Voltage,
    Capacitance,
    Resistance,
    Conductance,
    MagneticFlux,
    MagneticField,
    Inductance,
    ElectricFieldStrength,
    ElectricChargeDensity,
    ElectricFluxDensity,
    Permittivity,
    Permeability,
    Exposure,
    Irradiance,
    HeatFluxDensity,
    Entropy,
    HeatCapacity,
    SpecificEntropy,
    SpecificHeatCapacity,
    ThermalConductivity,
    SubstanceConcentration,
    MolarEnergy,
    MolarEntropy,
    MolarHeatCapacity,
    CatalyticActivity,
    CatalyticConcentration,
    Luminance,
    LuminousFlux,
    Illuminance,
    RadiantIntensity,
    Radiance,
    Radioactivity,
    AbsorbedDose,
    EquivalentDose,
    AbsorbedDoseRate,
);

// ─────────────────────────────────────────────────────────────────────────────
// SI base units
// ─────────────────────────────────────────────────────────────────────────────

/// One metre.
pub const METER: Length = Length::new(1.0);
/// One kilogram.
pub const KILOGRAM: Mass = Mass::new(1.0);
/// One second.
pub const SECOND: Time = Time::new(1.0);
/// One ampere.
pub const AMPERE: Current = Current::new(1.0);
/// One kelvin.
pub const KELVIN: Temperature = Temperature::new(1.0);
/// One mole.
pub const MOLE: Substance = Substance::new(1.0);
/// One candela.
pub const CANDELA: LuminousIntensity = LuminousIntensity::new(1.0);
/// One radian.
pub const RADIAN: Angle = Angle::new(1.0);
/// One steradian.
pub const STERADIAN: SolidAngle = SolidAngle::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Angle helpers
// ─────────────────────────────────────────────────────────────────────────────

impl Quantity<dim::Angle> {
    /// Sine of the angle.
    ///
    /// ```rust
    /// use dimq_core::Angle;
    /// assert!((Angle::new(core::f64::consts::FRAC_PI_2).sin() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sin(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().sin()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sin(self.value())
        }
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().cos()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::cos(self.value())
        }
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().tan()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::tan(self.value())
        }
    }
}
