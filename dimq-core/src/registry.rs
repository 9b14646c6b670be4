//! Registered unit names.
//!
//! The registry maps a [`DimensionVector`] to the conventional SI symbol of its coherent unit (`N`, `Pa`, `J/K`, …).
//! It is a `const` table, so [`lookup`] runs while compiling when it feeds [`Dimension::SYMBOL`], and a duplicate
//! registration fails the build.
//!
//! ```rust
//! use dimq_core::{dim, registry, Dimension};
//!
//! assert_eq!(registry::lookup(&<dim::Force as Dimension>::VECTOR), Some("N"));
//! assert_eq!(registry::find_symbol("Pa"), Some(<dim::Pressure as Dimension>::VECTOR));
//! assert!(registry::is_known_symbol("rad"));
//! ```

use crate::dim;
use crate::dimension::{Dimension, DimensionVector};

/// One registered `(vector, symbol)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    vector: DimensionVector,
    symbol: &'static str,
}

impl Registration {
    const fn of<D: Dimension>(symbol: &'static str) -> Self {
        Self {
            vector: D::VECTOR,
            symbol,
        }
    }

    /// Registered dimension.
    pub const fn vector(&self) -> DimensionVector {
        self.vector
    }

    /// Registered symbol.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }
}

/// Symbol accepted for plane and solid angles, both dimensionless.
pub const RADIAN_SYMBOL: &str = "rad";

const ENTRIES: &[Registration] = &[
    // base
    Registration::of::<dim::Length>("m"),
    Registration::of::<dim::Mass>("kg"),
    Registration::of::<dim::Time>("s"),
    Registration::of::<dim::Current>("A"),
    Registration::of::<dim::Temperature>("K"),
    Registration::of::<dim::Substance>("mol"),
    Registration::of::<dim::LuminousIntensity>("cd"),
    // geometry and kinematics
    Registration::of::<dim::Area>("m^2"),
    Registration::of::<dim::Volume>("m^3"),
    Registration::of::<dim::Speed>("m/s"),
    Registration::of::<dim::Acceleration>("m/s^2"),
    // named derived units
    Registration::of::<dim::Frequency>("Hz"),
    Registration::of::<dim::Force>("N"),
    Registration::of::<dim::Pressure>("Pa"),
    Registration::of::<dim::Energy>("J"),
    Registration::of::<dim::Power>("W"),
    Registration::of::<dim::Charge>("C"),
    Registration::of::<dim::Voltage>("V"),
    Registration::of::<dim::Capacitance>("F"),
    Registration::of::<dim::Resistance>("Ohm"),
    Registration::of::<dim::Conductance>("S"),
    Registration::of::<dim::MagneticFlux>("Wb"),
    Registration::of::<dim::MagneticField>("T"),
    Registration::of::<dim::Inductance>("H"),
    Registration::of::<dim::Illuminance>("lx"),
    Registration::of::<dim::AbsorbedDose>("Gy"),
    Registration::of::<dim::CatalyticActivity>("kat"),
    // compound units
    Registration::of::<dim::DynamicViscosity>("Pa*s"),
    Registration::of::<dim::AngularAcceleration>("rad/s^2"),
    Registration::of::<dim::Irradiance>("W/m^2"),
    Registration::of::<dim::Entropy>("J/K"),
    Registration::of::<dim::SpecificEntropy>("J/(kg*K)"),
    Registration::of::<dim::ThermalConductivity>("W/(m*K)"),
    Registration::of::<dim::ElectricFieldStrength>("V/m"),
    Registration::of::<dim::ElectricChargeDensity>("C/m^3"),
    Registration::of::<dim::ElectricFluxDensity>("C/m^2"),
    Registration::of::<dim::Permittivity>("F/m"),
    Registration::of::<dim::Permeability>("H/m"),
    Registration::of::<dim::MolarEnergy>("J/mol"),
    Registration::of::<dim::MolarEntropy>("J/(mol*K)"),
    Registration::of::<dim::Exposure>("C/kg"),
    Registration::of::<dim::AbsorbedDoseRate>("Gy/s"),
    Registration::of::<dim::CatalyticConcentration>("kat/m^3"),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn one_to_one(entries: &[Registration]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].vector.matches(&entries[j].vector)
                || str_eq(entries[i].symbol, entries[j].symbol)
            {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    one_to_one(ENTRIES),
    "duplicate unit-name registration: every dimension and symbol may be registered once"
);

/// Every registered pair, in registration order.
pub const fn entries() -> &'static [Registration] {
    ENTRIES
}

/// Registered symbol for `vector`, compared with rational equality.
pub const fn lookup(vector: &DimensionVector) -> Option<&'static str> {
    let mut i = 0;
    while i < ENTRIES.len() {
        if ENTRIES[i].vector.matches(vector) {
            return Some(ENTRIES[i].symbol);
        }
        i += 1;
    }
    None
}

/// Dimension of a registered symbol; `rad` maps to the dimensionless vector.
pub fn find_symbol(symbol: &str) -> Option<DimensionVector> {
    if symbol == RADIAN_SYMBOL {
        return Some(DimensionVector::DIMENSIONLESS);
    }
    ENTRIES
        .iter()
        .find(|entry| entry.symbol == symbol)
        .map(|entry| entry.vector)
}

/// `true` for any registered symbol or `rad`.
pub fn is_known_symbol(symbol: &str) -> bool {
    find_symbol(symbol).is_some()
}
