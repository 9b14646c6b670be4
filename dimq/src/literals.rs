//! Literal helpers: a number plus a unit suffix becomes a quantity.
//!
//! Each helper is a `const fn` that multiplies its argument by the matching unit, so it can build constants too.
//!
//! ```rust
//! use dimq::literals::{km, hr, deg};
//! use dimq::units::angle::DEGREE;
//! use dimq::Speed;
//!
//! let v: Speed = km(120.0) / hr(1.5);
//! assert!((v.value() - 22.222_222).abs() < 1e-6);
//! assert!((deg(90.0).in_unit(DEGREE) - 90.0).abs() < 1e-12);
//! ```

use crate::units::{angle, energy, length, mass, pressure, temperature, time};
use dimq_core::*;

macro_rules! literals {
    ($($(#[$doc:meta])* $name:ident => $ty:ty = $unit:expr;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub const fn $name(x: f64) -> $ty {
                $unit.scale(x)
            }
        )*
    };
}

literals! {
    /// Kilometres.
    km => Length = length::KILOMETER;
    /// Metres.
    m => Length = METER;
    /// Centimetres.
    cm => Length = length::CENTIMETER;
    /// Millimetres.
    mm => Length = length::MILLIMETER;
    /// Nanometres.
    nm => Length = length::NANOMETER;

    /// Metric tonnes.
    tonne => Mass = mass::TONNE;
    /// Kilograms.
    kg => Mass = KILOGRAM;
    /// Grams.
    g => Mass = mass::GRAM;

    /// Seconds.
    s => Time = SECOND;
    /// Minutes.
    minutes => Time = time::MINUTE;
    /// Hours.
    hr => Time = time::HOUR;
    /// Hertz.
    hz => Frequency = Frequency::new(1.0);

    /// Amperes.
    amp => Current = AMPERE;
    /// Joules.
    joule => Energy = energy::JOULE;
    /// Watts.
    watt => Power = Power::new(1.0);
    /// Coulombs.
    coulomb => Charge = Charge::new(1.0);
    /// Volts.
    volt => Voltage = Voltage::new(1.0);
    /// Farads.
    farad => Capacitance = Capacitance::new(1.0);
    /// Ohms.
    ohm => Resistance = Resistance::new(1.0);
    /// Siemens.
    siemens => Conductance = Conductance::new(1.0);
    /// Henries.
    henry => Inductance = Inductance::new(1.0);

    /// Kelvin.
    kelvin => Temperature = KELVIN;

    /// Moles.
    mol => Substance = MOLE;
    /// Becquerels.
    bq => Radioactivity = Radioactivity::new(1.0);
    /// Grays.
    gy => AbsorbedDose = AbsorbedDose::new(1.0);
    /// Sieverts.
    sv => EquivalentDose = EquivalentDose::new(1.0);
    /// Katals.
    kat => CatalyticActivity = CatalyticActivity::new(1.0);

    /// Candelas.
    cd => LuminousIntensity = CANDELA;
    /// Lumens.
    lm => LuminousFlux = LuminousFlux::new(1.0);
    /// Lux.
    lx => Illuminance = Illuminance::new(1.0);

    /// Radians.
    rad => Angle = RADIAN;
    /// Degrees.
    deg => Angle = angle::DEGREE;

    /// Newtons.
    newton => Force = Force::new(1.0);
    /// Pascals.
    pa => Pressure = pressure::PASCAL;
    /// Bars.
    bar => Pressure = pressure::BAR;
    /// Standard atmospheres.
    atm => Pressure = pressure::ATM;

    /// Webers.
    wb => MagneticFlux = MagneticFlux::new(1.0);
    /// Teslas.
    tesla => MagneticField = MagneticField::new(1.0);

    /// Square metres.
    m2 => Area = Area::new(1.0);
    /// Cubic metres.
    m3 => Volume = Volume::new(1.0);

    /// Metres per second.
    mps => Speed = Speed::new(1.0);
    /// Kilometres per hour.
    kmph => Speed = length::KILOMETER.per(time::HOUR);
}

/// Degrees Celsius, converted to an absolute temperature.
#[inline]
pub const fn deg_c(x: f64) -> Temperature {
    temperature::from_celsius(x)
}
