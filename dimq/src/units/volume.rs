//! Volume units.

use super::length::{CENTIMETER, INCH};
use crate::prefix::MILLI;
use dimq_core::{Volume, METER};

/// Cubic metre.
pub const CUBIC_METER: Volume = METER.times(METER).times(METER);
/// Cubic centimetre.
pub const CUBIC_CENTIMETER: Volume = CENTIMETER.times(CENTIMETER).times(CENTIMETER);
/// Cubic inch.
pub const CUBIC_INCH: Volume = INCH.times(INCH).times(INCH);
/// Litre.
pub const LITRE: Volume = CUBIC_METER.scale(0.001);
/// Millilitre.
pub const MILLILITRE: Volume = LITRE.scale(MILLI);
/// US liquid gallon.
pub const GALLON: Volume = LITRE.scale(3.785411784);
/// US liquid quart.
pub const LIQUID_QUART: Volume = GALLON.scale(0.25);
/// US liquid pint.
pub const LIQUID_PINT: Volume = LIQUID_QUART.scale(0.5);
/// US gill.
pub const GILL: Volume = LIQUID_PINT.scale(0.25);
/// US fluid ounce.
pub const FLUID_OUNCE: Volume = LIQUID_PINT.scale(0.0625);
/// US fluid dram.
pub const FLUID_DRAM: Volume = LIQUID_PINT.scale(0.0078125);
/// US cup.
pub const CUP: Volume = FLUID_OUNCE.scale(8.0);
/// Metric tablespoon.
pub const TABLESPOON: Volume = MILLILITRE.scale(15.0);
/// Metric teaspoon.
pub const TEASPOON: Volume = MILLILITRE.scale(5.0);
/// US minim.
pub const MINIM: Volume = LIQUID_PINT.scale(0.0001302083);
/// US bushel.
pub const BUSHEL: Volume = CUBIC_INCH.scale(2150.42);
/// US peck.
pub const PECK: Volume = BUSHEL.scale(0.25);
/// US dry quart.
pub const DRY_QUART: Volume = PECK.scale(0.125);
/// US dry pint.
pub const DRY_PINT: Volume = DRY_QUART.scale(0.5);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn litre_is_cubic_decimetre() {
        assert_relative_eq!(LITRE.in_unit(CUBIC_CENTIMETER), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(GALLON.in_unit(LIQUID_PINT), 8.0, max_relative = 1e-12);
        assert_relative_eq!(CUP.in_unit(FLUID_OUNCE), 8.0, max_relative = 1e-12);
    }
}
