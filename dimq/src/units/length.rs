//! Length units.

use crate::prefix::{CENTI, KILO, MICRO, MILLI, NANO};
use dimq_core::{Length, METER};

/// Metre.
pub const METRE: Length = METER;
/// Kilometre.
pub const KILOMETER: Length = METER.scale(KILO);
/// Centimetre.
pub const CENTIMETER: Length = METER.scale(CENTI);
/// Millimetre.
pub const MILLIMETER: Length = METER.scale(MILLI);
/// Micrometre.
pub const MICRON: Length = METER.scale(MICRO);
/// Nanometre.
pub const NANOMETER: Length = METER.scale(NANO);
/// Ångström, 0.1 nm.
pub const ANGSTROM: Length = NANOMETER.scale(0.1);
/// International inch.
pub const INCH: Length = CENTIMETER.scale(2.54);
/// One twelfth of an inch.
pub const LINE: Length = INCH.scale(1.0 / 12.0);
/// International foot.
pub const FOOT: Length = INCH.scale(12.0);
/// International yard.
pub const YARD: Length = FOOT.scale(3.0);
/// Statute mile.
pub const MILE: Length = FOOT.scale(5280.0);
/// Three miles.
pub const LEAGUE: Length = MILE.scale(3.0);
/// Thousandth of an inch.
pub const MIL: Length = INCH.scale(1.0 / 1000.0);
/// Nautical mile.
pub const NAUTICAL_MILE: Length = METER.scale(1852.0);
/// Two yards.
pub const FATHOM: Length = YARD.scale(2.0);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn imperial_chain() {
        assert_relative_eq!(FOOT.value(), 0.3048, max_relative = 1e-12);
        assert_relative_eq!(MILE.value(), 1609.344, max_relative = 1e-12);
        assert_relative_eq!(FATHOM.value(), 1.8288, max_relative = 1e-12);
    }

    #[test]
    fn metric_prefixes() {
        assert_eq!(KILOMETER.value(), 1000.0);
        assert_eq!(NANOMETER.value(), 1e-9);
        assert_relative_eq!(ANGSTROM.value(), 1e-10, max_relative = 1e-12);
    }
}
