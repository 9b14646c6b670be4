//! Time units.

use crate::prefix::{ATTO, FEMTO, MEGA, MICRO, MILLI, NANO, PICO, YOCTO, ZEPTO};
use dimq_core::{Time, SECOND};

/// Minute.
pub const MINUTE: Time = SECOND.scale(60.0);
/// Hour.
pub const HOUR: Time = MINUTE.scale(60.0);
/// Day of 24 hours.
pub const DAY: Time = HOUR.scale(24.0);
/// Week.
pub const WEEK: Time = DAY.scale(7.0);
/// Two weeks.
pub const FORTNIGHT: Time = WEEK.scale(2.0);
/// Julian year of 365.25 days.
pub const JULIAN_YEAR: Time = DAY.scale(365.25);
/// Same as [`JULIAN_YEAR`].
pub const YEAR: Time = JULIAN_YEAR;
/// Year of 366 days.
pub const LEAP_YEAR: Time = DAY.scale(366.0);
/// Ten years.
pub const DECADE: Time = YEAR.scale(10.0);
/// Fifty years.
pub const JUBILEE: Time = YEAR.scale(50.0);
/// A hundred years.
pub const CENTURY: Time = YEAR.scale(100.0);
/// A thousand years.
pub const MILLENNIUM: Time = YEAR.scale(1000.0);
/// Ten million years.
pub const EPOCH: Time = YEAR.scale(10.0 * MEGA);
/// A hundred million years.
pub const ERA: Time = YEAR.scale(100.0 * MEGA);
/// Five hundred million years.
pub const EON: Time = YEAR.scale(500.0 * MEGA);
/// Millisecond.
pub const MILLISECOND: Time = SECOND.scale(MILLI);
/// Microsecond.
pub const MICROSECOND: Time = SECOND.scale(MICRO);
/// 10⁻⁸ s.
pub const SHAKE: Time = SECOND.scale(1.0e-8);
/// Nanosecond.
pub const NANOSECOND: Time = SECOND.scale(NANO);
/// Picosecond.
pub const PICOSECOND: Time = SECOND.scale(PICO);
/// 10⁻¹³ s.
pub const SVEDBERG: Time = SECOND.scale(1.0e-13);
/// Femtosecond.
pub const FEMTOSECOND: Time = SECOND.scale(FEMTO);
/// Attosecond.
pub const ATTOSECOND: Time = SECOND.scale(ATTO);
/// Zeptosecond.
pub const ZEPTOSECOND: Time = SECOND.scale(ZEPTO);
/// Light crossing time of a nucleon, 3·10⁻²⁴ s.
pub const JIFFY_PHYS: Time = SECOND.scale(3.0e-24);
/// Yoctosecond.
pub const YOCTOSECOND: Time = SECOND.scale(YOCTO);
