//! Area units.

use super::length::{KILOMETER, MILE, YARD};
use dimq_core::{Area, METER};

/// Square metre.
pub const SQUARE_METER: Area = METER.times(METER);
/// Square kilometre.
pub const SQUARE_KILOMETER: Area = KILOMETER.times(KILOMETER);
/// Square yard.
pub const SQUARE_YARD: Area = YARD.times(YARD);
/// Square mile.
pub const SQUARE_MILE: Area = MILE.times(MILE);
/// Hectare.
pub const HECTARE: Area = SQUARE_METER.scale(10_000.0);
/// Acre.
pub const ACRE: Area = SQUARE_YARD.scale(4840.0);
/// Barn, 10⁻²⁸ m².
pub const BARN: Area = SQUARE_METER.scale(1.0e-28);
