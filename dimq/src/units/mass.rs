//! Mass units.

use crate::prefix::{KILO, MILLI};
use dimq_core::{Mass, KILOGRAM};

/// Gram.
pub const GRAM: Mass = KILOGRAM.scale(1.0 / KILO);
/// Milligram.
pub const MILLIGRAM: Mass = GRAM.scale(MILLI);
/// Metric tonne.
pub const TONNE: Mass = KILOGRAM.scale(1.0e3);
/// Same as [`TONNE`].
pub const METRIC_TON: Mass = TONNE;
/// Slug.
pub const SLUG: Mass = KILOGRAM.scale(14.593903);
/// Avoirdupois pound.
pub const POUND: Mass = KILOGRAM.scale(0.45359237);
/// Metric carat.
pub const CARAT: Mass = MILLIGRAM.scale(200.0);
/// Grain.
pub const GRAIN: Mass = MILLIGRAM.scale(64.79891);
/// Avoirdupois ounce.
pub const OUNCE: Mass = GRAIN.scale(437.5);
/// Troy ounce.
pub const OUNCE_TROY: Mass = GRAIN.scale(480.0);
/// Long (gross) ton.
pub const LONG_TON: Mass = POUND.scale(2240.0);
/// Short (net) ton.
pub const SHORT_TON: Mass = POUND.scale(2000.0);
