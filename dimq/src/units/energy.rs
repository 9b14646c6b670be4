//! Energy units.

use crate::prefix::{KILO, MEGA};
use dimq_core::Energy;

/// Joule.
pub const JOULE: Energy = Energy::new(1.0);
/// Thermochemical calorie.
pub const CAL: Energy = JOULE.scale(4.184);
/// Erg.
pub const ERG: Energy = JOULE.scale(1.0e-7);
/// Electronvolt.
pub const EV: Energy = JOULE.scale(1.602176565e-19);
/// Kiloelectronvolt.
pub const KEV: Energy = EV.scale(KILO);
/// Megaelectronvolt.
pub const MEV: Energy = EV.scale(MEGA);
