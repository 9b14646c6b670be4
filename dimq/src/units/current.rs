//! Electric current units.

use crate::prefix::{MICRO, MILLI, NANO, PICO};
use dimq_core::{Current, AMPERE};

/// Milliampere.
pub const MILLIAMP: Current = AMPERE.scale(MILLI);
/// Microampere.
pub const MICROAMP: Current = AMPERE.scale(MICRO);
/// Nanoampere.
pub const NANOAMP: Current = AMPERE.scale(NANO);
/// Picoampere.
pub const PICOAMP: Current = AMPERE.scale(PICO);
