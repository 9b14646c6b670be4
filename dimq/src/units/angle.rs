//! Plane angle units. Angles are dimensionless and stored in radians.

use core::f64::consts::PI;
use dimq_core::{Angle, RADIAN};

/// Degree.
pub const DEGREE: Angle = RADIAN.scale(PI / 180.0);
/// Gradian, a 400th of a turn.
pub const GRADIAN: Angle = RADIAN.scale(2.0 * PI / 400.0);
/// Full turn.
pub const TURN: Angle = RADIAN.scale(2.0 * PI);
/// Minute of arc.
pub const ARCMINUTE: Angle = RADIAN.scale(PI / 10_800.0);
/// Second of arc.
pub const ARCSECOND: Angle = RADIAN.scale(PI / 648_000.0);
