//! Minimal end-to-end example: derive a speed from length and time, then convert it.

use dimq::literals::{hr, km};
use dimq::units::angle::DEGREE;
use dimq::units::length::MILE;
use dimq::{Angle, Length, Speed, Time};

fn main() {
    let v: Speed = Length::new(100.0) / Time::new(10.0);
    assert_eq!(v.to_string(), "10 m/s");

    let cruise: Speed = km(900.0) / hr(1.0);
    let mph = cruise.in_unit(MILE / hr(1.0));
    assert!((mph - 559.234).abs() < 1e-3);

    let half_turn = Angle::new(core::f64::consts::PI);
    assert_eq!(half_turn.in_unit(DEGREE), 180.0);
}
