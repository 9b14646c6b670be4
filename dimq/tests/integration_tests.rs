//! Integration tests for the `dimq` facade.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::PI;
use dimq::literals::*;
use dimq::units::{angle::DEGREE, length::KILOMETER, time::HOUR};
use dimq::*;
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Worked scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn speed_from_length_and_time() {
    let v: Speed = Length::new(100.0) / Time::new(10.0);
    assert_eq!(v.value(), 10.0);
    assert_eq!(v.to_string(), "10 m/s");
}

#[test]
fn half_turn_is_180_degrees() {
    assert_eq!(Angle::new(PI).in_unit(DEGREE), 180.0);
    assert_eq!(rad(3.0 * PI).in_unit(DEGREE), 540.0);
}

#[test]
fn square_root_of_area() {
    let side = sqrt(Area::new(25.0));
    assert_eq!(side.value(), 5.0);
    assert_eq!(side, Length::new(5.0));
    assert_eq!(side.to_string(), "5 m");
}

#[test]
fn unregistered_dimension_uses_fallback() {
    let q = Length::new(1.0) / Mass::new(2.0);
    assert_eq!(q.to_string(), "0.5 m/kg");
    assert_eq!(format!("{:#}", q), "0.5 m kg^-1");
}

#[test]
fn reciprocal_time_is_frequency() {
    let f: Frequency = 1.0 / Time::new(0.5);
    assert_eq!(f.value(), 2.0);
    assert_eq!(f.to_string(), "2 Hz");
}

#[test]
fn length_squared_displays_area() {
    let area = Length::new(3.0) * Length::new(3.0);
    assert_eq!(area.to_string(), "9 m^2");
    assert_eq!(area.unit_name(), UnitName::Registered("m^2"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tour of derived quantities
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mechanics_chain() {
    let a: Acceleration = m(100.0) / s(10.0) / s(10.0);
    assert_eq!(a.to_string(), "1 m/s^2");

    let f: Force = kg(2.0) * a;
    assert_eq!(f.to_string(), "2 N");

    let w: Energy = f * m(3.0);
    assert_eq!(w.to_string(), "6 J");

    let p: Power = w / s(2.0);
    assert_eq!(p.to_string(), "3 W");

    let back_to_speed = a * s(10.0);
    assert_eq!(back_to_speed.to_string(), "10 m/s");
}

#[test]
fn electrical_chain() {
    let u: Voltage = watt(100.0) / amp(2.0);
    assert_eq!(u.to_string(), "50 V");

    let r: Resistance = u / amp(2.0);
    assert_eq!(r.to_string(), "25 Ohm");

    let g: Conductance = 1.0 / r;
    assert_eq!(g.to_string(), "0.04 S");

    let q: Charge = amp(2.0) * s(3.0);
    let c: Capacitance = q / u;
    assert_abs_diff_eq!(c.value(), 0.12);
    assert!(c.has_unit("F"));
}

#[test]
fn mixed_units_add_in_si() {
    let total: Length = km(1.0) + m(250.0) + cm(50.0);
    assert_relative_eq!(total.in_unit(KILOMETER), 1.2505, max_relative = 1e-12);

    let angle: Angle = deg(90.0) + rad(2.0);
    assert_relative_eq!(angle.value(), PI / 2.0 + 2.0, max_relative = 1e-12);
}

#[test]
fn speed_conversion_kmh() {
    let v = kmph(72.0);
    assert_relative_eq!(v.value(), 20.0, max_relative = 1e-12);
    assert_relative_eq!(v.in_unit(KILOMETER / HOUR), 72.0, max_relative = 1e-12);
}

#[test]
fn equal_vectors_compare_across_shapes() {
    let torque: MomentOfForce = newton(2.0) * m(3.0);
    let energy: Energy = joule(6.0);
    assert_eq!(torque, energy);
    assert!(joule(5.0) < torque);
}

#[test]
fn equal_vectors_add_across_shapes() {
    let slab = m(2.0) * m2(3.0);
    let total: Volume = m3(1.0) + slab;
    assert_eq!(total, m3(7.0));

    let work: Energy = joule(10.0) - newton(2.0) * m(3.0);
    assert_eq!(work.to_string(), "4 J");
}

#[test]
fn pow_and_cast() {
    let cube = pow::<3, _>(m(2.0));
    let v: Volume = cube.cast();
    assert_eq!(v, m3(8.0));
    assert_eq!(v.to_string(), "8 m^3");
}

#[test]
fn dimensionless_ratio_prints_bare_number() {
    let r = kg(1.0) / g(250.0);
    assert_relative_eq!(r.value(), 4.0, max_relative = 1e-12);
    assert!(r.has_unit(""));
    assert_eq!(format!("{:.1}", r), "4.0");
}

#[test]
fn strip_units_escape_hatch() {
    let l = m(4.0);
    let raw: f64 = l.into();
    assert_eq!(raw, 4.0);
    assert_eq!(l.strip_units(), 4.0);
}

#[test]
fn registry_is_consistent_with_display() {
    for entry in registry::entries() {
        assert_eq!(UnitName::for_vector(entry.vector()), UnitName::Registered(entry.symbol()));
        assert!(registry::is_known_symbol(entry.symbol()));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_conversion_is_inverse_of_scaling(x in -1e6f64..1e6) {
        let l = KILOMETER.scale(x);
        prop_assert!((l.in_unit(KILOMETER) - x).abs() <= 1e-9 * (1.0 + x.abs()));
    }

    #[test]
    fn prop_product_dimension_is_order_independent(a in 0.1f64..1e3, b in 0.1f64..1e3) {
        let x: Force = (kg(a) * mps(b) / s(1.0)).cast();
        let y: Force = (mps(b) / s(1.0) * kg(a)).cast();
        prop_assert_eq!(x, y);
    }

    #[test]
    fn prop_sum_matches_fold(values in proptest::collection::vec(-1e3f64..1e3, 0..20)) {
        let total: Time = values.iter().map(|&v| s(v)).sum();
        let expected: f64 = values.iter().sum();
        prop_assert!((total.value() - expected).abs() <= 1e-9);
    }
}
