//! Core type system for compile-time dimensional analysis.
//!
//! `dimq-core` provides a minimal, zero-cost dimensions model:
//!
//! - A *dimension* is a zero-sized marker type implementing [`Dimension`], carrying a [`DimensionVector`] of seven
//!   exact rational exponents (L, M, T, I, Θ, N, J).
//! - A value tagged with a dimension is a [`Quantity<D>`], backed by an `f64` in the coherent SI unit.
//! - Products, quotients, reciprocals, powers and roots build new dimension types ([`Prod`], [`Quot`], [`Recip`],
//!   [`Pow`], [`Sqrt`]) whose vectors are computed while compiling.
//! - Display names come from a compile-time [`registry`] with a generic fallback ([`UnitName`]).
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Adding a length to a time does not compile.
//! - Derived dimensions are inferred: `Length / Time` is a speed, `1.0 / Time` is a frequency.
//! - Zero runtime overhead for dimension tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Unit systems beyond the seven SI base dimensions.
//! - Storing a preferred display unit: quantities always print in coherent SI units.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::{Acceleration, Length, Time, METER, SECOND};
//!
//! let d = Length::new(100.0);
//! let t = Time::new(10.0);
//! let a: Acceleration = d / t / t;
//! assert_eq!(a.to_string(), "1 m/s^2");
//! assert_eq!(a.in_unit(METER / SECOND / SECOND), 1.0);
//! ```
//!
//! # Error tiers
//!
//! - `+`, `-`, `+=`, `-=`, comparisons, [`Quantity::in_unit`], [`Quantity::cast`] and [`Quantity::sqrt`]: const
//!   assertions evaluated when the generic code is instantiated. Operands with equal vectors in different type
//!   shapes are accepted. `cargo build` reports mismatches; `cargo check` may not.
//! - Exponents that overflow `i32` stop const evaluation.
//! - Duplicate [`registry`] entries: a const assertion in this crate.
//! - Runtime paths (parsing) report [`DimensionError`].
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`; `sqrt`, `pow` and trigonometry then go through
//! `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod check;
pub mod dimension;
mod error;
mod quantities;
mod quantity;
mod ratio;
pub mod registry;
mod unit_name;

/// Named dimensions (base markers and derived aliases).
pub mod dim;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension, DimensionVector, Pow, Prod, Quot, Recip, Sqrt};
pub use error::DimensionError;
pub use quantities::*;
pub use quantity::{pow, sqrt, Quantity};
pub use ratio::Ratio;
pub use unit_name::{Composition, UnitName};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::PI;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimension for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Debug, dimq_derive::Dimension)]
    #[dimension(length = 1, mass = -1)]
    pub enum LengthPerMass {}

    #[derive(Debug, dimq_derive::Dimension)]
    #[dimension(time = "1/2", symbol = "rs")]
    pub enum RootTime {}

    type Lpm = Quantity<LengthPerMass>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_and_value() {
        let q = Length::new(42.0);
        assert_eq!(q.value(), 42.0);
        assert_eq!(q.strip_units(), 42.0);
        assert_eq!(f64::from(q), 42.0);
    }

    #[test]
    fn quantity_default_is_zero() {
        assert_eq!(Mass::default().value(), 0.0);
        assert_eq!(Mass::ZERO, Mass::new(0.0));
    }

    #[test]
    fn quantity_nan_constant() {
        assert!(Time::NAN.value().is_nan());
        assert_ne!(Time::NAN, Time::NAN);
    }

    #[test]
    fn quantity_abs_min_max() {
        assert_eq!(Length::new(-5.0).abs().value(), 5.0);
        assert_eq!(Length::new(3.0).min(Length::new(5.0)).value(), 3.0);
        assert_eq!(Length::new(3.0).max(Length::new(5.0)).value(), 5.0);
    }

    #[test]
    fn base_units_are_one() {
        for v in [
            METER.value(),
            KILOGRAM.value(),
            SECOND.value(),
            AMPERE.value(),
            KELVIN.value(),
            MOLE.value(),
            CANDELA.value(),
            RADIAN.value(),
        ] {
            assert_eq!(v, 1.0);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Const operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn const_operations() {
        const KM: Length = METER.scale(1000.0);
        const TWO_KM: Length = KM.add(KM);
        const ONE_KM: Length = TWO_KM.sub(KM);
        const HOUR: Time = SECOND.scale(3600.0);
        const KMH: Speed = KM.per(HOUR);
        const HECTARE: Area = METER.scale(100.0).times(METER.scale(100.0));
        const HERTZ: Frequency = SECOND.recip();
        const IN_KM: f64 = TWO_KM.in_unit(KM);

        assert_eq!(ONE_KM.value(), 1000.0);
        assert_relative_eq!(KMH.value(), 1.0 / 3.6, max_relative = 1e-15);
        assert_eq!(HECTARE.value(), 10_000.0);
        assert_eq!(HERTZ.value(), 1.0);
        assert_eq!(IN_KM, 2.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub() {
        assert_eq!((Length::new(2.0) + Length::new(3.0)).value(), 5.0);
        assert_eq!((Length::new(2.0) - Length::new(3.0)).value(), -1.0);
        assert_eq!((-Length::new(2.0)).value(), -2.0);
    }

    #[test]
    fn add_sub_across_representations() {
        let stacked: Quantity<Prod<dim::Length, dim::Area>> = Length::new(2.0) * Area::new(3.0);
        let total = Volume::new(1.0) + stacked;
        assert_eq!(total.value(), 7.0);
        assert_eq!(total.to_string(), "7 m^3");

        let rest: Volume = Volume::new(10.0) - stacked;
        assert_eq!(rest.value(), 4.0);

        let mut v = Volume::new(1.0);
        v += stacked;
        assert_eq!(v.value(), 7.0);
        v -= Length::new(1.0).pow::<3>();
        assert_eq!(v.value(), 6.0);

        const SUM: Volume = Volume::new(1.0).add(Length::new(1.0).times(Area::new(2.0)));
        assert_eq!(SUM.value(), 3.0);
    }

    #[test]
    fn operator_assign() {
        let mut l = Length::new(1.0);
        l += Length::new(2.0);
        assert_eq!(l.value(), 3.0);
        l -= Length::new(0.5);
        assert_eq!(l.value(), 2.5);
        l *= 4.0;
        assert_eq!(l.value(), 10.0);
        l /= 5.0;
        assert_eq!(l.value(), 2.0);
    }

    #[test]
    fn operator_scalar() {
        let l = Length::new(2.0);
        let a: Length = l * 3.0;
        let b: Length = 3.0 * l;
        let c: Length = l / 4.0;
        assert_eq!(a.value(), 6.0);
        assert_eq!(b.value(), 6.0);
        assert_eq!(c.value(), 0.5);
        assert_eq!((Length::new(7.0) % 3.0).value(), 1.0);
    }

    #[test]
    fn operator_mul_div_build_dimensions() {
        let area: Area = Length::new(2.0) * Length::new(3.0);
        assert_eq!(area.value(), 6.0);

        let volume: Volume = area * Length::new(2.0);
        assert_eq!(volume.value(), 12.0);

        let speed: Speed = Length::new(100.0) / Time::new(10.0);
        assert_eq!(speed.value(), 10.0);

        let f: Frequency = 1.0 / Time::new(4.0);
        assert_eq!(f.value(), 0.25);
        assert_eq!(f.to_string(), "0.25 Hz");
    }

    #[test]
    fn product_and_quotient_vectors() {
        let l = Length::new(3.0);
        let t = Time::new(2.0);
        let q = l * t;
        assert_eq!(
            q.value(),
            6.0
        );
        assert_eq!(
            Quantity::<Prod<dim::Length, dim::Time>>::dimension(),
            DimensionVector::from_integers([1, 0, 1, 0, 0, 0, 0])
        );
        let r = l / t;
        assert_eq!(r.value(), 1.5);
        assert_eq!(
            Quantity::<Quot<dim::Length, dim::Time>>::dimension(),
            DimensionVector::from_integers([1, 0, -1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let s: Speed = Length::new(1.0) / Time::new(0.0);
        assert!(s.value().is_infinite());
        let n: Speed = Length::new(0.0) / Time::new(0.0);
        assert!(n.value().is_nan());
    }

    #[test]
    fn sum_of_quantities() {
        let legs = [Length::new(1.0), Length::new(2.5), Length::new(3.5)];
        let total: Length = legs.iter().sum();
        assert_eq!(total.value(), 7.0);
        let total: Length = legs.into_iter().sum();
        assert_eq!(total.value(), 7.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison and conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparison_across_representations() {
        let a: Force = Force::new(6.0);
        let b: Quantity<Prod<dim::Acceleration, dim::Mass>> = Quantity::new(6.0);
        assert_eq!(a, b);
        assert!(a <= b);
        let c: Quantity<Quot<dim::Energy, dim::Length>> = Quantity::new(7.0);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn in_unit_converts() {
        let km = METER.scale(1000.0);
        assert_eq!(Length::new(2500.0).in_unit(km), 2.5);

        let degree = RADIAN.scale(PI / 180.0);
        assert_eq!(Angle::new(PI).in_unit(degree), 180.0);
    }

    #[test]
    fn in_unit_is_idempotent_for_unit_itself() {
        let hour = SECOND.scale(3600.0);
        assert_eq!(hour.in_unit(hour), 1.0);
    }

    #[test]
    fn cast_keeps_value() {
        let torque: MomentOfForce = MomentOfForce::new(4.0);
        let e: Energy = torque.cast();
        assert_eq!(e.value(), 4.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Roots and powers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sqrt_of_area_is_length() {
        let side = sqrt(Area::new(25.0));
        assert_eq!(side, Length::new(5.0));
        assert_eq!(side.to_string(), "5 m");
    }

    #[test]
    fn sqrt_of_fractional_dimension() {
        let q: Quantity<Pow<RootTime, 4>> = Quantity::new(16.0);
        let r = q.sqrt();
        assert_eq!(r.value(), 4.0);
        assert_eq!(
            Quantity::<Sqrt<Pow<RootTime, 4>>>::dimension(),
            DimensionVector::from_integers([0, 0, 1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn pow_scales_exponents() {
        let v = pow::<3, _>(Length::new(2.0));
        assert_eq!(v, Volume::new(8.0));
        assert_eq!(v.to_string(), "8 m^3");

        let inv = Length::new(4.0).pow::<{ -2 }>();
        assert_abs_diff_eq!(inv.value(), 0.0625);
        assert_eq!(inv.to_string(), "0.0625 1/m^2");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_registered_units() {
        assert_eq!(Length::new(1.5).to_string(), "1.5 m");
        assert_eq!(Force::new(10.0).to_string(), "10 N");
        assert_eq!(Area::new(2.0).to_string(), "2 m^2");
        assert_eq!(Resistance::new(50.0).to_string(), "50 Ohm");
        assert_eq!(ThermalConductivity::new(0.6).to_string(), "0.6 W/(m*K)");
    }

    #[test]
    fn display_fallback_composition() {
        assert_eq!(Lpm::new(2.0).to_string(), "2 m/kg");
        assert_eq!(format!("{:#}", Lpm::new(2.0)), "2 m kg^-1");
    }

    #[test]
    fn display_alternate_expands_registered() {
        assert_eq!(format!("{:#}", Force::new(1.0)), "1 m kg s^-2");
        assert_eq!(format!("{:#}", Angle::new(1.0)), "1 rad");
    }

    #[test]
    fn display_dimensionless() {
        let ratio: MassFraction = Mass::new(3.0) / Mass::new(4.0);
        assert_eq!(ratio.to_string(), "0.75");
        assert_eq!(Angle::new(0.5).to_string(), "0.5 rad");
        assert_eq!(SolidAngle::new(0.5).to_string(), "0.5 rad");
    }

    #[test]
    fn display_precision() {
        assert_eq!(format!("{:.2}", Length::new(PI)), "3.14 m");
    }

    #[test]
    fn display_named_symbol() {
        assert_eq!(Quantity::<RootTime>::new(1.0).to_string(), "1 rs");
        assert_eq!(format!("{:#}", Quantity::<RootTime>::new(1.0)), "1 s^1/2");
    }

    #[test]
    fn debug_shows_vector() {
        assert_eq!(
            format!("{:?}", Speed::new(2.0)),
            "Quantity { value: 2.0, dimension: DimensionVector(L=1, T=-1) }"
        );
    }

    #[test]
    fn has_unit_compares_symbol() {
        assert!(Speed::new(1.0).has_unit("m/s"));
        assert!(!Speed::new(1.0).has_unit("m"));
        assert!(Lpm::new(1.0).has_unit("m/kg"));
        assert!(Dimensionless::new(1.0).has_unit(""));
    }

    #[test]
    fn angle_trigonometry() {
        assert_abs_diff_eq!(Angle::new(0.0).sin(), 0.0);
        assert_abs_diff_eq!(Angle::new(PI).cos(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(PI / 4.0).tan(), 1.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_additive_round_trip(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            let r = (Length::new(a) + Length::new(b)) - Length::new(b);
            prop_assert!((r.value() - a).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs())));
        }

        #[test]
        fn prop_additive_round_trip_across_shapes(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            let x = Force::new(a);
            let y: Quantity<Prod<dim::Acceleration, dim::Mass>> = Quantity::new(b);
            let r = (x + y) - y;
            prop_assert!((r.value() - a).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs())));
        }

        #[test]
        fn prop_scalar_round_trip(a in -1e9f64..1e9, k in 1e-3f64..1e3) {
            let r = (Mass::new(a) * k) / k;
            prop_assert!((r.value() - a).abs() <= 1e-12 * (1.0 + a.abs()));
        }

        #[test]
        fn prop_in_unit_of_self_is_one(v in 1e-6f64..1e6) {
            let unit = METER.scale(v);
            prop_assert_eq!(unit.in_unit(unit), 1.0);
        }

        #[test]
        fn prop_mul_commutes(a in -1e3f64..1e3, b in -1e3f64..1e3) {
            let x = Length::new(a) * Time::new(b);
            let y = Time::new(b) * Length::new(a);
            prop_assert_eq!(x, y);
        }
    }
}
