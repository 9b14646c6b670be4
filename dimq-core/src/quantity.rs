//! Quantity type and its implementations.

use crate::check::{ExactRoot, SameDimension};
use crate::dimension::{Dimension, DimensionVector, Pow, Prod, Quot, Recip, Sqrt};
use crate::unit_name::{Composition, UnitName};
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

/// A magnitude tagged with a dimension.
///
/// `Quantity<D>` wraps a single `f64` expressed in the SI-coherent base unit of `D` (metres, kilograms, seconds,
/// newtons, …). The dimension only exists in the type, so a quantity costs exactly one `f64` at runtime.
///
/// Multiplying and dividing quantities builds a new dimension type ([`Prod`], [`Quot`]); adding or subtracting
/// requires the same dimension vector on both sides and keeps the type of the left operand.
///
/// # Examples
///
/// ```rust
/// use dimq_core::{dim, Length, Quantity, Speed, Time};
///
/// let d = Length::new(100.0);
/// let t = Time::new(10.0);
/// let v: Speed = d / t;
/// assert_eq!(v.value(), 10.0);
/// assert_eq!(v.to_string(), "10 m/s");
///
/// // Any type shape with the same vector compares equal.
/// let same: Quantity<dim::Speed> = Quantity::new(10.0);
/// assert_eq!(v, same);
/// ```
///
/// # Dimension checks
///
/// Every check below runs while compiling: a mismatch stops the build with an "incompatible dimensions" (or
/// "non-exact root") error when the code is instantiated.
///
/// Adding quantities of different dimensions:
///
/// ```compile_fail
/// use dimq_core::{Length, Time};
///
/// let _ = Length::new(1.0) + Time::new(1.0);
/// ```
///
/// Comparing them:
///
/// ```compile_fail
/// use dimq_core::{Length, Time};
///
/// let _ = Length::new(1.0) == Time::new(1.0);
/// ```
///
/// Converting into a unit of another dimension:
///
/// ```compile_fail
/// use dimq_core::{Time, METER};
///
/// let _ = Time::new(1.0).in_unit(METER);
/// ```
///
/// Re-tagging with another dimension:
///
/// ```compile_fail
/// use dimq_core::{dim, Length};
///
/// let _ = Length::new(1.0).cast::<dim::Time>();
/// ```
///
/// Taking the square root of an odd exponent:
///
/// ```compile_fail
/// use dimq_core::Length;
///
/// let _ = Length::new(4.0).sqrt();
/// ```
///
/// A plain number never becomes a quantity implicitly:
///
/// ```compile_fail
/// use dimq_core::Length;
///
/// let l: Length = 5.0;
/// ```
///
/// Arithmetic, comparisons, [`in_unit`](Quantity::in_unit) and [`cast`](Quantity::cast) accept any dimension type
/// whose vector matches, so `Prod<Length, Area>` and `Volume` mix freely.
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Quantity<D> {
    /// Zero in this dimension.
    pub const ZERO: Self = Self::new(0.0);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use dimq_core::Length;
    /// assert!(Length::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a quantity from a magnitude in the base unit of `D`.
    ///
    /// ```rust
    /// use dimq_core::Mass;
    /// let m = Mass::new(3.0);
    /// assert_eq!(m.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw magnitude in the base unit.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the magnitude as a plain number, dropping the dimension.
    ///
    /// This is the explicit escape hatch for handing a value to code that does not know about dimensions.
    #[inline]
    pub const fn strip_units(self) -> f64 {
        self.0
    }

    /// Expresses this quantity as a multiple of `unit`.
    ///
    /// `unit` may be any quantity whose dimension vector matches `D`; the check happens while compiling.
    ///
    /// ```rust
    /// use dimq_core::{Angle, RADIAN};
    ///
    /// let degree = RADIAN.scale(core::f64::consts::PI / 180.0);
    /// let half_turn = Angle::new(core::f64::consts::PI);
    /// assert_eq!(half_turn.in_unit(degree), 180.0);
    /// ```
    #[inline]
    pub const fn in_unit<U: Dimension>(self, unit: Quantity<U>) -> f64 {
        let () = SameDimension::<D, U>::OK;
        self.0 / unit.0
    }

    /// Re-tags the quantity with another type for the same dimension vector.
    ///
    /// ```rust
    /// use dimq_core::{Force, Length, Mass, Time};
    ///
    /// let a = Length::new(2.0) / Time::new(1.0) / Time::new(1.0);
    /// let f: Force = (Mass::new(3.0) * a).cast();
    /// assert_eq!(f.value(), 6.0);
    /// ```
    #[inline]
    pub const fn cast<E: Dimension>(self) -> Quantity<E> {
        let () = SameDimension::<D, E>::OK;
        Quantity::new(self.0)
    }

    /// Const addition; `rhs` may be any type with the same vector.
    #[inline]
    pub const fn add<E: Dimension>(self, rhs: Quantity<E>) -> Self {
        let () = SameDimension::<D, E>::OK;
        Self::new(self.0 + rhs.0)
    }

    /// Const subtraction; `rhs` may be any type with the same vector.
    #[inline]
    pub const fn sub<E: Dimension>(self, rhs: Quantity<E>) -> Self {
        let () = SameDimension::<D, E>::OK;
        Self::new(self.0 - rhs.0)
    }

    /// Const multiplication by a plain number.
    #[inline]
    pub const fn scale(self, k: f64) -> Self {
        Self::new(self.0 * k)
    }

    /// Const product of two quantities.
    ///
    /// ```rust
    /// use dimq_core::{Area, Length};
    ///
    /// const SIDE: Length = Length::new(3.0);
    /// const SQUARE: Area = SIDE.times(SIDE);
    /// assert_eq!(SQUARE.value(), 9.0);
    /// ```
    #[inline]
    pub const fn times<E: Dimension>(self, rhs: Quantity<E>) -> Quantity<Prod<D, E>> {
        Quantity::new(self.0 * rhs.0)
    }

    /// Const quotient of two quantities.
    #[inline]
    pub const fn per<E: Dimension>(self, rhs: Quantity<E>) -> Quantity<Quot<D, E>> {
        Quantity::new(self.0 / rhs.0)
    }

    /// Const reciprocal.
    #[inline]
    pub const fn recip(self) -> Quantity<Recip<D>> {
        Quantity::new(1.0 / self.0)
    }

    /// Square root; every exponent of `D` must be even.
    ///
    /// ```rust
    /// use dimq_core::{Area, Length};
    ///
    /// let side = Area::new(25.0).sqrt();
    /// assert_eq!(side, Length::new(5.0));
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Sqrt<D>> {
        let () = ExactRoot::<D>::OK;
        #[cfg(feature = "std")]
        let v = self.0.sqrt();
        #[cfg(not(feature = "std"))]
        let v = libm::sqrt(self.0);
        Quantity::new(v)
    }

    /// Integer power `K`, computed with the real power function.
    ///
    /// ```rust
    /// use dimq_core::{Length, Volume};
    ///
    /// let v: Volume = Length::new(2.0).pow::<3>().cast();
    /// assert_eq!(v.value(), 8.0);
    /// ```
    #[inline]
    pub fn pow<const K: i32>(self) -> Quantity<Pow<D, K>> {
        #[cfg(feature = "std")]
        let v = self.0.powf(K as f64);
        #[cfg(not(feature = "std"))]
        let v = libm::pow(self.0, K as f64);
        Quantity::new(v)
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        let v = self.0.abs();
        #[cfg(not(feature = "std"))]
        let v = libm::fabs(self.0);
        Self::new(v)
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// The dimension vector of `D`.
    #[inline]
    pub const fn dimension() -> DimensionVector {
        D::VECTOR
    }

    /// Display name of the unit (registered symbol or composition).
    ///
    /// ```rust
    /// use dimq_core::{dim, Quantity, Voltage};
    ///
    /// assert_eq!(Voltage::unit().to_string(), "V");
    /// assert_eq!(Quantity::<dim::WaveNumber>::unit().to_string(), "1/m");
    /// ```
    #[inline]
    pub const fn unit() -> UnitName {
        UnitName::of::<D>()
    }

    /// Same as [`Quantity::unit`], callable on a value.
    #[inline]
    pub const fn unit_name(&self) -> UnitName {
        Self::unit()
    }

    /// `true` when the displayed unit of this quantity is exactly `symbol`.
    pub fn has_unit(&self, symbol: &str) -> bool {
        Self::unit().matches_str(symbol)
    }
}

impl<D: Dimension> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Writes `<value> <unit>`; the value honours precision (`{:.2}`) and `{:#}` forces the exponent form of the unit.
impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        let name = if f.alternate() && !D::VECTOR.is_dimensionless() {
            UnitName::Composed(Composition(D::VECTOR))
        } else {
            Self::unit()
        };
        if name.is_empty() {
            Ok(())
        } else if f.alternate() {
            write!(f, " {:#}", name)
        } else {
            write!(f, " {}", name)
        }
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.0)
            .field("dimension", &D::VECTOR)
            .finish()
    }
}

impl<D: Dimension> From<Quantity<D>> for f64 {
    #[inline]
    fn from(q: Quantity<D>) -> f64 {
        q.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, E: Dimension> PartialEq<Quantity<E>> for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Quantity<E>) -> bool {
        let () = SameDimension::<D, E>::OK;
        self.0 == other.0
    }
}

impl<D: Dimension, E: Dimension> PartialOrd<Quantity<E>> for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<E>) -> Option<Ordering> {
        let () = SameDimension::<D, E>::OK;
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators (equal vectors, left operand's type)
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, E: Dimension> Add<Quantity<E>> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<E>) -> Self {
        let () = SameDimension::<D, E>::OK;
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension, E: Dimension> AddAssign<Quantity<E>> for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<E>) {
        let () = SameDimension::<D, E>::OK;
        self.0 += rhs.0;
    }
}

impl<D: Dimension, E: Dimension> Sub<Quantity<E>> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<E>) -> Self {
        let () = SameDimension::<D, E>::OK;
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension, E: Dimension> SubAssign<Quantity<E>> for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<E>) {
        let () = SameDimension::<D, E>::OK;
        self.0 -= rhs.0;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl<'a, D: Dimension> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + *q)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operators
// ─────────────────────────────────────────────────────────────────────────────

impl<A: Dimension, B: Dimension> Mul<Quantity<B>> for Quantity<A> {
    type Output = Quantity<Prod<A, B>>;
    #[inline]
    fn mul(self, rhs: Quantity<B>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<A: Dimension, B: Dimension> Div<Quantity<B>> for Quantity<A> {
    type Output = Quantity<Quot<A, B>>;
    #[inline]
    fn div(self, rhs: Quantity<B>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::new(self * rhs.0)
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<D: Dimension> Div<Quantity<D>> for f64 {
    type Output = Quantity<Recip<D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Quantity<Recip<D>> {
        Quantity::new(self / rhs.0)
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<D: Dimension> Rem<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.0 % rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions
// ─────────────────────────────────────────────────────────────────────────────

/// Square root of a quantity; see [`Quantity::sqrt`].
#[inline]
pub fn sqrt<D: Dimension>(q: Quantity<D>) -> Quantity<Sqrt<D>> {
    q.sqrt()
}

/// Integer power of a quantity; see [`Quantity::pow`].
///
/// ```rust
/// use dimq_core::{pow, Length};
///
/// let cube = pow::<3, _>(Length::new(3.0));
/// assert_eq!(cube.value(), 27.0);
/// ```
#[inline]
pub fn pow<const K: i32, D: Dimension>(q: Quantity<D>) -> Quantity<Pow<D, K>> {
    q.pow::<K>()
}
