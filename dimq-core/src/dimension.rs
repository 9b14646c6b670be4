//! Dimension vectors, the [`Dimension`] trait and the type-level constructors for derived dimensions.

use crate::error::DimensionError;
use crate::ratio::Ratio;
use core::fmt;
use core::marker::PhantomData;

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// The seven SI base dimensions, in vector slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Length (L), metre.
    Length,
    /// Mass (M), kilogram.
    Mass,
    /// Time (T), second.
    Time,
    /// Electric current (I), ampere.
    Current,
    /// Thermodynamic temperature (Θ), kelvin.
    Temperature,
    /// Amount of substance (N), mole.
    Substance,
    /// Luminous intensity (J), candela.
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in slot order.
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::LuminousIntensity,
    ];

    /// Slot index inside a [`DimensionVector`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the SI base unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Substance => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    /// Conventional dimension label.
    pub const fn label(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Substance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension vector
// ─────────────────────────────────────────────────────────────────────────────

/// The signature of a physical quantity: one exact rational exponent per base dimension.
///
/// Vectors are plain `Copy` values and every operation is a `const fn`, so the vector of any derived dimension is
/// computed while compiling.
///
/// ```rust
/// use dimq_core::{BaseDimension, DimensionVector};
///
/// const LENGTH: DimensionVector = DimensionVector::from_integers([1, 0, 0, 0, 0, 0, 0]);
/// const TIME: DimensionVector = DimensionVector::from_integers([0, 0, 1, 0, 0, 0, 0]);
/// const SPEED: DimensionVector = LENGTH.sub(TIME);
///
/// assert_eq!(SPEED.exponent(BaseDimension::Time).numer(), -1);
/// assert!(LENGTH.sub(LENGTH).is_dimensionless());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector {
    exponents: [Ratio; 7],
}

impl DimensionVector {
    /// The dimensionless vector.
    pub const DIMENSIONLESS: Self = Self::new([Ratio::ZERO; 7]);

    /// Builds a vector from exponents in slot order (L, M, T, I, Θ, N, J).
    pub const fn new(exponents: [Ratio; 7]) -> Self {
        Self { exponents }
    }

    /// Builds a vector from integer exponents.
    pub const fn from_integers(exponents: [i32; 7]) -> Self {
        let mut out = [Ratio::ZERO; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = Ratio::integer(exponents[i]);
            i += 1;
        }
        Self::new(out)
    }

    /// Vector of a single base dimension raised to the first power.
    pub const fn base(dim: BaseDimension) -> Self {
        let mut out = [Ratio::ZERO; 7];
        out[dim.index()] = Ratio::ONE;
        Self::new(out)
    }

    /// All exponents in slot order.
    pub const fn exponents(&self) -> [Ratio; 7] {
        self.exponents
    }

    /// Exponent of one base dimension.
    pub const fn exponent(&self, dim: BaseDimension) -> Ratio {
        self.exponents[dim.index()]
    }

    /// Element-wise sum; the dimension of a product.
    pub const fn add(self, rhs: Self) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 7 {
            out[i] = self.exponents[i].add(rhs.exponents[i]);
            i += 1;
        }
        Self::new(out)
    }

    /// Element-wise difference; the dimension of a quotient.
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.negate())
    }

    /// Negates every exponent; the dimension of a reciprocal.
    pub const fn negate(self) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 7 {
            out[i] = self.exponents[i].neg();
            i += 1;
        }
        Self::new(out)
    }

    /// Multiplies every exponent by `k`; the dimension of a `k`-th power.
    pub const fn scale(self, k: i32) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 7 {
            out[i] = self.exponents[i].scale(k);
            i += 1;
        }
        Self::new(out)
    }

    /// Halves every exponent exactly; the dimension of a square root. The result may be fractional.
    pub const fn halve(self) -> Self {
        let mut out = self.exponents;
        let mut i = 0;
        while i < 7 {
            out[i] = self.exponents[i].halve();
            i += 1;
        }
        Self::new(out)
    }

    /// Slot-wise rational equality, usable in `const` contexts.
    pub const fn matches(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < 7 {
            if !self.exponents[i].equals(other.exponents[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        self.matches(&Self::DIMENSIONLESS)
    }

    /// `true` when every exponent is a whole number.
    pub const fn is_integral(&self) -> bool {
        let mut i = 0;
        while i < 7 {
            if !self.exponents[i].is_integer() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when a square root keeps every exponent whole.
    pub const fn has_exact_root(&self) -> bool {
        self.halve().is_integral()
    }

    /// Runtime counterpart of the build-time compatibility check.
    pub fn ensure_matches(&self, found: &Self) -> Result<(), DimensionError> {
        if self.matches(found) {
            Ok(())
        } else {
            Err(DimensionError::Incompatible {
                expected: *self,
                found: *found,
            })
        }
    }

    /// Runtime counterpart of the build-time root check.
    pub fn checked_sqrt(&self) -> Result<Self, DimensionError> {
        if self.has_exact_root() {
            Ok(self.halve())
        } else {
            Err(DimensionError::NonExactRoot(*self))
        }
    }
}

impl fmt::Debug for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DimensionVector(")?;
        let mut first = true;
        for dim in BaseDimension::ALL {
            let e = self.exponent(dim);
            if e.is_zero() {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", dim.label(), e)?;
            first = false;
        }
        f.write_str(")")
    }
}

/// Lists every slot with its raw exponent: `L=1/1, M=0/1, …`.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dim) in BaseDimension::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let e = self.exponent(dim);
            write!(f, "{}={}/{}", dim.label(), e.numer(), e.denom())?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// A type-level dimension.
///
/// Every dimension is a zero-sized marker type carrying its [`DimensionVector`] as an associated constant. Base and
/// named dimensions are declared with `#[derive(Dimension)]`; derived dimensions are built from the constructors
/// [`Prod`], [`Quot`], [`Recip`], [`Pow`] and [`Sqrt`].
///
/// ```rust
/// use dimq_core::{dim, Dimension, Quot, Prod};
///
/// type MySpeed = Quot<dim::Length, dim::Time>;
/// assert_eq!(<MySpeed as Dimension>::SYMBOL, Some("m/s"));
///
/// // The shape of the type does not matter for the vector.
/// type Other = Prod<dim::Length, dim::Frequency>;
/// assert_eq!(<Other as Dimension>::VECTOR, <MySpeed as Dimension>::VECTOR);
/// ```
pub trait Dimension: 'static {
    /// Exponents of the dimension.
    const VECTOR: DimensionVector;

    /// Display symbol, `None` when only the fallback composition applies.
    const SYMBOL: Option<&'static str> = crate::registry::lookup(&Self::VECTOR);
}

/// Product of two dimensions (exponents add).
pub struct Prod<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> Dimension for Prod<A, B> {
    const VECTOR: DimensionVector = A::VECTOR.add(B::VECTOR);
}

/// Quotient of two dimensions (exponents subtract).
pub struct Quot<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> Dimension for Quot<A, B> {
    const VECTOR: DimensionVector = A::VECTOR.sub(B::VECTOR);
}

/// Reciprocal of a dimension (exponents negate).
pub struct Recip<A>(PhantomData<A>);

impl<A: Dimension> Dimension for Recip<A> {
    const VECTOR: DimensionVector = A::VECTOR.negate();
}

/// Integer power of a dimension (exponents scale by `K`).
///
/// An exponent that no longer fits in `i32` stops the build:
///
/// ```compile_fail
/// use dimq_core::{dim, Dimension, DimensionVector, Pow};
///
/// const HUGE: DimensionVector = <Pow<Pow<dim::Length, 65536>, 65536> as Dimension>::VECTOR;
/// assert!(!HUGE.is_dimensionless());
/// ```
pub struct Pow<A, const K: i32>(PhantomData<A>);

impl<A: Dimension, const K: i32> Dimension for Pow<A, K> {
    const VECTOR: DimensionVector = A::VECTOR.scale(K);
}

/// Square root of a dimension (exponents halve).
pub struct Sqrt<A>(PhantomData<A>);

impl<A: Dimension> Dimension for Sqrt<A> {
    const VECTOR: DimensionVector = A::VECTOR.halve();
}
