//! Exact rational exponents.

use core::fmt;
use core::hash::{Hash, Hasher};

/// An exact rational number `num / den` used as a dimension exponent.
///
/// The denominator is always positive. Construction keeps the given form, every arithmetic result is reduced, and
/// equality is decided by cross-multiplication so that `2/1 == 4/2`.
///
/// ```rust
/// use dimq_core::Ratio;
///
/// const HALF: Ratio = Ratio::new(1, 2);
/// assert_eq!(HALF.add(HALF), Ratio::integer(1));
/// assert_eq!(Ratio::new(4, 2), Ratio::integer(2));
/// ```
#[derive(Clone, Copy)]
pub struct Ratio {
    num: i32,
    den: i32,
}

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// The zero exponent.
    pub const ZERO: Self = Self::integer(0);

    /// The unit exponent.
    pub const ONE: Self = Self::integer(1);

    /// Creates `num / den`. A negative denominator moves its sign to the numerator.
    ///
    /// # Panics
    ///
    /// Panics when `den` is zero; in a `const` context this is a build error.
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "rational exponent with a zero denominator");
        if den < 0 {
            Self { num: -num, den: -den }
        } else {
            Self { num, den }
        }
    }

    /// Creates the integer exponent `n / 1`.
    pub const fn integer(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    // Results outside i32 stop const evaluation instead of wrapping.
    const fn reduced(num: i64, den: i64) -> Self {
        let g = gcd(num, den);
        let g = if g == 0 { 1 } else { g };
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let (num, den) = (num / g, den / g);
        assert!(
            num >= i32::MIN as i64 && num <= i32::MAX as i64 && den <= i32::MAX as i64,
            "rational exponent out of range"
        );
        Self {
            num: num as i32,
            den: den as i32,
        }
    }

    /// Numerator as stored.
    pub const fn numer(self) -> i32 {
        self.num
    }

    /// Denominator as stored (always positive).
    pub const fn denom(self) -> i32 {
        self.den
    }

    /// Lowest-terms form.
    pub const fn reduce(self) -> Self {
        Self::reduced(self.num as i64, self.den as i64)
    }

    /// Exact sum.
    pub const fn add(self, rhs: Self) -> Self {
        Self::reduced(
            self.num as i64 * rhs.den as i64 + rhs.num as i64 * self.den as i64,
            self.den as i64 * rhs.den as i64,
        )
    }

    /// Exact difference.
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// Negation.
    pub const fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    /// Multiplies by an integer.
    pub const fn scale(self, k: i32) -> Self {
        Self::reduced(self.num as i64 * k as i64, self.den as i64)
    }

    /// Divides by two, exactly.
    pub const fn halve(self) -> Self {
        Self::reduced(self.num as i64, self.den as i64 * 2)
    }

    /// Cross-multiplication equality, usable in `const` contexts.
    pub const fn equals(self, rhs: Self) -> bool {
        self.num as i64 * rhs.den as i64 == rhs.num as i64 * self.den as i64
    }

    /// `true` when the value is zero.
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` when the value is a whole number.
    pub const fn is_integer(self) -> bool {
        self.num % self.den == 0
    }

    /// `true` when the value is strictly positive.
    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    /// `true` when the value is strictly negative.
    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// Absolute value.
    pub const fn abs(self) -> Self {
        if self.num < 0 {
            self.neg()
        } else {
            self
        }
    }

    /// `true` when the value is exactly one.
    pub const fn is_one(self) -> bool {
        self.num == self.den
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl Eq for Ratio {}

impl Hash for Ratio {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let r = self.reduce();
        r.num.hash(state);
        r.den.hash(state);
    }
}

impl From<i32> for Ratio {
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

impl fmt::Debug for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// `n` for whole numbers, `n/d` otherwise (lowest terms).
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reduce();
        if r.den == 1 {
            write!(f, "{}", r.num)
        } else {
            write!(f, "{}/{}", r.num, r.den)
        }
    }
}
