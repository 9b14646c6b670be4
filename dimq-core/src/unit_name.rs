//! Display names for dimensions: registered symbols with a generic fallback.

use crate::dimension::{BaseDimension, Dimension, DimensionVector};
use crate::ratio::Ratio;
use crate::registry;
use core::fmt::{self, Write};

/// The display name of a dimension.
///
/// Either a registered symbol, or a [`Composition`] of base-unit symbols when the registry has no entry.
///
/// ```rust
/// use dimq_core::{dim, Quot, UnitName};
///
/// assert_eq!(UnitName::of::<dim::Force>().to_string(), "N");
/// assert_eq!(UnitName::of::<Quot<dim::Length, dim::Mass>>().to_string(), "m/kg");
/// assert_eq!(format!("{:#}", UnitName::of::<Quot<dim::Length, dim::Mass>>()), "m kg^-1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitName {
    /// A symbol from the registry or a named dimension.
    Registered(&'static str),
    /// Composed from base-unit symbols.
    Composed(Composition),
}

impl UnitName {
    /// Name of the dimension `D`.
    pub const fn of<D: Dimension>() -> Self {
        match D::SYMBOL {
            Some(symbol) => UnitName::Registered(symbol),
            None => UnitName::Composed(Composition(D::VECTOR)),
        }
    }

    /// Name of an arbitrary vector, consulting the registry first.
    pub const fn for_vector(vector: DimensionVector) -> Self {
        match registry::lookup(&vector) {
            Some(symbol) => UnitName::Registered(symbol),
            None => UnitName::Composed(Composition(vector)),
        }
    }

    /// `true` when nothing is printed (an unnamed dimensionless quantity).
    pub fn is_empty(&self) -> bool {
        match self {
            UnitName::Registered(symbol) => symbol.is_empty(),
            UnitName::Composed(c) => c.0.is_dimensionless(),
        }
    }

    /// Compares the rendered name with `text` without allocating.
    pub fn matches_str(&self, text: &str) -> bool {
        let mut cmp = Prefix { rest: text };
        write!(cmp, "{}", self).is_ok() && cmp.rest.is_empty()
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitName::Registered(symbol) => f.write_str(symbol),
            UnitName::Composed(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// Fallback rendering of a vector from base-unit symbols.
///
/// `{}` writes a fraction: positive exponents, then `/` and the magnitudes of the negative ones (`m/kg`, `1/m`,
/// `kg/m s^2`). Fractional exponents are parenthesized (`m^(1/2)`).
///
/// `{:#}` writes the exponent form: every non-zero slot in order, `sym` for an exponent of one, otherwise `sym^num`
/// followed by `/den` when the exponent is fractional (`m kg^-1`, `s^1/2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Composition(pub DimensionVector);

impl Composition {
    fn write_fraction(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        let has = |pick: fn(Ratio) -> bool| BaseDimension::ALL.iter().any(|&b| pick(v.exponent(b)));
        let numer = has(Ratio::is_positive);
        let denom = has(Ratio::is_negative);

        if numer {
            write_terms(f, v, Ratio::is_positive)?;
        } else if denom {
            f.write_str("1")?;
        }
        if denom {
            f.write_str("/")?;
            write_terms(f, v, Ratio::is_negative)?;
        }
        Ok(())
    }

    fn write_exponents(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.0.exponent(base).reduce();
            if e.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;

            f.write_str(base.symbol())?;
            if !e.is_one() {
                write!(f, "^{}", e.numer())?;
                if e.denom() != 1 {
                    write!(f, "/{}", e.denom())?;
                }
            }
        }
        Ok(())
    }
}

// Writes the slots selected by `pick` using exponent magnitudes.
fn write_terms(f: &mut fmt::Formatter<'_>, v: DimensionVector, pick: fn(Ratio) -> bool) -> fmt::Result {
    let mut first = true;
    for base in BaseDimension::ALL {
        let e = v.exponent(base);
        if !pick(e) {
            continue;
        }
        if !first {
            f.write_str(" ")?;
        }
        first = false;

        let e = e.abs().reduce();
        f.write_str(base.symbol())?;
        if e.is_one() {
            continue;
        }
        if e.denom() == 1 {
            write!(f, "^{}", e.numer())?;
        } else {
            write!(f, "^({}/{})", e.numer(), e.denom())?;
        }
    }
    Ok(())
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.write_exponents(f)
        } else {
            self.write_fraction(f)
        }
    }
}

struct Prefix<'a> {
    rest: &'a str,
}

impl Write for Prefix<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.rest.strip_prefix(s) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(fmt::Error),
        }
    }
}
