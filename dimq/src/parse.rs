//! Best-effort parsing of `"<number> <symbol>"` strings.
//!
//! The parser understands the output of `Display` for registered units: a number, one space-separated token, and a
//! symbol from the [`registry`](dimq_core::registry). It does no scaling, so `"1 km"` is rejected rather than read
//! as 1000 m.
//!
//! ```rust
//! use dimq::parse::{parse_quantity, parse_value, ParseQuantityError};
//! use dimq::Pressure;
//!
//! assert_eq!(parse_value("9.81 m/s^2").unwrap(), 9.81);
//!
//! let p: Pressure = parse_quantity("101325 Pa").unwrap();
//! assert_eq!(p.value(), 101_325.0);
//!
//! assert!(matches!(parse_value("3 furlongs"), Err(ParseQuantityError::UnknownUnit(_))));
//! ```

use core::num::ParseFloatError;
use dimq_core::{registry, Dimension, DimensionError, DimensionVector, Quantity};

/// Errors returned by [`parse_value`] and [`parse_quantity`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseQuantityError {
    /// The input is not exactly two whitespace-separated tokens.
    #[error("expected '<value> <unit>', got {0:?}")]
    InvalidFormat(String),

    /// The first token is not a floating-point number.
    #[error("invalid numeric value {text:?}: {source}")]
    InvalidNumber {
        /// Offending token.
        text: String,
        /// Underlying float parse error.
        source: ParseFloatError,
    },

    /// The second token is not a registered unit symbol.
    #[error("unknown unit symbol {0:?}")]
    UnknownUnit(String),

    /// The symbol is known but belongs to another dimension.
    #[error(transparent)]
    Dimension(#[from] DimensionError),
}

/// Splits the input and returns the number together with the dimension of its symbol.
fn parse_parts(input: &str) -> Result<(f64, DimensionVector), ParseQuantityError> {
    let mut tokens = input.split_whitespace();
    let (number, symbol) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(number), Some(symbol), None) => (number, symbol),
        _ => return Err(ParseQuantityError::InvalidFormat(input.to_owned())),
    };

    let value = number
        .parse::<f64>()
        .map_err(|source| ParseQuantityError::InvalidNumber {
            text: number.to_owned(),
            source,
        })?;

    let vector = registry::find_symbol(symbol)
        .ok_or_else(|| ParseQuantityError::UnknownUnit(symbol.to_owned()))?;

    Ok((value, vector))
}

/// Parses `"<number> <symbol>"` and returns the number when the symbol is a known unit.
pub fn parse_value(input: &str) -> Result<f64, ParseQuantityError> {
    match parse_parts(input) {
        Ok((value, _)) => {
            log::debug!("parsed {:?} as {}", input, value);
            Ok(value)
        }
        Err(err) => {
            log::warn!("rejected quantity string {:?}: {}", input, err);
            Err(err)
        }
    }
}

/// Parses `"<number> <symbol>"` into a `Quantity<D>`; the symbol's dimension must match `D`.
///
/// ```rust
/// use dimq::parse::{parse_quantity, ParseQuantityError};
/// use dimq::Length;
///
/// let l: Length = parse_quantity("2.5 m").unwrap();
/// assert_eq!(l.value(), 2.5);
///
/// let err = parse_quantity::<dimq::dim::Time>("2.5 m").unwrap_err();
/// assert!(matches!(err, ParseQuantityError::Dimension(_)));
/// ```
pub fn parse_quantity<D: Dimension>(input: &str) -> Result<Quantity<D>, ParseQuantityError> {
    let result = parse_parts(input).and_then(|(value, vector)| {
        D::VECTOR.ensure_matches(&vector)?;
        Ok(Quantity::new(value))
    });

    if let Err(err) = &result {
        log::warn!("rejected quantity string {:?}: {}", input, err);
    }
    result
}
