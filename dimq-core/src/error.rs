//! Error type for runtime dimension checks.
//!
//! Statically typed code never sees these values: the same conditions are rejected while compiling (see
//! [`Quantity`](crate::Quantity)). They surface only on paths where a dimension is known at runtime, such as parsing a
//! unit symbol.

use crate::dimension::DimensionVector;

/// A dimensional rule was violated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// Two operands carry different dimension vectors.
    #[error("incompatible dimensions: expected [{expected}], found [{found}]")]
    Incompatible {
        /// Dimension required by the operation.
        expected: DimensionVector,
        /// Dimension actually supplied.
        found: DimensionVector,
    },

    /// A square root would leave a fractional exponent.
    #[error("square root of [{0}] is not exact")]
    NonExactRoot(DimensionVector),
}
