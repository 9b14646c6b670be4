//! Named units grouped by dimension.
//!
//! Every unit is a `Quantity` constant whose magnitude is its size in the coherent SI unit. Use them as scale factors
//! in both directions:
//!
//! ```rust
//! use dimq::units::length::{KILOMETER, MILE};
//!
//! let trip = MILE.scale(26.2);
//! assert!((trip.in_unit(KILOMETER) - 42.164_8).abs() < 1e-3);
//! ```
//!
//! All tables are built from the base units with scalar multiplication only.

pub mod angle;
pub mod area;
pub mod current;
pub mod energy;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod volume;
