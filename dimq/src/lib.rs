//! Dimension-checked physical quantities.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core` and adds unit
//! tables, SI prefixes, literal helpers, physical constants and a small string parser.
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is a zero-sized type describing its dimension as
//! seven exponents over the SI base dimensions. Multiplying and dividing quantities derives new dimensions in the
//! type system, and the value is always stored in the coherent SI unit.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds).
//! - Infers derived dimensions: `Length / Time` is a `Speed`, `Mass * Acceleration` is a `Force`.
//! - Makes unit conversion an explicit division by a unit: `distance.in_unit(MILE)`.
//! - Prints quantities with their SI symbol (`"10 m/s"`, `"3 N"`), composing one from base units when no name exists.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Unit systems beyond the seven SI base dimensions, or remembering the unit a value was entered in.
//! - General unit parsing; [`parse`] only accepts registered SI symbols.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::literals::{km, hr};
//! use dimq::units::length::MILE;
//! use dimq::{Length, Speed, Time};
//!
//! let d = Length::new(100.0);
//! let t = Time::new(10.0);
//! let v: Speed = d / t;
//! assert_eq!(v.to_string(), "10 m/s");
//!
//! let cruise: Speed = km(900.0) / hr(1.0);
//! assert!((cruise.in_unit(MILE / hr(1.0)) - 559.234).abs() < 1e-3);
//! ```
//!
//! Dimensions are exact rationals, so roots work when they are exact:
//!
//! ```rust
//! use dimq::{sqrt, Area, Length};
//!
//! let side = sqrt(Area::new(25.0));
//! assert_eq!(side, Length::new(5.0));
//! ```
//!
//! # Incorrect usage (build error)
//!
//! ```compile_fail
//! use dimq::{Length, Time};
//!
//! let d = Length::new(1.0);
//! let t = Time::new(1.0);
//! let _ = d + t; // cannot add a length to a time
//! ```
//!
//! # Modules
//!
//! - [`dim`]: dimension marker types and aliases
//! - [`units`]: named units grouped by dimension (length, mass, time, angle, …)
//! - [`prefix`]: SI prefixes as plain factors
//! - [`literals`]: `km(2.5)`, `deg(90.0)`, …
//! - [`constants`]: physical constants
//! - [`parse`]: best-effort `"<number> <symbol>"` parser (requires `std`)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core` and the [`parse`] module.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Logging
//!
//! The parser reports rejected input through the [`log`](https://docs.rs/log) facade at `warn` level. No logger is
//! installed by this crate.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

/// Derive macro used by `dimq-core` to define dimension marker types.
///
/// This macro expands in terms of `crate::Dimension`, `crate::DimensionVector` and `crate::Ratio`, so it is intended
/// for use inside `dimq-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use dimq_derive::Dimension;

pub mod constants;
pub mod literals;
#[cfg(feature = "std")]
pub mod parse;
pub mod prefix;
pub mod units;
