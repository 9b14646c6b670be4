//! SI prefixes as plain scale factors.
//!
//! ```rust
//! use dimq::prefix::KILO;
//! use dimq::{Length, METER};
//!
//! const KM: Length = METER.scale(KILO);
//! assert_eq!(KM.value(), 1000.0);
//! ```

/// 10²⁴
pub const YOTTA: f64 = 1.0e24;
/// 10²¹
pub const ZETTA: f64 = 1.0e21;
/// 10¹⁸
pub const EXA: f64 = 1.0e18;
/// 10¹⁵
pub const PETA: f64 = 1.0e15;
/// 10¹²
pub const TERA: f64 = 1.0e12;
/// 10⁹
pub const GIGA: f64 = 1.0e9;
/// 10⁶
pub const MEGA: f64 = 1.0e6;
/// 10³
pub const KILO: f64 = 1.0e3;
/// 10²
pub const HECTO: f64 = 1.0e2;
/// 10¹
pub const DEKA: f64 = 1.0e1;
/// 10⁻¹
pub const DECI: f64 = 1.0e-1;
/// 10⁻²
pub const CENTI: f64 = 1.0e-2;
/// 10⁻³
pub const MILLI: f64 = 1.0e-3;
/// 10⁻⁶
pub const MICRO: f64 = 1.0e-6;
/// 10⁻⁹
pub const NANO: f64 = 1.0e-9;
/// 10⁻¹²
pub const PICO: f64 = 1.0e-12;
/// 10⁻¹⁵
pub const FEMTO: f64 = 1.0e-15;
/// 10⁻¹⁸
pub const ATTO: f64 = 1.0e-18;
/// 10⁻²¹
pub const ZEPTO: f64 = 1.0e-21;
/// 10⁻²⁴
pub const YOCTO: f64 = 1.0e-24;
