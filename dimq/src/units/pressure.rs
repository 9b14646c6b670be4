//! Pressure units.

use dimq_core::Pressure;

/// Pascal.
pub const PASCAL: Pressure = Pressure::new(1.0);
/// Bar, 10⁵ Pa.
pub const BAR: Pressure = PASCAL.scale(1.0e5);
/// Standard atmosphere.
pub const ATM: Pressure = PASCAL.scale(1.01325e5);
/// Torr.
pub const TORR: Pressure = PASCAL.scale(133.3224);
/// Pound per square inch.
pub const PSI: Pressure = PASCAL.scale(6.8948e3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atmosphere_in_bar() {
        assert_eq!(BAR.value(), 100_000.0);
        assert_eq!(ATM.in_unit(BAR), 1.01325);
    }
}
