//! The E24 standard resistor catalog.
//!
//! Values are generated as `mantissa * 10^decade` rounded to one decimal
//! digit, for decades `0..DECADES`, giving 1 Ω through 910 kΩ. Iteration
//! order is ascending within a decade and decades ascend, which is the order
//! the best-pair searches rely on for tie-breaking.

use std::sync::OnceLock;

/// Base mantissas of the E24 series, one decade.
pub const E24_MANTISSAS: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Number of decades covered by the catalog.
pub const DECADES: i32 = 6;

/// Total number of catalog values.
pub const CATALOG_LEN: usize = E24_MANTISSAS.len() * DECADES as usize;

/// Lazily generate every catalog value in order.
///
/// Each call starts again from 1 Ω.
pub fn all_resistor_values() -> impl Iterator<Item = f64> + Clone {
    (0..DECADES).flat_map(|decade| {
        let scale = 10f64.powi(decade);
        E24_MANTISSAS
            .iter()
            .map(move |&mantissa| round_tenths(mantissa * scale))
    })
}

/// The precomputed catalog, shared read-only across searches.
pub fn catalog() -> &'static [f64] {
    static CATALOG: OnceLock<Vec<f64>> = OnceLock::new();
    CATALOG.get_or_init(|| all_resistor_values().collect())
}

/// Check whether `value` is exactly one of the catalog values.
pub fn is_standard_value(value: f64) -> bool {
    catalog().contains(&value)
}

// Integer tenths divided by ten are correctly rounded, so 11.000000000000002
// becomes exactly 11.0.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_144_values() {
        assert_eq!(CATALOG_LEN, 144);
        assert_eq!(all_resistor_values().count(), 144);
        assert_eq!(catalog().len(), 144);
    }

    #[test]
    fn test_catalog_is_sorted_and_bounded() {
        let values = catalog();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values[0], 1.0);
        assert_eq!(values[values.len() - 1], 910_000.0);
        assert!(values.iter().all(|&v| (1.0..=9_100_000.0).contains(&v)));
    }

    #[test]
    fn test_values_are_rounded() {
        let values = catalog();
        assert_eq!(values[1], 1.1);
        assert_eq!(values[25], 11.0);
        assert_eq!(values[24 * 2 + 12], 330.0);
        assert_eq!(values[24 * 3 + 16], 4700.0);
    }

    #[test]
    fn test_generation_restarts() {
        let first: Vec<f64> = all_resistor_values().take(3).collect();
        let second: Vec<f64> = all_resistor_values().take(3).collect();
        assert_eq!(first, vec![1.0, 1.1, 1.2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_standard_value() {
        assert!(is_standard_value(4700.0));
        assert!(is_standard_value(3.3));
        assert!(!is_standard_value(4800.0));
        assert!(!is_standard_value(1_000_000.0));
    }
}
