//! Shorthand formatter.

use std::fmt;

const SUFFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Format ohms as shorthand, e.g. `4700.0` as `4.7k`.
///
/// The value is divided by the largest of 1e9, 1e6 and 1e3 it reaches and
/// rounded to one decimal digit, halves to even. A trailing `.0` is dropped.
/// Values below 1000 are printed as-is.
pub fn format_shorthand(value: f64) -> String {
    for (factor, suffix) in SUFFIXES {
        if value >= factor {
            // Round the stored quotient once; scaling by 10 first can round twice
            let quotient = format!("{:.1}", value / factor);
            let quotient = quotient.strip_suffix(".0").unwrap_or(&quotient);
            return format!("{quotient}{suffix}");
        }
    }
    value.to_string()
}

/// Display adapter printing a resistance in shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shorthand(pub f64);

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_shorthand(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(format_shorthand(4700.0), "4.7k");
        assert_eq!(format_shorthand(1000.0), "1k");
        assert_eq!(format_shorthand(15_000.0), "15k");
        assert_eq!(format_shorthand(910_000.0), "910k");
        assert_eq!(format_shorthand(1_000_000.0), "1M");
        assert_eq!(format_shorthand(2_200_000.0), "2.2M");
        assert_eq!(format_shorthand(1_500_000_000.0), "1.5G");
    }

    #[test]
    fn test_rounds_quotient() {
        assert_eq!(format_shorthand(4_749.0), "4.7k");
        assert_eq!(format_shorthand(4_751.0), "4.8k");
        // 4.35 is stored just below the half
        assert_eq!(format_shorthand(4_350.0), "4.3k");
        // Exact halves go to the even digit
        assert_eq!(format_shorthand(4_250.0), "4.2k");
        assert_eq!(format_shorthand(1_250.0), "1.2k");
        assert_eq!(format_shorthand(999_960.0), "1000k");
    }

    #[test]
    fn test_small_values_unchanged() {
        assert_eq!(format_shorthand(470.0), "470");
        assert_eq!(format_shorthand(999.0), "999");
        assert_eq!(format_shorthand(9.1), "9.1");
    }

    #[test]
    fn test_display_adapter() {
        assert_eq!(Shorthand(24_000.0).to_string(), "24k");
    }
}
