//! Parallel resistance.

use crate::error::{CalcError, Result};

/// Equivalent resistance of `resistors` connected in parallel.
///
/// `1/R = 1/R1 + 1/R2 + ... + 1/Rn`
///
/// Every value must be positive and finite.
pub fn parallel_resistance(resistors: &[f64]) -> Result<f64> {
    if resistors.is_empty() {
        return Err(CalcError::EmptyNetwork);
    }

    let mut conductance = 0.0;
    for &r in resistors {
        if !(r.is_finite() && r > 0.0) {
            return Err(CalcError::NonPositiveResistance { value: r });
        }
        conductance += 1.0 / r;
    }

    Ok(1.0 / conductance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equal_resistors_halve() {
        assert_relative_eq!(
            parallel_resistance(&[1000.0, 1000.0]).unwrap(),
            500.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(parallel_resistance(&[4.7, 4.7]).unwrap(), 2.35, max_relative = 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let ab = parallel_resistance(&[330.0, 4700.0]).unwrap();
        let ba = parallel_resistance(&[4700.0, 330.0]).unwrap();
        assert_eq!(ab, ba);
        assert_relative_eq!(ab, 330.0 * 4700.0 / (330.0 + 4700.0), max_relative = 1e-12);
    }

    #[test]
    fn test_single_and_many() {
        assert_relative_eq!(parallel_resistance(&[220.0]).unwrap(), 220.0, max_relative = 1e-12);
        assert_relative_eq!(
            parallel_resistance(&[300.0, 300.0, 300.0]).unwrap(),
            100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rejects_empty_and_zero() {
        assert!(matches!(parallel_resistance(&[]), Err(CalcError::EmptyNetwork)));
        assert!(matches!(
            parallel_resistance(&[100.0, 0.0]),
            Err(CalcError::NonPositiveResistance { value }) if value == 0.0
        ));
        assert!(parallel_resistance(&[-10.0]).is_err());
        assert!(parallel_resistance(&[f64::NAN]).is_err());
    }
}
