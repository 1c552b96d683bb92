//! Closest parallel pair to a target resistance.

use log::{debug, info};

use crate::catalog::catalog;
use crate::circuit::parallel_resistance;
use crate::error::{CalcError, Result};

use super::BestPair;

/// The best parallel pair for a target resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelMatch {
    pub r1: f64,
    pub r2: f64,
    /// `|target - (r1 || r2)|` in ohms
    pub error: f64,
}

impl ParallelMatch {
    /// Equivalent resistance of the pair.
    pub fn resistance(&self) -> f64 {
        self.r1 * self.r2 / (self.r1 + self.r2)
    }
}

/// Find the two catalog values whose parallel combination is closest to
/// `target` ohms.
///
/// All 144 x 144 ordered pairs are scored. On equal error the pair with the
/// smaller `r1`, then the smaller `r2`, wins.
pub fn find_best_parallel_combination(target: f64) -> Result<ParallelMatch> {
    if !(target.is_finite() && target > 0.0) {
        return Err(CalcError::invalid_target("target resistance", target));
    }

    let values = catalog();
    let mut best = BestPair::new();

    for &r1 in values {
        for &r2 in values {
            let equivalent = parallel_resistance(&[r1, r2])?;
            let error = (target - equivalent).abs();
            if best.offer(r1, r2, error) {
                debug!("new best: R1={r1} R2={r2} error={error:.6}");
            }
        }
    }

    let (r1, r2, error) = best
        .into_pair()
        .ok_or_else(|| CalcError::invalid_target("target resistance", target))?;

    info!("best parallel pair for {target} ohm: R1={r1} R2={r2} error={error:.6}");

    Ok(ParallelMatch { r1, r2, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_match_found_first() {
        // 750 || 1500 = 500 comes before 1000 || 1000 in scan order
        let m = find_best_parallel_combination(500.0).unwrap();
        assert_eq!((m.r1, m.r2), (750.0, 1500.0));
        assert_eq!(m.error, 0.0);
        assert_relative_eq!(m.resistance(), 500.0);
    }

    #[test]
    fn test_deterministic() {
        let a = find_best_parallel_combination(500.0).unwrap();
        let b = find_best_parallel_combination(500.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inexact_target() {
        let m = find_best_parallel_combination(1234.0).unwrap();
        assert_eq!((m.r1, m.r2), (1300.0, 24000.0));
        assert_relative_eq!(m.error, 0.798_418_972_332, epsilon = 1e-9);
    }

    #[test]
    fn test_targets_outside_catalog_range() {
        // Below 1 || 1
        let low = find_best_parallel_combination(0.4).unwrap();
        assert_eq!((low.r1, low.r2), (1.0, 1.0));
        assert_relative_eq!(low.error, 0.1, epsilon = 1e-12);

        // Above 910k || 910k
        let high = find_best_parallel_combination(2_000_000.0).unwrap();
        assert_eq!((high.r1, high.r2), (910_000.0, 910_000.0));
        assert_relative_eq!(high.error, 1_545_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_target() {
        assert!(find_best_parallel_combination(0.0).is_err());
        assert!(find_best_parallel_combination(-5.0).is_err());
        assert!(find_best_parallel_combination(f64::NAN).is_err());
        assert!(find_best_parallel_combination(f64::INFINITY).is_err());
    }
}
