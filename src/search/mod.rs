//! Best-pair search over the E24 catalog.
//!
//! Both calculators use the same scan:
//!
//! 1. Visit every ordered pair `(r1, r2)` of [`catalog`](crate::catalog::catalog)
//!    values, `r1` in the outer loop, equal values allowed
//! 2. Score the pair against the target with the circuit model
//! 3. Keep it only if its error is strictly smaller than the best so far
//!    (and, for the divider, it passes the current limit)
//!
//! Strict comparison means ties go to the pair found first. Each search
//! is self-contained and does not touch shared mutable state.

mod divider;
mod parallel;

pub use divider::{find_resistor_values, DividerMatch, DividerTarget};
pub use parallel::{find_best_parallel_combination, ParallelMatch};

/// Running best pair during a scan.
///
/// Starts at the sentinel `(0, 0, inf)` and only ever moves to a smaller
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BestPair {
    pub r1: f64,
    pub r2: f64,
    pub error: f64,
}

impl Default for BestPair {
    fn default() -> Self {
        Self::new()
    }
}

impl BestPair {
    /// The sentinel: no pair yet, infinite error.
    pub fn new() -> Self {
        Self {
            r1: 0.0,
            r2: 0.0,
            error: f64::INFINITY,
        }
    }

    /// Replace the best pair if `error` is strictly smaller.
    ///
    /// Returns `true` when the pair was taken.
    pub fn offer(&mut self, r1: f64, r2: f64, error: f64) -> bool {
        if error < self.error {
            self.r1 = r1;
            self.r2 = r2;
            self.error = error;
            true
        } else {
            false
        }
    }

    /// Whether any pair has been accepted.
    pub fn is_found(&self) -> bool {
        self.r1 > 0.0 && self.r2 > 0.0
    }

    /// The accepted `(r1, r2, error)`, or `None` if the scan never moved off
    /// the sentinel.
    pub fn into_pair(self) -> Option<(f64, f64, f64)> {
        self.is_found().then_some((self.r1, self.r2, self.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        let best = BestPair::new();
        assert!(!best.is_found());
        assert_eq!(best.error, f64::INFINITY);
        assert_eq!(best.into_pair(), None);
    }

    #[test]
    fn test_first_found_wins_ties() {
        let mut best = BestPair::new();
        assert!(best.offer(10.0, 20.0, 0.5));
        assert!(!best.offer(30.0, 40.0, 0.5));
        assert!(!best.offer(50.0, 60.0, 0.7));
        assert!(best.offer(70.0, 80.0, 0.1));
        assert_eq!((best.r1, best.r2, best.error), (70.0, 80.0, 0.1));
        assert!(best.is_found());
        assert_eq!(best.into_pair(), Some((70.0, 80.0, 0.1)));
    }

    #[test]
    fn test_nan_error_is_never_taken() {
        let mut best = BestPair::new();
        assert!(!best.offer(10.0, 20.0, f64::NAN));
        assert!(!best.is_found());
    }
}
