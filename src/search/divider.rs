//! Closest voltage divider pair under a current limit.

use log::{debug, info, trace};

use crate::catalog::catalog;
use crate::circuit::DividerProblem;
use crate::error::{CalcError, Result};
use crate::MILLIAMPS_PER_AMP;

use super::BestPair;

/// What the divider search is aiming for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerTarget {
    /// Input voltage (V)
    pub vin: f64,
    /// Desired output voltage (V)
    pub vout: f64,
    /// Largest allowed divider current (mA); infinite when unbounded
    pub max_current_ma: f64,
}

impl DividerTarget {
    /// A target with no current limit.
    pub fn new(vin: f64, vout: f64) -> Self {
        Self {
            vin,
            vout,
            max_current_ma: f64::INFINITY,
        }
    }

    /// Set the current limit in milliamps.
    pub fn with_max_current_ma(mut self, max_current_ma: f64) -> Self {
        self.max_current_ma = max_current_ma;
        self
    }

    /// Current limit in amps.
    pub fn max_current(&self) -> f64 {
        self.max_current_ma / MILLIAMPS_PER_AMP
    }

    fn validate(&self) -> Result<()> {
        if !self.vin.is_finite() {
            return Err(CalcError::invalid_target("input voltage", self.vin));
        }
        if !self.vout.is_finite() {
            return Err(CalcError::invalid_target("output voltage", self.vout));
        }
        // |vout - vout_calc| is bounded by |vin| + |vout|, so this keeps every
        // pair's error finite
        let span = self.vin.abs() + self.vout.abs();
        if !span.is_finite() {
            return Err(CalcError::invalid_target("voltage range", span));
        }
        if self.max_current_ma.is_nan() {
            return Err(CalcError::invalid_target("maximum current", self.max_current_ma));
        }
        Ok(())
    }
}

/// The best divider pair for a [`DividerTarget`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerMatch {
    pub r1: f64,
    pub r2: f64,
    /// Output voltage the pair actually produces (V)
    pub vout: f64,
    /// `|target vout - vout|` in volts
    pub error: f64,
    /// Current through the divider, `vin / (r1 + r2)` (A)
    pub current: f64,
}

impl DividerMatch {
    /// Divider current in milliamps.
    pub fn current_ma(&self) -> f64 {
        self.current * MILLIAMPS_PER_AMP
    }
}

/// Find the two catalog values forming the divider whose output is closest
/// to `target.vout` while drawing no more than `target.max_current_ma`.
///
/// Scan order and tie-breaking match
/// [`find_best_parallel_combination`](super::find_best_parallel_combination).
/// Returns [`CalcError::NoFeasiblePair`] when every pair exceeds the limit.
pub fn find_resistor_values(target: &DividerTarget) -> Result<DividerMatch> {
    target.validate()?;

    let DividerTarget { vin, vout, .. } = *target;
    let max_current = target.max_current();
    let values = catalog();
    let mut best = BestPair::new();

    for &r1 in values {
        for &r2 in values {
            let vout_calc = match (DividerProblem::Vout { vin, r1, r2 }).solve() {
                Ok(v) => v,
                Err(e) => {
                    trace!("skipping R1={r1} R2={r2}: {e}");
                    continue;
                }
            };

            if vin / (r1 + r2) > max_current {
                continue;
            }

            let error = (vout - vout_calc).abs();
            if best.offer(r1, r2, error) {
                debug!("new best: R1={r1} R2={r2} error={error:.6}");
            }
        }
    }

    let (r1, r2, error) = best.into_pair().ok_or(CalcError::NoFeasiblePair {
        max_current_ma: target.max_current_ma,
    })?;

    let produced = (DividerProblem::Vout { vin, r1, r2 }).solve()?;
    let current = vin / (r1 + r2);

    info!(
        "best divider for {vin} V -> {vout} V: R1={r1} R2={r2} error={error:.6} current={current:.6} A"
    );

    Ok(DividerMatch {
        r1,
        r2,
        vout: produced,
        error,
        current,
    })
}
