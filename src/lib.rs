//! # Resistor Pair
//!
//! Brute-force calculators for picking standard E24 resistors.
//!
//! This library provides:
//! - The E24 value catalog (1 Ω to 910 kΩ, 144 values)
//! - Parallel resistance and voltage divider algebra
//! - Exhaustive best-pair searches for a target parallel resistance, or for
//!   a target divider output under a current limit
//! - Shorthand notation (`4k7`) parsing and formatting
//!
//! ## Architecture
//!
//! - [`catalog`] - The standard value catalog
//! - [`circuit`] - Parallel and voltage divider formulas
//! - [`search`] - Pairwise search with first-found tie-breaking
//! - [`notation`] - Shorthand parser and formatter
//! - [`prompt`] - Interactive stdin prompts (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! rpair parallel 1k2
//! rpair divider --vin 5 --vout 3.3 --max-current 10
//! ```
//!
//! ### Library
//!
//! ```
//! use resistor_pair::{find_best_parallel_combination, find_resistor_values, DividerTarget};
//!
//! let pair = find_best_parallel_combination(500.0).unwrap();
//! assert_eq!((pair.r1, pair.r2), (750.0, 1500.0));
//!
//! let target = DividerTarget::new(5.0, 3.3).with_max_current_ma(10.0);
//! let divider = find_resistor_values(&target).unwrap();
//! assert!(divider.current <= 0.01);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { find_parallel } from 'resistor_pair';
//!
//! const pair = find_parallel(500);
//! console.log(pair.r1, pair.r2, pair.error);
//! ```

pub mod catalog;
pub mod circuit;
pub mod error;
pub mod notation;
pub mod search;

#[cfg(feature = "cli")]
pub mod prompt;

// Re-export main types for convenience
pub use catalog::{all_resistor_values, is_standard_value};
pub use error::{CalcError, Result};
pub use search::{
    find_best_parallel_combination, find_resistor_values, DividerMatch, DividerTarget,
    ParallelMatch,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmDividerMatch, WasmParallelMatch};

/// Milliamps in one amp; current limits are given in mA.
pub const MILLIAMPS_PER_AMP: f64 = 1e3;
