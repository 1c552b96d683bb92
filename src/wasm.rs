//! WASM bindings for Resistor Pair.
//!
//! This module exposes both searches and the shorthand helpers to
//! JavaScript, e.g. for a browser calculator page.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { find_parallel, find_divider, parse_value, format_value } from 'resistor_pair';
//!
//! await init();
//!
//! const pair = find_parallel(parse_value("1k2"));
//! console.log(`${format_value(pair.r1)} || ${format_value(pair.r2)}`);
//!
//! // Pass undefined for an unbounded current
//! const divider = find_divider(5.0, 3.3, 10.0);
//! console.log(divider.current_ma);
//! ```

use wasm_bindgen::prelude::*;

use crate::notation::{format_shorthand, parse_shorthand};
use crate::search::{
    find_best_parallel_combination, find_resistor_values, DividerMatch, DividerTarget,
    ParallelMatch,
};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Best parallel pair, as seen from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct WasmParallelMatch {
    pub r1: f64,
    pub r2: f64,
    pub error: f64,
}

impl From<ParallelMatch> for WasmParallelMatch {
    fn from(m: ParallelMatch) -> Self {
        Self {
            r1: m.r1,
            r2: m.r2,
            error: m.error,
        }
    }
}

/// Best divider pair, as seen from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct WasmDividerMatch {
    pub r1: f64,
    pub r2: f64,
    pub vout: f64,
    pub error: f64,
    pub current_ma: f64,
}

impl From<DividerMatch> for WasmDividerMatch {
    fn from(m: DividerMatch) -> Self {
        Self {
            r1: m.r1,
            r2: m.r2,
            vout: m.vout,
            error: m.error,
            current_ma: m.current_ma(),
        }
    }
}

/// Find the closest parallel pair to `target` ohms.
#[wasm_bindgen]
pub fn find_parallel(target: f64) -> Result<WasmParallelMatch, JsValue> {
    find_best_parallel_combination(target)
        .map(Into::into)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Find the closest divider, optionally limited to `max_current_ma`.
#[wasm_bindgen]
pub fn find_divider(
    vin: f64,
    vout: f64,
    max_current_ma: Option<f64>,
) -> Result<WasmDividerMatch, JsValue> {
    let mut target = DividerTarget::new(vin, vout);
    if let Some(ma) = max_current_ma {
        target = target.with_max_current_ma(ma);
    }
    find_resistor_values(&target)
        .map(Into::into)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse shorthand such as `4k7` into ohms.
#[wasm_bindgen]
pub fn parse_value(text: &str) -> Result<f64, JsValue> {
    parse_shorthand(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format ohms as shorthand.
#[wasm_bindgen]
pub fn format_value(value: f64) -> String {
    format_shorthand(value)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
