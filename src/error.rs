//! Error types for the resistor pair calculators.
//!
//! This module provides a unified error type [`CalcError`] that covers
//! shorthand parsing, the circuit model and both best-pair searches.

use thiserror::Error;

use crate::circuit::Quantity;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug)]
pub enum CalcError {
    // ============ Notation Errors ============
    /// Shorthand text did not match any accepted form
    #[error("Invalid resistor value: '{input}'")]
    InvalidShorthand { input: String },

    /// Text that should have been a plain number
    #[error("Invalid number: '{input}'")]
    InvalidNumber { input: String },

    // ============ Circuit Model Errors ============
    /// Parallel network with no resistors
    #[error("Parallel network needs at least one resistor")]
    EmptyNetwork,

    /// Zero, negative or non-finite resistance in a parallel network
    #[error("Resistance must be positive and finite (got {value})")]
    NonPositiveResistance { value: f64 },

    /// All four divider quantities were supplied
    #[error("Too many arguments provided: give exactly three of Vin, Vout, R1 and R2")]
    OverConstrained,

    /// Two or more divider quantities were missing
    #[error("Insufficient data to calculate {unknown}: also provide {}", join_quantities(.still_required))]
    UnderConstrained {
        unknown: Quantity,
        still_required: Vec<Quantity>,
    },

    /// The solve would divide by zero
    #[error("Cannot calculate {unknown}: {reason}")]
    DegenerateDivider {
        unknown: Quantity,
        reason: &'static str,
    },

    // ============ Search Errors ============
    /// Search input out of range
    #[error("Invalid {name}: {value}")]
    InvalidTarget { name: &'static str, value: f64 },

    /// No catalog pair satisfied the current limit
    #[error("No resistor pair keeps the divider current within {max_current_ma} mA")]
    NoFeasiblePair { max_current_ma: f64 },

    // ============ I/O Errors ============
    /// Error reading interactive input
    #[error("Failed to read {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CalcError {
    /// Create an invalid shorthand error
    pub fn invalid_shorthand(input: impl Into<String>) -> Self {
        Self::InvalidShorthand {
            input: input.into(),
        }
    }

    /// Create a degenerate divider error
    pub fn degenerate(unknown: Quantity, reason: &'static str) -> Self {
        Self::DegenerateDivider { unknown, reason }
    }

    /// Create an invalid target error
    pub fn invalid_target(name: &'static str, value: f64) -> Self {
        Self::InvalidTarget { name, value }
    }
}

fn join_quantities(quantities: &[Quantity]) -> String {
    quantities
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
