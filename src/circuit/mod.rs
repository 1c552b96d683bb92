//! Circuit model: the algebra behind both calculators.
//!
//! - [`parallel_resistance`] - equivalent resistance of resistors in parallel
//! - [`DividerProblem`] - a two-resistor voltage divider with exactly one
//!   unknown quantity, solved by [`DividerProblem::solve`]
//!
//! All functions are pure. Inputs that would divide by zero are rejected
//! with a [`CalcError`](crate::error::CalcError) instead.

mod divider;
mod parallel;

pub use divider::{solve_divider, DividerInputs, DividerProblem, Quantity};
pub use parallel::parallel_resistance;
