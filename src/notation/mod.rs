//! Resistor shorthand notation.
//!
//! Shorthand puts the decimal point at the unit multiplier, so `4k7` is
//! 4.7 kΩ. Accepted input forms:
//!
//! ```text
//! value    = decimal | decimal suffix | digits suffix digits
//! decimal  = digits ['.' digits]
//! suffix   = 'k' | 'm' | 'g'      (case-insensitive)
//! ```
//!
//! | Input | Ohms |
//! |-------|------|
//! | `10` | 10 |
//! | `4k7` | 4 700 |
//! | `4.7k` | 4 700 |
//! | `2M2` | 2 200 000 |
//! | `1g5` | 1 500 000 000 |
//!
//! Input is lowercased first, so `m` means mega, never milli. Suffixed
//! values are truncated to whole ohms.
//!
//! Output goes the other way: `4700.0` becomes `4.7k`.

mod format;
mod parse;

pub use format::{format_shorthand, format_shorthand as convert_to_shorthand, Shorthand};
pub use parse::{parse_shorthand, parse_shorthand as convert_resistor_value};
