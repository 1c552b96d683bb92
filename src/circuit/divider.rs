//! Two-resistor voltage divider.
//!
//! ```text
//!  Vin ──[ R1 ]──┬── Vout
//!                │
//!              [ R2 ]
//!                │
//!               GND
//! ```
//!
//! `Vout = Vin * R2 / (R1 + R2)`. Given any three of the four quantities the
//! fourth follows:
//!
//! | Unknown | Formula |
//! |---------|---------|
//! | Vin  | `Vout * (R1 + R2) / R2` |
//! | Vout | `Vin * (R2 / (R1 + R2))` |
//! | R1   | `R2 * (Vin - Vout) / Vout` |
//! | R2   | `Vout * R1 / (Vin - Vout)` |

use std::fmt;

use crate::error::{CalcError, Result};

/// One of the four divider quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Vin,
    Vout,
    R1,
    R2,
}

impl Quantity {
    /// All quantities in solve-priority order.
    pub const ALL: [Quantity; 4] = [Quantity::Vin, Quantity::Vout, Quantity::R1, Quantity::R2];
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Vin => "Vin",
            Quantity::Vout => "Vout",
            Quantity::R1 => "R1",
            Quantity::R2 => "R2",
        };
        f.write_str(name)
    }
}

/// Loosely specified divider inputs, any of which may be absent.
///
/// Convert with [`DividerProblem::try_from`] to check that exactly one is
/// missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DividerInputs {
    pub vin: Option<f64>,
    pub vout: Option<f64>,
    pub r1: Option<f64>,
    pub r2: Option<f64>,
}

impl DividerInputs {
    fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Vin => self.vin,
            Quantity::Vout => self.vout,
            Quantity::R1 => self.r1,
            Quantity::R2 => self.r2,
        }
    }
}

/// A divider with exactly one unknown, named by the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerProblem {
    Vin { vout: f64, r1: f64, r2: f64 },
    Vout { vin: f64, r1: f64, r2: f64 },
    R1 { vin: f64, vout: f64, r2: f64 },
    R2 { vin: f64, vout: f64, r1: f64 },
}

impl DividerProblem {
    /// The quantity this problem solves for.
    pub fn unknown(&self) -> Quantity {
        match self {
            DividerProblem::Vin { .. } => Quantity::Vin,
            DividerProblem::Vout { .. } => Quantity::Vout,
            DividerProblem::R1 { .. } => Quantity::R1,
            DividerProblem::R2 { .. } => Quantity::R2,
        }
    }

    /// Solve for the unknown quantity.
    ///
    /// Returns [`CalcError::DegenerateDivider`] when the formula's
    /// denominator is zero.
    pub fn solve(&self) -> Result<f64> {
        let unknown = self.unknown();
        match *self {
            DividerProblem::Vin { vout, r1, r2 } => {
                if r2 == 0.0 {
                    return Err(CalcError::degenerate(unknown, "R2 is zero"));
                }
                Ok(vout * (r1 + r2) / r2)
            }
            DividerProblem::Vout { vin, r1, r2 } => {
                if r1 + r2 == 0.0 {
                    return Err(CalcError::degenerate(unknown, "R1 + R2 is zero"));
                }
                Ok(vin * (r2 / (r1 + r2)))
            }
            DividerProblem::R1 { vin, vout, r2 } => {
                if vout == 0.0 {
                    return Err(CalcError::degenerate(unknown, "Vout is zero"));
                }
                Ok(r2 * (vin - vout) / vout)
            }
            DividerProblem::R2 { vin, vout, r1 } => {
                if vin == vout {
                    return Err(CalcError::degenerate(unknown, "Vin equals Vout"));
                }
                Ok(vout * r1 / (vin - vout))
            }
        }
    }
}

impl TryFrom<DividerInputs> for DividerProblem {
    type Error = CalcError;

    fn try_from(inputs: DividerInputs) -> Result<Self> {
        match inputs {
            DividerInputs {
                vin: None,
                vout: Some(vout),
                r1: Some(r1),
                r2: Some(r2),
            } => Ok(DividerProblem::Vin { vout, r1, r2 }),
            DividerInputs {
                vin: Some(vin),
                vout: None,
                r1: Some(r1),
                r2: Some(r2),
            } => Ok(DividerProblem::Vout { vin, r1, r2 }),
            DividerInputs {
                vin: Some(vin),
                vout: Some(vout),
                r1: None,
                r2: Some(r2),
            } => Ok(DividerProblem::R1 { vin, vout, r2 }),
            DividerInputs {
                vin: Some(vin),
                vout: Some(vout),
                r1: Some(r1),
                r2: None,
            } => Ok(DividerProblem::R2 { vin, vout, r1 }),
            _ => {
                let missing: Vec<Quantity> = Quantity::ALL
                    .into_iter()
                    .filter(|&q| inputs.get(q).is_none())
                    .collect();
                match missing.split_first() {
                    Some((&unknown, rest)) => Err(CalcError::UnderConstrained {
                        unknown,
                        still_required: rest.to_vec(),
                    }),
                    None => Err(CalcError::OverConstrained),
                }
            }
        }
    }
}

/// Solve a divider from optional inputs, exactly one of which must be `None`.
pub fn solve_divider(inputs: DividerInputs) -> Result<f64> {
    DividerProblem::try_from(inputs)?.solve()
}
