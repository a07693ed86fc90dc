//! Binary operators and the pure `calculate` function
//!
//! Division by zero is not an error here: it evaluates to `0`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (×)
    #[serde(rename = "×")]
    Multiply,
    /// Division (÷)
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol shown on the keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses a keypad symbol, accepting the ASCII spellings `*`, `x` and `/`
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Computes `a op b`
#[must_use]
pub fn calculate(a: f64, b: f64, op: Operator) -> f64 {
    op.apply(a, b)
}

/// Computes `a op b` for an operator given by symbol.
///
/// An unrecognised symbol yields `b` unchanged.
#[must_use]
pub fn calculate_symbol(a: f64, b: f64, symbol: &str) -> f64 {
    Operator::from_symbol(symbol).map_or(b, |op| op.apply(a, b))
}
