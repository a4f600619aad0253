//! The four binary operators.

use serde::{Deserialize, Serialize};

/// An operator key: add, subtract, multiply, or divide.
///
/// The operator carries both its arithmetic and the glyph it renders as in
/// the expression trail, so no caller ever matches on a raw symbol string.
///
/// # Example
///
/// ```
/// use fourbanger::core::BinaryOp;
///
/// assert_eq!(BinaryOp::Mul.apply(2.5, 4.0), 10.0);
/// assert_eq!(BinaryOp::Div.apply(5.0, 0.0), 0.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Glyph shown on the keypad and in the expression trail.
    ///
    /// Multiplication and division use the visual `×` and `÷` glyphs, not
    /// the ASCII `*` and `/`.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    /// Apply the operator to a left and right operand.
    ///
    /// Division by zero yields `0.0` rather than an error or an infinity;
    /// every operator is total so the display never shows an error state.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
        }
    }
}
