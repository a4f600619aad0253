//! The expression trail, kept as structured tokens.
//!
//! The trail backs the secondary line of the display: the operands and
//! operators accepted so far, plus `= result` once equals fires. It is
//! stored as a token list and rendered to its spaced string form only when
//! read, so the transition rules never edit strings in place.

use super::op::BinaryOp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One token of the expression trail.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Token {
    /// An operand, kept exactly as it was displayed when entered.
    Number(String),
    /// A binary operator, rendered through its glyph.
    Op(BinaryOp),
    /// The `=` separator that precedes a computed result.
    Equals,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Op(op) => write!(f, "{}", op.symbol()),
            Self::Equals => f.write_str("="),
        }
    }
}

/// Ordered token history behind the rendered expression line.
///
/// Rendering joins the tokens with single spaces; an empty trail renders as
/// the empty string.
///
/// # Example
///
/// ```
/// use fourbanger::core::{BinaryOp, ExpressionTrail, Token};
///
/// let mut trail = ExpressionTrail::new();
/// trail.push(Token::Number("2".to_string()));
/// trail.push(Token::Op(BinaryOp::Add));
/// trail.push(Token::Number("3".to_string()));
///
/// assert_eq!(trail.to_string(), "2 + 3");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExpressionTrail {
    tokens: Vec<Token>,
}

impl Default for ExpressionTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionTrail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Replace the trailing token, whatever its kind.
    ///
    /// Does nothing on an empty trail.
    pub fn replace_trailing(&mut self, token: Token) {
        if let Some(last) = self.tokens.last_mut() {
            *last = token;
        }
    }

    /// Drop every token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// The recorded tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for ExpressionTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
