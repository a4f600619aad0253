//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - Typed digits and binary operators
//! - Display formatting and parsing
//! - The expression trail as structured tokens
//! - The keypad state with its transition rules
//!
//! All logic in this module is pure and synchronous (no side effects, no
//! I/O), following the "pure core, imperative shell" philosophy.

mod digit;
mod expression;
mod format;
mod op;
mod state;

pub use digit::Digit;
pub use expression::{ExpressionTrail, Token};
pub use format::{format_number, parse_display};
pub use op::BinaryOp;
pub use state::CalculatorState;
