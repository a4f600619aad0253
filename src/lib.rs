//! Fourbanger: a pure four-function calculator engine
//!
//! Fourbanger models the input-handling core of a single-screen calculator
//! as a state machine with a "pure core, imperative shell" split. The core
//! transition rules are pure functions over a small state value, while the
//! session shell isolates the one side effect there is: timestamping keys
//! onto the tape.
//!
//! Every operation is total. Division by zero displays `0`, unknown glyphs
//! are rejected before any key is pressed, and there is no error state a
//! host has to render.
//!
//! # Core Concepts
//!
//! - **Keys**: every keypad control is a typed [`Key`] variant
//! - **Transitions**: one total, synchronous engine method per key
//! - **Trail**: the expression line kept as tokens, rendered on read
//! - **Tape**: immutable tracking of every key pressed in a session
//!
//! # Example
//!
//! ```rust
//! use fourbanger::session::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.press_script("12 + 7.5 =").unwrap();
//!
//! assert_eq!(calc.display(), "19.5");
//! assert_eq!(calc.expression(), "12 + 7.5 = 19.5");
//! ```

pub mod core;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BinaryOp, CalculatorState, Digit, ExpressionTrail, Token};
pub use crate::input::{parse_keys, Key, KeyError};
pub use crate::session::{Calculator, Tape, TapeEntry};
