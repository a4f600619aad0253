//! Error types for key decoding.

use thiserror::Error;

/// Errors that can occur while decoding keypad input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The character maps to no key on a four-function keypad.
    #[error("Unrecognized key '{0}'")]
    UnrecognizedKey(char),
}
