//! The typed key surface between a host and the engine.
//!
//! A host UI forwards one [`Key`] per tap. Tests and demos drive whole
//! sessions from glyph scripts via [`parse_keys`].

mod error;
mod key;

pub use error::KeyError;
pub use key::{parse_keys, Key};
