//! The imperative shell around the pure core.
//!
//! A [`Calculator`] owns one engine state and a [`Tape`]; hosts feed it
//! keys and read the two display lines back after every press. This is the
//! only module that touches the clock.

mod calculator;
mod tape;

pub use calculator::Calculator;
pub use tape::{Tape, TapeEntry};
