//! Calculator session that feeds keys through the engine.

use crate::core::CalculatorState;
use crate::input::{parse_keys, Key, KeyError};
use crate::session::tape::{Tape, TapeEntry};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A calculator session: one engine state plus the tape of every key
/// pressed into it.
///
/// The session is the imperative shell around the pure core. [`press`]
/// dispatches a key to the matching engine method and timestamps it on the
/// tape; everything else is a read.
///
/// [`press`]: Self::press
///
/// # Example
///
/// ```
/// use fourbanger::session::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.press_script("2 + 3 × 4 =").unwrap();
///
/// assert_eq!(calc.display(), "20");
/// assert_eq!(calc.expression(), "5 × 4 = 20");
/// assert_eq!(calc.tape().len(), 6);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Calculator {
    state: CalculatorState,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Start a fresh session: cleared state, empty tape.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            tape: Tape::new(),
        }
    }

    /// Feed one key through the engine and record it on the tape.
    ///
    /// Every press is recorded, including ones the engine ignores such as
    /// a second decimal point or equals with nothing pending. The tape is
    /// a log of what was typed, not of what changed.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.state.input_digit(digit),
            Key::Decimal => self.state.input_decimal_point(),
            Key::ToggleSign => self.state.toggle_sign(),
            Key::Percent => self.state.input_percent(),
            Key::Op(op) => self.state.input_operation(op),
            Key::Equals => self.state.calculate(),
            Key::Clear => self.state.clear(),
        }
        self.tape = self.tape.record(TapeEntry {
            key,
            display: self.state.display().to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Feed a sequence of keys in order.
    pub fn press_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
    }

    /// Decode a glyph script and feed every key through.
    ///
    /// The whole script is decoded up front, so a script with an unknown
    /// glyph presses nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use fourbanger::session::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.press_script("50 - 8 =").unwrap();
    ///
    /// assert_eq!(calc.display(), "42");
    /// ```
    pub fn press_script(&mut self, script: &str) -> Result<(), KeyError> {
        let keys = parse_keys(script)?;
        self.press_all(keys);
        Ok(())
    }

    /// The primary display line (pure)
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The rendered expression trail (pure)
    pub fn expression(&self) -> String {
        self.state.expression()
    }

    /// The engine state behind the session (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The tape of every key pressed this session (pure)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}
