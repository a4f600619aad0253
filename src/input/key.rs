//! Typed keypad input and glyph decoding.

use super::error::KeyError;
use crate::core::{BinaryOp, Digit};
use serde::{Deserialize, Serialize};

/// One keypad input, as forwarded by a host.
///
/// Every control on a four-function keypad maps to exactly one variant, so
/// wiring a host UI is one `Key` per button and nothing else. Dispatching a
/// key is a single exhaustive match; there is no key the engine does not
/// handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Key {
    /// One of the digit keys `0` through `9`.
    Digit(Digit),
    /// The decimal point key `.`.
    Decimal,
    /// The sign toggle key `±`.
    ToggleSign,
    /// The percent key `%`.
    Percent,
    /// One of the operator keys `+`, `-`, `×`, `÷`.
    Op(BinaryOp),
    /// The equals key `=`.
    Equals,
    /// The clear key `C`.
    Clear,
}

impl Key {
    /// The conventional button label for this key.
    pub fn glyph(&self) -> char {
        match self {
            Self::Digit(digit) => digit.to_char(),
            Self::Decimal => '.',
            Self::ToggleSign => '±',
            Self::Percent => '%',
            Self::Op(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            other => Err(KeyError::UnrecognizedKey(other)),
        }
    }
}

impl TryFrom<char> for Key {
    type Error = KeyError;

    /// Decode a button glyph into a key.
    ///
    /// The ASCII `*` and `/` are accepted as aliases for the `×` and `÷`
    /// glyphs, and lowercase `c` for `C`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => Digit::try_from(c).map(Self::Digit),
            '.' => Ok(Self::Decimal),
            '±' => Ok(Self::ToggleSign),
            '%' => Ok(Self::Percent),
            '+' => Ok(Self::Op(BinaryOp::Add)),
            '-' => Ok(Self::Op(BinaryOp::Sub)),
            '×' | '*' => Ok(Self::Op(BinaryOp::Mul)),
            '÷' | '/' => Ok(Self::Op(BinaryOp::Div)),
            '=' => Ok(Self::Equals),
            'C' | 'c' => Ok(Self::Clear),
            other => Err(KeyError::UnrecognizedKey(other)),
        }
    }
}

/// Decode a whole key script, skipping whitespace.
///
/// Scripts are a compact way to drive sessions in tests and demos; hosts
/// with real buttons construct [`Key`] values directly instead.
///
/// # Example
///
/// ```
/// use fourbanger::input::{parse_keys, Key};
///
/// let keys = parse_keys("2 + 3 =").unwrap();
/// assert_eq!(keys.len(), 4);
/// assert_eq!(keys[3], Key::Equals);
/// ```
pub fn parse_keys(script: &str) -> Result<Vec<Key>, KeyError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Key::try_from)
        .collect()
}
