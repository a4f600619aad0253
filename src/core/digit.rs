//! Keypad digits.

use serde::{Deserialize, Serialize};

/// A single digit key, `0` through `9`.
///
/// Digits are a closed enum rather than a numeric type so that
/// [`input_digit`](crate::core::CalculatorState::input_digit) is total:
/// there is no out-of-range digit to reject at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    /// Numeric value of the digit, `0..=9`.
    pub fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }

    /// The character this digit renders as on the display.
    pub fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_cover_zero_through_nine() {
        let digits = [
            Digit::Zero,
            Digit::One,
            Digit::Two,
            Digit::Three,
            Digit::Four,
            Digit::Five,
            Digit::Six,
            Digit::Seven,
            Digit::Eight,
            Digit::Nine,
        ];

        for (expected, digit) in digits.iter().enumerate() {
            assert_eq!(digit.value() as usize, expected);
        }
    }

    #[test]
    fn chars_match_values() {
        assert_eq!(Digit::Zero.to_char(), '0');
        assert_eq!(Digit::Four.to_char(), '4');
        assert_eq!(Digit::Nine.to_char(), '9');
    }
}
