//! The calculator engine: keypad state and its transition rules.
//!
//! `CalculatorState` holds the five fields behind a single-screen
//! calculator and exposes one method per keypad control. Every method is
//! synchronous and total: bad input degrades to `0`, never to an error, so
//! hosts can forward keypresses without any failure handling.

use super::digit::Digit;
use super::expression::{ExpressionTrail, Token};
use super::format::{format_number, parse_display};
use super::op::BinaryOp;
use serde::{Deserialize, Serialize};

/// Full keypad state for one calculator screen.
///
/// The display is the primary (large) line and the expression trail is the
/// secondary (small) line. `previous_value` and `pending_op` carry the left
/// operand and operator between presses, and `awaiting_operand` marks that
/// the next digit starts a fresh number.
///
/// The fields are private: hosts read through [`display`](Self::display)
/// and [`expression`](Self::expression) and mutate only through the keypad
/// methods, so every reachable state is one the transition rules produced.
///
/// # Example
///
/// ```
/// use fourbanger::core::{BinaryOp, CalculatorState, Digit};
///
/// let mut state = CalculatorState::new();
/// state.input_digit(Digit::Two);
/// state.input_operation(BinaryOp::Add);
/// state.input_digit(Digit::Three);
/// state.calculate();
///
/// assert_eq!(state.display(), "5");
/// assert_eq!(state.expression(), "2 + 3 = 5");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    trail: ExpressionTrail,
    previous_value: f64,
    pending_op: Option<BinaryOp>,
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create a cleared calculator: display `"0"`, empty trail, no pending
    /// operator.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            trail: ExpressionTrail::new(),
            previous_value: 0.0,
            pending_op: None,
            awaiting_operand: false,
        }
    }

    /// The primary display line.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The secondary line, rendered from the trail.
    ///
    /// Empty until the first press lands a token.
    pub fn expression(&self) -> String {
        self.trail.to_string()
    }

    /// The token trail behind [`expression`](Self::expression), for hosts
    /// that render the history themselves.
    pub fn trail(&self) -> &ExpressionTrail {
        &self.trail
    }

    /// The operator waiting for its right-hand operand, if any.
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    /// True when the next digit starts a fresh operand.
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// True exactly in the cleared state.
    pub fn is_cleared(&self) -> bool {
        *self == Self::new()
    }

    /// Type one digit.
    ///
    /// After an operator or equals the digit starts a fresh operand;
    /// otherwise it extends the current one, replacing the canonical `"0"`
    /// instead of concatenating onto it. Digit count is unbounded.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_operand {
            self.display = digit.to_char().to_string();
            self.trail.push(Token::Number(self.display.clone()));
            self.awaiting_operand = false;
        } else {
            if self.display == "0" {
                self.display = digit.to_char().to_string();
            } else {
                self.display.push(digit.to_char());
            }
            self.sync_trailing_operand();
        }
    }

    /// Type the decimal point.
    ///
    /// A second point in the same operand is ignored. Pressed right after
    /// an operator, the dotted display replaces the trailing operator token
    /// in the trail while the operator stays pending; a following digit
    /// still starts a fresh operand.
    pub fn input_decimal_point(&mut self) {
        if self.display.contains('.') {
            return;
        }
        self.display.push('.');
        self.sync_trailing_operand();
    }

    /// Toggle the sign of the displayed operand.
    ///
    /// `"0"` has no sign to toggle and stays untouched.
    pub fn toggle_sign(&mut self) {
        if self.display == "0" {
            return;
        }
        self.display = match self.display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.display),
        };
        self.sync_trailing_operand();
    }

    /// Divide the displayed operand by one hundred.
    pub fn input_percent(&mut self) {
        let value = parse_display(&self.display);
        self.display = format_number(value / 100.0);
        self.sync_trailing_operand();
    }

    /// Accept a binary operator.
    ///
    /// With an operator already pending and its right operand entered, the
    /// pending computation resolves first and its result becomes the left
    /// operand of `op`; chains run strictly left to right, with no operator
    /// precedence. Otherwise the displayed value is saved as the left
    /// operand. A second operator in a row swaps the pending operator while
    /// its glyph still joins the trail.
    pub fn input_operation(&mut self, op: BinaryOp) {
        let input_value = parse_display(&self.display);
        match self.pending_op {
            Some(pending) if !self.awaiting_operand => {
                let result = pending.apply(self.previous_value, input_value);
                self.display = format_number(result);
                self.trail.clear();
                self.trail.push(Token::Number(self.display.clone()));
                self.trail.push(Token::Op(op));
                self.previous_value = result;
            }
            _ => {
                self.previous_value = input_value;
                if self.trail.is_empty() {
                    self.trail.push(Token::Number(self.display.clone()));
                }
                self.trail.push(Token::Op(op));
            }
        }
        self.awaiting_operand = true;
        self.pending_op = Some(op);
    }

    /// Apply the pending operation: the `=` key.
    ///
    /// Does nothing unless an operator is pending and a right operand has
    /// been entered since. On success the trail gains `= result`, the
    /// result stays on display as the seed of the next entry, and the
    /// pending state resets.
    pub fn calculate(&mut self) {
        let Some(pending) = self.pending_op else {
            return;
        };
        if self.awaiting_operand {
            return;
        }
        let input_value = parse_display(&self.display);
        let result = pending.apply(self.previous_value, input_value);
        self.display = format_number(result);
        self.trail.push(Token::Equals);
        self.trail.push(Token::Number(self.display.clone()));
        self.previous_value = 0.0;
        self.pending_op = None;
        self.awaiting_operand = true;
    }

    /// Reset every field to its initial value: the `C` key.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Make the trail's last token mirror the display, seeding the trail
    /// when it is still empty.
    ///
    /// Right after an operator this replaces the trailing operator token,
    /// while the operator itself stays pending.
    fn sync_trailing_operand(&mut self) {
        let token = Token::Number(self.display.clone());
        if self.trail.is_empty() {
            self.trail.push(token);
        } else {
            self.trail.replace_trailing(token);
        }
    }
}
