//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify the engine's invariants hold across
//! many randomly generated key sequences.

use fourbanger::core::{format_number, parse_display, BinaryOp, CalculatorState, Digit};
use fourbanger::input::Key;
use fourbanger::session::{Calculator, Tape};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(variant in 0..10u8) -> Digit {
        match variant {
            0 => Digit::Zero,
            1 => Digit::One,
            2 => Digit::Two,
            3 => Digit::Three,
            4 => Digit::Four,
            5 => Digit::Five,
            6 => Digit::Six,
            7 => Digit::Seven,
            8 => Digit::Eight,
            _ => Digit::Nine,
        }
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..4u8) -> BinaryOp {
        match variant {
            0 => BinaryOp::Add,
            1 => BinaryOp::Sub,
            2 => BinaryOp::Mul,
            _ => BinaryOp::Div,
        }
    }
}

fn arbitrary_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        arbitrary_digit().prop_map(Key::Digit),
        Just(Key::Decimal),
        Just(Key::ToggleSign),
        Just(Key::Percent),
        arbitrary_op().prop_map(Key::Op),
        Just(Key::Equals),
        Just(Key::Clear),
    ]
}

proptest! {
    #[test]
    fn typed_digits_concatenate_with_leading_zeros_collapsed(
        digits in prop::collection::vec(arbitrary_digit(), 1..12)
    ) {
        let mut state = CalculatorState::new();
        for digit in &digits {
            state.input_digit(*digit);
        }

        let typed: String = digits.iter().map(|d| d.to_char()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };

        prop_assert_eq!(state.display(), expected);
        prop_assert_eq!(state.expression(), expected);
    }

    #[test]
    fn integral_values_format_without_a_decimal_point(
        value in -1_000_000_000i64..=1_000_000_000i64
    ) {
        let formatted = format_number(value as f64);

        prop_assert!(!formatted.contains('.'));
        prop_assert_eq!(parse_display(&formatted), value as f64);
    }

    #[test]
    fn formatted_values_parse_back_exactly(value in -1.0e12f64..1.0e12f64) {
        let formatted = format_number(value);

        prop_assert_eq!(parse_display(&formatted), value);
    }

    #[test]
    fn a_second_decimal_point_is_ignored(
        digits in prop::collection::vec(arbitrary_digit(), 0..6)
    ) {
        let mut once = CalculatorState::new();
        for digit in &digits {
            once.input_digit(*digit);
        }
        let mut twice = once.clone();

        once.input_decimal_point();
        twice.input_decimal_point();
        twice.input_decimal_point();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn toggle_sign_twice_is_identity_during_entry(
        digits in prop::collection::vec(arbitrary_digit(), 0..8)
    ) {
        let mut state = CalculatorState::new();
        for digit in &digits {
            state.input_digit(*digit);
        }
        let before = state.clone();

        state.toggle_sign();
        state.toggle_sign();

        prop_assert_eq!(state, before);
    }

    #[test]
    fn toggle_sign_preserves_magnitude(
        keys in prop::collection::vec(arbitrary_key(), 0..16)
    ) {
        let mut calc = Calculator::new();
        calc.press_all(keys);

        let mut state = calc.state().clone();
        let before = parse_display(state.display()).abs();
        state.toggle_sign();
        let after = parse_display(state.display()).abs();

        prop_assert_eq!(before, after);
    }

    #[test]
    fn equals_after_digits_only_is_a_noop(
        digits in prop::collection::vec(arbitrary_digit(), 0..8)
    ) {
        let mut state = CalculatorState::new();
        for digit in &digits {
            state.input_digit(*digit);
        }
        let before = state.clone();

        state.calculate();

        prop_assert_eq!(state, before);
    }

    #[test]
    fn a_single_computation_matches_its_operator(
        lhs in prop::collection::vec(arbitrary_digit(), 1..8),
        op in arbitrary_op(),
        rhs in prop::collection::vec(arbitrary_digit(), 1..8),
    ) {
        let mut state = CalculatorState::new();
        for digit in &lhs {
            state.input_digit(*digit);
        }
        state.input_operation(op);
        for digit in &rhs {
            state.input_digit(*digit);
        }
        state.calculate();

        let lhs_value = parse_display(&lhs.iter().map(|d| d.to_char()).collect::<String>());
        let rhs_value = parse_display(&rhs.iter().map(|d| d.to_char()).collect::<String>());

        prop_assert_eq!(state.display(), format_number(op.apply(lhs_value, rhs_value)));
    }

    #[test]
    fn clear_always_restores_the_initial_state(
        keys in prop::collection::vec(arbitrary_key(), 0..24)
    ) {
        let mut calc = Calculator::new();
        calc.press_all(keys);
        calc.press(Key::Clear);

        prop_assert!(calc.state().is_cleared());
        prop_assert_eq!(calc.display(), "0");
        prop_assert_eq!(calc.expression(), "");
    }

    #[test]
    fn the_display_always_holds_a_number(
        keys in prop::collection::vec(arbitrary_key(), 0..32)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.press(key);

            prop_assert!(!calc.display().is_empty());
            prop_assert!(calc.display().parse::<f64>().is_ok());
        }
    }

    #[test]
    fn the_display_keeps_at_most_one_decimal_point(
        keys in prop::collection::vec(arbitrary_key(), 0..32)
    ) {
        let mut calc = Calculator::new();
        for key in keys {
            calc.press(key);

            prop_assert!(calc.display().matches('.').count() <= 1);
        }
    }

    #[test]
    fn the_tape_records_every_press_in_order(
        keys in prop::collection::vec(arbitrary_key(), 0..24)
    ) {
        let mut calc = Calculator::new();
        calc.press_all(keys.clone());

        prop_assert_eq!(calc.tape().len(), keys.len());
        prop_assert_eq!(calc.tape().keys(), keys);
    }

    #[test]
    fn key_glyphs_round_trip(key in arbitrary_key()) {
        prop_assert_eq!(Key::try_from(key.glyph()), Ok(key));
    }

    #[test]
    fn state_roundtrip_serialization(
        keys in prop::collection::vec(arbitrary_key(), 0..16)
    ) {
        let mut calc = Calculator::new();
        calc.press_all(keys);

        let json = serde_json::to_string(calc.state()).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(calc.state(), &deserialized);
    }

    #[test]
    fn tape_roundtrip_serialization(
        keys in prop::collection::vec(arbitrary_key(), 0..12)
    ) {
        let mut calc = Calculator::new();
        calc.press_all(keys);

        let json = serde_json::to_string(calc.tape()).unwrap();
        let deserialized: Tape = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(calc.tape().len(), deserialized.len());
        prop_assert_eq!(calc.tape().keys(), deserialized.keys());
    }
}
