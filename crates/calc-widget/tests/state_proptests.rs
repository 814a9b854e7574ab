//! Property tests for the calculator state machine.
//!
//! Deterministic edge cases live next to the code; these exercise the
//! machine under generated digit runs and arbitrary command sequences.

use calc_widget::core::{Calculator, Command, Operator, ERROR_DISPLAY};
use proptest::prelude::*;

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0u8..=9).prop_map(Command::Digit),
        Just(Command::Decimal),
        Just(Command::ToggleSign),
        Just(Command::Backspace),
        operator_strategy().prop_map(Command::Operator),
        Just(Command::Equals),
        Just(Command::Clear),
    ]
}

/// `-?\d*\.?\d*` with the transient edit states the machine allows.
fn is_valid_numeral(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && !body.contains('-') && body.matches('.').count() <= 1
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// What the leading-zero rule turns a digit run into.
fn expected_input(digits: &[u8]) -> String {
    let mut s = "0".to_owned();
    for &d in digits {
        let ch = char::from_digit(u32::from(d), 10).unwrap();
        if s == "0" {
            s = ch.to_string();
        } else {
            s.push(ch);
        }
    }
    s
}

fn press_number(calc: &mut Calculator, n: u32) {
    for c in n.to_string().chars() {
        calc.press_digit(c as u8 - b'0');
    }
}

proptest! {
    // Digit-only entry is plain concatenation modulo the leading-zero rule,
    // and the buffer's numeric value matches.
    #[test]
    fn prop_digit_runs_concatenate(digits in proptest::collection::vec(0u8..=9, 1..12)) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.press_digit(d);
        }
        let expected = expected_input(&digits);
        prop_assert_eq!(calc.display_result(), expected.as_str());
        prop_assert_eq!(
            calc.display_result().parse::<f64>().unwrap(),
            expected.parse::<f64>().unwrap()
        );
    }

    // The documented invariants hold after any command sequence.
    #[test]
    fn prop_invariants_hold(commands in proptest::collection::vec(command_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for &command in &commands {
            calc.apply(command);

            let result = calc.display_result();
            // input is never empty: a numeral or the error literal.
            prop_assert!(
                result == ERROR_DISPLAY || is_valid_numeral(result),
                "bad input buffer {result:?} after {commands:?}"
            );
            // error flag mirrors the error literal.
            prop_assert_eq!(calc.is_error(), result == ERROR_DISPLAY);
            // error state clears operands and operator.
            if calc.is_error() {
                prop_assert_eq!(calc.first_operand(), None);
                prop_assert_eq!(calc.second_operand(), None);
                prop_assert_eq!(calc.operator(), None);
            }
            // a completed evaluation always has its inputs on record.
            if calc.has_evaluated() {
                prop_assert!(calc.first_operand().is_some());
                prop_assert!(calc.operator().is_some());
            }
        }
    }

    // 5 + 3 = = = walks an arithmetic series: each press re-adds the
    // retained second operand.
    #[test]
    fn prop_repeat_equals_series(a in 0u32..1000, b in 1u32..1000, extra in 1usize..6) {
        let mut calc = Calculator::new();
        press_number(&mut calc, a);
        calc.select_operator(Operator::Add);
        press_number(&mut calc, b);
        calc.evaluate();

        for k in 1..=extra {
            calc.evaluate();
            let expected = f64::from(a) + f64::from(b) * (k as f64 + 1.0);
            prop_assert_eq!(calc.first_operand(), Some(expected));
        }
        prop_assert_eq!(calc.second_operand(), Some(f64::from(b)));
    }

    // Division by zero lands in the cleared error state from any operand.
    #[test]
    fn prop_division_by_zero_always_errors(a in 0u32..100_000) {
        let mut calc = Calculator::new();
        press_number(&mut calc, a);
        calc.select_operator(Operator::Divide);
        calc.press_digit(0);
        calc.evaluate();

        prop_assert_eq!(calc.display_result(), ERROR_DISPLAY);
        prop_assert!(calc.is_error());
        prop_assert_eq!(calc.first_operand(), None);
        prop_assert_eq!(calc.second_operand(), None);
        prop_assert_eq!(calc.operator(), None);
    }

    // Backspace either shortens the buffer or bottoms out at "0".
    #[test]
    fn prop_backspace_shrinks_or_zeroes(digits in proptest::collection::vec(0u8..=9, 1..10)) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.press_digit(d);
        }
        let before = calc.display_result().len();
        calc.backspace();
        let after = calc.display_result();
        prop_assert!(after.len() < before || after == "0");
    }

    // Chained expressions fold left to right.
    #[test]
    fn prop_left_to_right_chaining(a in 1u32..100, b in 1u32..100, c in 1u32..100) {
        let mut calc = Calculator::new();
        press_number(&mut calc, a);
        calc.select_operator(Operator::Add);
        press_number(&mut calc, b);
        calc.select_operator(Operator::Add);
        // The chain folded on the second operator press.
        prop_assert_eq!(calc.first_operand(), Some(f64::from(a + b)));
        press_number(&mut calc, c);
        calc.evaluate();
        prop_assert_eq!(calc.first_operand(), Some(f64::from(a + b + c)));
    }

    // Sign toggling a nonzero buffer twice is the identity; on zero it is
    // a no-op entirely.
    #[test]
    fn prop_toggle_sign_involution(digits in proptest::collection::vec(0u8..=9, 1..8)) {
        let mut calc = Calculator::new();
        for &d in &digits {
            calc.press_digit(d);
        }
        let before = calc.display_result().to_owned();
        calc.toggle_sign();
        calc.toggle_sign();
        prop_assert_eq!(calc.display_result(), before.as_str());
    }

    // Clear always restores the initial state, whatever happened before.
    #[test]
    fn prop_clear_resets(commands in proptest::collection::vec(command_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for &command in &commands {
            calc.apply(command);
        }
        calc.clear();
        prop_assert_eq!(calc, Calculator::new());
    }
}

#[test]
fn test_sign_toggle_on_zero_is_noop() {
    let mut calc = Calculator::new();
    calc.toggle_sign();
    assert_eq!(calc.display_result(), "0");
}

#[test]
fn test_format_round_trip_example() {
    assert_eq!(calc_widget::core::format_number(0.1 + 0.2), "0.3");
}
