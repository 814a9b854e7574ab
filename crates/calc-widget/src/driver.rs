//! Unified driver over both frontends.
//!
//! Test logic written once against [`CalcDriver`] runs unchanged on the TUI
//! app and the browser widget, so the two presentations cannot drift apart
//! in behavior.

use crate::core::{Command, Operator};

/// Abstract driver: press commands, read the two display lines.
pub trait CalcDriver {
    /// Presses one command.
    fn press(&mut self, command: Command);

    /// The expression line as the frontend shows it.
    fn expression(&self) -> String;

    /// The result line as the frontend shows it.
    fn result(&self) -> String;

    /// Presses a whole command sequence.
    fn press_all(&mut self, commands: &[Command]) {
        for &command in commands {
            self.press(command);
        }
    }
}

/// Parses a compact key script into commands.
///
/// Digits, `.`, and the four operator symbols mean themselves; `=` is
/// equals, `C` clear, `<` backspace, `~` sign toggle. Whitespace is
/// ignored; anything else is skipped.
#[must_use]
pub fn script(keys: &str) -> Vec<Command> {
    keys.chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(Command::Digit(c as u8 - b'0')),
            '.' => Some(Command::Decimal),
            '=' => Some(Command::Equals),
            'C' => Some(Command::Clear),
            '<' => Some(Command::Backspace),
            '~' => Some(Command::ToggleSign),
            _ => Operator::from_char(c).map(Command::Operator),
        })
        .collect()
}

// ===== Shared behavior specifications =====
// These run against ANY CalcDriver implementation.

/// Chained operators fold eagerly: `5 + 3 + 2 =` is 10.
pub fn verify_chaining<D: CalcDriver>(driver: &mut D) {
    driver.press_all(&script("C 5+3+2="));
    assert_eq!(driver.result(), "10");
}

/// An operator pressed before new digits replaces the pending one:
/// `5 + * 3 =` is 15.
pub fn verify_operator_replacement<D: CalcDriver>(driver: &mut D) {
    driver.press_all(&script("C 5+*3="));
    assert_eq!(driver.result(), "15");
}

/// Repeated equals replays the last operation: `5 + 3 = = =` is 14.
pub fn verify_repeat_equals<D: CalcDriver>(driver: &mut D) {
    driver.press_all(&script("C 5+3="));
    assert_eq!(driver.result(), "8");
    driver.press_all(&script("="));
    assert_eq!(driver.result(), "11");
    driver.press_all(&script("="));
    assert_eq!(driver.result(), "14");
}

/// Division by zero shows the error literal and empties the expression.
pub fn verify_division_by_zero<D: CalcDriver>(driver: &mut D) {
    driver.press_all(&script("C 7/0="));
    assert_eq!(driver.result(), "Error");
    assert_eq!(driver.expression(), "");
}

/// After an error, everything except clear (or fresh entry) is inert, and
/// clear fully recovers.
pub fn verify_error_recovery<D: CalcDriver>(driver: &mut D) {
    driver.press_all(&script("C 1/0="));
    assert_eq!(driver.result(), "Error");

    driver.press_all(&script("+=~<"));
    assert_eq!(driver.result(), "Error");

    driver.press_all(&script("C"));
    assert_eq!(driver.result(), "0");
    assert_eq!(driver.expression(), "");
}

/// Digit entry after equals starts a fresh expression; operator entry
/// chains from the result.
pub fn verify_post_equals_entry<D: CalcDriver>(driver: &mut D) {
    driver.press_all(&script("C 5+3=9"));
    assert_eq!(driver.result(), "9");
    assert_eq!(driver.expression(), "");

    driver.press_all(&script("C 5+3=*2="));
    assert_eq!(driver.result(), "16");
}

/// Runs every shared specification.
pub fn run_full_specification<D: CalcDriver>(driver: &mut D) {
    verify_chaining(driver);
    verify_operator_replacement(driver);
    verify_repeat_equals(driver);
    verify_division_by_zero(driver);
    verify_error_recovery(driver);
    verify_post_equals_entry(driver);
}

// ===== Frontend implementations =====

#[cfg(feature = "tui")]
mod tui_driver {
    use super::{CalcDriver, Command};
    use crate::tui::{CalcApp, KeyAction};

    impl CalcDriver for CalcApp {
        fn press(&mut self, command: Command) {
            self.handle_action(KeyAction::Command(command));
        }

        fn expression(&self) -> String {
            CalcApp::expression(self)
        }

        fn result(&self) -> String {
            CalcApp::result(self).to_owned()
        }
    }
}

mod widget_driver {
    use super::{CalcDriver, Command};
    use crate::wasm::CalculatorWidget;

    impl CalcDriver for CalculatorWidget {
        fn press(&mut self, command: Command) {
            // Route through the DOM click path so the specifications observe
            // the rendered text, not the raw state.
            let buttons = crate::wasm::ButtonMap::new();
            if let Some(spec) = buttons.buttons().iter().find(|b| b.command == command) {
                self.dispatch(&crate::wasm::DomEvent::click(spec.id));
            }
        }

        fn expression(&self) -> String {
            self.expression_text().to_owned()
        }

        fn result(&self) -> String {
            self.result_text().to_owned()
        }
    }
}
