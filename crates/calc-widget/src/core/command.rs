//! The closed vocabulary of user commands.
//!
//! Keypads, key maps, and DOM glue all translate their events into this one
//! enum; [`Calculator::apply`] is the single dispatch point.

use crate::core::operator::Operator;
use crate::core::state::Calculator;

/// One discrete user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a digit (0-9) to the operand being typed.
    Digit(u8),
    /// Append the decimal point.
    Decimal,
    /// Negate the operand being typed.
    ToggleSign,
    /// Drop the last typed character.
    Backspace,
    /// Commit or chain with the given operator.
    Operator(Operator),
    /// Evaluate the pending operation.
    Equals,
    /// Reset to the initial state.
    Clear,
}

impl Command {
    /// The label shown on this command's keypad button.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_owned(),
            Self::ToggleSign => "±".to_owned(),
            Self::Backspace => "⌫".to_owned(),
            Self::Operator(op) => op.symbol().to_owned(),
            Self::Equals => "=".to_owned(),
            Self::Clear => "C".to_owned(),
        }
    }
}

impl Calculator {
    /// Applies a single command to the state machine.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(d) => self.press_digit(d),
            Command::Decimal => self.press_decimal(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Backspace => self.backspace(),
            Command::Operator(op) => self.select_operator(op),
            Command::Equals => self.evaluate(),
            Command::Clear => self.clear(),
        }
    }
}
