//! Keyboard input mapping for the TUI frontend.
//!
//! Mirrors the browser widget's key bindings: digits, the decimal point,
//! the four operators, Enter/`=` for equals, Backspace/Delete, and Escape
//! for a full clear. `n`, `t`, and `q` are TUI-only conveniences.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Command, Operator};

/// Action resolved from one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the state machine.
    Command(Command),
    /// Flip the light/dark theme.
    ToggleTheme,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Command(Command::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.') => KeyAction::Command(Command::Decimal),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Command(Command::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Command(Command::Backspace),
            KeyCode::Esc => KeyAction::Command(Command::Clear),
            KeyCode::Char('n') => KeyAction::Command(Command::ToggleSign),
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => match Operator::from_char(c) {
                Some(op) => KeyAction::Command(Command::Operator(op)),
                None => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_digits() {
        let handler = InputHandler::new();
        for (c, d) in ('0'..='9').zip(0u8..=9) {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::Command(Command::Digit(d))
            );
        }
    }

    #[test]
    fn test_operators() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('+'))),
            KeyAction::Command(Command::Operator(Operator::Add))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('-'))),
            KeyAction::Command(Command::Operator(Operator::Subtract))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('*'))),
            KeyAction::Command(Command::Operator(Operator::Multiply))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('/'))),
            KeyAction::Command(Command::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_equals_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Command(Command::Equals)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Command(Command::Equals)
        );
    }

    #[test]
    fn test_editing_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            KeyAction::Command(Command::Backspace)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Delete)),
            KeyAction::Command(Command::Backspace)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc)),
            KeyAction::Command(Command::Clear)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('.'))),
            KeyAction::Command(Command::Decimal)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n'))),
            KeyAction::Command(Command::ToggleSign)
        );
    }

    #[test]
    fn test_theme_and_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('t'))), KeyAction::ToggleTheme);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('c'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ignored_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('z'))), KeyAction::None);
    }
}
