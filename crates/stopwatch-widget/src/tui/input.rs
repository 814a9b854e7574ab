//! Keyboard mapping: Space toggles, `l` laps, `r` resets, matching the
//! browser original; `t` and `q` are TUI conveniences.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action resolved from one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Start/pause toggle.
    Toggle,
    /// Record a lap.
    Lap,
    /// Reset the stopwatch.
    Reset,
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
            KeyCode::Char(' ') => KeyAction::Toggle,
            KeyCode::Char('l' | 'L') => KeyAction::Lap,
            KeyCode::Char('r' | 'R') => KeyAction::Reset,
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
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

    #[test]
    fn test_bindings() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char(' '))), KeyAction::Toggle);
        assert_eq!(handler.handle_key(key(KeyCode::Char('l'))), KeyAction::Lap);
        assert_eq!(handler.handle_key(key(KeyCode::Char('L'))), KeyAction::Lap);
        assert_eq!(handler.handle_key(key(KeyCode::Char('r'))), KeyAction::Reset);
        assert_eq!(handler.handle_key(key(KeyCode::Char('t'))), KeyAction::ToggleTheme);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_quit() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(event), KeyAction::Quit);
    }
}
