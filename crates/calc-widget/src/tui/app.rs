//! TUI application state.

use ratatui::layout::Rect;

use crate::core::Calculator;
use crate::theme::Theme;
use crate::tui::input::KeyAction;
use crate::tui::keypad::Keypad;

/// Calculator TUI application: the state machine plus presentation state.
#[derive(Debug)]
pub struct CalcApp {
    calc: Calculator,
    keypad: Keypad,
    theme: Theme,
    should_quit: bool,
}

impl Default for CalcApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcApp {
    /// Creates an app with the default (dark) theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Creates an app starting on the given theme (restored preference).
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            calc: Calculator::new(),
            keypad: Keypad::new(),
            theme,
            should_quit: false,
        }
    }

    /// Routes a resolved key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => {
                self.keypad.highlight(command);
                self.calc.apply(command);
            }
            KeyAction::ToggleTheme => self.theme = self.theme.toggled(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Routes a mouse click: applies the keypad button under the cursor,
    /// if any. `keypad_area` is the rect the keypad was last rendered into.
    pub fn handle_click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(command) = self.keypad.hit_test(keypad_area, x, y) {
            self.handle_action(KeyAction::Command(command));
        }
    }

    /// The underlying state machine.
    #[must_use]
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }

    /// The keypad model (button highlight state).
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the app should exit its event loop.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The expression line text.
    #[must_use]
    pub fn expression(&self) -> String {
        self.calc.display_expression()
    }

    /// The result line text.
    #[must_use]
    pub fn result(&self) -> &str {
        self.calc.display_result()
    }
}
