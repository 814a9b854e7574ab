//! TUI application state.

use crate::core::Stopwatch;
use crate::theme::Theme;
use crate::tui::input::KeyAction;

/// Stopwatch TUI application.
#[derive(Debug, Default)]
pub struct StopwatchApp {
    watch: Stopwatch,
    theme: Theme,
    should_quit: bool,
}

impl StopwatchApp {
    /// Creates an app with the default (dark) theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app starting on the given theme (restored preference).
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            watch: Stopwatch::new(),
            theme,
            should_quit: false,
        }
    }

    /// Routes a resolved key action at the given clock reading.
    pub fn handle_action(&mut self, action: KeyAction, now_ms: u64) {
        match action {
            KeyAction::Toggle => self.watch.toggle(now_ms),
            KeyAction::Lap => self.watch.lap(now_ms),
            KeyAction::Reset => self.watch.reset(),
            KeyAction::ToggleTheme => self.theme = self.theme.toggled(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// The stopwatch state machine.
    #[must_use]
    pub fn watch(&self) -> &Stopwatch {
        &self.watch
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_drive_the_watch() {
        let mut app = StopwatchApp::new();
        app.handle_action(KeyAction::Toggle, 0);
        assert!(app.watch().is_running());

        app.handle_action(KeyAction::Lap, 1_000);
        assert_eq!(app.watch().laps().len(), 1);

        app.handle_action(KeyAction::Toggle, 2_000);
        assert!(!app.watch().is_running());
        assert_eq!(app.watch().elapsed_at(9_000), 2_000);

        app.handle_action(KeyAction::Reset, 9_000);
        assert_eq!(app.watch().elapsed_at(9_000), 0);
    }

    #[test]
    fn test_theme_and_quit() {
        let mut app = StopwatchApp::with_theme(Theme::Light);
        assert_eq!(app.theme(), Theme::Light);
        app.handle_action(KeyAction::ToggleTheme, 0);
        assert_eq!(app.theme(), Theme::Dark);

        assert!(!app.should_quit());
        app.handle_action(KeyAction::Quit, 0);
        assert!(app.should_quit());
    }

    #[test]
    fn test_none_is_inert() {
        let mut app = StopwatchApp::new();
        app.handle_action(KeyAction::None, 123);
        assert_eq!(app.watch(), &Stopwatch::new());
    }
}
