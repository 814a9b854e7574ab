//! Light/dark theme preference with pluggable persistence.
//!
//! The browser frontend keeps the preference in localStorage; the native
//! frontend keeps it in a small TOML settings file. Both speak the same
//! string values under the same key.

/// Storage key for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "calculator_theme";

/// The two display themes. Dark is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    #[default]
    Dark,
}

impl Theme {
    /// The persisted string value (`"light"` / `"dark"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle control: the moon offers dark mode, the sun light.
    #[must_use]
    pub const fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Where the theme preference lives.
pub trait ThemeStore {
    /// Loads the persisted preference, if one exists and parses.
    fn load(&self) -> Option<Theme>;
    /// Persists the preference. Failures are swallowed; losing the theme is
    /// not worth interrupting the widget.
    fn save(&mut self, theme: Theme);
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.theme
    }

    fn save(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

/// TOML-file store for the native frontend.
#[cfg(feature = "tui")]
pub mod file {
    use std::path::PathBuf;

    use serde::{Deserialize, Serialize};

    use super::{Theme, ThemeStore};

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Settings {
        theme: Option<String>,
    }

    /// Persists the theme to `<config dir>/calc-widget/settings.toml`.
    #[derive(Debug)]
    pub struct FileThemeStore {
        path: PathBuf,
    }

    impl FileThemeStore {
        /// Store at the platform config location, when one exists.
        #[must_use]
        pub fn new() -> Option<Self> {
            dirs::config_dir().map(|dir| Self {
                path: dir.join("calc-widget").join("settings.toml"),
            })
        }

        /// Store at an explicit path (tests).
        #[must_use]
        pub fn at(path: PathBuf) -> Self {
            Self { path }
        }
    }

    impl ThemeStore for FileThemeStore {
        fn load(&self) -> Option<Theme> {
            let raw = std::fs::read_to_string(&self.path).ok()?;
            let settings: Settings = toml::from_str(&raw).ok()?;
            settings.theme.as_deref().and_then(Theme::parse)
        }

        fn save(&mut self, theme: Theme) {
            let settings = Settings {
                theme: Some(theme.as_str().to_owned()),
            };
            let Ok(raw) = toml::to_string(&settings) else {
                return;
            };
            if let Some(parent) = self.path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = std::fs::write(&self.path, raw);
        }
    }
}

#[cfg(feature = "tui")]
pub use file::FileThemeStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_icon_offers_other_theme() {
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryThemeStore::new();
        assert_eq!(store.load(), None);
        store.save(Theme::Light);
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut store = FileThemeStore::at(path.clone());
        assert_eq!(store.load(), None);

        store.save(Theme::Light);
        assert_eq!(store.load(), Some(Theme::Light));

        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("light"));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let store = FileThemeStore::at(path);
        assert_eq!(store.load(), None);
    }
}
