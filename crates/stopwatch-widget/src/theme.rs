//! Light/dark theme preference.
//!
//! Same shape as the other widgets, same string values, its own storage key.
//! The widgets deliberately share no code.

/// Storage key for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "stopwatch_theme";

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
    /// The persisted string value.
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
}

/// TOML-file persistence for the native frontend.
#[cfg(feature = "tui")]
pub mod file {
    use std::path::PathBuf;

    use serde::{Deserialize, Serialize};

    use super::Theme;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Settings {
        theme: Option<String>,
    }

    /// Persists the theme to `<config dir>/stopwatch-widget/settings.toml`.
    #[derive(Debug)]
    pub struct FileThemeStore {
        path: PathBuf,
    }

    impl FileThemeStore {
        /// Store at the platform config location, when one exists.
        #[must_use]
        pub fn new() -> Option<Self> {
            dirs::config_dir().map(|dir| Self {
                path: dir.join("stopwatch-widget").join("settings.toml"),
            })
        }

        /// Store at an explicit path (tests).
        #[must_use]
        pub fn at(path: PathBuf) -> Self {
            Self { path }
        }

        /// Loads the persisted preference, if one exists and parses.
        #[must_use]
        pub fn load(&self) -> Option<Theme> {
            let raw = std::fs::read_to_string(&self.path).ok()?;
            let settings: Settings = toml::from_str(&raw).ok()?;
            settings.theme.as_deref().and_then(Theme::parse)
        }

        /// Persists the preference. Failures are swallowed.
        pub fn save(&self, theme: Theme) {
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
