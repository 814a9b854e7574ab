//! Real-browser bindings for the calculator widget.
//!
//! Thin wasm-bindgen shell over the same command surface the mock-DOM
//! widget exercises; the page's event handlers forward clicks and key
//! presses here and write the returned display strings back into the DOM.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::Calculator;
use crate::theme::{Theme, THEME_STORAGE_KEY};
use crate::wasm::keypad::ButtonMap;

/// Browser calculator entry point.
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calc: Calculator,
    buttons: ButtonMap,
    theme: Theme,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates the calculator, restoring the persisted theme.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            calc: Calculator::new(),
            buttons: ButtonMap::new(),
            theme: load_theme().unwrap_or_default(),
        }
    }

    /// The expression line text.
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.calc.display_expression()
    }

    /// The result line text.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.calc.display_result().to_owned()
    }

    /// The active theme value (`"light"` / `"dark"`), for `data-theme`.
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.theme.as_str().to_owned()
    }

    /// The icon for the theme toggle control.
    #[wasm_bindgen(getter, js_name = themeIcon)]
    pub fn theme_icon(&self) -> String {
        self.theme.toggle_icon().to_owned()
    }

    /// Handles a keypad button click by element ID. Returns true when the
    /// click changed state (the page should re-read the display getters).
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        match self.buttons.command_for_id(button_id) {
            Some(command) => {
                self.calc.apply(command);
                true
            }
            None => false,
        }
    }

    /// Handles a keyboard event by its `key` value.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        match ButtonMap::command_for_key(key) {
            Some(command) => {
                self.calc.apply(command);
                true
            }
            None => false,
        }
    }

    /// Flips and persists the theme; returns the new `data-theme` value.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        self.theme = self.theme.toggled();
        save_theme(self.theme);
        self.theme.as_str().to_owned()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn load_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

fn save_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Module start hook.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"calc-widget initialized".into());
}
