//! The browser calculator widget: state machine + DOM presentation.
//!
//! Owns the [`Calculator`] instance, routes DOM events to commands, and
//! re-renders the expression and result lines after every mutating call.
//! Runs against [`MockDom`] here; the `wasm` feature binds the same surface
//! to the real page.

use crate::core::Calculator;
use crate::theme::{Theme, THEME_STORAGE_KEY};
use crate::wasm::dom::{DomEvent, MockDom};
use crate::wasm::keypad::ButtonMap;

/// The calculator page widget.
#[derive(Debug)]
pub struct CalculatorWidget {
    calc: Calculator,
    buttons: ButtonMap,
    dom: MockDom,
    theme: Theme,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWidget {
    /// Builds the widget: page structure, keypad buttons, persisted theme,
    /// initial render.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dom(MockDom::calculator())
    }

    /// Builds the widget over a prepared document (tests may pre-seed
    /// storage with a theme preference).
    #[must_use]
    pub fn with_dom(dom: MockDom) -> Self {
        let mut widget = Self {
            calc: Calculator::new(),
            buttons: ButtonMap::new(),
            dom,
            theme: Theme::default(),
        };
        for element in widget.buttons.create_elements() {
            widget.dom.append_child("keys", element);
        }
        widget.init_theme();
        widget.render();
        widget
    }

    /// Routes a DOM event to the widget.
    pub fn dispatch(&mut self, event: &DomEvent) {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::Click { element_id } if element_id == "themeToggle" => {
                self.toggle_theme();
            }
            DomEvent::Click { element_id } => {
                if let Some(command) = self.buttons.command_for_id(element_id) {
                    self.calc.apply(command);
                    self.render();
                }
            }
            DomEvent::KeyDown { key } => {
                if let Some(command) = ButtonMap::command_for_key(key) {
                    self.calc.apply(command);
                    self.render();
                }
            }
        }
    }

    /// Flips the theme, updates the page attribute and toggle icon, and
    /// persists the preference.
    pub fn toggle_theme(&mut self) {
        self.apply_theme(self.theme.toggled());
        self.dom.storage_set(THEME_STORAGE_KEY, self.theme.as_str());
    }

    fn init_theme(&mut self) {
        let saved = self
            .dom
            .storage_get(THEME_STORAGE_KEY)
            .and_then(Theme::parse)
            .unwrap_or_default();
        self.apply_theme(saved);
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dom.root.set_attr("data-theme", theme.as_str());
        self.dom
            .set_element_text("themeToggle", theme.toggle_icon());
    }

    fn render(&mut self) {
        self.dom
            .set_element_text("expression", &self.calc.display_expression());
        self.dom
            .set_element_text("result", self.calc.display_result());
    }

    /// The expression line as shown on the page.
    #[must_use]
    pub fn expression_text(&self) -> &str {
        self.dom.get_element_text("expression").unwrap_or_default()
    }

    /// The result line as shown on the page.
    #[must_use]
    pub fn result_text(&self) -> &str {
        self.dom.get_element_text("result").unwrap_or_default()
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The underlying state machine.
    #[must_use]
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }

    /// The document, for assertions.
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }
}
