//! Mock DOM for browser-frontend testing.
//!
//! A small stand-in for the handful of DOM facilities the widget touches:
//! element text, attributes, classes, and localStorage. It lets the browser
//! glue run headless in unit tests, with the real web-sys bindings confined
//! to the `wasm` feature.

use std::collections::HashMap;

/// A DOM element as the widget sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID (empty when anonymous).
    pub id: String,
    /// Tag name.
    pub tag: String,
    /// Text content.
    pub text_content: String,
    /// Attributes.
    pub attributes: HashMap<String, String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Child elements.
    pub children: Vec<DomElement>,
}

impl DomElement {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_owned(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: sets the element ID.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_owned();
        self
    }

    /// Builder: sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_owned();
        self
    }

    /// Builder: adds a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// Builder: sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Builder: appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_owned();
    }

    /// Sets an attribute.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_owned(), value.to_owned());
    }

    /// Gets an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element (buttons, theme toggle).
    Click {
        /// The ID of the clicked element.
        element_id: String,
    },
    /// Key press anywhere on the page.
    KeyDown {
        /// The browser `key` value (`"7"`, `"Enter"`, `"Escape"`, ...).
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event.
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_owned(),
        }
    }

    /// Creates a key-down event.
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_owned(),
        }
    }
}

/// Mock DOM: the page's elements plus a localStorage map.
#[derive(Debug)]
pub struct MockDom {
    /// The document root (`data-theme` lives here).
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    storage: HashMap<String, String>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("html").with_id("root"),
            elements: HashMap::new(),
            storage: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page structure: expression and result lines,
    /// the keys container, and the theme toggle.
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let expression = DomElement::new("div")
            .with_id("expression")
            .with_class("expression-line");
        let result = DomElement::new("div")
            .with_id("result")
            .with_class("result-line");
        let keys = DomElement::new("div").with_id("keys").with_class("keys");
        let theme_toggle = DomElement::new("button").with_id("themeToggle");

        dom.root = DomElement::new("html")
            .with_id("root")
            .with_child(expression.clone())
            .with_child(result.clone())
            .with_child(keys.clone())
            .with_child(theme_toggle.clone());

        dom.register_element(expression);
        dom.register_element(result);
        dom.register_element(keys);
        dom.register_element(theme_toggle);
        dom
    }

    /// Registers an element for ID lookup.
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID.
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID.
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Sets an element's text by ID.
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.set_text(text);
        }
    }

    /// Gets an element's text by ID.
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child under a parent and registers it.
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Records an event. The widget routes behavior; the mock only keeps
    /// history for assertions.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// The recorded event history.
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// localStorage setItem.
    pub fn storage_set(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_owned(), value.to_owned());
    }

    /// localStorage getItem.
    #[must_use]
    pub fn storage_get(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builders() {
        let elem = DomElement::new("div")
            .with_id("x")
            .with_text("hello")
            .with_class("a")
            .with_attr("data-k", "v")
            .with_child(DomElement::new("span"));
        assert_eq!(elem.id, "x");
        assert_eq!(elem.text_content, "hello");
        assert_eq!(elem.classes, vec!["a"]);
        assert_eq!(elem.get_attr("data-k"), Some("v"));
        assert_eq!(elem.children.len(), 1);
    }

    #[test]
    fn test_calculator_page_structure() {
        let dom = MockDom::calculator();
        for id in ["expression", "result", "keys", "themeToggle"] {
            assert!(dom.get_element(id).is_some(), "missing element {id}");
        }
        assert_eq!(dom.root.children.len(), 4);
    }

    #[test]
    fn test_text_round_trip() {
        let mut dom = MockDom::calculator();
        dom.set_element_text("result", "42");
        assert_eq!(dom.get_element_text("result"), Some("42"));
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_register_anonymous_element_is_skipped() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert!(dom.get_element("").is_none());
    }

    #[test]
    fn test_append_child_registers_it() {
        let mut dom = MockDom::calculator();
        dom.append_child("keys", DomElement::new("button").with_id("key-7"));
        assert!(dom.get_element("key-7").is_some());
        assert_eq!(dom.get_element("keys").unwrap().children.len(), 1);
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::calculator();
        dom.dispatch_event(DomEvent::click("key-7"));
        dom.dispatch_event(DomEvent::key_down("Enter"));
        assert_eq!(dom.event_history().len(), 2);
        assert_eq!(dom.event_history()[0], DomEvent::click("key-7"));
    }

    #[test]
    fn test_storage() {
        let mut dom = MockDom::new();
        assert_eq!(dom.storage_get("calculator_theme"), None);
        dom.storage_set("calculator_theme", "light");
        assert_eq!(dom.storage_get("calculator_theme"), Some("light"));
    }
}
