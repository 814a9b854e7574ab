//! Button-id and keyboard mappings for the browser frontend.

use crate::core::{Command, Operator};
use crate::wasm::dom::DomElement;

/// A single on-page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    /// DOM element ID.
    pub id: &'static str,
    /// The command the button issues.
    pub command: Command,
}

/// Maps DOM button IDs and keyboard keys to commands.
#[derive(Debug, Clone)]
pub struct ButtonMap {
    buttons: Vec<ButtonSpec>,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonMap {
    /// Creates the standard calculator button set.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            ButtonSpec { id: "key-0", command: Command::Digit(0) },
            ButtonSpec { id: "key-1", command: Command::Digit(1) },
            ButtonSpec { id: "key-2", command: Command::Digit(2) },
            ButtonSpec { id: "key-3", command: Command::Digit(3) },
            ButtonSpec { id: "key-4", command: Command::Digit(4) },
            ButtonSpec { id: "key-5", command: Command::Digit(5) },
            ButtonSpec { id: "key-6", command: Command::Digit(6) },
            ButtonSpec { id: "key-7", command: Command::Digit(7) },
            ButtonSpec { id: "key-8", command: Command::Digit(8) },
            ButtonSpec { id: "key-9", command: Command::Digit(9) },
            ButtonSpec { id: "key-dot", command: Command::Decimal },
            ButtonSpec { id: "key-sign", command: Command::ToggleSign },
            ButtonSpec { id: "key-backspace", command: Command::Backspace },
            ButtonSpec { id: "key-add", command: Command::Operator(Operator::Add) },
            ButtonSpec { id: "key-subtract", command: Command::Operator(Operator::Subtract) },
            ButtonSpec { id: "key-multiply", command: Command::Operator(Operator::Multiply) },
            ButtonSpec { id: "key-divide", command: Command::Operator(Operator::Divide) },
            ButtonSpec { id: "key-equals", command: Command::Equals },
            ButtonSpec { id: "key-clear", command: Command::Clear },
        ];
        Self { buttons }
    }

    /// All button specs.
    #[must_use]
    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    /// The command for a clicked element, if it is one of ours.
    #[must_use]
    pub fn command_for_id(&self, id: &str) -> Option<Command> {
        self.buttons.iter().find(|b| b.id == id).map(|b| b.command)
    }

    /// Maps a browser keyboard `key` value to a command.
    ///
    /// Same bindings as the page's keydown handler: digits, `.`, operator
    /// symbols, Enter/`=` to evaluate, Backspace/Delete, Escape to clear.
    #[must_use]
    pub fn command_for_key(key: &str) -> Option<Command> {
        match key {
            "Enter" | "=" => return Some(Command::Equals),
            "Backspace" | "Delete" => return Some(Command::Backspace),
            "Escape" => return Some(Command::Clear),
            "." => return Some(Command::Decimal),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if let Some(d) = c.to_digit(10) {
            return Some(Command::Digit(d as u8));
        }
        Operator::from_char(c).map(Command::Operator)
    }

    /// Builds the page's button elements for the keys container.
    #[must_use]
    pub fn create_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|spec| {
                DomElement::new("button")
                    .with_id(spec.id)
                    .with_text(&spec.command.label())
                    .with_class("key")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_has_a_button() {
        let map = ButtonMap::new();
        assert_eq!(map.buttons().len(), 19);
        for d in 0..=9u8 {
            assert!(map
                .buttons()
                .iter()
                .any(|b| b.command == Command::Digit(d)));
        }
    }

    #[test]
    fn test_command_for_id() {
        let map = ButtonMap::new();
        assert_eq!(map.command_for_id("key-7"), Some(Command::Digit(7)));
        assert_eq!(
            map.command_for_id("key-add"),
            Some(Command::Operator(Operator::Add))
        );
        assert_eq!(map.command_for_id("key-equals"), Some(Command::Equals));
        assert_eq!(map.command_for_id("themeToggle"), None);
        assert_eq!(map.command_for_id("nope"), None);
    }

    #[test]
    fn test_command_for_key_digits() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(ButtonMap::command_for_key(&key), Some(Command::Digit(d)));
        }
    }

    #[test]
    fn test_command_for_key_specials() {
        assert_eq!(ButtonMap::command_for_key("Enter"), Some(Command::Equals));
        assert_eq!(ButtonMap::command_for_key("="), Some(Command::Equals));
        assert_eq!(
            ButtonMap::command_for_key("Backspace"),
            Some(Command::Backspace)
        );
        assert_eq!(
            ButtonMap::command_for_key("Delete"),
            Some(Command::Backspace)
        );
        assert_eq!(ButtonMap::command_for_key("Escape"), Some(Command::Clear));
        assert_eq!(ButtonMap::command_for_key("."), Some(Command::Decimal));
    }

    #[test]
    fn test_command_for_key_operators() {
        assert_eq!(
            ButtonMap::command_for_key("+"),
            Some(Command::Operator(Operator::Add))
        );
        assert_eq!(
            ButtonMap::command_for_key("/"),
            Some(Command::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_command_for_key_ignores_rest() {
        assert_eq!(ButtonMap::command_for_key("a"), None);
        assert_eq!(ButtonMap::command_for_key("Shift"), None);
        assert_eq!(ButtonMap::command_for_key("ArrowUp"), None);
        assert_eq!(ButtonMap::command_for_key(""), None);
    }

    #[test]
    fn test_create_elements() {
        let map = ButtonMap::new();
        let elements = map.create_elements();
        assert_eq!(elements.len(), 19);
        let seven = elements.iter().find(|e| e.id == "key-7").unwrap();
        assert_eq!(seven.text_content, "7");
        assert!(seven.classes.contains(&"key".to_owned()));
    }
}
