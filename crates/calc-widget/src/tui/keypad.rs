//! Button grid for the calculator keypad.
//!
//! Buttons carry explicit grid positions; the last row is sparse (no button
//! under the operator column next to `=`). Mouse hit testing and key
//! highlighting work over the same placement table.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Command, Operator};

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The command this button issues.
    pub command: Command,
    /// Grid row (0-indexed, top to bottom).
    pub row: u16,
    /// Grid column (0-indexed, left to right).
    pub col: u16,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a button at the given grid cell.
    #[must_use]
    pub fn new(command: Command, row: u16, col: u16) -> Self {
        Self {
            command,
            row,
            col,
            pressed: false,
        }
    }

    /// The label drawn on the button face.
    #[must_use]
    pub fn label(&self) -> String {
        self.command.label()
    }
}

/// The keypad layout, a 4-column grid:
/// ```text
/// [ C ] [ ± ] [ ⌫ ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ]       [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: u16,
    cols: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ± ⌫ /
            KeypadButton::new(Command::Clear, 0, 0),
            KeypadButton::new(Command::ToggleSign, 0, 1),
            KeypadButton::new(Command::Backspace, 0, 2),
            KeypadButton::new(Command::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 *
            KeypadButton::new(Command::Digit(7), 1, 0),
            KeypadButton::new(Command::Digit(8), 1, 1),
            KeypadButton::new(Command::Digit(9), 1, 2),
            KeypadButton::new(Command::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(Command::Digit(4), 2, 0),
            KeypadButton::new(Command::Digit(5), 2, 1),
            KeypadButton::new(Command::Digit(6), 2, 2),
            KeypadButton::new(Command::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(Command::Digit(1), 3, 0),
            KeypadButton::new(Command::Digit(2), 3, 1),
            KeypadButton::new(Command::Digit(3), 3, 2),
            KeypadButton::new(Command::Operator(Operator::Add), 3, 3),
            // Row 4: 0 . _ =
            KeypadButton::new(Command::Digit(0), 4, 0),
            KeypadButton::new(Command::Decimal, 4, 1),
            KeypadButton::new(Command::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in placement order.
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button at a grid cell, if the cell is populated.
    #[must_use]
    pub fn button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds the button issuing the given command.
    #[must_use]
    pub fn find_button(&self, command: Command) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.command == command)
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// Highlights the button for a command, releasing all others.
    pub fn highlight(&mut self, command: Command) {
        for button in &mut self.buttons {
            button.pressed = button.command == command;
        }
    }

    /// Converts a click position inside `area` to the command of the button
    /// under it, accounting for the one-cell border.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Command> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols;
        let btn_height = (area.height - 2) / self.rows;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (rel_x - 1) / btn_width;
        let row = (rel_y - 1) / btn_height;
        self.button_at(row, col).map(|b| b.command)
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a renderer over the keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(button: &KeypadButton) -> Style {
        if button.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.command {
            Command::Digit(_) | Command::Decimal => Style::default().fg(Color::White),
            Command::Operator(_) => Style::default().fg(Color::Yellow),
            Command::Equals => Style::default().fg(Color::Green),
            Command::Clear => Style::default().fg(Color::Red),
            Command::Backspace | Command::ToggleSign => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols || inner.height < rows {
            return; // Too small to render
        }

        let btn_width = inner.width / cols;
        let btn_height = inner.height / rows;

        for button in self.keypad.buttons() {
            let x = inner.x + button.col * btn_width;
            let y = inner.y + button.row * btn_height;
            let style = Self::button_style(button);

            if btn_width >= 3 {
                let label = format!("[{}]", button.label());
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));

        assert_eq!(keypad.button_at(0, 0).unwrap().command, Command::Clear);
        assert_eq!(keypad.button_at(0, 1).unwrap().command, Command::ToggleSign);
        assert_eq!(keypad.button_at(0, 2).unwrap().command, Command::Backspace);
        assert_eq!(
            keypad.button_at(0, 3).unwrap().command,
            Command::Operator(Operator::Divide)
        );
        assert_eq!(keypad.button_at(4, 0).unwrap().command, Command::Digit(0));
        assert_eq!(keypad.button_at(4, 1).unwrap().command, Command::Decimal);
        assert_eq!(keypad.button_at(4, 3).unwrap().command, Command::Equals);
    }

    #[test]
    fn test_sparse_cell_is_empty() {
        let keypad = Keypad::new();
        assert!(keypad.button_at(4, 2).is_none());
        assert!(keypad.button_at(9, 0).is_none());
    }

    #[test]
    fn test_every_digit_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(
                keypad.find_button(Command::Digit(d)).is_some(),
                "missing button for digit {d}"
            );
        }
    }

    #[test]
    fn test_every_operator_has_a_button() {
        let keypad = Keypad::new();
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert!(keypad.find_button(Command::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_highlight_releases_others() {
        let mut keypad = Keypad::new();
        keypad.highlight(Command::Digit(5));
        keypad.highlight(Command::Equals);
        let pressed: Vec<_> = keypad.buttons().iter().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].command, Command::Equals);

        keypad.release_all();
        assert!(keypad.buttons().iter().all(|b| !b.pressed));
    }

    #[test]
    fn test_hit_test_inside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        // Cell (0, 0) with 5x2 buttons inside the border.
        assert_eq!(keypad.hit_test(area, 2, 1), Some(Command::Clear));
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 22, 12);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 10, 10), None);
        assert_eq!(keypad.hit_test(area, 100, 100), None);
    }

    #[test]
    fn test_hit_test_sparse_cell() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        let btn_width = 20 / 4;
        let btn_height = 10 / 5;
        // Center of grid cell (4, 2), the empty slot next to equals.
        let x = 1 + 2 * btn_width + btn_width / 2;
        let y = 1 + 4 * btn_height + btn_height / 2;
        assert_eq!(keypad.hit_test(area, x, y), None);
    }

    #[test]
    fn test_render_shows_labels() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[=]"));
        assert!(content.contains("[C]"));
    }

    #[test]
    fn test_render_too_small_does_not_panic() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
