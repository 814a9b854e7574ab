//! TUI rendering: expression line, result line, keypad, help sidebar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use crate::core::ERROR_DISPLAY;
use crate::theme::Theme;
use crate::tui::app::CalcApp;
use crate::tui::keypad::KeypadWidget;

/// Key bindings shown in the help sidebar.
const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "type a number"),
    ("+-*/", "operator"),
    ("Enter =", "evaluate"),
    ("Bksp", "delete digit"),
    ("n", "negate"),
    ("Esc", "clear"),
    ("t", "theme"),
    ("q", "quit"),
];

/// Per-theme color set.
#[derive(Debug, Clone, Copy)]
struct Palette {
    text: Color,
    border: Color,
    accent: Color,
    result: Color,
    error: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            border: Color::DarkGray,
            accent: Color::Cyan,
            result: Color::Green,
            error: Color::Red,
        },
        Theme::Light => Palette {
            text: Color::Black,
            border: Color::Gray,
            accent: Color::Blue,
            result: Color::Green,
            error: Color::Red,
        },
    }
}

/// Renders the calculator UI into the frame.
pub fn render(app: &CalcApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalcUi::new(app), area);
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalcUi<'a> {
    app: &'a CalcApp,
}

impl<'a> CalcUi<'a> {
    /// Creates a UI widget over the app state.
    #[must_use]
    pub fn new(app: &'a CalcApp) -> Self {
        Self { app }
    }

    /// The rect the keypad occupies within `area`; mouse handling needs the
    /// same answer as the renderer.
    #[must_use]
    pub fn keypad_area(area: Rect) -> Rect {
        Self::horizontal_chunks(area)[1]
    }

    fn horizontal_chunks(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // Display column
                Constraint::Length(22), // Keypad
                Constraint::Length(24), // Help sidebar
            ])
            .split(area)
            .to_vec()
    }

    fn render_expression(&self, area: Rect, buf: &mut Buffer, colors: Palette) {
        let paragraph = Paragraph::new(Span::styled(
            self.app.expression(),
            Style::default().fg(colors.text),
        ))
        .block(
            Block::default()
                .title(" Expression ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
        paragraph.render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer, colors: Palette) {
        let result = self.app.result();
        let style = if result == ERROR_DISPLAY {
            Style::default().fg(colors.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(colors.result)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(result, style)).block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.accent)),
        );
        paragraph.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer, colors: Palette) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(keys, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{keys:>8}"), Style::default().fg(colors.accent)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(colors.text)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
        list.render(area, buf);
    }

    fn render_theme_line(&self, area: Rect, buf: &mut Buffer, colors: Palette) {
        let theme = self.app.theme();
        let line = Line::from(vec![
            Span::styled("theme: ", Style::default().fg(colors.border)),
            Span::styled(theme.as_str(), Style::default().fg(colors.text)),
            Span::raw("  "),
            Span::raw(theme.toggle_icon()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

impl Widget for CalcUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = palette(self.app.theme());
        let columns = Self::horizontal_chunks(area);

        let display_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Expression
                Constraint::Length(3), // Result
                Constraint::Min(1),    // Theme line
            ])
            .split(columns[0]);

        self.render_expression(display_chunks[0], buf, colors);
        self.render_result(display_chunks[1], buf, colors);
        self.render_theme_line(display_chunks[2], buf, colors);

        KeypadWidget::new(self.app.keypad()).render(columns[1], buf);
        self.render_help(columns[2], buf, colors);
    }
}
