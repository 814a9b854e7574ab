//! TUI rendering: the time readout, control hints, and the lap list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use crate::core::format_elapsed;
use crate::theme::Theme;
use crate::tui::app::StopwatchApp;

/// Renders the stopwatch UI into the frame at the given clock reading.
pub fn render(app: &StopwatchApp, now_ms: u64, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(StopwatchUi::new(app, now_ms), area);
}

fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

/// Stopwatch UI widget.
#[derive(Debug)]
pub struct StopwatchUi<'a> {
    app: &'a StopwatchApp,
    now_ms: u64,
}

impl<'a> StopwatchUi<'a> {
    /// Creates a UI widget over the app state.
    #[must_use]
    pub fn new(app: &'a StopwatchApp, now_ms: u64) -> Self {
        Self { app, now_ms }
    }

    fn render_time(&self, area: Rect, buf: &mut Buffer) {
        let elapsed = self.app.watch().elapsed_at(self.now_ms);
        let style = if self.app.watch().is_running() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(text_color(self.app.theme()))
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(format_elapsed(elapsed), style))
            .block(
                Block::default()
                    .title(" Stopwatch ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let controls = self.app.watch().controls();
        let enabled = Style::default().fg(Color::Yellow);
        let disabled = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::styled(format!("[Space] {}", controls.start_pause_label), enabled),
            Span::raw("  "),
            Span::styled(
                "[l] Lap",
                if controls.lap_enabled { enabled } else { disabled },
            ),
            Span::raw("  "),
            Span::styled(
                "[r] Reset",
                if controls.reset_enabled { enabled } else { disabled },
            ),
        ];
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[t] {}", self.app.theme().as_str()),
            disabled,
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_laps(&self, area: Rect, buf: &mut Buffer) {
        let rows = self.app.watch().lap_rows();
        let items: Vec<ListItem> = rows
            .iter()
            .rev()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("Lap {:<3}", row.number),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format_elapsed(row.split_ms),
                        Style::default().fg(text_color(self.app.theme())),
                    ),
                    Span::styled(
                        format!("  ({})", format_elapsed(row.total_ms)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Laps ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for StopwatchUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Time readout
                Constraint::Length(1), // Controls
                Constraint::Min(3),    // Laps
            ])
            .split(area);

        self.render_time(chunks[0], buf);
        self.render_controls(chunks[1], buf);
        self.render_laps(chunks[2], buf);
    }
}
