//! Calculator TUI.
//!
//! Run with: cargo run --example calculator_tui

use std::io;

use calc_widget::theme::{FileThemeStore, Theme, ThemeStore};
use calc_widget::tui::{render, CalcApp, CalcUi, InputHandler, KeyAction};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileThemeStore::new();
    let saved_theme = store.as_ref().and_then(|s| s.load()).unwrap_or_default();

    let mut app = CalcApp::with_theme(saved_theme);
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        let theme_before = app.theme();
        match event::read()? {
            Event::Key(key) => app.handle_action(input_handler.handle_key(key)),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(event::MouseButton::Left) => {
                let size = terminal.size()?;
                let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                app.handle_click(CalcUi::keypad_area(area), mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.theme() != theme_before {
            persist_theme(&mut store, app.theme());
        }
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn persist_theme(store: &mut Option<FileThemeStore>, theme: Theme) {
    if let Some(store) = store {
        store.save(theme);
    }
}
