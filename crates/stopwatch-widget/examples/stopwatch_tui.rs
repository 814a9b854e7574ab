//! Stopwatch TUI.
//!
//! Run with: cargo run --example stopwatch_tui

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use stopwatch_widget::theme::FileThemeStore;
use stopwatch_widget::tui::{render, InputHandler, StopwatchApp};

const TICK: Duration = Duration::from_millis(33);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileThemeStore::new();
    let saved_theme = store.as_ref().and_then(|s| s.load()).unwrap_or_default();

    let mut app = StopwatchApp::with_theme(saved_theme);
    let input_handler = InputHandler::new();
    let epoch = Instant::now();
    let now_ms = |epoch: Instant| epoch.elapsed().as_millis() as u64;

    loop {
        terminal.draw(|f| render(&app, now_ms(epoch), f))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                let theme_before = app.theme();
                app.handle_action(input_handler.handle_key(key), now_ms(epoch));
                if app.theme() != theme_before {
                    if let Some(store) = &store {
                        store.save(app.theme());
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
