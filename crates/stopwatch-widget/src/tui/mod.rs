//! Terminal frontend for the stopwatch widget.

pub mod app;
pub mod input;
pub mod ui;

pub use app::StopwatchApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, StopwatchUi};
