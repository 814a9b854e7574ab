//! Terminal frontend for the calculator widget.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::CalcApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalcUi};
