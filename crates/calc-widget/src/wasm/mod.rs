//! Browser frontend for the calculator widget.
//!
//! The mock DOM and the widget glue are always compiled so the browser
//! behavior is unit-testable without a browser; only the web-sys bindings
//! sit behind the `wasm` feature.

pub mod dom;
pub mod keypad;
pub mod widget;

#[cfg(feature = "wasm")]
pub mod browser;

pub use dom::{DomElement, DomEvent, MockDom};
pub use keypad::{ButtonMap, ButtonSpec};
pub use widget::CalculatorWidget;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
