//! Calculator widget: a chained-operation calculator with TUI and browser
//! frontends.
//!
//! The interesting part is the input state machine in [`core`]: it sequences
//! digit entry, operator chaining, operator replacement, repeat-equals, and
//! error recovery, and projects a display snapshot after every command. The
//! frontends are glue over that machine: a ratatui keypad UI (feature `tui`,
//! default) and a browser widget (feature `wasm`) that shares its logic with
//! a mock DOM so it tests headless.
//!
//! # Example
//!
//! ```rust
//! use calc_widget::core::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.press_digit(5);
//! calc.select_operator(Operator::Add);
//! calc.press_digit(3);
//! calc.evaluate();
//! assert_eq!(calc.display_result(), "8");
//!
//! // Equals again repeats the last operation.
//! calc.evaluate();
//! assert_eq!(calc.display_result(), "11");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

pub mod wasm;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        format_number, ArithmeticError, Calculator, Command, DisplaySnapshot, Operator,
        ERROR_DISPLAY,
    };
    pub use crate::driver::{script, CalcDriver};
    pub use crate::theme::{MemoryThemeStore, Theme, ThemeStore};
    pub use crate::wasm::{CalculatorWidget, DomEvent, MockDom};

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalcApp, InputHandler, KeyAction};
}
