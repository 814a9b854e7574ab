//! Stopwatch widget with lap timing.
//!
//! The core is a clock-injected state machine: start/pause/lap/reset take
//! the caller's "now" in milliseconds, so behavior is fully deterministic
//! under test and the frontend owns the tick. The TUI frontend (feature
//! `tui`, default) redraws on a short poll interval.
//!
//! ```rust
//! use stopwatch_widget::core::{format_elapsed, Stopwatch};
//!
//! let mut watch = Stopwatch::new();
//! watch.start(0);
//! watch.lap(1_500);
//! watch.pause(4_000);
//! assert_eq!(watch.elapsed_at(9_999), 4_000);
//! assert_eq!(format_elapsed(watch.laps()[0].total_ms), "00:00:01.50");
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{format_elapsed, Controls, Lap, LapRow, Stopwatch};
pub use crate::theme::Theme;
