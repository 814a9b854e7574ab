//! Stopwatch core: a tick-free state machine over an injected clock.
//!
//! Every operation takes the caller's notion of "now" in milliseconds, so
//! the core never reads a clock and tests run on a scripted timeline. The
//! frontend supplies monotonic milliseconds and re-renders on its own tick.

pub mod format;

pub use format::format_elapsed;

use serde::Serialize;

/// One recorded lap: the cumulative elapsed time at the moment of the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lap {
    /// 1-based lap number.
    pub number: u32,
    /// Total elapsed milliseconds when the lap was recorded.
    pub total_ms: u64,
}

/// A lap prepared for display: its own duration plus the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LapRow {
    /// 1-based lap number.
    pub number: u32,
    /// Time since the previous lap (or since start for the first).
    pub split_ms: u64,
    /// Total elapsed milliseconds when the lap was recorded.
    pub total_ms: u64,
}

/// Labels and enabled-flags for the three control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// `"Start"`, `"Pause"`, or `"Resume"`.
    pub start_pause_label: &'static str,
    /// Laps can only be recorded while running.
    pub lap_enabled: bool,
    /// Reset is refused while running or when nothing has elapsed.
    pub reset_enabled: bool,
}

/// The stopwatch state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    running: bool,
    /// Clock reading at the last start/resume; meaningful while running.
    started_at: u64,
    /// Elapsed time banked across pauses.
    elapsed_ms: u64,
    laps: Vec<Lap>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or resumes. No-op while already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        self.running = true;
        self.started_at = now_ms;
    }

    /// Pauses, banking the elapsed time. No-op while stopped.
    pub fn pause(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        self.running = false;
        self.elapsed_ms += now_ms.saturating_sub(self.started_at);
    }

    /// Start/pause toggle, the primary control.
    pub fn toggle(&mut self, now_ms: u64) {
        if self.running {
            self.pause(now_ms);
        } else {
            self.start(now_ms);
        }
    }

    /// Records a lap at the current total. No-op while stopped.
    pub fn lap(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        let number = self.laps.len() as u32 + 1;
        let total_ms = self.elapsed_at(now_ms);
        self.laps.push(Lap { number, total_ms });
    }

    /// Resets to zero and drops laps. Refused while running.
    pub fn reset(&mut self) {
        if self.running {
            return;
        }
        *self = Self::default();
    }

    /// Banks the running time and restarts the mark, without pausing.
    ///
    /// Hosts call this when their tick source is interrupted (the browser
    /// original does it when the page is hidden) so no time is lost.
    pub fn rebase(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        self.elapsed_ms += now_ms.saturating_sub(self.started_at);
        self.started_at = now_ms;
    }

    /// Total elapsed milliseconds as of `now_ms`.
    #[must_use]
    pub fn elapsed_at(&self, now_ms: u64) -> u64 {
        if self.running {
            self.elapsed_ms + now_ms.saturating_sub(self.started_at)
        } else {
            self.elapsed_ms
        }
    }

    /// Whether the stopwatch is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Recorded laps, oldest first.
    #[must_use]
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    /// Laps with per-lap splits, oldest first.
    #[must_use]
    pub fn lap_rows(&self) -> Vec<LapRow> {
        let mut previous_total = 0;
        self.laps
            .iter()
            .map(|lap| {
                let split_ms = lap.total_ms.saturating_sub(previous_total);
                previous_total = lap.total_ms;
                LapRow {
                    number: lap.number,
                    split_ms,
                    total_ms: lap.total_ms,
                }
            })
            .collect()
    }

    /// Current control-button state.
    #[must_use]
    pub fn controls(&self) -> Controls {
        let start_pause_label = if self.running {
            "Pause"
        } else if self.elapsed_ms > 0 {
            "Resume"
        } else {
            "Start"
        };
        Controls {
            start_pause_label,
            lap_enabled: self.running,
            reset_enabled: !self.running && self.elapsed_ms > 0,
        }
    }
}
