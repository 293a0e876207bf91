//! Animated numeric counter.
//!
//! [`CounterState::tick`] is the pure step function: given the elapsed time
//! since the run started it produces the next display value. [`Counter`]
//! drives it from a background tick thread and owns the cancellation.

mod driver;
mod easing;

pub use driver::{Counter, FrameSink};
pub use easing::Easing;

use std::time::Duration;

use crate::render::counter_text;

/// Input for one animation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    /// Total animation time. Zero or negative completes on the first tick.
    pub duration_ms: i64,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: i64, duration_ms: i64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            duration_ms,
            suffix: suffix.into(),
        }
    }

    /// Normalized progress in `[0, 1]` after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration_ms <= 0 {
            return 1.0;
        }
        let total = Duration::from_millis(self.duration_ms as u64);
        if elapsed >= total {
            return 1.0;
        }
        elapsed.as_nanos() as f64 / total.as_nanos() as f64
    }

    /// The text shown once the run has completed.
    pub fn final_text(&self) -> String {
        counter_text(self.target, &self.suffix)
    }

    fn bounds(&self) -> (i64, i64) {
        (self.target.min(0), self.target.max(0))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub display_value: i64,
    pub is_running: bool,
}

impl CounterState {
    /// State at the start of a run.
    pub fn started() -> Self {
        Self {
            display_value: 0,
            is_running: true,
        }
    }

    /// Advance to `elapsed` and return the new display value.
    ///
    /// Returns `None` once the run is over; a finished state never changes
    /// again.
    pub fn tick(&mut self, spec: &CounterSpec, easing: Easing, elapsed: Duration) -> Option<i64> {
        if !self.is_running {
            return None;
        }

        let progress = spec.progress(elapsed);
        if progress >= 1.0 {
            self.display_value = spec.target;
            self.is_running = false;
        } else {
            let (lo, hi) = spec.bounds();
            let raw = (easing.apply(progress) * spec.target as f64).round() as i64;
            self.display_value = raw.clamp(lo, hi);
        }
        Some(self.display_value)
    }

    pub fn text(&self, suffix: &str) -> String {
        counter_text(self.display_value, suffix)
    }
}
