//! Self-resetting progress counter that paces rate refreshes.

use std::time::Duration;

use crate::consts::{PROGRESS_PER_MS, PROGRESS_WRAP};

/// Progress toward the next refresh, in `[0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    value: f64,
}

impl Progress {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advance by one animation frame of length `delta`.
    ///
    /// Returns `true` when the counter wrapped on this tick; the value is
    /// reset to zero and the caller should refresh.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.value > PROGRESS_WRAP {
            self.value = 0.0;
            return true;
        }
        let elapsed_ms = delta.as_secs_f64() * 1000.0;
        self.value = (self.value + elapsed_ms * PROGRESS_PER_MS) % 1.0;
        false
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
