/// Loading screen duration used by the site.
pub const DEFAULT_DURATION_MS: u64 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One frame's view of the countdown.
pub struct ProgressSample {
    /// Progress in `[0, 100]`.
    pub percent: f64,
    /// Set on exactly one sample: the first one at or past the duration.
    pub just_completed: bool,
}

/// Time-driven progress from 0 to 100 over a fixed duration.
///
/// The first sample fixes the start time, so the countdown begins on the first
/// frame after mount rather than at construction.
#[derive(Clone, Debug)]
pub struct ProgressCountdown {
    duration_ms: f64,
    start_ms: Option<f64>,
    completed: bool,
}

impl ProgressCountdown {
    /// Countdown lasting `duration_ms` milliseconds.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms: duration_ms as f64,
            start_ms: None,
            completed: false,
        }
    }

    /// Configured duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Whether completion has already been reported.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Sample at frame time `now_ms` (monotonic clock, milliseconds).
    pub fn sample(&mut self, now_ms: f64) -> ProgressSample {
        if self.completed {
            return ProgressSample {
                percent: 100.0,
                just_completed: false,
            };
        }

        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        if elapsed >= self.duration_ms {
            self.completed = true;
            tracing::debug!(elapsed_ms = elapsed, "loading countdown complete");
            return ProgressSample {
                percent: 100.0,
                just_completed: true,
            };
        }

        ProgressSample {
            percent: (elapsed / self.duration_ms * 100.0).min(100.0),
            just_completed: false,
        }
    }
}

impl Default for ProgressCountdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loading/countdown.rs"]
mod tests;
