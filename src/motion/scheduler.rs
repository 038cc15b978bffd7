//! Throttled regeneration decisions for the animation loop

use crate::io::configuration::REGENERATION_INTERVAL_MS;

/// Decides when a full pipeline rerun is due
///
/// The first request after construction (or whenever no result exists)
/// fires immediately; afterwards reruns are spaced at least one interval
/// apart. This decouples fine-grained modulator updates from the
/// comparatively expensive full-pipeline rerender cadence.
#[derive(Clone, Copy, Debug)]
pub struct RegenerationGate {
    interval_ms: f64,
    last_run_ms: Option<f64>,
}

impl Default for RegenerationGate {
    fn default() -> Self {
        Self::new(REGENERATION_INTERVAL_MS)
    }
}

impl RegenerationGate {
    /// Create a gate with a custom rerun interval in milliseconds
    pub const fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
        }
    }

    /// Decide whether a rerun is due at `now_ms`
    ///
    /// Records the timestamp when approving, so back-to-back calls within
    /// one interval approve at most once. A missing result always runs.
    pub fn should_run(&mut self, now_ms: f64, has_result: bool) -> bool {
        let due = !has_result
            || self
                .last_run_ms
                .is_none_or(|last| now_ms - last >= self.interval_ms);
        if due {
            self.last_run_ms = Some(now_ms);
        }
        due
    }

    /// Forget the last run so the next request fires immediately
    pub const fn reset(&mut self) {
        self.last_run_ms = None;
    }
}
