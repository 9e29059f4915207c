//! Tick timer - monotonic elapsed-tick source.
//!
//! Converts wall-clock time since creation into whole logical ticks at the
//! fixed simulation rate. The counter is monotonically non-decreasing; the
//! game loop computes deltas between successive reads and replays that many
//! simulation steps.

use std::time::Instant;

use blockfall_types::TICK_RATE;

/// Whole logical ticks contained in an elapsed duration.
#[inline]
pub fn ticks_from_millis(millis: u64) -> u64 {
    millis * TICK_RATE / 1000
}

/// Wall-clock backed tick counter.
#[derive(Debug, Clone)]
pub struct TickTimer {
    start: Instant,
}

impl TickTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed logical ticks since this timer was created.
    pub fn elapsed_ticks(&self) -> u64 {
        ticks_from_millis(self.start.elapsed().as_millis() as u64)
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
