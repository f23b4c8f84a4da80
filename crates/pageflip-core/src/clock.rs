#![forbid(unsafe_code)]

//! Wall-clock frame deltas for real-time hosts.

use std::time::Duration;

use web_time::Instant;

/// Produces the elapsed time between consecutive calls.
///
/// Sessions are tick-driven and never read a clock; a host that wants
/// real-time playback feeds [`delta`](Self::delta) into each tick. Uses
/// `web_time::Instant`, so the same loop works on wasm targets.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    /// Start the clock at the current instant.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time elapsed since the previous call (or since construction).
    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt
    }

    /// Discard elapsed time so the next delta starts from now.
    ///
    /// Useful after a pause, so the first resumed frame does not jump.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
