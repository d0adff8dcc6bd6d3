use std::time::Instant;

/// Source of elapsed wall-clock time for the fixed-timestep loop
pub trait TimeSource {
    /// Seconds elapsed since the previous call (or since creation, on the first call)
    fn elapsed_seconds(&mut self) -> f32;
}

/// Wall clock backed by `std::time::Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    /// Creates a clock that starts counting now
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn elapsed_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        elapsed
    }
}
