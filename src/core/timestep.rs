use tracing::warn;

use crate::core::{PhysicsWorld, SimulationConfig, TimeSource};

/// Fixed-timestep accumulator driving a `PhysicsWorld` from real elapsed time
///
/// Elapsed time is banked and spent in whole steps. The bank is capped so a
/// long stall costs at most a bounded number of catch-up steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Length of one step
    dt: f32,

    /// Upper bound of the accumulator
    max_accumulated: f32,

    /// Banked, not yet simulated time
    accumulator: f32,

    /// When set, steps only run after `request_step`
    frame_stepping: bool,

    /// A single step has been requested in frame-stepping mode
    can_step: bool,
}

impl FixedTimestep {
    /// Creates an accumulator for steps of `dt` seconds
    pub fn new(dt: f32, max_accumulated: f32) -> Self {
        Self {
            dt,
            max_accumulated,
            accumulator: 0.0,
            frame_stepping: false,
            can_step: false,
        }
    }

    /// Creates an accumulator matching the world configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.time_step, config.max_accumulated_time)
    }

    /// Returns the banked time
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Returns whether frame-stepping mode is on
    pub fn is_frame_stepping(&self) -> bool {
        self.frame_stepping
    }

    /// Turns frame-stepping mode on or off
    pub fn set_frame_stepping(&mut self, enabled: bool) {
        self.frame_stepping = enabled;
        self.can_step = false;
    }

    /// In frame-stepping mode, allows the next available step to run
    pub fn request_step(&mut self) {
        self.can_step = true;
    }

    /// Banks `elapsed` seconds and runs as many whole steps as it pays for
    ///
    /// Returns the number of `step` calls made on the world.
    pub fn advance(&mut self, world: &mut PhysicsWorld, elapsed: f32) -> u32 {
        let banked = self.accumulator + elapsed;
        self.accumulator = banked.clamp(0.0, self.max_accumulated);
        if banked > self.max_accumulated {
            warn!(banked, max = self.max_accumulated, "simulation falling behind, dropping time");
        }

        let mut steps = 0;
        while self.accumulator >= self.dt {
            if !self.frame_stepping {
                world.step();
                steps += 1;
            } else if self.can_step {
                world.step();
                self.can_step = false;
                steps += 1;
            }
            self.accumulator -= self.dt;
        }

        steps
    }

    /// Reads the time source and advances the world
    pub fn run_frame<T: TimeSource>(&mut self, world: &mut PhysicsWorld, clock: &mut T) -> u32 {
        let elapsed = clock.elapsed_seconds();
        self.advance(world, elapsed)
    }
}
