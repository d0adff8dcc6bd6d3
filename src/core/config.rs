use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Standard gravity in world units per second squared
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Default multiplier on standard gravity; world units are screen pixels
pub const DEFAULT_GRAVITY_SCALE: f32 = 5.0;

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed time step advanced by every call to `step`
    pub time_step: f32,

    /// Number of impulse passes over all contacts per step
    pub iterations: u32,

    /// Gravitational acceleration; positive y points down the screen
    pub gravity: Vector2,

    /// Penetration tolerated without positional correction
    pub penetration_slop: f32,

    /// Fraction of the remaining penetration removed per step
    pub correction_percent: f32,

    /// Density used for bodies added through `PhysicsWorld::add`
    pub default_density: f32,

    /// Upper bound on real time banked by the fixed-timestep accumulator
    pub max_accumulated_time: f32,
}

impl SimulationConfig {
    /// Creates the default configuration with the given step and iteration count
    pub fn new(time_step: f32, iterations: u32) -> Self {
        Self {
            time_step,
            iterations,
            ..Self::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            iterations: 10,
            gravity: Vector2::new(0.0, STANDARD_GRAVITY * DEFAULT_GRAVITY_SCALE),
            penetration_slop: 0.05,
            correction_percent: 0.4,
            default_density: 1.0,
            max_accumulated_time: 0.1,
        }
    }
}
