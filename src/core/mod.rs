pub mod world;
pub mod config;
pub mod storage;
pub mod timestep;
pub mod clock;

pub use self::world::PhysicsWorld;
pub use self::config::{SimulationConfig, DEFAULT_GRAVITY_SCALE, STANDARD_GRAVITY};
pub use self::storage::BodyStorage;
pub use self::timestep::FixedTimestep;
pub use self::clock::{SystemClock, TimeSource};

use bitflags::bitflags;

/// A unique identifier for a body in the physics world
///
/// Handles are insertion indices and stay valid until the world is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    /// Returns the insertion index of the body
    pub fn index(&self) -> usize {
        self.0
    }
}

bitflags! {
    /// Auxiliary drawing a renderer may layer over the bodies
    ///
    /// The simulation never reads these; they only gate debug output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u32 {
        /// Text overlay (step count, body count, timing)
        const OVERLAY = 0x01;

        /// Contact points of the last step
        const CONTACTS = 0x02;

        /// Contact normals of the last step
        const NORMALS = 0x04;
    }
}
