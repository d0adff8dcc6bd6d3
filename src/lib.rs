pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, DebugFlags, FixedTimestep, PhysicsWorld, SimulationConfig};
pub use crate::bodies::{RigidBody, RigidBodyType, RigidBodyHandle, Material};
pub use crate::math::{Matrix2, Vector2};
pub use crate::shapes::{Circle, Polygon, Shape};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Polygon needs at least 3 vertices, got {0}")]
        TooFewVertices(usize),

        #[error("Polygon supports at most 64 vertices, got {0}")]
        TooManyVertices(usize),

        #[error("Polygon edge {0} has zero length")]
        DegenerateEdge(usize),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
