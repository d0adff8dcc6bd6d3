mod collision_pair;
mod broad_phase;
mod contact_manifold;
mod contact_solver;
mod polygon_clipping;
pub mod narrow_phase;

pub use self::collision_pair::CollisionPair;
pub use self::broad_phase::{BroadPhase, BruteForceBroadPhase};
pub use self::contact_manifold::{ContactManifold, MAX_CONTACT_POINTS};
pub use self::contact_solver::{ContactSolver, SequentialImpulseSolver};
pub use self::polygon_clipping::polygon_to_polygon;
