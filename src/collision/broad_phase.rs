use crate::bodies::RigidBody;
use crate::collision::collision_pair::CollisionPair;
use crate::core::{BodyHandle, BodyStorage};

/// Trait for broad-phase collision detection algorithms
pub trait BroadPhase {
    /// Updates the broad-phase with the current body states
    fn update(&mut self, bodies: &BodyStorage<RigidBody>);

    /// Gets all potential collision pairs
    fn get_collision_pairs(&self) -> Vec<CollisionPair>;
}

/// Exhaustive broad phase: every unordered pair is a candidate
///
/// Pairs of two static bodies are skipped since neither can respond. Pairs
/// come out with the lower handle as body A.
#[derive(Debug, Default)]
pub struct BruteForceBroadPhase {
    /// Handles in insertion order, with whether each body is static
    bodies: Vec<(BodyHandle, bool)>,
}

impl BruteForceBroadPhase {
    /// Creates a new brute-force broad-phase
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
        }
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn update(&mut self, bodies: &BodyStorage<RigidBody>) {
        self.bodies.clear();
        self.bodies
            .extend(bodies.iter().map(|(handle, body)| (handle, body.is_static())));
    }

    fn get_collision_pairs(&self) -> Vec<CollisionPair> {
        let mut pairs = Vec::new();

        for i in 0..self.bodies.len() {
            let (handle_a, static_a) = self.bodies[i];

            for &(handle_b, static_b) in &self.bodies[i + 1..] {
                if static_a && static_b {
                    continue;
                }

                pairs.push(CollisionPair::new(handle_a, handle_b));
            }
        }

        pairs
    }
}
