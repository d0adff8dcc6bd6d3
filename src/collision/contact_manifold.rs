use crate::bodies::RigidBody;
use crate::collision::collision_pair::CollisionPair;
use crate::collision::narrow_phase;
use crate::math::{Vector2, EPSILON};

/// Maximum number of contact points to store in a manifold
pub const MAX_CONTACT_POINTS: usize = 2;

/// Contact geometry and mixed material coefficients for one touching pair
///
/// A manifold lives for a single step: `solve` fills the geometry,
/// `initialize` mixes the materials, `apply_impulse` runs once per solver
/// iteration and `positional_correction` runs once at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactManifold {
    /// The collision pair this manifold belongs to
    pub pair: CollisionPair,

    /// Contact normal, pointing from body A to body B
    pub normal: Vector2,

    /// Depth of penetration along the normal
    pub penetration: f32,

    /// Contact points in world space; only the first `contact_count` are valid
    pub contacts: [Vector2; MAX_CONTACT_POINTS],

    /// Number of valid contact points
    pub contact_count: usize,

    /// Mixed restitution
    pub restitution: f32,

    /// Mixed static friction
    pub static_friction: f32,

    /// Mixed dynamic friction
    pub dynamic_friction: f32,
}

impl ContactManifold {
    /// Creates a new, empty contact manifold for the given collision pair
    pub fn new(pair: CollisionPair) -> Self {
        Self {
            pair,
            normal: Vector2::zero(),
            penetration: 0.0,
            contacts: [Vector2::zero(); MAX_CONTACT_POINTS],
            contact_count: 0,
            restitution: 0.0,
            static_friction: 0.0,
            dynamic_friction: 0.0,
        }
    }

    /// Returns the valid contact points
    pub fn get_contacts(&self) -> &[Vector2] {
        &self.contacts[..self.contact_count]
    }

    /// Returns whether the manifold is empty
    pub fn is_empty(&self) -> bool {
        self.contact_count == 0
    }

    /// Runs narrow-phase detection for the pair and fills in the contact geometry
    pub fn solve(&mut self, body_a: &RigidBody, body_b: &RigidBody) {
        narrow_phase::collide(self, body_a, body_b);
    }

    /// Mixes the material coefficients and detects resting contact
    ///
    /// Restitution is dropped to zero when the relative velocity at any contact
    /// is no larger than what gravity alone adds in one step.
    pub fn initialize(&mut self, body_a: &RigidBody, body_b: &RigidBody, dt: f32, gravity: Vector2) {
        let material_a = body_a.get_material();
        let material_b = body_b.get_material();

        self.restitution = material_a.restitution.min(material_b.restitution);
        self.static_friction = (material_a.static_friction * material_b.static_friction).sqrt();
        self.dynamic_friction = (material_a.dynamic_friction * material_b.dynamic_friction).sqrt();

        let resting_threshold = (gravity * dt).length_squared() + EPSILON;
        let resting = self.get_contacts().iter().any(|contact| {
            let ra = *contact - body_a.get_position();
            let rb = *contact - body_b.get_position();
            let rv = body_b.velocity_at(rb) - body_a.velocity_at(ra);
            rv.length_squared() < resting_threshold
        });

        if resting {
            self.restitution = 0.0;
        }
    }

    /// Clears all contacts from the manifold
    pub fn clear(&mut self) {
        self.contact_count = 0;
        self.penetration = 0.0;
        self.normal = Vector2::zero();
    }
}
