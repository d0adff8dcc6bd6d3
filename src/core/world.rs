use tracing::debug;

use crate::bodies::{Material, RigidBody};
use crate::collision::{
    BroadPhase, BruteForceBroadPhase, ContactManifold, ContactSolver, SequentialImpulseSolver,
};
use crate::core::{BodyHandle, BodyStorage, DebugFlags, SimulationConfig};
use crate::math::Vector2;
use crate::shapes::Shape;
use crate::Result;

/// The physics world: owns every body and advances them in fixed steps
pub struct PhysicsWorld {
    /// All rigid bodies in the world, in insertion order
    bodies: BodyStorage<RigidBody>,

    /// Manifolds with at least one contact from the last step
    contacts: Vec<ContactManifold>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Pair enumeration
    broad_phase: Box<dyn BroadPhase>,

    /// Auxiliary drawing toggles for renderers
    debug_flags: DebugFlags,

    /// The total elapsed simulation time
    time: f32,

    /// Number of completed steps
    step_count: u64,
}

impl PhysicsWorld {
    /// Creates a new physics world with the given fixed step and solver iteration count
    pub fn new(time_step: f32, iterations: u32) -> Self {
        Self::with_config(SimulationConfig::new(time_step, iterations))
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            contacts: Vec::new(),
            config,
            broad_phase: Box::new(BruteForceBroadPhase::new()),
            debug_flags: DebugFlags::empty(),
            time: 0.0,
            step_count: 0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the number of steps taken so far
    pub fn get_step_count(&self) -> u64 {
        self.step_count
    }

    /// Sets the gravity for the simulation
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity
    pub fn get_gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Returns the fixed time step
    pub fn get_time_step(&self) -> f32 {
        self.config.time_step
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Creates a body from `shape` at `(x, y)` and adds it to the world
    ///
    /// The body's mass comes from the configured default density.
    pub fn add(&mut self, shape: Shape, x: f32, y: f32) -> BodyHandle {
        let material = Material::default().with_density(self.config.default_density);
        self.add_body(RigidBody::with_material(shape, Vector2::new(x, y), material))
    }

    /// Adds a rigid body to the world and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        debug!(?handle, bodies = self.bodies.len(), "body added");
        handle
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns all bodies in insertion order
    pub fn get_bodies(&self) -> &[RigidBody] {
        self.bodies.as_slice()
    }

    /// Returns the manifolds that had contacts during the last step
    pub fn get_contacts(&self) -> &[ContactManifold] {
        &self.contacts
    }

    /// Returns the debug drawing flags
    pub fn get_debug_flags(&self) -> DebugFlags {
        self.debug_flags
    }

    /// Sets the debug drawing flags
    pub fn set_debug_flags(&mut self, flags: DebugFlags) {
        self.debug_flags = flags;
    }

    /// Returns whether the debug overlay is enabled
    pub fn is_debug_mode(&self) -> bool {
        self.debug_flags.contains(DebugFlags::OVERLAY)
    }

    /// Enables or disables the debug overlay
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug_flags.set(DebugFlags::OVERLAY, enabled);
    }

    /// Advances the simulation by exactly one fixed time step
    pub fn step(&mut self) {
        let dt = self.config.time_step;
        let gravity = self.config.gravity;

        // Generate new collision info
        self.contacts.clear();
        self.broad_phase.update(&self.bodies);
        for pair in self.broad_phase.get_collision_pairs() {
            let (Some(body_a), Some(body_b)) = (self.bodies.get(pair.body_a), self.bodies.get(pair.body_b)) else {
                continue;
            };

            let mut manifold = ContactManifold::new(pair);
            manifold.solve(body_a, body_b);
            if manifold.contact_count > 0 {
                self.contacts.push(manifold);
            }
        }

        // First half of force integration
        for (_, body) in self.bodies.iter_mut() {
            body.integrate_forces(gravity, dt);
        }

        let mut solver = SequentialImpulseSolver::from_config(&self.config);
        solver.prepare(&mut self.contacts, &self.bodies, dt);
        solver.solve_velocity(&self.contacts, &mut self.bodies);
        solver.solve_position(&self.contacts, &mut self.bodies);

        // Positions, orientations and the second half of force integration
        for (_, body) in self.bodies.iter_mut() {
            body.integrate_velocity(gravity, dt);
        }

        for (_, body) in self.bodies.iter_mut() {
            body.clear_forces();
        }

        self.time += dt;
        self.step_count += 1;

        debug!(
            step = self.step_count,
            bodies = self.bodies.len(),
            manifolds = self.contacts.len(),
            "world stepped"
        );
    }

    /// Clears the world of all bodies and contacts
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.contacts.clear();
        self.time = 0.0;
        self.step_count = 0;
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::with_config(SimulationConfig::default())
    }
}
