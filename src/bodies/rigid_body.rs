use crate::bodies::{Material, RigidBodyType};
use crate::core::BodyHandle;
use crate::math::{cross_sv, Vector2};
use crate::shapes::{MassProperties, Shape};

/// Type alias for a handle to a rigid body
pub type RigidBodyHandle = BodyHandle;

/// A rigid body for physics simulation
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's collision shape
    shape: Shape,

    /// Position of the center of mass in world space
    position: Vector2,

    /// The body's linear velocity
    velocity: Vector2,

    /// Forces accumulated for the current step
    force: Vector2,

    /// Rotation in radians
    orientation: f32,

    /// The body's angular velocity in radians per second
    angular_velocity: f32,

    /// Torque accumulated for the current step
    torque: f32,

    /// Mass, inertia and their inverses
    mass: MassProperties,

    /// The body's material properties
    material: Material,
}

impl RigidBody {
    /// Creates a new dynamic rigid body with the given shape and position
    ///
    /// Mass properties are derived from the shape and the default material's density.
    pub fn new(shape: Shape, position: Vector2) -> Self {
        Self::with_material(shape, position, Material::default())
    }

    /// Creates a new dynamic rigid body with an explicit material
    pub fn with_material(mut shape: Shape, position: Vector2, material: Material) -> Self {
        let mass = shape.compute_mass(material.density);

        Self {
            shape,
            position,
            velocity: Vector2::zero(),
            force: Vector2::zero(),
            orientation: 0.0,
            angular_velocity: 0.0,
            torque: 0.0,
            mass,
            material,
        }
    }

    /// Creates a new static rigid body with the given shape and position
    pub fn new_static(shape: Shape, position: Vector2) -> Self {
        let mut body = Self::new(shape, position);
        body.set_static();
        body
    }

    /// Returns the body's collision shape
    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's orientation in radians
    pub fn get_orientation(&self) -> f32 {
        self.orientation
    }

    /// Sets the orientation and forwards it to the shape
    pub fn set_orientation(&mut self, radians: f32) {
        self.orientation = radians;
        self.shape.set_orientation(radians);
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    /// Velocity of a point at `lever_arm` from the center of mass
    #[inline]
    pub fn velocity_at(&self, lever_arm: Vector2) -> Vector2 {
        self.velocity + cross_sv(self.angular_velocity, lever_arm)
    }

    /// Returns the accumulated force
    pub fn get_force(&self) -> Vector2 {
        self.force
    }

    /// Returns the accumulated torque
    pub fn get_torque(&self) -> f32 {
        self.torque
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Sets the body's material
    ///
    /// Dynamic bodies have their mass recomputed from the new density.
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        if !self.is_static() {
            self.mass = self.shape.compute_mass(material.density);
        }
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass.mass
    }

    /// Returns the body's inverse mass
    pub fn get_inverse_mass(&self) -> f32 {
        self.mass.inv_mass
    }

    /// Returns the body's rotational inertia
    pub fn get_inertia(&self) -> f32 {
        self.mass.inertia
    }

    /// Returns the body's inverse rotational inertia
    pub fn get_inverse_inertia(&self) -> f32 {
        self.mass.inv_inertia
    }

    /// Returns the mass properties as a whole
    pub fn get_mass_properties(&self) -> MassProperties {
        self.mass
    }

    /// Returns whether the body has infinite mass
    pub fn is_static(&self) -> bool {
        self.mass.inv_mass == 0.0
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        if self.is_static() {
            RigidBodyType::Static
        } else {
            RigidBodyType::Dynamic
        }
    }

    /// Makes the body immovable by zeroing its mass and inertia
    pub fn set_static(&mut self) {
        self.mass = MassProperties::infinite();
    }

    /// Adds a force to be applied during the next step
    pub fn apply_force(&mut self, force: Vector2) {
        self.force += force;
    }

    /// Adds a torque to be applied during the next step
    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Applies an impulse at `contact_vector` from the center of mass
    pub fn apply_impulse(&mut self, impulse: Vector2, contact_vector: Vector2) {
        self.velocity += impulse * self.mass.inv_mass;
        self.angular_velocity += self.mass.inv_inertia * contact_vector.cross(&impulse);
    }

    /// Integrates half a step of forces and gravity into the velocities
    pub fn integrate_forces(&mut self, gravity: Vector2, dt: f32) {
        if self.is_static() {
            return;
        }

        let half_dt = dt / 2.0;
        self.velocity += (self.force * self.mass.inv_mass + gravity) * half_dt;
        self.angular_velocity += self.torque * self.mass.inv_inertia * half_dt;
    }

    /// Integrates velocities into position and orientation, then the second half step of forces
    pub fn integrate_velocity(&mut self, gravity: Vector2, dt: f32) {
        if self.is_static() {
            return;
        }

        self.position += self.velocity * dt;
        self.set_orientation(self.orientation + self.angular_velocity * dt);
        self.integrate_forces(gravity, dt);
    }

    /// Clears the accumulated force and torque
    pub fn clear_forces(&mut self) {
        self.force = Vector2::zero();
        self.torque = 0.0;
    }

    /// Moves the body by `offset` (used by positional correction)
    pub(crate) fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }

    /// Zeroes the linear velocity
    pub(crate) fn stop(&mut self) {
        self.velocity = Vector2::zero();
    }
}
