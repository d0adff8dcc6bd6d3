use crate::bodies::RigidBody;
use crate::collision::contact_manifold::ContactManifold;
use crate::core::{BodyStorage, SimulationConfig};
use crate::math::{approx_eq, sqr, Vector2};

/// Trait for contact constraint solvers
pub trait ContactSolver {
    /// Prepares the solver for the given contacts
    fn prepare(&mut self, contacts: &mut [ContactManifold], bodies: &BodyStorage<RigidBody>, dt: f32);

    /// Solves velocity constraints
    fn solve_velocity(&mut self, contacts: &[ContactManifold], bodies: &mut BodyStorage<RigidBody>);

    /// Solves position constraints
    fn solve_position(&mut self, contacts: &[ContactManifold], bodies: &mut BodyStorage<RigidBody>);
}

/// Sequential impulse-based contact solver
///
/// Every iteration walks all manifolds once, in order, applying each
/// contact's impulse immediately. There is no convergence check and no
/// warm starting between steps.
#[derive(Debug, Clone)]
pub struct SequentialImpulseSolver {
    /// Number of passes over all contacts
    iterations: u32,

    /// Gravity, used to detect resting contacts
    gravity: Vector2,

    /// Penetration allowed without positional correction
    slop: f32,

    /// Fraction of the remaining penetration corrected per step
    percent: f32,
}

impl SequentialImpulseSolver {
    /// Creates a new sequential impulse solver
    pub fn new(iterations: u32, gravity: Vector2, slop: f32, percent: f32) -> Self {
        Self {
            iterations,
            gravity,
            slop,
            percent,
        }
    }

    /// Creates a solver from the simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.iterations,
            config.gravity,
            config.penetration_slop,
            config.correction_percent,
        )
    }
}

impl ContactSolver for SequentialImpulseSolver {
    fn prepare(&mut self, contacts: &mut [ContactManifold], bodies: &BodyStorage<RigidBody>, dt: f32) {
        for manifold in contacts {
            let (Some(body_a), Some(body_b)) = (bodies.get(manifold.pair.body_a), bodies.get(manifold.pair.body_b)) else {
                continue;
            };

            manifold.initialize(body_a, body_b, dt, self.gravity);
        }
    }

    fn solve_velocity(&mut self, contacts: &[ContactManifold], bodies: &mut BodyStorage<RigidBody>) {
        for _ in 0..self.iterations {
            for manifold in contacts {
                if let Some((body_a, body_b)) = bodies.get_pair_mut(manifold.pair.body_a, manifold.pair.body_b) {
                    manifold.apply_impulse(body_a, body_b);
                }
            }
        }
    }

    fn solve_position(&mut self, contacts: &[ContactManifold], bodies: &mut BodyStorage<RigidBody>) {
        for manifold in contacts {
            if let Some((body_a, body_b)) = bodies.get_pair_mut(manifold.pair.body_a, manifold.pair.body_b) {
                manifold.positional_correction(body_a, body_b, self.slop, self.percent);
            }
        }
    }
}

impl ContactManifold {
    /// Applies one pass of normal and friction impulses at every contact point
    pub fn apply_impulse(&self, body_a: &mut RigidBody, body_b: &mut RigidBody) {
        if body_a.is_static() && body_b.is_static() {
            self.infinite_mass_correction(body_a, body_b);
            return;
        }

        let normal = self.normal;
        let contact_count = self.contact_count as f32;

        for contact in self.get_contacts() {
            // Lever arms from each center of mass to the contact
            let ra = *contact - body_a.get_position();
            let rb = *contact - body_b.get_position();

            let rv = body_b.velocity_at(rb) - body_a.velocity_at(ra);
            let contact_vel = rv.dot(&normal);

            // Already separating
            if contact_vel > 0.0 {
                continue;
            }

            let ra_cross_n = ra.cross(&normal);
            let rb_cross_n = rb.cross(&normal);
            let inv_mass_sum = body_a.get_inverse_mass()
                + body_b.get_inverse_mass()
                + sqr(ra_cross_n) * body_a.get_inverse_inertia()
                + sqr(rb_cross_n) * body_b.get_inverse_inertia();

            let j = -(1.0 + self.restitution) * contact_vel / inv_mass_sum / contact_count;

            let impulse = normal * j;
            body_a.apply_impulse(-impulse, ra);
            body_b.apply_impulse(impulse, rb);

            // Friction, from the velocity the normal impulse left behind
            let rv = body_b.velocity_at(rb) - body_a.velocity_at(ra);
            let tangent = (rv - normal * rv.dot(&normal)).normalize();

            let jt = -rv.dot(&tangent) / inv_mass_sum / contact_count;

            if approx_eq(jt, 0.0) {
                continue;
            }

            // Coulomb's law
            let tangent_impulse = if jt.abs() < j * self.static_friction {
                tangent * jt
            } else {
                tangent * (-j * self.dynamic_friction)
            };

            body_a.apply_impulse(-tangent_impulse, ra);
            body_b.apply_impulse(tangent_impulse, rb);
        }
    }

    /// Pushes the bodies apart along the normal by part of the penetration beyond `slop`
    pub fn positional_correction(&self, body_a: &mut RigidBody, body_b: &mut RigidBody, slop: f32, percent: f32) {
        let inv_mass_a = body_a.get_inverse_mass();
        let inv_mass_b = body_b.get_inverse_mass();
        let inv_mass_sum = inv_mass_a + inv_mass_b;

        if inv_mass_sum == 0.0 {
            return;
        }

        let correction = self.normal * ((self.penetration - slop).max(0.0) / inv_mass_sum * percent);
        body_a.translate(-correction * inv_mass_a);
        body_b.translate(correction * inv_mass_b);
    }

    /// Stops both bodies when neither can be moved by an impulse
    pub fn infinite_mass_correction(&self, body_a: &mut RigidBody, body_b: &mut RigidBody) {
        body_a.stop();
        body_b.stop();
    }
}
