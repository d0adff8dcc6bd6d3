use crate::math::PI;
use crate::shapes::MassProperties;

/// A circular collision shape centered on its body's position
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// The radius of the circle
    radius: f32,
}

impl Circle {
    /// Creates a new circle with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// Returns the radius of the circle
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Sets the radius of the circle
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Returns the area of the circle
    pub fn get_area(&self) -> f32 {
        PI * self.radius * self.radius
    }

    /// Computes mass and rotational inertia for the given density
    ///
    /// Inertia is `mass * r^2`, not the solid-disk `0.5 * mass * r^2`. The
    /// solver's restitution and friction tuning assumes this value.
    pub fn compute_mass(&self, density: f32) -> MassProperties {
        let mass = self.get_area() * density;
        let inertia = mass * self.radius * self.radius;
        MassProperties::new(mass, inertia)
    }
}
