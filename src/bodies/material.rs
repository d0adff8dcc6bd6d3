#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Material properties for physics objects
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,

    /// Friction coefficient while the contact is sticking, 0-1
    pub static_friction: f32,

    /// Friction coefficient while the contact is sliding, 0-1
    pub dynamic_friction: f32,

    /// Mass per unit area
    pub density: f32,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(density: f32, static_friction: f32, dynamic_friction: f32, restitution: f32) -> Self {
        Self {
            density,
            static_friction,
            dynamic_friction,
            restitution,
        }
    }

    /// Returns a copy with a different density
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Creates a material for ice (low friction, some bounce)
    pub fn ice() -> Self {
        Self::new(0.9, 0.1, 0.03, 0.3)
    }

    /// Creates a material for rubber (high friction, high restitution)
    pub fn rubber() -> Self {
        Self::new(1.2, 0.9, 0.8, 0.8)
    }

    /// Creates a material for wood (medium friction, low restitution)
    pub fn wood() -> Self {
        Self::new(0.7, 0.6, 0.4, 0.2)
    }

    /// Creates a material for metal (medium friction, barely bounces)
    pub fn metal() -> Self {
        Self::new(7.8, 0.4, 0.25, 0.05)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1.0,
            static_friction: 0.5,
            dynamic_friction: 0.3,
            restitution: 0.2,
        }
    }
}
