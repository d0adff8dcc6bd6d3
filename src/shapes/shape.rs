use crate::math::{Matrix2, Vector2};
use crate::shapes::{Circle, Polygon};
use crate::Result;

/// Kind tag of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Polygon,
}

impl ShapeType {
    /// Returns the type name of the shape
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Polygon => "Polygon",
        }
    }
}

/// Mass and rotational inertia of a body, together with their inverses
///
/// An inverse is zero exactly when its quantity is zero, which marks the body
/// as static.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassProperties {
    pub mass: f32,
    pub inv_mass: f32,
    pub inertia: f32,
    pub inv_inertia: f32,
}

impl MassProperties {
    /// Builds mass properties, deriving the inverses
    pub fn new(mass: f32, inertia: f32) -> Self {
        Self {
            mass,
            inv_mass: if mass != 0.0 { 1.0 / mass } else { 0.0 },
            inertia,
            inv_inertia: if inertia != 0.0 { 1.0 / inertia } else { 0.0 },
        }
    }

    /// Mass properties of an immovable body
    pub fn infinite() -> Self {
        Self::default()
    }
}

/// Collision geometry owned by a rigid body
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Creates a circle shape
    pub fn circle(radius: f32) -> Self {
        Self::Circle(Circle::new(radius))
    }

    /// Creates an axis-aligned box shape from its half extents
    pub fn rectangle(half_width: f32, half_height: f32) -> Self {
        Self::Polygon(Polygon::rectangle(half_width, half_height))
    }

    /// Creates a convex polygon from the hull of the given points
    pub fn polygon(points: &[Vector2]) -> Result<Self> {
        Ok(Self::Polygon(Polygon::from_points(points)?))
    }

    /// Returns the kind tag of the shape
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Circle(_) => ShapeType::Circle,
            Self::Polygon(_) => ShapeType::Polygon,
        }
    }

    /// Computes the mass properties for the given density
    ///
    /// For polygons this also moves the vertices so the local origin is the
    /// centroid.
    pub fn compute_mass(&mut self, density: f32) -> MassProperties {
        match self {
            Self::Circle(circle) => circle.compute_mass(density),
            Self::Polygon(polygon) => polygon.compute_mass(density),
        }
    }

    /// Updates the shape's rotation transform
    pub fn set_orientation(&mut self, radians: f32) {
        match self {
            Self::Circle(_) => {}
            Self::Polygon(polygon) => polygon.set_orientation(radians),
        }
    }

    /// Returns the rotation transform of the shape (identity for circles)
    pub fn get_orientation(&self) -> Matrix2 {
        match self {
            Self::Circle(_) => Matrix2::identity(),
            Self::Polygon(polygon) => polygon.get_orientation(),
        }
    }

    /// Returns the circle if this shape is one
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// Returns the polygon if this shape is one
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
