mod shape;
mod circle;
mod polygon;

pub use self::shape::{Shape, ShapeType, MassProperties};
pub use self::circle::Circle;
pub use self::polygon::{Polygon, MAX_POLY_VERTEX_COUNT};
