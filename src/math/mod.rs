mod vector;
mod matrix;

pub use vector::{cross_sv, cross_vs, Vector2};
pub use matrix::Matrix2;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-4;

/// Single-precision PI
pub const PI: f32 = std::f32::consts::PI;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Squares a value
#[inline]
pub fn sqr(a: f32) -> f32 {
    a * a
}

/// Biased `a >= b` comparison used when choosing a reference face.
///
/// When the two penetrations are within a few percent of each other the first
/// argument wins, so the chosen face does not flip between frames.
#[inline]
pub fn bias_greater_than(a: f32, b: f32) -> bool {
    const BIAS_RELATIVE: f32 = 0.95;
    const BIAS_ABSOLUTE: f32 = 0.01;
    a >= b * BIAS_RELATIVE + a * BIAS_ABSOLUTE
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}
