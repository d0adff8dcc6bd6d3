use nalgebra as na;
use crate::math::Vector2;
use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 2x2 matrix, used as the orientation transform of a body
///
/// Row-major: `m00 m01` is the first row, `m10 m11` the second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

impl Matrix2 {
    /// Creates a new 2x2 matrix from its four entries
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self { m00, m01, m10, m11 }
    }

    /// Creates a new 2x2 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Creates a counter-clockwise rotation matrix for the given angle in radians
    #[inline]
    pub fn from_angle(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, -s, s, c)
    }

    /// Resets the matrix to a rotation by `radians`
    #[inline]
    pub fn set(&mut self, radians: f32) {
        *self = Self::from_angle(radians);
    }

    /// Returns the matrix with the absolute value of every entry
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.m00.abs(), self.m01.abs(), self.m10.abs(), self.m11.abs())
    }

    /// First column; for a rotation, the rotated x axis
    #[inline]
    pub fn axis_x(&self) -> Vector2 {
        Vector2::new(self.m00, self.m10)
    }

    /// Second column; for a rotation, the rotated y axis
    #[inline]
    pub fn axis_y(&self) -> Vector2 {
        Vector2::new(self.m01, self.m11)
    }

    /// Returns the transpose of the matrix (the inverse, for rotations)
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.m00, self.m10, self.m01, self.m11)
    }

    /// Multiplies the matrix by a vector
    #[inline]
    pub fn multiply_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.m00 * v.x + self.m01 * v.y,
            self.m10 * v.x + self.m11 * v.y,
        )
    }

    /// Multiplies the matrix by another matrix
    #[inline]
    pub fn multiply_matrix(&self, other: &Self) -> Self {
        Self::new(
            self.m00 * other.m00 + self.m01 * other.m10,
            self.m00 * other.m01 + self.m01 * other.m11,
            self.m10 * other.m00 + self.m11 * other.m10,
            self.m10 * other.m01 + self.m11 * other.m11,
        )
    }

    /// Convert to nalgebra Matrix2
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix2<f32> {
        na::Matrix2::new(self.m00, self.m01, self.m10, self.m11)
    }

    /// Convert from nalgebra Matrix2
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix2<f32>) -> Self {
        Self::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        self.multiply_vector(rhs)
    }
}

impl Mul for Matrix2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_matrix(&rhs)
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[{}, {}]", self.m00, self.m01)?;
        write!(f, "[{}, {}]", self.m10, self.m11)
    }
}
