// Minimal 2D vector used for particle positions, velocities and accelerations.
// Converts to and from vecmath's [f64; 2], which does the arithmetic.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    // Vector of the given length pointing along `angle` (radians)
    pub fn from_polar(radius: f64, angle: f64) -> Vector2 {
        Vector2::new(radius * angle.cos(), radius * angle.sin())
    }

    pub fn length(&self) -> f64 {
        vecmath::vec2_len((*self).into())
    }

    pub fn scale(&self, factor: f64) -> Vector2 {
        vecmath::vec2_scale((*self).into(), factor).into()
    }

    /// Rescales the vector to exactly `max` if it is longer than that.
    ///
    /// A zero vector is left alone and a negative `max` is treated as zero.
    pub fn limit(&mut self, max: f64) {
        let max = max.max(0.0);
        let length = self.length();
        if length > max && length > 0.0 {
            *self = self.scale(max / length);
        }
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(v: [f64; 2]) -> Vector2 {
        Vector2::new(v[0], v[1])
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> [f64; 2] {
        [v.x, v.y]
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        vecmath::vec2_add(self.into(), other.into()).into()
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        vecmath::vec2_sub(self.into(), other.into()).into()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, factor: f64) -> Vector2 {
        self.scale(factor)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        *self = *self + other;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        *self = *self - other;
    }
}
