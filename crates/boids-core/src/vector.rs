//! Two-dimensional vector value type.
//!
//! `Vec2` has value semantics: every operation returns a new vector except
//! [`Vec2::set_magnitude`], which rescales in place.
//!
//! # Zero-vector policy
//!
//! Operations that need a direction or divide by a scalar are explicit about
//! the degenerate case:
//!
//! | Operation        | Zero input                                  |
//! |------------------|---------------------------------------------|
//! | `divide(0.0)`    | `Err(CoreError::DivisionByZero)`            |
//! | `normalize()`    | `Err(CoreError::ZeroVector)`                |
//! | `set_magnitude`  | no-op, the vector stays zero                |
//! | `limit`          | no-op, a zero vector is already in bounds   |
//!
//! `normalize` asks for a direction and there is none, so it fails.
//! `set_magnitude` is used by steering code to rescale an accumulated vector
//! that may legitimately cancel out, and leaving it at zero there means "no
//! steering", which is the intended outcome.

use std::f32::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use rand::Rng;

use crate::{CoreError, CoreResult};

/// A 2D vector of single-precision floats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector at an angle sampled uniformly from `[0, 2π)`.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).magnitude()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise division by `scalar`.
    ///
    /// # Errors
    /// [`CoreError::DivisionByZero`] if `scalar == 0.0`.
    #[inline]
    pub fn divide(self, scalar: f32) -> CoreResult<Self> {
        if scalar == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Unit vector with the same direction.
    ///
    /// # Errors
    /// [`CoreError::ZeroVector`] if the magnitude is exactly zero.
    pub fn normalize(self) -> CoreResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(CoreError::ZeroVector);
        }
        self.divide(mag)
    }

    /// Rescale in place to exactly `target` magnitude.  A zero vector is left
    /// unchanged.
    pub fn set_magnitude(&mut self, target: f32) {
        let mag = self.magnitude();
        if mag > 0.0 {
            self.x = self.x / mag * target;
            self.y = self.y / mag * target;
        }
    }

    /// By-value form of [`set_magnitude`](Self::set_magnitude).
    #[inline]
    pub fn with_magnitude(mut self, target: f32) -> Self {
        self.set_magnitude(target);
        self
    }

    /// Rescale to `max` if longer than `max`; otherwise return `self` unchanged.
    pub fn limit(self, max: f32) -> Self {
        if self.magnitude() > max {
            self.with_magnitude(max)
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        self.scale(rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
