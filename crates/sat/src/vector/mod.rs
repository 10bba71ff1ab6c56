//! Mutable 2D vector used by SAT (separating axis) collision code.
//!
//! Purpose
//! - Provide `Vector`, a plain `(x, y)` pair with in-place, chainable
//!   operations (`perp`, `rotate`, `project`, `reflect`, ...) for hot loops.
//! - Offer a value-returning family (`rotated`, `projected`, operator traits)
//!   for call sites that prefer not to mutate.
//!
//! Conventions
//! - In-place operations take `&mut self` and return `&mut Self`; only the
//!   receiver is mutated, every other operand is borrowed immutably.
//! - `project`/`reflect` require a non-zero axis and do not check it; a zero
//!   axis yields non-finite components. Use `try_project`/`try_reflect` for a
//!   checked variant.
//! - Angles are radians, counter-clockwise in a y-up frame.
//!
//! Code cross-refs: `cfg::VecCfg` (tolerances), `sample::{draw_unit, draw_in_box}`

mod ops;

use std::fmt;

use nalgebra::Vector2;

/// Point or free direction in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector `(cos θ, sin θ)`.
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    /// `(x, y) ↦ (y, −x)`: quarter turn clockwise (y-up), counter-clockwise (y-down).
    #[inline]
    pub fn perp(&mut self) -> &mut Self {
        let x = self.x;
        self.x = self.y;
        self.y = -x;
        self
    }

    /// Rotate counter-clockwise by `angle` radians.
    ///
    /// Both new components are computed from the original `(x, y)`.
    #[inline]
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * cos - y * sin;
        self.y = x * sin + y * cos;
        self
    }

    #[inline]
    pub fn reverse(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Scale to unit length. A zero vector is left as is.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.len();
        if len > 0.0 {
            self.x /= len;
            self.y /= len;
        }
        self
    }

    #[inline]
    pub fn add(&mut self, other: &Vector) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    pub fn sub(&mut self, other: &Vector) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    /// Multiply `x` by `sx` and `y` by `sy`, or by `sx` when `sy` is `None`.
    ///
    /// `None` means uniform scaling; `Some(0.0)` collapses `y`.
    #[inline]
    pub fn scale(&mut self, sx: f64, sy: impl Into<Option<f64>>) -> &mut Self {
        let sy = sy.into().unwrap_or(sx);
        self.x *= sx;
        self.y *= sy;
        self
    }

    /// Project onto `other` (any length): `self ← (self·other / |other|²) other`.
    ///
    /// Pre: `other.len2() != 0`. Not checked; a zero axis gives NaN/∞.
    #[inline]
    pub fn project(&mut self, other: &Vector) -> &mut Self {
        let amt = self.dot(other) / other.len2();
        self.x = amt * other.x;
        self.y = amt * other.y;
        self
    }

    /// Project onto a unit vector: `self ← (self·other) other`.
    ///
    /// Pre: `other` has unit length (not checked).
    #[inline]
    pub fn project_n(&mut self, other: &Vector) -> &mut Self {
        let amt = self.dot(other);
        self.x = amt * other.x;
        self.y = amt * other.y;
        self
    }

    /// Reflect across the line spanned by `axis`: `2·proj_axis(self) − self`.
    ///
    /// Pre: `axis.len2() != 0` (see `project`).
    #[inline]
    pub fn reflect(&mut self, axis: &Vector) -> &mut Self {
        let original = *self;
        self.project(axis).scale(2.0, None);
        self.x -= original.x;
        self.y -= original.y;
        self
    }

    /// `reflect` for a unit `axis`.
    #[inline]
    pub fn reflect_n(&mut self, axis: &Vector) -> &mut Self {
        let original = *self;
        self.project_n(axis).scale(2.0, None);
        self.x -= original.x;
        self.y -= original.y;
        self
    }

    /// Checked `project`: `None` (receiver untouched) if `other` is zero or non-finite.
    pub fn try_project(&mut self, other: &Vector) -> Option<&mut Self> {
        if !is_usable_axis(other) {
            return None;
        }
        Some(self.project(other))
    }

    /// Checked `reflect`: `None` (receiver untouched) if `axis` is zero or non-finite.
    pub fn try_reflect(&mut self, axis: &Vector) -> Option<&mut Self> {
        if !is_usable_axis(axis) {
            return None;
        }
        Some(self.reflect(axis))
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.len2().sqrt()
    }

    /// Squared length; prefer over `len` for comparisons.
    #[inline]
    pub fn len2(&self) -> f64 {
        self.dot(self)
    }

    // Value-returning forms: copy, then apply the in-place op.

    #[inline]
    pub fn perped(self) -> Self {
        let mut v = self;
        v.perp();
        v
    }

    #[inline]
    pub fn rotated(self, angle: f64) -> Self {
        let mut v = self;
        v.rotate(angle);
        v
    }

    #[inline]
    pub fn reversed(self) -> Self {
        let mut v = self;
        v.reverse();
        v
    }

    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    #[inline]
    pub fn projected(self, other: &Vector) -> Self {
        let mut v = self;
        v.project(other);
        v
    }

    #[inline]
    pub fn reflected(self, axis: &Vector) -> Self {
        let mut v = self;
        v.reflect(axis);
        v
    }

    /// Componentwise comparison with absolute slack `eps`.
    #[inline]
    pub fn approx_eq_eps(&self, other: &Vector, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[inline]
    pub fn is_zero_eps(&self, eps: f64) -> bool {
        self.len2() <= eps * eps
    }

    /// `| |self| − 1 | <= eps`.
    #[inline]
    pub fn is_unit_eps(&self, eps: f64) -> bool {
        (self.len() - 1.0).abs() <= eps
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[inline]
fn is_usable_axis(axis: &Vector) -> bool {
    let l2 = axis.len2();
    l2.is_finite() && l2 > 0.0
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for [f64; 2] {
    #[inline]
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests;
