//! Two-dimensional points and displacements over any [`Scalar`].

use std::ops::{Add, Mul, Neg, Sub};

use super::scalar::Scalar;

/// A point (or displacement) in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Point<S> {
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Lift a pair of plain coordinates into this scalar type.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(S::from_f64(x), S::from_f64(y))
    }

    /// The z-component of the 3D cross product of two 2D vectors.
    #[inline]
    pub fn cross(self, other: Self) -> S {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn scale(self, factor: S) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Detached plain-float copy of this point.
    pub fn value(self) -> Point<f64> {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Convert coordinates into another scalar type.
    pub fn map<T: Scalar>(self, mut f: impl FnMut(S) -> T) -> Point<T> {
        Point::new(f(self.x), f(self.y))
    }
}

impl<S: Scalar> Add for Point<S> {
    type Output = Point<S>;

    fn add(self, rhs: Point<S>) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Point<S> {
    type Output = Point<S>;

    fn sub(self, rhs: Point<S>) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Scalar> Mul<S> for Point<S> {
    type Output = Point<S>;

    fn mul(self, rhs: S) -> Self::Output {
        self.scale(rhs)
    }
}

impl<S: Scalar> Neg for Point<S> {
    type Output = Point<S>;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<S: Scalar> From<(f64, f64)> for Point<S> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::from_f64(x, y)
    }
}

impl<S: Scalar> From<[f64; 2]> for Point<S> {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::from_f64(x, y)
    }
}

impl<S> approx::AbsDiffEq for Point<S>
where
    S: approx::AbsDiffEq,
    S::Epsilon: Copy,
{
    type Epsilon = S::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        S::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<S> approx::RelativeEq for Point<S>
where
    S: approx::RelativeEq,
    S::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        S::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_sign_follows_turn_direction() {
        let right = Point::new(1.0_f64, 0.0);
        let up = Point::new(0.0_f64, 1.0);
        assert_relative_eq!(right.cross(up), 1.0);
        assert_relative_eq!(up.cross(right), -1.0);
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Point::new(1.0_f64, 2.0);
        let b = Point::new(3.0_f64, -1.0);
        assert_relative_eq!(a + b, Point::new(4.0, 1.0));
        assert_relative_eq!(a - b, Point::new(-2.0, 3.0));
        assert_relative_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_relative_eq!(-a, Point::new(-1.0, -2.0));
        assert_relative_eq!(a.dot(b), 1.0);
    }

    #[test]
    fn converts_from_tuples_and_arrays() {
        let p: Point<f32> = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5_f32, -2.0));
        let q: Point<f64> = [0.25, 4.0].into();
        assert_eq!(q, Point::new(0.25, 4.0));
    }
}
