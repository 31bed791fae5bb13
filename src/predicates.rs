//! Orientation and line-intersection predicates.
//!
//! Both functions are pure. The side test only ever looks at detached
//! values so it can decide a branch without touching derivative
//! information; the intersection is computed entirely in the scalar type so
//! derivatives flow through it.

use crate::math::{Point, Scalar};

/// Which side of a directed line a point lies on.
///
/// Sides are named for y-down axes: with y pointing up, `Right` is the
/// counter-clockwise side of the line. Clip boundaries are walked backward
/// through a clockwise polygon, which puts its interior on the `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Negative orientation. Inside, for clip boundaries.
    Right,
    /// Positive orientation.
    Left,
    /// Exactly on the line. Not counted as inside.
    On,
}

impl Side {
    #[inline]
    pub fn is_inside(self) -> bool {
        self == Side::Right
    }
}

/// Signed orientation of `p` relative to the directed line `a -> b`:
///
/// ```text
/// R = (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
/// ```
///
/// Negative when `p` is to the right, positive when to the left, zero on the
/// line. Evaluated on detached values.
#[inline]
pub fn orientation<S: Scalar>(a: Point<S>, b: Point<S>, p: Point<S>) -> f64 {
    let (a, b, p) = (a.value(), b.value(), p.value());
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Classify `p` against the directed line `a -> b`.
///
/// A NaN orientation compares neither below nor above zero and is reported
/// as [`Side::On`], so it is never treated as inside.
#[inline]
pub fn side<S: Scalar>(a: Point<S>, b: Point<S>, p: Point<S>) -> Side {
    let r = orientation(a, b, p);
    if r < 0.0 {
        Side::Right
    } else if r > 0.0 {
        Side::Left
    } else {
        Side::On
    }
}

/// Intersection of the infinite line through `s1, s2` with the infinite line
/// through `c1, c2`.
///
/// Parallel lines make the denominator zero and the result non-finite; no
/// attempt is made to detect that here. See [`checked_line_intersection`].
#[inline]
pub fn line_intersection<S: Scalar>(
    s1: Point<S>,
    s2: Point<S>,
    c1: Point<S>,
    c2: Point<S>,
) -> Point<S> {
    let ds = s2 - s1;
    let dc = c2 - c1;
    let denom = ds.cross(dc);
    let t = (c1 - s1).cross(dc) / denom;
    s1 + ds * t
}

/// Whether two directions are parallel to within `epsilon`.
///
/// `epsilon` bounds the sine of the angle between them: the cross product is
/// compared against `epsilon * |ds| * |dc|`. A zero-length direction counts
/// as parallel. NaN components never do.
#[inline]
pub fn nearly_parallel(ds: Point<f64>, dc: Point<f64>, epsilon: f64) -> bool {
    let scale = ds.dot(ds).sqrt() * dc.dot(dc).sqrt();
    ds.cross(dc).abs() <= epsilon * scale
}

/// Like [`line_intersection`] but returns `None` when the lines are parallel
/// or nearly so (see [`nearly_parallel`]), or when the result is not finite.
pub fn checked_line_intersection<S: Scalar>(
    s1: Point<S>,
    s2: Point<S>,
    c1: Point<S>,
    c2: Point<S>,
    epsilon: f64,
) -> Option<Point<S>> {
    if nearly_parallel((s2 - s1).value(), (c2 - c1).value(), epsilon) {
        return None;
    }
    let hit = line_intersection(s1, s2, c1, c2);
    hit.is_finite().then_some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Dual;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn negative_orientation_is_right() {
        let (a, b) = (p(0.0, 0.0), p(0.0, 1.0));
        assert_relative_eq!(orientation(a, b, p(-1.0, 0.5)), -1.0);
        assert_relative_eq!(orientation(a, b, p(1.0, 0.5)), 1.0);
        assert_eq!(side(a, b, p(-1.0, 0.5)), Side::Right);
        assert_eq!(side(a, b, p(1.0, 0.5)), Side::Left);
    }

    #[test]
    fn points_on_the_line_are_not_inside() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 2.0));
        let s = side(a, b, p(1.0, 1.0));
        assert_eq!(s, Side::On);
        assert!(!s.is_inside());
        assert_eq!(side(a, b, p(5.0, 5.0)), Side::On);
    }

    #[test]
    fn nan_is_never_inside() {
        let s = side(p(0.0, 0.0), p(1.0, 0.0), p(f64::NAN, 0.0));
        assert_eq!(s, Side::On);
    }

    #[test]
    fn crossing_lines_meet() {
        let hit = line_intersection(p(-1.0, 0.5), p(1.0, 0.5), p(0.0, 0.0), p(0.0, 2.0));
        assert_relative_eq!(hit, p(0.0, 0.5));

        let hit = line_intersection(p(0.0, 0.0), p(2.0, 1.0), p(1.0, 0.0), p(1.0, 5.0));
        assert_relative_eq!(hit, p(1.0, 0.5));
    }

    #[test]
    fn intersection_is_on_both_lines() {
        let (s1, s2, c1, c2) = (p(0.3, -1.0), p(2.5, 4.0), p(-1.0, 1.0), p(3.0, 0.2));
        let hit = line_intersection(s1, s2, c1, c2);
        assert_relative_eq!(orientation(s1, s2, hit), 0.0, epsilon = 1e-9);
        assert_relative_eq!(orientation(c1, c2, hit), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn parallel_lines_are_not_finite() {
        let hit = line_intersection(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0));
        assert!(!hit.is_finite());
    }

    #[test]
    fn checked_intersection_rejects_parallel_lines() {
        let parallel =
            checked_line_intersection(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(4.0, 1.0), 1e-12);
        assert!(parallel.is_none());

        let nearly = checked_line_intersection(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0 + 1e-15),
            1e-12,
        );
        assert!(nearly.is_none());

        let degenerate =
            checked_line_intersection(p(0.0, 0.0), p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), 1e-12);
        assert!(degenerate.is_none());

        let crossing =
            checked_line_intersection(p(-1.0, 0.5), p(1.0, 0.5), p(0.0, 0.0), p(0.0, 2.0), 1e-12);
        assert_relative_eq!(crossing.unwrap(), p(0.0, 0.5));
    }

    #[test]
    fn parallel_detection_is_relative() {
        assert!(nearly_parallel(p(1.0, 0.0), p(-3.0, 0.0), 1e-12));
        assert!(nearly_parallel(p(1000.0, 1e-10), p(1.0, 0.0), 1e-12));
        assert!(!nearly_parallel(p(1.0, 1e-6), p(1.0, 0.0), 1e-12));
        assert!(nearly_parallel(p(0.0, 0.0), p(1.0, 0.0), 1e-12));
        assert!(!nearly_parallel(p(f64::NAN, 0.0), p(1.0, 0.0), 1e-12));
    }

    #[test]
    fn intersection_derivative_follows_clip_vertex() {
        // Moving the vertical line x = c sideways moves the hit point with it.
        let s1 = Point::new(Dual::constant(-1.0), Dual::constant(0.5));
        let s2 = Point::new(Dual::constant(1.0), Dual::constant(0.5));
        let c1 = Point::new(Dual::variable(0.2), Dual::constant(0.0));
        let c2 = Point::new(Dual::variable(0.2), Dual::constant(2.0));
        let hit = line_intersection(s1, s2, c1, c2);
        assert_relative_eq!(hit.x.re, 0.2, epsilon = 1e-12);
        assert_relative_eq!(hit.x.eps, 1.0, epsilon = 1e-12);
        assert_relative_eq!(hit.y.eps, 0.0, epsilon = 1e-12);
    }
}
