//! Overlap metrics built on the clipper and the shoelace formula.
//!
//! These are what the clipper is usually for: the area shared by two
//! oriented boxes (or any clockwise polygons), their intersection over
//! union, and how that area responds to moving the clip polygon.

use crate::clipper::PolygonClipper;
use crate::math::{Dual, Point, Scalar};
use crate::polygon::Polygon;

/// Area of the intersection of `subject` and `clip`.
///
/// Goes through the masked clipper, so with [`Dual`] coordinates the result
/// carries the derivative of the area. No empty-result warning is logged:
/// zero overlap is an ordinary outcome here.
pub fn intersection_area<S: Scalar>(subject: &Polygon<S>, clip: &Polygon<S>) -> S {
    PolygonClipper::new(false).clip_masked(subject, clip).area()
}

/// Intersection over union of two clockwise polygons.
///
/// `b` plays the role of the clip polygon. Returns zero when the union has
/// no area.
pub fn iou<S: Scalar>(a: &Polygon<S>, b: &Polygon<S>) -> S {
    let intersection = intersection_area(a, b);
    let union = a.area() + b.area() - intersection;
    if union.value() <= 0.0 {
        return S::zero();
    }
    intersection / union
}

/// Derivative of the intersection area with respect to every clip vertex.
///
/// Entry `k` holds `(d area / d clip[k].x, d area / d clip[k].y)`. Each
/// coordinate is seeded in its own forward-mode pass.
pub fn intersection_area_gradient(subject: &Polygon<f64>, clip: &Polygon<f64>) -> Vec<Point<f64>> {
    let subject = subject.map(Dual::constant);
    let constant_clip = clip.map(Dual::constant);

    let partial = |k: usize, seed_x: bool| {
        let mut seeded = constant_clip.clone();
        let vertex = &mut seeded.vertices[k];
        if seed_x {
            vertex.x = Dual::variable(vertex.x.re);
        } else {
            vertex.y = Dual::variable(vertex.y.re);
        }
        intersection_area(&subject, &seeded).eps
    };

    (0..clip.len())
        .map(|k| Point::new(partial(k, true), partial(k, false)))
        .collect()
}
