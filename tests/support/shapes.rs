#![allow(dead_code)]

use hodgman::{Point, Polygon};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Axis-aligned square `[min, max]^2`, clockwise.
pub fn square(min: f64, max: f64) -> Polygon<f64> {
    Polygon::from_coords(&[(min, min), (min, max), (max, max), (max, min)])
}

/// A `width x height` rectangle centred on `center` and turned by `angle`
/// radians, clockwise.
pub fn oriented_box(center: (f64, f64), width: f64, height: f64, angle: f64) -> Polygon<f64> {
    let (sin, cos) = angle.sin_cos();
    let (hw, hh) = (width / 2.0, height / 2.0);
    [(-hw, -hh), (-hw, hh), (hw, hh), (hw, -hh)]
        .into_iter()
        .map(|(x, y)| Point::new(center.0 + x * cos + y * sin, center.1 - x * sin + y * cos))
        .collect()
}

/// L-shaped hexagon covering `[0, 2]^2` minus the notch `[1, 2] x [1, 2]`.
pub fn l_shape() -> Polygon<f64> {
    Polygon::from_coords(&[(0.0, 0.0), (0.0, 2.0), (1.0, 2.0), (1.0, 1.0), (2.0, 1.0), (2.0, 0.0)])
}

pub fn in_l_shape(x: f64, y: f64) -> bool {
    (0.0..=2.0).contains(&x) && (0.0..=2.0).contains(&y) && !(x > 1.0 && y > 1.0)
}

/// Eight-pointed star reaching out to distance 3 along the axes.
pub fn star() -> Polygon<f64> {
    Polygon::from_coords(&[
        (0.0, 3.0),
        (0.5, 0.5),
        (3.0, 0.0),
        (0.5, -0.5),
        (0.0, -3.0),
        (-0.5, -0.5),
        (-3.0, 0.0),
        (-0.5, 0.5),
    ])
}

/// Random oriented boxes whose centres fall in `[-2, 2]^2`.
pub fn random_boxes(n: usize, seed: u64) -> Vec<Polygon<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let center = (rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let width = rng.gen_range(0.5..4.0);
            let height = rng.gen_range(0.5..4.0);
            let angle = rng.gen_range(0.0..std::f64::consts::PI);
            oriented_box(center, width, height, angle)
        })
        .collect()
}

/// Every vertex of `a` lies within `tol` of some vertex of `b`.
pub fn vertices_covered(a: &Polygon<f64>, b: &Polygon<f64>, tol: f64) -> bool {
    a.vertices().iter().all(|p| {
        b.vertices()
            .iter()
            .any(|q| (p.x - q.x).abs() <= tol && (p.y - q.y).abs() <= tol)
    })
}

/// Same vertex set, ignoring order and duplicates.
pub fn same_vertex_set(a: &Polygon<f64>, b: &Polygon<f64>, tol: f64) -> bool {
    vertices_covered(a, b, tol) && vertices_covered(b, a, tol)
}
