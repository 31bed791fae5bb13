//! Polygons as closed vertex cycles.
//!
//! A [`Polygon`] is an ordered list of vertices; the edge from the last
//! vertex back to the first is implicit. The clipper expects clockwise
//! vertex order (negative [`Polygon::signed_area`]) but never checks it.

use crate::math::{Point, Scalar};

/// A directed edge between two consecutive polygon vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<S> {
    pub start: Point<S>,
    pub end: Point<S>,
}

impl<S: Scalar> Edge<S> {
    pub fn new(start: Point<S>, end: Point<S>) -> Self {
        Self { start, end }
    }

    /// The same edge walked the other way.
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Direction vector from `start` to `end`.
    pub fn direction(self) -> Point<S> {
        self.end - self.start
    }

    /// True when both endpoints coincide, so the edge defines no line.
    pub fn is_degenerate(self) -> bool {
        let d = self.direction().value();
        d.x == 0.0 && d.y == 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<S> {
    pub vertices: Vec<Point<S>>,
}

impl<S: Scalar> Polygon<S> {
    pub fn new(vertices: Vec<Point<S>>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Build a polygon from plain `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::from_f64(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when there are no vertices at all (the "no intersection" result).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when there are too few vertices to enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn vertices(&self) -> &[Point<S>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point<S>> {
        self.vertices
    }

    /// Iterate the edges `vertex[j-1] -> vertex[j]` for `j = 0..len`,
    /// wrapping so the first edge runs from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Edge<S>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |j| Edge::new(self.vertices[(j + n - 1) % n], self.vertices[j]))
    }

    /// The same cycle starting `k` vertices later.
    pub fn rotated(&self, k: usize) -> Self {
        let mut vertices = self.vertices.clone();
        if !vertices.is_empty() {
            let k = k % vertices.len();
            vertices.rotate_left(k);
        }
        Self::new(vertices)
    }

    /// The same cycle walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Convert every coordinate into another scalar type.
    pub fn map<T: Scalar>(&self, mut f: impl FnMut(S) -> T) -> Polygon<T> {
        Polygon::new(self.vertices.iter().map(|p| p.map(&mut f)).collect())
    }

    /// Detached plain-float copy of this polygon.
    pub fn value(&self) -> Polygon<f64> {
        Polygon::new(self.vertices.iter().map(|p| p.value()).collect())
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|p| p.is_finite())
    }

    /// Signed area from the shoelace formula.
    ///
    /// Negative for clockwise vertex order, positive for counter-clockwise.
    /// Polygons with fewer than three vertices have zero area.
    pub fn signed_area(&self) -> S {
        if self.is_degenerate() {
            return S::zero();
        }
        let twice = self
            .edges()
            .fold(S::zero(), |acc, edge| acc + edge.start.cross(edge.end));
        twice / S::from_f64(2.0)
    }

    /// Unsigned area.
    pub fn area(&self) -> S {
        self.signed_area().abs()
    }
}

impl<S: Scalar> From<Vec<Point<S>>> for Polygon<S> {
    fn from(vertices: Vec<Point<S>>) -> Self {
        Self::new(vertices)
    }
}

impl<S: Scalar> FromIterator<Point<S>> for Polygon<S> {
    fn from_iter<I: IntoIterator<Item = Point<S>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
