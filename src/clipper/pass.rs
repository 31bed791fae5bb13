//! A single Sutherland-Hodgman pass: reduce a subject polygon by the
//! half-plane of one clip edge.
//!
//! Clip edges are walked backward through the clip polygon's indexing: the
//! boundary for edge `i` runs from `clip[i]` to `clip[i-1]`. For a clockwise
//! clip polygon the interior then lies strictly to the right of every
//! boundary.
//!
//! Two flavours of the pass exist:
//!
//! - [`reduce_by_edge`] pushes vertices as it classifies each subject edge.
//! - [`reduce_by_edge_masked`] computes both candidates of every subject edge,
//!   multiplies each by its 0/1 mask into a fixed buffer of `2 * N` slots,
//!   and compacts the valid slots at the end of the pass.
//!
//! A subject edge that straddles a boundary while running parallel to it
//! (within `parallel_epsilon`) has no usable crossing point. Both unchecked
//! passes substitute the edge endpoint closest to the boundary line;
//! [`try_reduce_by_edge`] reports the edge instead.

use crate::error::ClipError;
use crate::math::{Point, Scalar};
use crate::polygon::{Edge, Polygon};
use crate::predicates::{
    checked_line_intersection, line_intersection, nearly_parallel, orientation, side,
};

/// How one subject edge sits relative to a clip boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Start outside, end inside: emit the crossing point, then the end.
    Entering,
    /// Both endpoints inside: emit the end.
    Inside,
    /// Start inside, end outside: emit the crossing point.
    Exiting,
    /// Both endpoints outside (or on the boundary): emit nothing.
    Outside,
}

impl Crossing {
    pub fn classify(start_inside: bool, end_inside: bool) -> Self {
        match (start_inside, end_inside) {
            (false, true) => Crossing::Entering,
            (true, true) => Crossing::Inside,
            (true, false) => Crossing::Exiting,
            (false, false) => Crossing::Outside,
        }
    }

    /// Classify `edge` against the directed `boundary`. Only points strictly
    /// right of the boundary count as inside.
    pub fn of<S: Scalar>(edge: Edge<S>, boundary: Edge<S>) -> Self {
        let start_inside = side(boundary.start, boundary.end, edge.start).is_inside();
        let end_inside = side(boundary.start, boundary.end, edge.end).is_inside();
        Self::classify(start_inside, end_inside)
    }

    #[inline]
    pub fn emits_intersection(self) -> bool {
        matches!(self, Crossing::Entering | Crossing::Exiting)
    }

    #[inline]
    pub fn emits_end(self) -> bool {
        matches!(self, Crossing::Entering | Crossing::Inside)
    }
}

/// The directed boundaries of a clip polygon, in clip edge order.
///
/// Boundary `i` runs from `clip[i]` to `clip[i-1]` (indices wrap).
pub fn clip_boundaries<S: Scalar>(clip: &Polygon<S>) -> impl Iterator<Item = Edge<S>> + '_ {
    clip.edges().map(Edge::reversed)
}

/// Where `edge` meets the line through `boundary`.
///
/// Nearly parallel lines give the endpoint of `edge` closest to the boundary
/// line. Non-finite coordinates are passed through to the intersection
/// formula and come out non-finite.
fn crossing_point<S: Scalar>(
    edge: Edge<S>,
    boundary: Edge<S>,
    parallel_epsilon: f64,
) -> Point<S> {
    let ds = edge.direction().value();
    let dc = boundary.direction().value();
    if nearly_parallel(ds, dc, parallel_epsilon) {
        let start = orientation(boundary.start, boundary.end, edge.start).abs();
        let end = orientation(boundary.start, boundary.end, edge.end).abs();
        return if start <= end { edge.start } else { edge.end };
    }
    line_intersection(edge.start, edge.end, boundary.start, boundary.end)
}

/// Reduce `subject` to the part strictly right of `boundary`.
///
/// An empty subject reduces to an empty polygon.
pub fn reduce_by_edge<S: Scalar>(
    subject: &Polygon<S>,
    boundary: Edge<S>,
    parallel_epsilon: f64,
) -> Polygon<S> {
    let mut output = Vec::with_capacity(subject.len() + 1);

    for edge in subject.edges() {
        match Crossing::of(edge, boundary) {
            Crossing::Entering => {
                output.push(crossing_point(edge, boundary, parallel_epsilon));
                output.push(edge.end);
            }
            Crossing::Inside => output.push(edge.end),
            Crossing::Exiting => output.push(crossing_point(edge, boundary, parallel_epsilon)),
            Crossing::Outside => {}
        }
    }

    Polygon::new(output)
}

/// [`reduce_by_edge`] that refuses to compute a crossing between nearly
/// parallel lines.
///
/// `clip_edge` is only used to label the error.
pub fn try_reduce_by_edge<S: Scalar>(
    subject: &Polygon<S>,
    boundary: Edge<S>,
    clip_edge: usize,
    parallel_epsilon: f64,
) -> Result<Polygon<S>, ClipError> {
    let mut output = Vec::with_capacity(subject.len() + 1);

    for (subject_edge, edge) in subject.edges().enumerate() {
        let crossing = Crossing::of(edge, boundary);
        if crossing.emits_intersection() {
            let hit = checked_line_intersection(
                edge.start,
                edge.end,
                boundary.start,
                boundary.end,
                parallel_epsilon,
            )
            .ok_or(ClipError::ParallelEdges {
                clip_edge,
                subject_edge,
            })?;
            output.push(hit);
        }
        if crossing.emits_end() {
            output.push(edge.end);
        }
    }

    Ok(Polygon::new(output))
}

/// One candidate of the masked pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot<S> {
    pub point: Point<S>,
    pub valid: bool,
}

/// The full candidate buffer of a masked pass, before compaction.
///
/// Slot `2j` holds the crossing point of subject edge `j` and slot `2j + 1`
/// its end vertex. Both candidates are computed for every edge and multiplied
/// by the 0/1 mask of their rule, so dead slots hold the zero point.
pub fn masked_slots<S: Scalar>(
    subject: &Polygon<S>,
    boundary: Edge<S>,
    parallel_epsilon: f64,
) -> Vec<Slot<S>> {
    let mut slots = Vec::with_capacity(2 * subject.len());

    for edge in subject.edges() {
        let crossing = Crossing::of(edge, boundary);
        let hit = crossing_point(edge, boundary, parallel_epsilon);

        slots.push(Slot {
            point: hit * S::mask(crossing.emits_intersection()),
            valid: crossing.emits_intersection(),
        });
        slots.push(Slot {
            point: edge.end * S::mask(crossing.emits_end()),
            valid: crossing.emits_end(),
        });
    }

    slots
}

/// Masked variant of [`reduce_by_edge`]: compacts the valid slots of
/// [`masked_slots`] in order.
///
/// With forward-mode [`Dual`](crate::Dual) coordinates the plain pass already
/// carries derivatives along the taken branch; this form keeps the fixed
/// `2 * N` shape of the computation, with the untaken candidates scaled to
/// zero instead of skipped. For plain floats it returns exactly what
/// [`reduce_by_edge`] returns.
pub fn reduce_by_edge_masked<S: Scalar>(
    subject: &Polygon<S>,
    boundary: Edge<S>,
    parallel_epsilon: f64,
) -> Polygon<S> {
    masked_slots(subject, boundary, parallel_epsilon)
        .into_iter()
        .filter(|slot| slot.valid)
        .map(|slot| slot.point)
        .collect()
}
