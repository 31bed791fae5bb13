//! Errors reported by the checked clipping path.

use thiserror::Error;

/// Reasons [`PolygonClipper::try_clip`](crate::PolygonClipper::try_clip)
/// refuses to produce a result.
///
/// The unchecked [`PolygonClipper::clip`](crate::PolygonClipper::clip) never
/// fails; the same conditions there surface as non-finite coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// A subject edge crossing a clip edge is (nearly) parallel to it, so the
    /// crossing point is not well defined.
    #[error("subject edge {subject_edge} is parallel to clip edge {clip_edge}")]
    ParallelEdges {
        /// Index of the clip edge, counted from the clip polygon's first vertex.
        clip_edge: usize,
        /// Index of the edge within the subject as it stood for that pass.
        subject_edge: usize,
    },

    /// The clip polygon has fewer than three vertices.
    #[error("clip polygon has {vertices} vertices, at least 3 are needed")]
    DegenerateClipPolygon { vertices: usize },

    /// Two consecutive clip vertices coincide.
    #[error("clip edge {index} has zero length")]
    DegenerateClipEdge { index: usize },

    /// An input coordinate is NaN or infinite.
    #[error("input polygon contains a non-finite coordinate")]
    NonFiniteInput,
}
