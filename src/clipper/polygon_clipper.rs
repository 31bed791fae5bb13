//! The clipper: folds single-edge passes over every clip edge.

use log::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::ClipperConfig;
use super::pass::{
    clip_boundaries, reduce_by_edge, reduce_by_edge_masked, try_reduce_by_edge,
};
use crate::error::ClipError;
use crate::math::Scalar;
use crate::polygon::Polygon;

/// Conditionally parallel iterator over a slice.
macro_rules! maybe_par_iter {
    ($slice:expr) => {{
        #[cfg(feature = "parallel")]
        {
            $slice.par_iter()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter()
        }
    }};
}

/// Intersects a subject polygon with a clip polygon, Sutherland-Hodgman
/// style.
///
/// Both polygons must be given in clockwise order. This is not checked: a
/// counter-clockwise input silently yields a wrong (usually empty) result.
/// The clip polygon is used one edge at a time as a half-plane, so the
/// result is exact for convex clip polygons.
///
/// The clipper holds only its configuration and can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use hodgman::{Polygon, PolygonClipper};
///
/// let subject = Polygon::<f64>::from_coords(&[(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]);
/// let clip = Polygon::from_coords(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
///
/// let overlap = PolygonClipper::new(true).clip(&subject, &clip);
/// assert!((overlap.area() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolygonClipper {
    config: ClipperConfig,
}

impl PolygonClipper {
    pub fn new(warn_if_empty: bool) -> Self {
        Self::with_config(ClipperConfig::new(warn_if_empty))
    }

    pub fn with_config(config: ClipperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClipperConfig {
        &self.config
    }

    /// Clip `subject` against every edge of `clip` in turn.
    ///
    /// Returns the intersection polygon, empty when the two do not overlap.
    /// A clip polygon with no vertices has no edges and leaves the subject
    /// untouched. A subject edge that straddles a clip edge while parallel to
    /// it within [`ClipperConfig::parallel_epsilon`] contributes its endpoint
    /// closest to the clip edge in place of a crossing point. This keeps
    /// re-clipping a result stable when its edges lie on the clip boundary.
    /// Non-finite input is not checked and propagates to the output; use
    /// [`try_clip`](Self::try_clip) to have both conditions reported instead.
    pub fn clip<S: Scalar>(&self, subject: &Polygon<S>, clip: &Polygon<S>) -> Polygon<S> {
        let result = clip_boundaries(clip)
            .enumerate()
            .fold(subject.clone(), |current, (i, boundary)| {
                let next = reduce_by_edge(&current, boundary, self.config.parallel_epsilon);
                trace!("clip edge {}: {} -> {} vertices", i, current.len(), next.len());
                next
            });
        self.report_empty(&result);
        result
    }

    /// Checked version of [`clip`](Self::clip).
    ///
    /// Rejects non-finite coordinates, clip polygons with fewer than three
    /// vertices, zero-length clip edges, and crossings between edges whose
    /// angle is below [`ClipperConfig::parallel_epsilon`].
    pub fn try_clip<S: Scalar>(
        &self,
        subject: &Polygon<S>,
        clip: &Polygon<S>,
    ) -> Result<Polygon<S>, ClipError> {
        if !subject.is_finite() || !clip.is_finite() {
            debug!("rejecting clip: non-finite input coordinate");
            return Err(ClipError::NonFiniteInput);
        }
        if clip.is_degenerate() {
            debug!("rejecting clip: clip polygon has {} vertices", clip.len());
            return Err(ClipError::DegenerateClipPolygon {
                vertices: clip.len(),
            });
        }

        let epsilon = self.config.parallel_epsilon;
        let result = clip_boundaries(clip).enumerate().try_fold(
            subject.clone(),
            |current, (i, boundary)| {
                if boundary.is_degenerate() {
                    debug!("rejecting clip: clip edge {} has zero length", i);
                    return Err(ClipError::DegenerateClipEdge { index: i });
                }
                let next = try_reduce_by_edge(&current, boundary, i, epsilon).inspect_err(|e| {
                    debug!("rejecting clip: {}", e);
                })?;
                trace!("clip edge {}: {} -> {} vertices", i, current.len(), next.len());
                Ok(next)
            },
        )?;
        self.report_empty(&result);
        Ok(result)
    }

    /// [`clip`](Self::clip) built from the masked pass.
    ///
    /// Every candidate vertex is computed and scaled by its 0/1 mask, so the
    /// arithmetic has the same fixed shape whatever the classification. With
    /// [`Dual`](crate::Dual) coordinates both forms give the same values and
    /// derivatives; for plain floats it returns exactly what
    /// [`clip`](Self::clip) returns.
    pub fn clip_masked<S: Scalar>(&self, subject: &Polygon<S>, clip: &Polygon<S>) -> Polygon<S> {
        let result = clip_boundaries(clip)
            .enumerate()
            .fold(subject.clone(), |current, (i, boundary)| {
                let next =
                    reduce_by_edge_masked(&current, boundary, self.config.parallel_epsilon);
                trace!("masked clip edge {}: {} -> {} vertices", i, current.len(), next.len());
                next
            });
        self.report_empty(&result);
        result
    }

    /// Clip many independent `(subject, clip)` pairs.
    ///
    /// With the `parallel` feature the pairs are spread over the rayon
    /// thread pool. Output order matches input order.
    pub fn clip_batch<S>(&self, pairs: &[(Polygon<S>, Polygon<S>)]) -> Vec<Polygon<S>>
    where
        S: Scalar + Send + Sync,
    {
        maybe_par_iter!(pairs)
            .map(|(subject, clip)| self.clip(subject, clip))
            .collect()
    }

    /// Whether an empty-result warning is due for `result`.
    pub fn should_warn<S: Scalar>(&self, result: &Polygon<S>) -> bool {
        self.config.warn_if_empty && result.is_empty()
    }

    fn report_empty<S: Scalar>(&self, result: &Polygon<S>) {
        if self.should_warn(result) {
            warn!("No intersection found. Are both polygons in clockwise order?");
        }
    }
}
