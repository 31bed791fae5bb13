//! Clipper configuration.

/// Default tolerance for the parallel-edge check, as a bound on the sine of
/// the angle between two edges.
pub const DEFAULT_PARALLEL_EPSILON: f64 = f64::EPSILON * 100.0;

/// Options fixed when a [`PolygonClipper`](super::PolygonClipper) is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipperConfig {
    /// Log a warning whenever a clip produces no vertices.
    pub warn_if_empty: bool,
    /// Sine of the angle below which a subject edge counts as parallel to a
    /// clip edge. [`try_clip`](super::PolygonClipper::try_clip) rejects such
    /// crossings; the other paths substitute the nearest edge endpoint.
    pub parallel_epsilon: f64,
}

impl ClipperConfig {
    pub fn new(warn_if_empty: bool) -> Self {
        Self {
            warn_if_empty,
            ..Self::default()
        }
    }

    pub fn with_warn_if_empty(mut self, warn_if_empty: bool) -> Self {
        self.warn_if_empty = warn_if_empty;
        self
    }

    pub fn with_parallel_epsilon(mut self, parallel_epsilon: f64) -> Self {
        self.parallel_epsilon = parallel_epsilon;
        self
    }
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            warn_if_empty: true,
            parallel_epsilon: DEFAULT_PARALLEL_EPSILON,
        }
    }
}
