//! Sutherland-Hodgman polygon clipping.
//!
//! This crate intersects a subject polygon with a clip polygon by cutting the
//! subject against each clip edge in turn. It is meant as a building block
//! for overlap metrics such as the intersection over union of oriented
//! bounding boxes.
//!
//! Both polygons must list their vertices in **clockwise** order. The
//! clipper does not check this; counter-clockwise input gives a wrong
//! (typically empty) result and, when enabled, an empty-result warning.
//!
//! Coordinates are generic over [`Scalar`]. Besides `f32` and `f64`, the
//! forward-mode [`Dual`] number is supported, and
//! [`PolygonClipper::clip_masked`] keeps every output coordinate
//! differentiable with respect to the inputs.
//!
//! # Quick Start
//!
//! ```
//! use hodgman::prelude::*;
//!
//! let subject = Polygon::<f64>::from_coords(&[(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]);
//! let clip = Polygon::from_coords(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
//!
//! let clipper = PolygonClipper::new(true);
//! let overlap = clipper.clip(&subject, &clip);
//! assert_eq!(overlap.len(), 4);
//! assert!((iou(&subject, &clip) - 1.0 / 7.0).abs() < 1e-12);
//! ```

pub mod clipper;
pub mod error;
pub mod math;
pub mod metrics;
pub mod polygon;
pub mod predicates;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{ClipperConfig, PolygonClipper};
pub use error::ClipError;
pub use math::{Dual, Point, Scalar};
pub use polygon::{Edge, Polygon};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use hodgman::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{ClipperConfig, PolygonClipper};
    pub use crate::error::ClipError;

    // Geometry
    pub use crate::math::{Dual, Point, Scalar};
    pub use crate::polygon::{Edge, Polygon};

    // Metrics
    pub use crate::metrics::{intersection_area, intersection_area_gradient, iou};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::pass::{reduce_by_edge, reduce_by_edge_masked};
    pub use crate::predicates::{line_intersection, orientation};
}
