//! Sutherland-Hodgman polygon clipping.
//!
//! The clip polygon is consumed one edge at a time. Each edge defines a
//! half-plane, and a single pass reduces the current subject to the part of
//! it inside that half-plane:
//!
//! - [`pass`]: the per-edge reduction, in plain, checked and masked
//!   (differentiable) forms.
//! - [`PolygonClipper`]: folds a pass over every clip edge and reports empty
//!   results.

pub mod config;
pub mod pass;
mod polygon_clipper;

pub use config::{ClipperConfig, DEFAULT_PARALLEL_EPSILON};
pub use pass::{clip_boundaries, reduce_by_edge, reduce_by_edge_masked, Crossing};
pub use polygon_clipper::PolygonClipper;
