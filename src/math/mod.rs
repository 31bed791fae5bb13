//! Scalar types and the 2D point used throughout the crate.

pub mod dual;
pub mod point;
pub mod scalar;

pub use dual::Dual;
pub use point::Point;
pub use scalar::Scalar;
