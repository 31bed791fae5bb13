//! Numeric abstraction shared by the predicates and the clipper.
//!
//! Every coordinate in the crate is a [`Scalar`]. Plain floats implement it
//! directly; [`Dual`](super::dual::Dual) implements it so that the same
//! clipping code records derivatives.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A real-valued coordinate type.
///
/// Arithmetic that produces output coordinates always goes through the
/// operator impls, so a gradient-carrying implementation sees every value it
/// has to differentiate. Decisions (which side of a line a point is on) are
/// taken on [`Scalar::value`], which is detached.
pub trait Scalar:
    Copy
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift a plain constant. Constants carry no derivative.
    fn from_f64(v: f64) -> Self;

    /// The primal value, without any derivative information.
    fn value(self) -> f64;

    /// Absolute value.
    fn abs(self) -> Self;

    /// A 0/1 mask usable as a multiplicative selector.
    #[inline]
    fn mask(keep: bool) -> Self {
        if keep {
            Self::one()
        } else {
            Self::zero()
        }
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.value().is_finite()
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(self) -> f64 {
        self
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn value(self) -> f64 {
        self as f64
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }
}
