//! Forward-mode dual numbers.
//!
//! A [`Dual`] carries a value together with its derivative along one seeded
//! direction. Running the clipper on `Dual` coordinates therefore yields the
//! derivative of every output coordinate with respect to whichever input was
//! seeded with [`Dual::variable`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::scalar::Scalar;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dual {
    /// Primal value.
    pub re: f64,
    /// Derivative along the seeded direction.
    pub eps: f64,
}

impl Dual {
    pub const fn new(re: f64, eps: f64) -> Self {
        Self { re, eps }
    }

    /// A value that does not depend on the seeded input.
    pub const fn constant(re: f64) -> Self {
        Self { re, eps: 0.0 }
    }

    /// The seeded input itself (derivative 1).
    pub const fn variable(re: f64) -> Self {
        Self { re, eps: 1.0 }
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.re, self.eps)
    }
}

impl Add for Dual {
    type Output = Dual;

    fn add(self, rhs: Dual) -> Self::Output {
        Self::new(self.re + rhs.re, self.eps + rhs.eps)
    }
}

impl Sub for Dual {
    type Output = Dual;

    fn sub(self, rhs: Dual) -> Self::Output {
        Self::new(self.re - rhs.re, self.eps - rhs.eps)
    }
}

/// Product rule.
impl Mul for Dual {
    type Output = Dual;

    fn mul(self, rhs: Dual) -> Self::Output {
        Self::new(self.re * rhs.re, self.re * rhs.eps + self.eps * rhs.re)
    }
}

/// Quotient rule.
impl Div for Dual {
    type Output = Dual;

    fn div(self, rhs: Dual) -> Self::Output {
        let re = self.re / rhs.re;
        let eps = (self.eps * rhs.re - self.re * rhs.eps) / (rhs.re * rhs.re);
        Self::new(re, eps)
    }
}

impl Neg for Dual {
    type Output = Dual;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.eps)
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.eps == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::constant(v)
    }

    #[inline]
    fn value(self) -> f64 {
        self.re
    }

    fn abs(self) -> Self {
        if self.re < 0.0 {
            -self
        } else {
            self
        }
    }

    fn is_finite(self) -> bool {
        self.re.is_finite() && self.eps.is_finite()
    }
}
