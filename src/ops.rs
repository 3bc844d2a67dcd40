use crate::intervals::Interval;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Shl, Shr, Sub,
    SubAssign,
};

/// Floor division `(a / b).floor()`, the quotient paired with
/// [`floored_rem`].
fn floored_div(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

/// Floored remainder: the sign follows the divisor, so that
/// `a == b * floored_div(a, b) + floored_rem(a, b)` for finite operands.
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn unit_sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

//  Every binary operator combines the lower bounds and the upper bounds
//  independently, then re-normalizes.  The right operand may be anything
//  coercible to an interval: a bare number is a degenerate interval, a pair
//  an ordered one.

impl<R: Into<Interval>> Add<R> for Interval {
    type Output = Interval;

    fn add(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(self.lower() + rhs.lower(), self.upper() + rhs.upper())
    }
}

impl<R: Into<Interval>> Sub<R> for Interval {
    type Output = Interval;

    fn sub(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(self.lower() - rhs.lower(), self.upper() - rhs.upper())
    }
}

impl<R: Into<Interval>> Mul<R> for Interval {
    type Output = Interval;

    fn mul(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(self.lower() * rhs.lower(), self.upper() * rhs.upper())
    }
}

impl<R: Into<Interval>> Div<R> for Interval {
    type Output = Interval;

    fn div(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(self.lower() / rhs.lower(), self.upper() / rhs.upper())
    }
}

impl<R: Into<Interval>> Rem<R> for Interval {
    type Output = Interval;

    /// Floored remainder per endpoint (the sign follows the divisor),
    /// consistent with [`Interval::floor_div`].
    fn rem(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(
            floored_rem(self.lower(), rhs.lower()),
            floored_rem(self.upper(), rhs.upper()),
        )
    }
}

impl<R: Into<Interval>> Shl<R> for Interval {
    type Output = Interval;

    /// Per-endpoint scaling by `2^n`; coincides with the integer left shift
    /// when both bounds are integral.
    fn shl(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(
            self.lower() * rhs.lower().exp2(),
            self.upper() * rhs.upper().exp2(),
        )
    }
}

impl<R: Into<Interval>> Shr<R> for Interval {
    type Output = Interval;

    /// Per-endpoint scaling by `2^-n`; coincides with the integer right
    /// shift when both bounds are integral.
    fn shr(self, rhs: R) -> Interval {
        let rhs = rhs.into();
        Interval::from_raw(
            self.lower() / rhs.lower().exp2(),
            self.upper() / rhs.upper().exp2(),
        )
    }
}

impl<R: Into<Interval>> AddAssign<R> for Interval {
    fn add_assign(&mut self, rhs: R) {
        *self = *self + rhs.into();
    }
}

impl<R: Into<Interval>> SubAssign<R> for Interval {
    fn sub_assign(&mut self, rhs: R) {
        *self = *self - rhs.into();
    }
}

impl<R: Into<Interval>> MulAssign<R> for Interval {
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs.into();
    }
}

impl<R: Into<Interval>> DivAssign<R> for Interval {
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs.into();
    }
}

//  Scalar-on-the-left forms.  The left operand coerces to a degenerate
//  interval and the operator stays lower-with-lower, upper-with-upper, which
//  for the non-commutative operators is NOT the mirror of the forward form.

impl Add<Interval> for f64 {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::single(self) + rhs
    }
}

impl Sub<Interval> for f64 {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::single(self) - rhs
    }
}

impl Mul<Interval> for f64 {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        Interval::single(self) * rhs
    }
}

impl Div<Interval> for f64 {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        Interval::single(self) / rhs
    }
}

impl Add<Interval> for (f64, f64) {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::from(self) + rhs
    }
}

impl Sub<Interval> for (f64, f64) {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::from(self) - rhs
    }
}

impl Mul<Interval> for (f64, f64) {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        Interval::from(self) * rhs
    }
}

impl Div<Interval> for (f64, f64) {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        Interval::from(self) / rhs
    }
}

impl Neg for Interval {
    type Output = Interval;

    /// Negates both bounds; the result is re-ordered, so `-[2, 5]` is
    /// `[-5, -2]`.
    fn neg(self) -> Interval {
        Interval::from_raw(-self.lower(), -self.upper())
    }
}

impl Interval {
    /// Floor division per endpoint: `(a / b).floor()`.
    pub fn floor_div(&self, other: impl Into<Interval>) -> Interval {
        let other = other.into();
        Interval::from_raw(
            floored_div(self.lower(), other.lower()),
            floored_div(self.upper(), other.upper()),
        )
    }

    /// The divmod pair: one interval from the two floor quotients, one from
    /// the two floored remainders.
    pub fn div_rem(&self, other: impl Into<Interval>) -> (Interval, Interval) {
        let other = other.into();
        (self.floor_div(other), *self % other)
    }

    /// Raises each bound to the matching bound of `exp`.
    pub fn pow(&self, exp: impl Into<Interval>) -> Interval {
        let exp = exp.into();
        Interval::from_raw(
            self.lower().powf(exp.lower()),
            self.upper().powf(exp.upper()),
        )
    }

    /// Modular exponentiation per bound: each bound is raised to the
    /// matching bound of `exp`, then reduced with the floored remainder mod
    /// `modulus`.
    pub fn pow_mod(&self, exp: impl Into<Interval>, modulus: f64) -> Interval {
        let exp = exp.into();
        Interval::from_raw(
            floored_rem(self.lower().powf(exp.lower()), modulus),
            floored_rem(self.upper().powf(exp.upper()), modulus),
        )
    }

    /// Absolute value of both bounds, re-ordered.
    pub fn abs(&self) -> Interval {
        Interval::from_raw(self.lower().abs(), self.upper().abs())
    }

    /// Rounds both bounds to the nearest integer, ties to even.
    pub fn round(&self) -> Interval {
        Interval::from_raw(
            self.lower().round_ties_even(),
            self.upper().round_ties_even(),
        )
    }

    /// Rounds both bounds down.
    pub fn floor(&self) -> Interval {
        Interval::from_raw(self.lower().floor(), self.upper().floor())
    }

    /// Rounds both bounds up.
    pub fn ceil(&self) -> Interval {
        Interval::from_raw(self.lower().ceil(), self.upper().ceil())
    }

    /// Truncates both bounds toward zero.
    pub fn trunc(&self) -> Interval {
        Interval::from_raw(self.lower().trunc(), self.upper().trunc())
    }

    /// Sign-directed integer rounding that shrinks `|lower|` and grows
    /// `|upper|`.  For non-negative bounds the result is a superset of
    /// self.
    pub fn round_wider(&self) -> Interval {
        let lower = if self.lower() >= 0.0 {
            self.lower().floor()
        } else {
            self.lower().ceil()
        };
        let upper = if self.upper() >= 0.0 {
            self.upper().ceil()
        } else {
            self.upper().floor()
        };
        Interval::from_raw(lower, upper)
    }

    /// Sign-directed integer rounding that grows `|lower|` and shrinks
    /// `|upper|`.  For non-negative bounds the result is a subset of self.
    pub fn round_narrower(&self) -> Interval {
        let lower = if self.lower() >= 0.0 {
            self.lower().ceil()
        } else {
            self.lower().floor()
        };
        let upper = if self.upper() >= 0.0 {
            self.upper().floor()
        } else {
            self.upper().ceil()
        };
        Interval::from_raw(lower, upper)
    }

    /// Maps each bound independently to -1, 0 or 1.
    pub fn sign(&self) -> Interval {
        Interval::from_raw(unit_sign(self.lower()), unit_sign(self.upper()))
    }
}
