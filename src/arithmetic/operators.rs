use std::ops::{
    Add,
    Div,
    Mul,
    Neg,
    Sub
};

use crate::arithmetic::division::divide;
use crate::arithmetic::multiplication::multiply;
use crate::interval::interval::Interval;
use crate::interval::intervalerror::IntervalResult;
use crate::interval::operand::Operand;
use crate::interval::shape::align;

// ─────────────────────────────────────────────────────────────────────────────
// Operand dispatch
// ─────────────────────────────────────────────────────────────────────────────
//
//   x + y = [xl + yl, xh + yh]
//   x - y = [xl - yh, xh - yl]
//
// Plain numbers and arrays on the other side are degenerate intervals, so the
// same formulas cover them. Multiplication and division by plain values take
// the sign-swap path instead of the full case table.

impl Interval {
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> IntervalResult<Interval> {
        let (x, y) = align(self, &rhs.into().into_interval())?;
        Ok(Interval::from_parts(x.lo() + y.lo(), x.hi() + y.hi()))
    }

    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> IntervalResult<Interval> {
        let (x, y) = align(self, &rhs.into().into_interval())?;
        Ok(Interval::from_parts(x.lo() - y.hi(), x.hi() - y.lo()))
    }

    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> IntervalResult<Interval> {
        match rhs.into() {
            Operand::Interval(y) => multiply(self, &y),
            Operand::Scalar(k) => Ok(self.scale(k)),
            Operand::Array(k) => self.scale_by(&k)
        }
    }

    pub fn checked_div(&self, rhs: impl Into<Operand>) -> IntervalResult<Interval> {
        match rhs.into() {
            Operand::Interval(y) => divide(self, &y),
            Operand::Scalar(k) => self.divide_scalar(k),
            Operand::Array(k) => self.divide_by(&k)
        }
    }

    /// `lhs - self`
    pub fn rsub(&self, lhs: impl Into<Operand>) -> IntervalResult<Interval> {
        lhs.into().into_interval().checked_sub(self)
    }

    /// `lhs / self`. A plain `k` gives `[k/hi, k/lo]` for `k >= 0` and
    /// `[k/lo, k/hi]` otherwise; `DivideByZero` if `self` encloses zero.
    pub fn rdiv(&self, lhs: impl Into<Operand>) -> IntervalResult<Interval> {
        divide(&lhs.into().into_interval(), self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::ops
// ─────────────────────────────────────────────────────────────────────────────
//
// Interval-by-interval operators return `IntervalResult` because shapes may
// not combine and divisors may enclose zero. Operators with a plain `f64` that
// cannot fault return an `Interval` directly.

impl Neg for &Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval::from_parts(self.hi().mapv(|v| -v), self.lo().mapv(|v| -v))
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        -&self
    }
}

impl Add<&Interval> for &Interval {
    type Output = IntervalResult<Interval>;

    fn add(self, rhs: &Interval) -> IntervalResult<Interval> {
        self.checked_add(rhs)
    }
}

impl Sub<&Interval> for &Interval {
    type Output = IntervalResult<Interval>;

    fn sub(self, rhs: &Interval) -> IntervalResult<Interval> {
        self.checked_sub(rhs)
    }
}

impl Mul<&Interval> for &Interval {
    type Output = IntervalResult<Interval>;

    fn mul(self, rhs: &Interval) -> IntervalResult<Interval> {
        multiply(self, rhs)
    }
}

impl Div<&Interval> for &Interval {
    type Output = IntervalResult<Interval>;

    fn div(self, rhs: &Interval) -> IntervalResult<Interval> {
        divide(self, rhs)
    }
}

impl Add<f64> for &Interval {
    type Output = Interval;

    fn add(self, rhs: f64) -> Interval {
        Interval::from_parts(self.lo().mapv(|v| v + rhs), self.hi().mapv(|v| v + rhs))
    }
}

impl Sub<f64> for &Interval {
    type Output = Interval;

    fn sub(self, rhs: f64) -> Interval {
        Interval::from_parts(self.lo().mapv(|v| v - rhs), self.hi().mapv(|v| v - rhs))
    }
}

impl Mul<f64> for &Interval {
    type Output = Interval;

    fn mul(self, rhs: f64) -> Interval {
        self.scale(rhs)
    }
}

impl Div<f64> for &Interval {
    type Output = IntervalResult<Interval>;

    fn div(self, rhs: f64) -> IntervalResult<Interval> {
        self.divide_scalar(rhs)
    }
}

impl Add<&Interval> for f64 {
    type Output = Interval;

    fn add(self, rhs: &Interval) -> Interval {
        rhs + self
    }
}

impl Sub<&Interval> for f64 {
    type Output = Interval;

    fn sub(self, rhs: &Interval) -> Interval {
        Interval::from_parts(rhs.hi().mapv(|v| self - v), rhs.lo().mapv(|v| self - v))
    }
}

impl Mul<&Interval> for f64 {
    type Output = Interval;

    fn mul(self, rhs: &Interval) -> Interval {
        rhs.scale(self)
    }
}

impl Div<&Interval> for f64 {
    type Output = IntervalResult<Interval>;

    fn div(self, rhs: &Interval) -> IntervalResult<Interval> {
        rhs.rdiv(self)
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Interval> for Interval {
            type Output = IntervalResult<Interval>;

            fn $method(self, rhs: Interval) -> IntervalResult<Interval> {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Interval> for Interval {
            type Output = IntervalResult<Interval>;

            fn $method(self, rhs: &Interval) -> IntervalResult<Interval> {
                (&self).$method(rhs)
            }
        }

        impl $imp<f64> for Interval {
            type Output = <&'static Interval as $imp<f64>>::Output;

            fn $method(self, rhs: f64) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $imp<Interval> for f64 {
            type Output = <f64 as $imp<&'static Interval>>::Output;

            fn $method(self, rhs: Interval) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);
