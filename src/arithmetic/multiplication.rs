use ndarray::{
    ArrayD,
    Zip
};

use crate::arithmetic::signcase::{
    case_masks,
    MulCase
};
use crate::interval::interval::Interval;
use crate::interval::intervalerror::{
    IntervalError,
    IntervalResult
};
use crate::interval::shape::{
    align,
    unzip_bounds
};

/// Moore product of two intervals.
///
/// Shapes combine elementwise when equal; a scalar interval on either side is
/// applied to every element of the other.
pub fn multiply(x: &Interval, y: &Interval) -> IntervalResult<Interval> {
    let (x, y) = align(x, y)?;
    let pairs = Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|&x_lo, &x_hi, &y_lo, &y_hi| {
            MulCase::classify(x_lo, x_hi, y_lo, y_hi).bounds(x_lo, x_hi, y_lo, y_hi)
        });
    let (lo, hi) = unzip_bounds(pairs);
    Ok(Interval::from_parts(lo, hi))
}

/// The table entry each element of `x * y` is resolved by.
pub fn multiplication_cases(x: &Interval, y: &Interval) -> IntervalResult<ArrayD<MulCase>> {
    let (x, y) = align(x, y)?;
    Ok(Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|&x_lo, &x_hi, &y_lo, &y_hi| MulCase::classify(x_lo, x_hi, y_lo, y_hi)))
}

pub fn multiplication_masks(x: &Interval, y: &Interval) -> IntervalResult<Vec<(MulCase, ArrayD<bool>)>> {
    let cases = multiplication_cases(x, y)?;
    Ok(case_masks(&cases, &MulCase::table()))
}

impl Interval {
    /// `[lo * k, hi * k]`, endpoints swapped when `k < 0`.
    pub fn scale(&self, k: f64) -> Interval {
        if k >= 0.0 {
            Interval::from_parts(self.lo().mapv(|v| v * k), self.hi().mapv(|v| v * k))
        } else {
            Interval::from_parts(self.hi().mapv(|v| v * k), self.lo().mapv(|v| v * k))
        }
    }

    /// Elementwise scaling, the swap decided by the sign of each entry of `k`.
    pub fn scale_by(&self, k: &ArrayD<f64>) -> IntervalResult<Interval> {
        let factor = Interval::degenerate(k.clone());
        let (x, factor) = align(self, &factor)?;
        let pairs = Zip::from(x.lo())
            .and(x.hi())
            .and(factor.lo())
            .map_collect(|&lo, &hi, &k| {
                if k >= 0.0 {
                    (lo * k, hi * k)
                } else {
                    (hi * k, lo * k)
                }
            });
        let (lo, hi) = unzip_bounds(pairs);
        Ok(Interval::from_parts(lo, hi))
    }

    /// Division by a plain number; `DivideByZero` when `k == 0`.
    pub fn divide_scalar(&self, k: f64) -> IntervalResult<Interval> {
        if k == 0.0 {
            return Err(IntervalError::DivideByZero);
        }
        if k > 0.0 {
            Ok(Interval::from_parts(self.lo().mapv(|v| v / k), self.hi().mapv(|v| v / k)))
        } else {
            Ok(Interval::from_parts(self.hi().mapv(|v| v / k), self.lo().mapv(|v| v / k)))
        }
    }

    /// Elementwise division by an array; `DivideByZero` if any entry is 0.
    pub fn divide_by(&self, k: &ArrayD<f64>) -> IntervalResult<Interval> {
        if k.iter().any(|v| *v == 0.0) {
            return Err(IntervalError::DivideByZero);
        }
        let divisor = Interval::degenerate(k.clone());
        let (x, divisor) = align(self, &divisor)?;
        let pairs = Zip::from(x.lo())
            .and(x.hi())
            .and(divisor.lo())
            .map_collect(|&lo, &hi, &k| {
                if k > 0.0 {
                    (lo / k, hi / k)
                } else {
                    (hi / k, lo / k)
                }
            });
        let (lo, hi) = unzip_bounds(pairs);
        Ok(Interval::from_parts(lo, hi))
    }
}
