use ndarray::{
    ArrayD,
    Zip
};
use tracing::debug;

use crate::arithmetic::signcase::SignCase;
use crate::interval::interval::Interval;
use crate::interval::intervalerror::{
    IntervalError,
    IntervalResult
};
use crate::interval::operand::Operand;
use crate::interval::shape::{
    align,
    unzip_bounds
};
use crate::set::setrelation::straddle_zero;

// ─────────────────────────────────────────────────────────────────────────────
// Integer powers
// ─────────────────────────────────────────────────────────────────────────────
//
//   n even, NonNegative  -> [lo^n, hi^n]
//   n even, NonPositive  -> [hi^n, lo^n]
//   n even, Straddle     -> [0, mag^n]
//   n odd                -> [lo^n, hi^n]
//   n < 0                -> 1 / x^|n|, undefined when x encloses zero

fn even_power_bounds<P>(lo: f64, hi: f64, power: P) -> (f64, f64)
    where P: Fn(f64) -> f64 {
    match SignCase::classify(lo, hi) {
        SignCase::NonNegative => (power(lo), power(hi)),
        SignCase::NonPositive => (power(hi), power(lo)),
        SignCase::Straddle => (0.0, power(lo.abs().max(hi.abs())))
    }
}

impl Interval {
    pub fn powi(&self, n: i32) -> IntervalResult<Interval> {
        if n == 0 {
            let ones = self.lo().mapv(|_| 1.0);
            return Ok(Interval::from_parts(ones.clone(), ones));
        }
        if n < 0 {
            if straddle_zero(self) {
                debug!(exponent = n, interval = %self, "negative power of zero-enclosing interval");
                return Err(IntervalError::UndefinedPower { exponent: n as f64 });
            }
            let magnitude = n.checked_neg().ok_or(IntervalError::UndefinedPower { exponent: n as f64 })?;
            return self.powi(magnitude)?.rdiv(1.0);
        }
        let pairs = if n % 2 == 0 {
            Zip::from(self.lo())
                .and(self.hi())
                .map_collect(|&lo, &hi| even_power_bounds(lo, hi, |v| v.powi(n)))
        } else {
            Zip::from(self.lo())
                .and(self.hi())
                .map_collect(|&lo, &hi| (lo.powi(n), hi.powi(n)))
        };
        let (lo, hi) = unzip_bounds(pairs);
        Ok(Interval::from_parts(lo, hi))
    }

    /// Real power. Integral exponents go through `powi`; any other exponent
    /// requires a non-negative base, and a positive one when `p < 0`.
    pub fn powf(&self, p: f64) -> IntervalResult<Interval> {
        if !p.is_finite() {
            return Err(IntervalError::UndefinedPower { exponent: p });
        }
        if p.fract() == 0.0 {
            if p.abs() <= i32::MAX as f64 {
                return self.powi(p as i32);
            }
            return self.wide_integral_power(p);
        }
        let negative_base = self.lo().iter().any(|lo| *lo < 0.0);
        let zero_base = self.lo().iter().any(|lo| *lo <= 0.0);
        if negative_base || (p < 0.0 && zero_base) {
            debug!(exponent = p, interval = %self, "fractional power outside the base domain");
            return Err(IntervalError::UndefinedPower { exponent: p });
        }
        if p > 0.0 {
            Ok(Interval::from_parts(self.lo().mapv(|v| v.powf(p)), self.hi().mapv(|v| v.powf(p))))
        } else {
            Ok(Interval::from_parts(self.hi().mapv(|v| v.powf(p)), self.lo().mapv(|v| v.powf(p))))
        }
    }

    /// Integral exponent beyond the `i32` range, same sign rules as `powi`.
    fn wide_integral_power(&self, p: f64) -> IntervalResult<Interval> {
        if p < 0.0 {
            if straddle_zero(self) {
                debug!(exponent = p, interval = %self, "negative power of zero-enclosing interval");
                return Err(IntervalError::UndefinedPower { exponent: p });
            }
            return self.wide_integral_power(-p)?.rdiv(1.0);
        }
        let pairs = if (p / 2.0).fract() == 0.0 {
            Zip::from(self.lo())
                .and(self.hi())
                .map_collect(|&lo, &hi| even_power_bounds(lo, hi, |v| v.powf(p)))
        } else {
            Zip::from(self.lo())
                .and(self.hi())
                .map_collect(|&lo, &hi| (lo.powf(p), hi.powf(p)))
        };
        let (lo, hi) = unzip_bounds(pairs);
        Ok(Interval::from_parts(lo, hi))
    }

    pub fn sqrt(&self) -> IntervalResult<Interval> {
        if self.lo().iter().any(|lo| *lo < 0.0) {
            return Err(IntervalError::OutOfDomain { function: "sqrt" });
        }
        Ok(Interval::from_parts(self.lo().mapv(f64::sqrt), self.hi().mapv(f64::sqrt)))
    }

    pub fn exp(&self) -> Interval {
        Interval::from_parts(self.lo().mapv(f64::exp), self.hi().mapv(f64::exp))
    }

    /// Natural logarithm; `lo == 0` yields a `-inf` lower bound.
    pub fn ln(&self) -> IntervalResult<Interval> {
        if self.lo().iter().any(|lo| *lo < 0.0) {
            return Err(IntervalError::OutOfDomain { function: "ln" });
        }
        Ok(Interval::from_parts(self.lo().mapv(f64::ln), self.hi().mapv(f64::ln)))
    }

    /// `[mig, mag]`
    pub fn abs(&self) -> Interval {
        Interval::from_parts(self.mignitude(), self.magnitude())
    }

    /// Elementwise `[min(xl, yl), min(xh, yh)]`.
    pub fn min(&self, other: impl Into<Operand>) -> IntervalResult<Interval> {
        let (x, y) = align(self, &other.into().into_interval())?;
        Ok(Interval::from_parts(pointwise(x.lo(), y.lo(), f64::min), pointwise(x.hi(), y.hi(), f64::min)))
    }

    /// Elementwise `[max(xl, yl), max(xh, yh)]`.
    pub fn max(&self, other: impl Into<Operand>) -> IntervalResult<Interval> {
        let (x, y) = align(self, &other.into().into_interval())?;
        Ok(Interval::from_parts(pointwise(x.lo(), y.lo(), f64::max), pointwise(x.hi(), y.hi(), f64::max)))
    }
}

fn pointwise(a: &ArrayD<f64>, b: &ArrayD<f64>, f: fn(f64, f64) -> f64) -> ArrayD<f64> {
    Zip::from(a).and(b).map_collect(|&a, &b| f(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_powers_follow_sign_case() {
        assert_eq!(Interval::new(2.0, 3.0).powi(2).unwrap(), Interval::new(4.0, 9.0));
        assert_eq!(Interval::new(-3.0, -2.0).powi(2).unwrap(), Interval::new(4.0, 9.0));
        assert_eq!(Interval::new(-2.0, 3.0).powi(2).unwrap(), Interval::new(0.0, 9.0));
        assert_eq!(Interval::new(-3.0, 1.0).powi(4).unwrap(), Interval::new(0.0, 81.0));
    }

    #[test]
    fn test_odd_powers_are_monotone() {
        assert_eq!(Interval::new(-2.0, 3.0).powi(3).unwrap(), Interval::new(-8.0, 27.0));
        assert_eq!(Interval::new(-1.0, 2.0).powi(1).unwrap(), Interval::new(-1.0, 2.0));
    }

    #[test]
    fn test_zero_power_is_one() {
        let x = Interval::from_vecs(vec![-1.0, 2.0], vec![1.0, 5.0]).unwrap();
        assert_eq!(x.powi(0).unwrap(), Interval::from_vecs(vec![1.0, 1.0], vec![1.0, 1.0]).unwrap());
    }

    #[test]
    fn test_negative_powers() {
        assert_eq!(Interval::new(2.0, 4.0).powi(-1).unwrap(), Interval::new(0.25, 0.5));
        assert_eq!(Interval::new(-4.0, -2.0).powi(-2).unwrap(), Interval::new(1.0 / 16.0, 0.25));
        assert_eq!(
            Interval::new(-1.0, 2.0).powi(-2),
            Err(IntervalError::UndefinedPower { exponent: -2.0 })
        );
    }

    #[test]
    fn test_fractional_powers() {
        assert_eq!(Interval::new(4.0, 9.0).powf(0.5).unwrap(), Interval::new(2.0, 3.0));
        assert_eq!(Interval::new(4.0, 9.0).powf(2.0).unwrap(), Interval::new(16.0, 81.0));
        assert!(Interval::new(-1.0, 4.0).powf(0.5).is_err());
        assert!(Interval::new(0.0, 4.0).powf(-0.5).is_err());
        assert!(Interval::new(1.0, 4.0).powf(f64::NAN).is_err());
        let y = Interval::new(4.0, 16.0).powf(-0.5).unwrap();
        assert_eq!(y, Interval::new(0.25, 0.5));
    }

    #[test]
    fn test_integral_powers_beyond_i32() {
        let x = Interval::new(-1.0, 1.0);
        assert_eq!(x.powf(4e9).unwrap(), Interval::new(0.0, 1.0));
        assert_eq!(x.powf(3_000_000_001.0).unwrap(), Interval::new(-1.0, 1.0));
        assert_eq!(Interval::new(-1.0, 0.5).powf(3_000_000_001.0).unwrap(), Interval::new(-1.0, 0.0));
        assert_eq!(Interval::new(-1.0, -0.5).powf(4e9).unwrap(), Interval::new(0.0, 1.0));
        assert_eq!(x.powf(-4e9), Err(IntervalError::UndefinedPower { exponent: -4e9 }));
    }

    #[test]
    fn test_elementary_functions() {
        assert_eq!(Interval::new(4.0, 9.0).sqrt().unwrap(), Interval::new(2.0, 3.0));
        assert_eq!(Interval::new(-1.0, 9.0).sqrt(), Err(IntervalError::OutOfDomain { function: "sqrt" }));
        assert_eq!(Interval::new(0.0, 1.0).exp(), Interval::new(1.0, std::f64::consts::E));
        assert_eq!(Interval::new(1.0, 1.0).ln().unwrap(), Interval::point(0.0));
        assert_eq!(Interval::new(-3.0, 2.0).abs(), Interval::new(0.0, 3.0));
        assert_eq!(Interval::new(-3.0, -2.0).abs(), Interval::new(2.0, 3.0));
    }

    #[test]
    fn test_min_max() {
        let x = Interval::new(1.0, 5.0);
        let y = Interval::new(2.0, 3.0);
        assert_eq!(x.min(&y).unwrap(), Interval::new(1.0, 3.0));
        assert_eq!(x.max(&y).unwrap(), Interval::new(2.0, 5.0));
        assert_eq!(x.max(4.0).unwrap(), Interval::new(4.0, 5.0));
    }
}
