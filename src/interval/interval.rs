use std::cmp::Ordering;
use std::fmt;

use ndarray::{
    ArrayD,
    Axis,
    IxDyn,
    Zip
};
use serde::{
    Deserialize,
    Serialize
};

use crate::interval::intervalerror::{
    IntervalError,
    IntervalResult
};
use crate::interval::shape::{
    broadcast_shape,
    is_scalar_shape,
    spread
};

// ─────────────────────────────────────────────────────────────────────────────
// Interval
// ─────────────────────────────────────────────────────────────────────────────
//
// A closed real range [lo, hi], or an array of such ranges with `lo` and `hi`
// of identical shape. `lo <= hi` elementwise is assumed, never checked; use
// `Interval::proper` when the endpoints may arrive swapped.
//
//   unsized : lo.ndim() == 0          (a plain scalar interval)
//   scalar  : shape [] or shape [1]
//   sized   : at least one axis, addressable by index and iteration

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr", into = "IntervalRepr")]
pub struct Interval {
    lo: ArrayD<f64>,
    hi: ArrayD<f64>,
}

#[derive(Serialize, Deserialize)]
struct IntervalRepr {
    lo: ArrayD<f64>,
    hi: ArrayD<f64>,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = IntervalError;

    fn try_from(repr: IntervalRepr) -> Result<Self, Self::Error> {
        Interval::from_arrays(repr.lo, repr.hi)
    }
}

impl From<Interval> for IntervalRepr {
    fn from(interval: Interval) -> Self {
        IntervalRepr { lo: interval.lo, hi: interval.hi }
    }
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Interval {
        Interval {
            lo: ArrayD::from_elem(IxDyn(&[]), lo),
            hi: ArrayD::from_elem(IxDyn(&[]), hi),
        }
    }

    /// Degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Interval {
        Interval::new(value, value)
    }

    /// Builds `[min(a, b), max(a, b)]` from a possibly improper pair.
    pub fn proper(a: f64, b: f64) -> Interval {
        if a <= b {
            Interval::new(a, b)
        } else {
            Interval::new(b, a)
        }
    }

    pub fn from_arrays(lo: ArrayD<f64>, hi: ArrayD<f64>) -> IntervalResult<Interval> {
        if lo.shape() != hi.shape() {
            return Err(IntervalError::shape_mismatch(lo.shape(), hi.shape()));
        }
        Ok(Interval { lo, hi })
    }

    pub fn from_vecs(lo: Vec<f64>, hi: Vec<f64>) -> IntervalResult<Interval> {
        if lo.len() != hi.len() {
            return Err(IntervalError::shape_mismatch(&[lo.len()], &[hi.len()]));
        }
        let lo = ArrayD::from_shape_vec(IxDyn(&[lo.len()]), lo)
            .map_err(|error| IntervalError::InvalidInput { details: error.to_string() })?;
        let hi = ArrayD::from_shape_vec(IxDyn(&[hi.len()]), hi)
            .map_err(|error| IntervalError::InvalidInput { details: error.to_string() })?;
        Ok(Interval { lo, hi })
    }

    /// Array of degenerate intervals, one per element of `values`.
    pub fn degenerate(values: ArrayD<f64>) -> Interval {
        Interval { lo: values.clone(), hi: values }
    }

    /// Crate-internal constructor for bounds already known to share a shape.
    pub(crate) fn from_parts(lo: ArrayD<f64>, hi: ArrayD<f64>) -> Interval {
        debug_assert_eq!(lo.shape(), hi.shape());
        Interval { lo, hi }
    }

    pub fn lo(&self) -> &ArrayD<f64> {
        &self.lo
    }

    pub fn hi(&self) -> &ArrayD<f64> {
        &self.hi
    }

    pub fn width(&self) -> ArrayD<f64> {
        &self.hi - &self.lo
    }

    pub fn radius(&self) -> ArrayD<f64> {
        self.width().mapv(|w| w / 2.0)
    }

    pub fn midpoint(&self) -> ArrayD<f64> {
        Zip::from(&self.lo)
            .and(&self.hi)
            .map_collect(|&lo, &hi| (lo + hi) / 2.0)
    }

    /// `max(|lo|, |hi|)`
    pub fn magnitude(&self) -> ArrayD<f64> {
        Zip::from(&self.lo)
            .and(&self.hi)
            .map_collect(|&lo, &hi| lo.abs().max(hi.abs()))
    }

    /// `min(|lo|, |hi|)`, or 0 where the interval encloses zero.
    pub fn mignitude(&self) -> ArrayD<f64> {
        Zip::from(&self.lo)
            .and(&self.hi)
            .map_collect(|&lo, &hi| {
                if lo <= 0.0 && hi >= 0.0 {
                    0.0
                } else {
                    lo.abs().min(hi.abs())
                }
            })
    }

    pub fn shape(&self) -> &[usize] {
        self.lo.shape()
    }

    pub fn ndim(&self) -> usize {
        self.lo.ndim()
    }

    /// Length of the first axis; 0 for an unsized interval.
    pub fn len(&self) -> usize {
        self.shape().first().copied().unwrap_or(0)
    }

    pub fn is_unsized(&self) -> bool {
        self.lo.ndim() == 0
    }

    pub fn is_scalar(&self) -> bool {
        is_scalar_shape(self.shape())
    }

    /// `(lo, hi)` of a scalar interval, `None` for arrays.
    pub fn as_scalar(&self) -> Option<(f64, f64)> {
        if !self.is_scalar() {
            return None;
        }
        let lo = self.lo.iter().next().copied()?;
        let hi = self.hi.iter().next().copied()?;
        Some((lo, hi))
    }

    /// Sub-interval at `index` along the first axis.
    pub fn get(&self, index: usize) -> IntervalResult<Option<Interval>> {
        if self.is_unsized() {
            return Err(IntervalError::Unsized { operation: "indexing" });
        }
        if index >= self.len() {
            return Ok(None);
        }
        Ok(Some(Interval {
            lo: self.lo.index_axis(Axis(0), index).to_owned(),
            hi: self.hi.index_axis(Axis(0), index).to_owned(),
        }))
    }

    /// Every element as an unsized interval, in logical (row-major) order.
    ///
    /// The iterator borrows `self`, so calling `iter` again restarts it.
    pub fn iter(&self) -> IntervalResult<Elements<'_>> {
        if self.is_unsized() {
            return Err(IntervalError::Unsized { operation: "iteration" });
        }
        Ok(Elements {
            lo: self.lo.iter(),
            hi: self.hi.iter(),
        })
    }

    /// Turns an unsized scalar into shape `[1]`; anything else is returned as is.
    pub fn to_sized(&self) -> Interval {
        if self.is_unsized() {
            let lo = self.lo.clone().insert_axis(Axis(0));
            let hi = self.hi.clone().insert_axis(Axis(0));
            return Interval { lo, hi };
        }
        self.clone()
    }

    /// Turns a shape `[1]` scalar into an unsized one; anything else is returned as is.
    pub fn to_unsized(&self) -> Interval {
        if self.shape() == [1] {
            return Interval {
                lo: self.lo.index_axis(Axis(0), 0).to_owned(),
                hi: self.hi.index_axis(Axis(0), 0).to_owned(),
            };
        }
        self.clone()
    }

    /// The point `lo + p * width`, elementwise.
    pub fn slider(&self, p: f64) -> ArrayD<f64> {
        Zip::from(&self.lo)
            .and(&self.hi)
            .map_collect(|&lo, &hi| lo + p * (hi - lo))
    }

    /// `n` evenly spaced points from `lo` to `hi` inclusive.
    pub fn linspace(&self, n: usize) -> Vec<ArrayD<f64>> {
        match n {
            0 => Vec::new(),
            1 => vec![self.lo.clone()],
            _ => (0..n)
                .map(|k| {
                    if k == n - 1 {
                        self.hi.clone()
                    } else {
                        self.slider(k as f64 / (n - 1) as f64)
                    }
                })
                .collect()
        }
    }

    /// `mid ± gamma * rad / n`
    pub fn thin(&self, gamma: f64, n: f64) -> Interval {
        let half = self.radius().mapv(|r| gamma * r / n);
        let mid = self.midpoint();
        Interval {
            lo: &mid - &half,
            hi: &mid + &half,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Elements
// ─────────────────────────────────────────────────────────────────────────────

pub struct Elements<'a> {
    lo: ndarray::iter::Iter<'a, f64, IxDyn>,
    hi: ndarray::iter::Iter<'a, f64, IxDyn>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        let lo = self.lo.next()?;
        let hi = self.hi.next()?;
        Some(Interval::new(*lo, *hi))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lo.size_hint()
    }
}

impl<'a> ExactSizeIterator for Elements<'a> {}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.lo == other.lo && self.hi == other.hi
    }
}

/// Enclosure ordering: `x < y` iff `hi(x) < lo(y)` for every element.
///
/// Overlapping or touching intervals are unordered unless their bounds are
/// identical, so `partial_cmp` returns `None` for them.
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let shape = broadcast_shape(self.shape(), other.shape()).ok()?;
        let self_lo = spread(&self.lo, &shape).ok()?;
        let self_hi = spread(&self.hi, &shape).ok()?;
        let other_lo = spread(&other.lo, &shape).ok()?;
        let other_hi = spread(&other.hi, &shape).ok()?;
        if Zip::from(&self_hi).and(&other_lo).all(|&hi, &lo| hi < lo) {
            Some(Ordering::Less)
        } else if Zip::from(&self_lo).and(&other_hi).all(|&lo, &hi| lo > hi) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

/// A plain number compares as the degenerate interval `[value, value]`,
/// spread over every element.
impl PartialEq<f64> for Interval {
    fn eq(&self, other: &f64) -> bool {
        self.lo.iter().chain(self.hi.iter()).all(|bound| bound == other)
    }
}

impl PartialOrd<f64> for Interval {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.partial_cmp(&Interval::point(*other))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ndim() {
            0 => {
                let (lo, hi) = self.as_scalar().unwrap_or((f64::NAN, f64::NAN));
                write!(f, "[{},{}]", lo, hi)
            },
            1 => {
                let lines: Vec<String> = self.lo
                    .iter()
                    .zip(self.hi.iter())
                    .map(|(lo, hi)| format!("[{},{}]", lo, hi))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            },
            2 => {
                let rows: Vec<String> = self.lo
                    .outer_iter()
                    .zip(self.hi.outer_iter())
                    .map(|(lo_row, hi_row)| {
                        lo_row
                            .iter()
                            .zip(hi_row.iter())
                            .map(|(lo, hi)| format!("[{},{}]", lo, hi))
                            .collect::<Vec<String>>()
                            .join(" ")
                    })
                    .collect();
                write!(f, "{}", rows.join("\n"))
            },
            _ => write!(f, "lo:\n{}\nhi:\n{}", self.lo, self.hi)
        }
    }
}
