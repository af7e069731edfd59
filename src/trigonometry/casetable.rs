use ndarray::{
    ArrayD,
    Zip
};
use tracing::warn;

use crate::interval::interval::Interval;

// ─────────────────────────────────────────────────────────────────────────────
// Periodic case tables
// ─────────────────────────────────────────────────────────────────────────────
//
// An interval narrower than one period is reduced to (yl, yh) in [0, period).
// Each endpoint falls in one monotone sub-domain of the function, and the pair
// (domain of yl, domain of yh, yl > yh) picks exactly one table entry. The
// entry says how the image is built from f(lo) and f(hi):
//
//   FullRange        the reduced path covers both extrema
//   Increasing       [f(lo), f(hi)]
//   Decreasing       [f(hi), f(lo)]
//   CrossesMaximum   [min(f(lo), f(hi)), max of range]
//   CrossesMinimum   [min of range, max(f(lo), f(hi))]
//   Unbounded        [-inf, inf], the path crosses a pole
//
// f is always evaluated at the unreduced endpoints; the reduced values only
// select the case.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    FullRange,
    Increasing,
    Decreasing,
    CrossesMaximum,
    CrossesMinimum,
    Unbounded,
}

impl Resolution {
    pub fn bounds<F>(&self, function: &F, lo: f64, hi: f64) -> (f64, f64)
        where F: PeriodicFunction + ?Sized {
        let (range_lo, range_hi) = function.full_range();
        match self {
            Resolution::FullRange => (range_lo, range_hi),
            Resolution::Increasing => (function.eval(lo), function.eval(hi)),
            Resolution::Decreasing => (function.eval(hi), function.eval(lo)),
            Resolution::CrossesMaximum => (function.eval(lo).min(function.eval(hi)), range_hi),
            Resolution::CrossesMinimum => (range_lo, function.eval(lo).max(function.eval(hi))),
            Resolution::Unbounded => (f64::NEG_INFINITY, f64::INFINITY)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaseEntry {
    pub lower: usize,
    pub upper: usize,
    pub wraps: bool,
    pub resolution: Resolution,
}

impl CaseEntry {
    pub const fn new(lower: usize, upper: usize, wraps: bool, resolution: Resolution) -> CaseEntry {
        CaseEntry { lower, upper, wraps, resolution }
    }

    pub fn matches(&self, lower: usize, upper: usize, wraps: bool) -> bool {
        self.lower == lower && self.upper == upper && self.wraps == wraps
    }
}

/// Which rule decided an element: the width test or a table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrigCase {
    FullPeriod,
    Entry(CaseEntry),
}

pub trait PeriodicFunction {
    fn name(&self) -> &'static str;

    fn period(&self) -> f64;

    /// Image of a full period.
    fn full_range(&self) -> (f64, f64);

    fn eval(&self, x: f64) -> f64;

    /// Index of the monotone sub-domain containing `reduced`, a value in
    /// `[0, period)`.
    fn domain(&self, reduced: f64) -> usize;

    fn table(&self) -> &'static [CaseEntry];

    /// The entry for an interval narrower than one period, if any matches.
    fn lookup(&self, lo: f64, hi: f64) -> Option<CaseEntry> {
        let period = self.period();
        let (yl, yh) = (lo.rem_euclid(period), hi.rem_euclid(period));
        let (lower, upper, wraps) = (self.domain(yl), self.domain(yh), yl > yh);
        self.table()
            .iter()
            .find(|entry| entry.matches(lower, upper, wraps))
            .copied()
    }

    fn classify(&self, lo: f64, hi: f64) -> Option<TrigCase> {
        if hi - lo >= self.period() {
            return Some(TrigCase::FullPeriod);
        }
        self.lookup(lo, hi).map(TrigCase::Entry)
    }
}

/// Enclosure of `f` over a single `[lo, hi]`.
pub fn enclose_scalar<F>(function: &F, lo: f64, hi: f64) -> (f64, f64)
    where F: PeriodicFunction + ?Sized {
    match function.classify(lo, hi) {
        Some(TrigCase::FullPeriod) => function.full_range(),
        Some(TrigCase::Entry(entry)) => entry.resolution.bounds(function, lo, hi),
        None => {
            warn!(function = function.name(), lo, hi, "no case matched, using the full range");
            function.full_range()
        }
    }
}

/// One mask per rule, full-period test first and then every table entry.
///
/// Each mask only claims elements that no earlier mask claimed, so an element
/// is never assigned twice.
pub fn case_masks<F>(function: &F, x: &Interval) -> Vec<(TrigCase, ArrayD<bool>)>
    where F: PeriodicFunction + ?Sized {
    let period = function.period();
    let mut undecided = ArrayD::from_elem(x.lo().raw_dim(), true);
    let mut masks = Vec::with_capacity(function.table().len() + 1);

    let full = Zip::from(x.lo())
        .and(x.hi())
        .map_collect(|&lo, &hi| hi - lo >= period);
    claim(&mut undecided, &full);
    masks.push((TrigCase::FullPeriod, full));

    let reduced_lo = x.lo().mapv(|lo| lo.rem_euclid(period));
    let reduced_hi = x.hi().mapv(|hi| hi.rem_euclid(period));
    for entry in function.table() {
        let mask = Zip::from(&undecided)
            .and(&reduced_lo)
            .and(&reduced_hi)
            .map_collect(|&open, &yl, &yh| {
                open && entry.matches(function.domain(yl), function.domain(yh), yl > yh)
            });
        claim(&mut undecided, &mask);
        masks.push((TrigCase::Entry(*entry), mask));
    }
    masks
}

fn claim(undecided: &mut ArrayD<bool>, mask: &ArrayD<bool>) {
    Zip::from(undecided)
        .and(mask)
        .for_each(|open, &taken| *open = *open && !taken);
}

/// Enclosure of `f` over every element of `x`.
///
/// Unsized input takes the scalar path; arrays are resolved mask by mask.
pub fn enclose<F>(function: &F, x: &Interval) -> Interval
    where F: PeriodicFunction + ?Sized {
    if x.is_unsized() {
        let (lo, hi) = x.as_scalar().unwrap_or((f64::NAN, f64::NAN));
        let (lo, hi) = enclose_scalar(function, lo, hi);
        return Interval::new(lo, hi);
    }

    let (range_lo, range_hi) = function.full_range();
    let mut out_lo = ArrayD::from_elem(x.lo().raw_dim(), range_lo);
    let mut out_hi = ArrayD::from_elem(x.lo().raw_dim(), range_hi);
    let mut undecided = ArrayD::from_elem(x.lo().raw_dim(), true);

    for (case, mask) in case_masks(function, x) {
        let resolution = match case {
            TrigCase::FullPeriod => Resolution::FullRange,
            TrigCase::Entry(entry) => entry.resolution
        };
        Zip::from(&mut out_lo)
            .and(&mut out_hi)
            .and(&mask)
            .and(x.lo())
            .and(x.hi())
            .for_each(|lo_slot, hi_slot, &selected, &lo, &hi| {
                if selected {
                    (*lo_slot, *hi_slot) = resolution.bounds(function, lo, hi);
                }
            });
        claim(&mut undecided, &mask);
    }

    let leftover = undecided.iter().filter(|open| **open).count();
    if leftover > 0 {
        warn!(function = function.name(), leftover, "elements matched no case, using the full range");
    }
    Interval::from_parts(out_lo, out_hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::trigonometry::cosine::Cosine;
    use crate::trigonometry::sine::Sine;
    use crate::trigonometry::tangent::Tangent;

    fn functions() -> Vec<Box<dyn PeriodicFunction>> {
        vec![Box::new(Sine), Box::new(Cosine), Box::new(Tangent)]
    }

    #[test]
    fn test_tables_have_unique_keys() {
        for function in functions() {
            let table = function.table();
            for (i, a) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|b| !b.matches(a.lower, a.upper, a.wraps)),
                    "{} lists {:?} twice",
                    function.name(),
                    a
                );
            }
        }
    }

    #[test]
    fn test_exactly_one_entry_matches_each_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        for function in functions() {
            let period = function.period();
            for _ in 0..2000 {
                let lo: f64 = rng.gen_range(-4.0 * period..4.0 * period);
                let hi = lo + rng.gen_range(0.0..period);
                if hi - lo >= period {
                    continue;
                }
                let (yl, yh) = (lo.rem_euclid(period), hi.rem_euclid(period));
                let (lower, upper, wraps) = (function.domain(yl), function.domain(yh), yl > yh);
                let hits = function
                    .table()
                    .iter()
                    .filter(|entry| entry.matches(lower, upper, wraps))
                    .count();
                assert_eq!(hits, 1, "{} over [{lo},{hi}]", function.name());
            }
        }
    }

    #[test]
    fn test_endpoints_on_domain_boundaries() {
        use std::f64::consts::{FRAC_PI_2, PI};
        let boundaries = [0.0, FRAC_PI_2, PI, PI + FRAC_PI_2];
        for function in functions() {
            for &lo in boundaries.iter() {
                for &hi in boundaries.iter() {
                    if lo <= hi && hi - lo < function.period() {
                        assert!(function.lookup(lo, hi).is_some(), "{} over [{lo},{hi}]", function.name());
                    }
                }
            }
        }
    }
}
