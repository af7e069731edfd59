use ndarray::{
    ArrayD,
    Zip
};

use crate::interval::interval::Interval;
use crate::interval::intervalerror::IntervalResult;
use crate::interval::operand::Operand;
use crate::interval::shape::align;

// ─────────────────────────────────────────────────────────────────────────────
// Set relations
// ─────────────────────────────────────────────────────────────────────────────
//
// Every relation has an elementwise `_mask` form. The boolean form reduces the
// mask with "all", except `straddle_zero` which reduces with "any" because a
// single zero-enclosing element is enough to make a divisor unusable.
//
// The second operand may be a plain number or array; it is treated as a
// degenerate interval.

pub fn straddle_zero_mask(x: &Interval) -> ArrayD<bool> {
    Zip::from(x.lo())
        .and(x.hi())
        .map_collect(|&lo, &hi| lo <= 0.0 && hi >= 0.0)
}

/// `lo <= 0 <= hi` for at least one element.
pub fn straddle_zero(x: &Interval) -> bool {
    straddle_zero_mask(x).iter().any(|straddles| *straddles)
}

pub fn contain_mask(x: &Interval, y: impl Into<Operand>) -> IntervalResult<ArrayD<bool>> {
    let (x, y) = align(x, &y.into().into_interval())?;
    Ok(Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|&x_lo, &x_hi, &y_lo, &y_hi| x_lo <= y_lo && x_hi >= y_hi))
}

/// `x` contains `y`: `lo(x) <= lo(y)` and `hi(x) >= hi(y)`.
pub fn contain(x: &Interval, y: impl Into<Operand>) -> IntervalResult<bool> {
    Ok(contain_mask(x, y)?.iter().all(|contained| *contained))
}

pub fn intersect_mask(x: &Interval, y: impl Into<Operand>) -> IntervalResult<ArrayD<bool>> {
    let (x, y) = align(x, &y.into().into_interval())?;
    Ok(Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|&x_lo, &x_hi, &y_lo, &y_hi| !(x_hi < y_lo || y_hi < x_lo)))
}

/// Every element of `x` overlaps the matching element of `y`. Touching counts.
///
/// This is elementwise: arrays that overlap in some elements but not in others
/// do not intersect, even though the whole-array ordering leaves them unordered.
pub fn intersect(x: &Interval, y: impl Into<Operand>) -> IntervalResult<bool> {
    Ok(intersect_mask(x, y)?.iter().all(|overlaps| *overlaps))
}

/// Interval hull `[min(lo), max(hi)]` of `x` and `y`.
///
/// This is not a set union: for disjoint operands the gap between them is
/// included in the result.
pub fn union(x: &Interval, y: impl Into<Operand>) -> IntervalResult<Interval> {
    let (x, y) = align(x, &y.into().into_interval())?;
    let lo = Zip::from(x.lo()).and(y.lo()).map_collect(|&a, &b| a.min(b));
    let hi = Zip::from(x.hi()).and(y.hi()).map_collect(|&a, &b| a.max(b));
    Ok(Interval::from_parts(lo, hi))
}

/// `[max(lo), min(hi)]` when `x` and `y` intersect everywhere, `None` otherwise.
pub fn intersection(x: &Interval, y: impl Into<Operand>) -> IntervalResult<Option<Interval>> {
    let y = y.into().into_interval();
    if !intersect(x, &y)? {
        return Ok(None);
    }
    let (x, y) = align(x, &y)?;
    let lo = Zip::from(x.lo()).and(y.lo()).map_collect(|&a, &b| a.max(b));
    let hi = Zip::from(x.hi()).and(y.hi()).map_collect(|&a, &b| a.min(b));
    Ok(Some(Interval::from_parts(lo, hi)))
}

/// `x` strictly encloses `y` on both sides.
pub fn encloses(x: &Interval, y: impl Into<Operand>) -> IntervalResult<bool> {
    let (x, y) = align(x, &y.into().into_interval())?;
    Ok(Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .all(|&x_lo, &x_hi, &y_lo, &y_hi| x_lo < y_lo && y_hi < x_hi))
}

/// `x` lies inside `y`.
pub fn inside(x: &Interval, y: impl Into<Operand>) -> IntervalResult<bool> {
    let y = y.into().into_interval();
    contain(&y, x)
}

/// Hausdorff distance `max(|lo(x) - lo(y)|, |hi(x) - hi(y)|)`, elementwise.
pub fn distance(x: &Interval, y: impl Into<Operand>) -> IntervalResult<ArrayD<f64>> {
    let (x, y) = align(x, &y.into().into_interval())?;
    Ok(Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|&x_lo, &x_hi, &y_lo, &y_hi| (x_lo - y_lo).abs().max((x_hi - y_hi).abs())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, IxDyn};

    use crate::interval::intervalerror::IntervalError;

    #[test]
    fn test_straddle_zero() {
        assert!(straddle_zero(&Interval::new(-1.0, 1.0)));
        assert!(straddle_zero(&Interval::new(0.0, 2.0)));
        assert!(straddle_zero(&Interval::new(-2.0, 0.0)));
        assert!(!straddle_zero(&Interval::new(0.5, 2.0)));
        assert!(!straddle_zero(&Interval::point(5.0)));

        let mixed = Interval::from_vecs(vec![1.0, -1.0], vec![2.0, 1.0]).unwrap();
        assert!(straddle_zero(&mixed));
        assert_eq!(straddle_zero_mask(&mixed).iter().copied().collect::<Vec<bool>>(), vec![false, true]);
    }

    #[test]
    fn test_contain_accepts_numbers() {
        let x = Interval::new(1.0, 4.0);
        assert!(contain(&x, 2.0).unwrap());
        assert!(contain(&x, 4.0).unwrap());
        assert!(!contain(&x, 4.5).unwrap());
        assert!(contain(&x, &Interval::new(1.0, 3.0)).unwrap());
        assert!(!contain(&x, &Interval::new(0.0, 3.0)).unwrap());
        assert!(inside(&Interval::new(2.0, 3.0), &x).unwrap());
    }

    #[test]
    fn test_intersect_agrees_with_ordering() {
        let pairs = [
            (Interval::new(1.0, 2.0), Interval::new(3.0, 4.0)),
            (Interval::new(1.0, 2.0), Interval::new(2.0, 4.0)),
            (Interval::new(1.0, 5.0), Interval::new(2.0, 3.0)),
            (Interval::new(6.0, 7.0), Interval::new(2.0, 3.0)),
        ];
        for (x, y) in pairs.iter() {
            let expected = !(x < y || y < x);
            assert_eq!(intersect(x, y).unwrap(), expected);
            assert_eq!(intersect(y, x).unwrap(), expected);
        }
    }

    #[test]
    fn test_intersect_is_elementwise() {
        let x = Interval::from_arrays(
            arr2(&[[0.0], [5.0]]).into_dyn(),
            arr2(&[[1.0], [6.0]]).into_dyn(),
        )
        .unwrap();
        let y = Interval::from_arrays(
            arr2(&[[2.0], [2.0]]).into_dyn(),
            arr2(&[[3.0], [3.0]]).into_dyn(),
        )
        .unwrap();
        assert_eq!(x.partial_cmp(&y), None);
        assert!(!intersect(&x, &y).unwrap());
        assert_eq!(intersection(&x, &y).unwrap(), None);
    }

    #[test]
    fn test_union_is_hull() {
        let x = Interval::new(1.0, 2.0);
        let y = Interval::new(5.0, 6.0);
        assert_eq!(union(&x, &y).unwrap(), Interval::new(1.0, 6.0));
        assert_eq!(union(&x, 0.0).unwrap(), Interval::new(0.0, 2.0));
    }

    #[test]
    fn test_intersection() {
        let x = Interval::new(1.0, 4.0);
        let y = Interval::new(3.0, 6.0);
        assert_eq!(intersection(&x, &y).unwrap(), Some(Interval::new(3.0, 4.0)));
        assert_eq!(intersection(&x, &Interval::new(5.0, 6.0)).unwrap(), None);
        assert_eq!(intersection(&x, &Interval::new(4.0, 6.0)).unwrap(), Some(Interval::point(4.0)));
    }

    #[test]
    fn test_encloses_and_distance() {
        let x = Interval::new(0.0, 10.0);
        assert!(encloses(&x, &Interval::new(1.0, 9.0)).unwrap());
        assert!(!encloses(&x, &Interval::new(0.0, 9.0)).unwrap());
        let d = distance(&x, &Interval::new(1.0, 7.0)).unwrap();
        assert_eq!(d[IxDyn(&[])], 3.0);
    }

    #[test]
    fn test_relations_reject_incompatible_shapes() {
        let x = Interval::from_vecs(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap();
        let y = Interval::from_vecs(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(contain(&x, &y), Err(IntervalError::ShapeMismatch { .. })));
        assert!(matches!(union(&x, &y), Err(IntervalError::ShapeMismatch { .. })));
    }
}
