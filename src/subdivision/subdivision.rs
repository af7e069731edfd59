use ndarray::{
    Array2,
    ArrayD,
    Axis,
    IxDyn
};
use tracing::debug;

use crate::interval::interval::Interval;
use crate::interval::intervalerror::{
    IntervalError,
    IntervalResult
};
use crate::set::setrelation::union;

// ─────────────────────────────────────────────────────────────────────────────
// Tile collections
// ─────────────────────────────────────────────────────────────────────────────
//
// Tiles are ordinary intervals stacked along the first axis:
//
//   scalar x  -> shape [n]           one tile per element
//   box x [d] -> shape [tiles, d]    one box per row
//
// Split counts of 0 and 1 leave an axis whole.

/// `n` equal-width, edge-adjacent pieces of `[lo, hi]`; the last edge is
/// exactly `hi`.
fn partition(lo: f64, hi: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let n = n.max(1);
    let step = (hi - lo) / n as f64;
    let edges: Vec<f64> = (0..=n)
        .map(|k| if k == n { hi } else { lo + k as f64 * step })
        .collect();
    let lows = edges[..n].to_vec();
    let highs = edges[1..].to_vec();
    (lows, highs)
}

fn invalid(details: String) -> IntervalError {
    IntervalError::InvalidInput { details }
}

/// Uniform subdivision of a scalar interval or of every axis of a box.
pub fn subintervalise(x: &Interval, n: usize) -> IntervalResult<Interval> {
    match x.ndim() {
        0 => subintervalise_axes(x, &[n]),
        1 => subintervalise_axes(x, &vec![n; x.len()]),
        _ => Err(invalid(format!("cannot subdivide an interval of shape {:?}", x.shape())))
    }
}

/// Subdivision with one split count per axis of a box.
///
/// The tiles form the cartesian product of the per-axis partitions, first
/// axis varying slowest.
pub fn subintervalise_axes(x: &Interval, counts: &[usize]) -> IntervalResult<Interval> {
    let axes = if x.is_unsized() { 1 } else { x.len() };
    if x.ndim() > 1 {
        return Err(invalid(format!("cannot subdivide an interval of shape {:?}", x.shape())));
    }
    if counts.len() != axes {
        return Err(IntervalError::shape_mismatch(&[axes], &[counts.len()]));
    }
    if counts.iter().all(|n| *n <= 1) {
        return Ok(x.clone());
    }

    let bounds: Vec<(f64, f64)> = x.lo().iter().copied().zip(x.hi().iter().copied()).collect();
    let mut axis_tiles = bounds
        .iter()
        .zip(counts.iter())
        .map(|(&(lo, hi), &n)| {
            let (lows, highs) = partition(lo, hi, n);
            Interval::from_vecs(lows, highs)
        });

    let first = axis_tiles
        .next()
        .ok_or_else(|| invalid("cannot subdivide an empty box".to_string()))??;
    let tiles = if x.is_unsized() {
        first
    } else {
        let mut grid = columns(&first);
        for next in axis_tiles {
            grid = space_product(&grid, &next?)?;
        }
        grid
    };
    debug!(shape = ?x.shape(), ?counts, tiles = tiles.len(), "subdivided");
    Ok(tiles)
}

/// A collection of scalar tiles `[n]` as a single-column box collection `[n, 1]`.
fn columns(tiles: &Interval) -> Interval {
    if tiles.ndim() == 2 {
        return tiles.clone();
    }
    let sized = tiles.to_sized();
    Interval::from_parts(
        sized.lo().clone().insert_axis(Axis(1)),
        sized.hi().clone().insert_axis(Axis(1)),
    )
}

/// Cartesian pairing of two tile collections.
///
/// `x` of shape `[n]` or `[n, d]` and `y` of shape `[m]` give `[n * m, d + 1]`,
/// every row of `x` followed by every tile of `y`.
pub fn space_product(x: &Interval, y: &Interval) -> IntervalResult<Interval> {
    if x.ndim() > 2 || y.ndim() > 1 {
        return Err(invalid(format!(
            "cannot pair collections of shape {:?} and {:?}",
            x.shape(),
            y.shape()
        )));
    }
    let x = columns(x);
    let y = y.to_sized();
    let (n, d) = (x.shape()[0], x.shape()[1]);
    let m = y.len();

    let mut lo = Array2::<f64>::zeros((n * m, d + 1));
    let mut hi = Array2::<f64>::zeros((n * m, d + 1));
    for i in 0..n {
        for j in 0..m {
            let row = i * m + j;
            for k in 0..d {
                lo[[row, k]] = x.lo()[IxDyn(&[i, k])];
                hi[[row, k]] = x.hi()[IxDyn(&[i, k])];
            }
            lo[[row, d]] = y.lo()[IxDyn(&[j])];
            hi[[row, d]] = y.hi()[IxDyn(&[j])];
        }
    }
    Ok(Interval::from_parts(lo.into_dyn(), hi.into_dyn()))
}

/// Splits one element at its midpoint.
///
/// Without an `axis` the widest element is split, the first one on ties. The
/// axis is a flat index over the elements.
pub fn bisect(x: &Interval, axis: Option<usize>) -> IntervalResult<(Interval, Interval)> {
    let count = x.lo().len();
    let axis = match axis {
        Some(axis) if axis >= count => return Err(IntervalError::InvalidAxis { axis, ndim: x.ndim() }),
        Some(axis) => axis,
        None => widest(&x.width())
    };
    let mut left_hi = x.hi().clone();
    let mut right_lo = x.lo().clone();
    let middle = x.midpoint();
    let split = middle.iter().nth(axis).copied().unwrap_or(f64::NAN);
    if let Some(slot) = left_hi.iter_mut().nth(axis) {
        *slot = split;
    }
    if let Some(slot) = right_lo.iter_mut().nth(axis) {
        *slot = split;
    }
    Ok((
        Interval::from_parts(x.lo().clone(), left_hi),
        Interval::from_parts(right_lo, x.hi().clone()),
    ))
}

fn widest(widths: &ArrayD<f64>) -> usize {
    widths
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best, best_width), (index, &width)| {
            if width > best_width {
                (index, width)
            } else {
                (best, best_width)
            }
        })
        .0
}

/// `([lo, point], [point, hi])` wherever `lo < point < hi`; other elements
/// are returned whole on both sides.
pub fn split_interval(x: &Interval, point: f64) -> (Interval, Interval) {
    let inside = |lo: f64, hi: f64| lo < point && point < hi;
    let mut left_hi = x.hi().clone();
    let mut right_lo = x.lo().clone();
    for ((slot, &lo), &hi) in left_hi.iter_mut().zip(x.lo().iter()).zip(x.hi().iter()) {
        if inside(lo, hi) {
            *slot = point;
        }
    }
    for ((slot, &lo), &hi) in right_lo.iter_mut().zip(x.lo().iter()).zip(x.hi().iter()) {
        if inside(lo, hi) {
            *slot = point;
        }
    }
    (
        Interval::from_parts(x.lo().clone(), left_hi),
        Interval::from_parts(right_lo, x.hi().clone()),
    )
}

/// Hull of a tile collection along its first axis.
pub fn reconstitute(tiles: &Interval) -> IntervalResult<Interval> {
    if tiles.is_unsized() {
        return Ok(tiles.clone());
    }
    if tiles.len() == 0 {
        return Err(invalid("cannot reconstitute an empty collection".to_string()));
    }
    let lo = tiles.lo().fold_axis(Axis(0), f64::INFINITY, |&acc, &v| acc.min(v));
    let hi = tiles.hi().fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| acc.max(v));
    Ok(Interval::from_parts(lo, hi))
}

/// Tiles of a collection, one interval per entry of the first axis.
pub fn tile_rows(tiles: &Interval) -> Vec<Interval> {
    if tiles.is_unsized() {
        return vec![tiles.clone()];
    }
    tiles
        .lo()
        .outer_iter()
        .zip(tiles.hi().outer_iter())
        .map(|(lo, hi)| Interval::from_parts(lo.to_owned(), hi.to_owned()))
        .collect()
}

/// Hull of `f` over every tile of `x`.
///
/// A subdivided enclosure is never wider than `f(x)` for inclusion-monotone
/// `f`, and usually tighter.
pub fn refine<F>(x: &Interval, counts: &[usize], f: F) -> IntervalResult<Interval>
    where F: Fn(&Interval) -> IntervalResult<Interval> {
    let tiles = subintervalise_axes(x, counts)?;
    if tiles.ndim() == x.ndim() {
        return f(x);
    }
    let mut enclosures = tile_rows(&tiles).into_iter().map(|tile| f(&tile));
    let first = enclosures
        .next()
        .ok_or_else(|| invalid("subdivision produced no tiles".to_string()))??;
    enclosures.try_fold(first, |hull, enclosure| union(&hull, enclosure?))
}
