use ndarray::{
    ArrayD,
    IxDyn
};

use crate::interval::interval::Interval;
use crate::interval::intervalerror::{
    IntervalError,
    IntervalResult
};

/// A shape is scalar when it has no axis at all or a single axis of length 1.
pub fn is_scalar_shape(shape: &[usize]) -> bool {
    shape.is_empty() || shape == [1]
}

/// Output shape of an elementwise binary operation.
///
/// Equal shapes combine elementwise. A scalar operand is spread over the other
/// operand's shape. When both are scalar the sized shape `[1]` wins over `[]`.
/// Anything else is a `ShapeMismatch`.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> IntervalResult<Vec<usize>> {
    if left == right {
        return Ok(left.to_vec());
    }
    match (is_scalar_shape(left), is_scalar_shape(right)) {
        (true, true) => {
            if left.len() >= right.len() {
                Ok(left.to_vec())
            } else {
                Ok(right.to_vec())
            }
        },
        (true, false) => Ok(right.to_vec()),
        (false, true) => Ok(left.to_vec()),
        (false, false) => Err(IntervalError::shape_mismatch(left, right))
    }
}

/// Copies `values` out to `shape`, or fails if ndarray cannot broadcast it.
pub fn spread(values: &ArrayD<f64>, shape: &[usize]) -> IntervalResult<ArrayD<f64>> {
    if values.shape() == shape {
        return Ok(values.clone());
    }
    // `[1] -> []` is the only scalar spread ndarray cannot express.
    if shape.is_empty() && values.len() == 1 {
        let value = values.iter().next().copied().unwrap_or(f64::NAN);
        return Ok(ArrayD::from_elem(IxDyn(&[]), value));
    }
    values
        .broadcast(IxDyn(shape))
        .map(|view| view.to_owned())
        .ok_or_else(|| IntervalError::shape_mismatch(values.shape(), shape))
}

/// Both intervals spread to their common elementwise shape.
pub fn align(x: &Interval, y: &Interval) -> IntervalResult<(Interval, Interval)> {
    let shape = broadcast_shape(x.shape(), y.shape())?;
    let x_aligned = Interval::from_parts(spread(x.lo(), &shape)?, spread(x.hi(), &shape)?);
    let y_aligned = Interval::from_parts(spread(y.lo(), &shape)?, spread(y.hi(), &shape)?);
    Ok((x_aligned, y_aligned))
}

/// Splits an array of bound pairs into the `lo` and `hi` arrays.
pub fn unzip_bounds(pairs: ArrayD<(f64, f64)>) -> (ArrayD<f64>, ArrayD<f64>) {
    let lo = pairs.mapv(|(lo, _)| lo);
    let hi = pairs.mapv(|(_, hi)| hi);
    (lo, hi)
}
