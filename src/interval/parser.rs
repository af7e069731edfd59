use ndarray::{
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

// ─────────────────────────────────────────────────────────────────────────────
// Construction boundary
// ─────────────────────────────────────────────────────────────────────────────
//
// Raw numeric arrays are paired into (lo, hi) along an axis of length 2:
//
//   (4, 2)     -> interval of shape (4,)        only axis of length 2
//   (2, 3, 7)  -> interval of shape (3, 7)      only axis of length 2
//   (7, 2, 2)  -> interval of shape (7, 2)      several, last one is paired
//   (2, 2, 7)  -> AmbiguousParse                several, last one is not 2
//   (3, 7)     -> degenerate interval (3, 7)    nothing to pair

/// Casts a raw array into an interval, pairing `lo`/`hi` along `pair_axis`
/// or, when no hint is given, along the unambiguous axis of length 2.
pub fn intervalise(values: &ArrayD<f64>, pair_axis: Option<usize>) -> IntervalResult<Interval> {
    let shape = values.shape();
    let axis = match pair_axis {
        Some(axis) => {
            if axis >= shape.len() || shape[axis] != 2 {
                return Err(IntervalError::InvalidAxis { axis, ndim: shape.len() });
            }
            axis
        },
        None => match resolve_pair_axis(shape)? {
            Some(axis) => axis,
            None => return Ok(Interval::degenerate(values.clone()))
        }
    };
    let lo = values.index_axis(Axis(axis), 0).to_owned();
    let hi = values.index_axis(Axis(axis), 1).to_owned();
    Ok(Interval::from_parts(lo, hi))
}

fn resolve_pair_axis(shape: &[usize]) -> IntervalResult<Option<usize>> {
    let pair_axes: Vec<usize> = shape
        .iter()
        .enumerate()
        .filter(|(_, length)| **length == 2)
        .map(|(axis, _)| axis)
        .collect();
    match pair_axes.as_slice() {
        [] => Ok(None),
        [axis] => Ok(Some(*axis)),
        _ => {
            if shape.last() == Some(&2) {
                debug!(?shape, "several axes of length 2, pairing the last one");
                Ok(Some(shape.len() - 1))
            } else {
                Err(IntervalError::AmbiguousParse { shape: shape.to_vec() })
            }
        }
    }
}

/// Reads a rectangular nested JSON array of numbers (or a single number).
pub fn array_from_json(value: &serde_json::Value) -> IntervalResult<ArrayD<f64>> {
    let mut shape = Vec::new();
    let mut cursor = value;
    while let serde_json::Value::Array(items) = cursor {
        shape.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break
        }
    }
    let mut data = Vec::with_capacity(shape.iter().product());
    collect_json(value, 0, &shape, &mut data)?;
    ArrayD::from_shape_vec(IxDyn(&shape), data)
        .map_err(|error| IntervalError::InvalidInput { details: error.to_string() })
}

fn collect_json(value: &serde_json::Value,
                depth: usize,
                shape: &[usize],
                data: &mut Vec<f64>) -> IntervalResult<()> {
    if depth == shape.len() {
        let number = value.as_f64().ok_or_else(|| IntervalError::InvalidInput {
            details: format!("expected a number, found {}", value)
        })?;
        data.push(number);
        return Ok(());
    }
    match value {
        serde_json::Value::Array(items) if items.len() == shape[depth] => {
            for item in items {
                collect_json(item, depth + 1, shape, data)?;
            }
            Ok(())
        },
        _ => Err(IntervalError::InvalidInput {
            details: format!("ragged array at depth {}", depth)
        })
    }
}

impl Interval {
    /// Parses a JSON literal such as `[[1, 2], [3, 4]]` through `intervalise`.
    pub fn from_json(value: &serde_json::Value, pair_axis: Option<usize>) -> IntervalResult<Interval> {
        let values = array_from_json(value)?;
        intervalise(&values, pair_axis)
    }
}
