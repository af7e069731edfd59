use ndarray::{
    ArrayD,
    Zip
};
use tracing::debug;

use crate::arithmetic::signcase::{
    case_masks,
    DivCase
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
use crate::set::setrelation::straddle_zero;

/// The table entry each element of `x / y` is resolved by.
///
/// Faults with `DivideByZero` as soon as any element of `y` encloses zero,
/// before shapes are even compared.
pub fn division_cases(x: &Interval, y: &Interval) -> IntervalResult<ArrayD<DivCase>> {
    if straddle_zero(y) {
        debug!(divisor = %y, "divisor encloses zero");
        return Err(IntervalError::DivideByZero);
    }
    let (x, y) = align(x, y)?;
    let cases = Zip::from(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|&x_lo, &x_hi, &y_lo, &y_hi| DivCase::classify(x_lo, x_hi, y_lo, y_hi));
    let shape = cases.raw_dim();
    let resolved = cases
        .iter()
        .map(|case| case.ok_or(IntervalError::DivideByZero))
        .collect::<IntervalResult<Vec<DivCase>>>()?;
    ArrayD::from_shape_vec(shape, resolved)
        .map_err(|error| IntervalError::InvalidInput { details: error.to_string() })
}

pub fn division_masks(x: &Interval, y: &Interval) -> IntervalResult<Vec<(DivCase, ArrayD<bool>)>> {
    let cases = division_cases(x, y)?;
    Ok(case_masks(&cases, &DivCase::table()))
}

/// Interval quotient `x / y` for a divisor that does not enclose zero.
pub fn divide(x: &Interval, y: &Interval) -> IntervalResult<Interval> {
    let cases = division_cases(x, y)?;
    let (x, y) = align(x, y)?;
    let pairs = Zip::from(&cases)
        .and(x.lo())
        .and(x.hi())
        .and(y.lo())
        .and(y.hi())
        .map_collect(|case, &x_lo, &x_hi, &y_lo, &y_hi| case.bounds(x_lo, x_hi, y_lo, y_hi));
    let (lo, hi) = unzip_bounds(pairs);
    Ok(Interval::from_parts(lo, hi))
}
