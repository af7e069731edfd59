use ndarray::ArrayD;

use crate::interval::interval::Interval;

/// Anything an interval operation accepts on its other side.
///
/// Plain numbers and arrays behave as degenerate intervals equal to themselves.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Interval(Interval),
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl From<Interval> for Operand {
    fn from(interval: Interval) -> Self {
        Operand::Interval(interval)
    }
}

impl From<&Interval> for Operand {
    fn from(interval: &Interval) -> Self {
        Operand::Interval(interval.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<ArrayD<f64>> for Operand {
    fn from(values: ArrayD<f64>) -> Self {
        Operand::Array(values)
    }
}

impl From<&ArrayD<f64>> for Operand {
    fn from(values: &ArrayD<f64>) -> Self {
        Operand::Array(values.clone())
    }
}

impl Operand {
    pub fn into_interval(self) -> Interval {
        match self {
            Operand::Interval(interval) => interval,
            Operand::Scalar(value) => Interval::point(value),
            Operand::Array(values) => Interval::degenerate(values)
        }
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, Operand::Interval(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_plain_operands_become_degenerate() {
        assert_eq!(Operand::from(2.0).into_interval(), Interval::point(2.0));

        let values = arr1(&[1.0, -1.0]).into_dyn();
        let interval = Operand::from(values.clone()).into_interval();
        assert_eq!(interval.lo(), &values);
        assert_eq!(interval.hi(), &values);
        assert!(!Operand::from(values).is_interval());
    }
}
