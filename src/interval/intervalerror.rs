use thiserror::Error;

pub type IntervalResult<T> = Result<T, IntervalError>;

// ─────────────────────────────────────────────────────────────────────────────
// IntervalError
// ─────────────────────────────────────────────────────────────────────────────
//
// Domain faults. None of them is transient: the same inputs always fault the
// same way, and every operation checks before it writes any output.

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    #[error("division by an interval that encloses zero")]
    DivideByZero,

    #[error("power {exponent} is not real-valued over the given interval")]
    UndefinedPower { exponent: f64 },

    #[error("operands of shape {left:?} and {right:?} cannot be combined elementwise")]
    ShapeMismatch {
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("array of shape {shape:?} has several axes of length 2, a pair axis must be given")]
    AmbiguousParse { shape: Vec<usize> },

    #[error("{operation} is undefined for an unsized interval")]
    Unsized { operation: &'static str },

    #[error("axis {axis} is not usable on an array with {ndim} dimension(s)")]
    InvalidAxis { axis: usize, ndim: usize },

    #[error("{function} is undefined over the given interval")]
    OutOfDomain { function: &'static str },

    #[error("invalid input: {details}")]
    InvalidInput { details: String },
}

impl IntervalError {
    pub fn shape_mismatch(left: &[usize], right: &[usize]) -> IntervalError {
        IntervalError::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}
