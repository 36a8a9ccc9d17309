use thiserror::Error;

/// Errors returned while fitting or (checked) evaluating a [CubicSpline](crate::CubicSpline).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    #[error("x-values must be strictly increasing: x[{index}] = {current} follows {previous}")]
    NonIncreasingX { index: usize, previous: f64, current: f64 },

    #[error("duplicate x-values at index {index}: {x1} and {x2}")]
    DuplicateX { index: usize, x1: f64, x2: f64 },

    #[error("numeric degeneracy: segment {segment} has a non-finite coefficient")]
    NumericDegeneracy { segment: usize },

    #[error("evaluation point {got} lies below the first knot {x_min}")]
    OutOfDomainLow { got: f64, x_min: f64 },

    #[error("evaluation point is NaN")]
    NanQuery,

    #[error("invalid min_spacing {got}: must be finite and > 0")]
    InvalidMinSpacing { got: f64 },
}
