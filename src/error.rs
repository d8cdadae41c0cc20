use thiserror::Error;

/// Errors returned by point construction and the median-cut driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A point was built from a number of values that does not match its dimensionality.
    #[error("invalid dimensionality: expected {expected} values, got {actual}")]
    InvalidDimensionality { expected: usize, actual: usize },

    /// An input point has a different dimensionality than the first input point.
    #[error("point {index} has {actual} dimensions, expected {expected}")]
    MixedDimensionality {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// The input points have no dimensions, so there is nothing to split along.
    #[error("points must have at least one dimension")]
    ZeroDimensional,

    /// The median cut was requested on an empty set of points.
    #[error("median cut requires at least one input point")]
    EmptyInput,

    /// An input value is NaN or infinite and cannot be ordered.
    #[error("point {index} has a non-finite value in dimension {dimension}")]
    NonFinite { index: usize, dimension: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
