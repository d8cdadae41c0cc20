use crate::error::{Error, Result};
use crate::scalar::Scalar;
use std::cmp::Ordering;

/// Trait defining the capabilities the median cut needs from a data point.
///
/// Only `dimensions`, `value` and `set_value` are required; everything else is
/// derived from them and can be overridden for speed.
/// A dimension index outside `0..dimensions()` is a programming error and panics.
pub trait DataPoint: Clone + Send + Sync {
    /// The ordered value domain of each coordinate.
    type Value: Scalar;

    /// Number of dimensions of this point.
    fn dimensions(&self) -> usize;

    /// Gets the value for the specified dimension.
    fn value(&self, dimension: usize) -> Self::Value;

    /// Sets the value for the specified dimension.
    fn set_value(&mut self, dimension: usize, value: Self::Value);

    /// Sets every dimension to the domain's minimum value.
    fn move_to_minimum(&mut self) {
        for dim in 0..self.dimensions() {
            self.set_value(dim, Self::Value::LOWEST);
        }
    }

    /// Sets every dimension to the domain's maximum value.
    fn move_to_maximum(&mut self) {
        for dim in 0..self.dimensions() {
            self.set_value(dim, Self::Value::HIGHEST);
        }
    }

    /// Returns `self[dimension] - rhs[dimension]`.
    fn difference(&self, dimension: usize, rhs: &Self) -> <Self::Value as Scalar>::Diff {
        self.value(dimension).difference(rhs.value(dimension))
    }

    /// Lowers `self[dimension]` to `rhs[dimension]` if the latter is smaller.
    fn set_min(&mut self, dimension: usize, rhs: &Self) {
        let value = rhs.value(dimension);
        if self.value(dimension) > value {
            self.set_value(dimension, value);
        }
    }

    /// Raises `self[dimension]` to `rhs[dimension]` if the latter is larger.
    fn set_max(&mut self, dimension: usize, rhs: &Self) {
        let value = rhs.value(dimension);
        if self.value(dimension) < value {
            self.set_value(dimension, value);
        }
    }

    /// Orders two points along one dimension, consistent with the sign of their difference.
    fn compare(&self, dimension: usize, rhs: &Self) -> Ordering {
        self.value(dimension).order(rhs.value(dimension))
    }
}

/// A point with a fixed number of dimensions `D` over the value domain `S`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<S, const D: usize> {
    values: [S; D],
}

/// Three signed bytes, the classic median-cut color point.
pub type Point3I8 = Point<i8, 3>;
/// Three unsigned bytes, an RGB color.
pub type PointRgb = Point<u8, 3>;
/// A single float, for scalar quantization.
pub type Point1F = Point<f32, 1>;

impl<S: Scalar, const D: usize> Point<S, D> {
    pub fn new(values: [S; D]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[S; D] {
        &self.values
    }

    /// Splits an interleaved buffer `[x, y, z, x, y, z, ...]` into points.
    ///
    /// Fails if the buffer length is not a multiple of `D`, or if `D` is zero.
    pub fn from_flat(data: &[S]) -> Result<Vec<Self>> {
        if D == 0 {
            return Err(Error::ZeroDimensional);
        }
        let chunks = data.chunks_exact(D);
        let remainder = chunks.remainder().len();
        if remainder != 0 {
            return Err(Error::InvalidDimensionality {
                expected: D,
                actual: remainder,
            });
        }
        chunks.map(Self::try_from).collect()
    }

    /// Flattens points back into an interleaved buffer.
    pub fn to_flat(points: &[Self]) -> Vec<S> {
        points.iter().flat_map(|p| p.values).collect()
    }

    #[inline]
    #[track_caller]
    fn check_dimension(dimension: usize) {
        assert!(
            dimension < D,
            "dimension {} out of range for a {}-dimensional point",
            dimension,
            D
        );
    }
}

impl<S: Scalar, const D: usize> Default for Point<S, D> {
    fn default() -> Self {
        Self {
            values: [S::default(); D],
        }
    }
}

impl<S: Scalar, const D: usize> From<[S; D]> for Point<S, D> {
    fn from(values: [S; D]) -> Self {
        Self::new(values)
    }
}

impl<S: Scalar, const D: usize> TryFrom<&[S]> for Point<S, D> {
    type Error = Error;

    fn try_from(values: &[S]) -> Result<Self> {
        let values: [S; D] = values
            .try_into()
            .map_err(|_| Error::InvalidDimensionality {
                expected: D,
                actual: values.len(),
            })?;
        Ok(Self { values })
    }
}

impl<S: Scalar, const D: usize> DataPoint for Point<S, D> {
    type Value = S;

    #[inline]
    fn dimensions(&self) -> usize {
        D
    }

    #[inline]
    #[track_caller]
    fn value(&self, dimension: usize) -> S {
        Self::check_dimension(dimension);
        self.values[dimension]
    }

    #[inline]
    #[track_caller]
    fn set_value(&mut self, dimension: usize, value: S) {
        Self::check_dimension(dimension);
        self.values[dimension] = value;
    }

    fn move_to_minimum(&mut self) {
        self.values = [S::LOWEST; D];
    }

    fn move_to_maximum(&mut self) {
        self.values = [S::HIGHEST; D];
    }
}
