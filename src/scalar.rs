use std::cmp::Ordering;
use std::fmt::Debug;

/// An ordered value domain for the coordinates of a data point.
///
/// Differences are computed in widened types (`i64` for the integer domains,
/// `f64` for the float domains) so side lengths never overflow. Integer domains
/// accumulate an `i64` sum; float domains keep a running mean, which stays
/// within the range of the values even when their sum would not.
pub trait Scalar: Copy + PartialOrd + Default + Debug + Send + Sync {
    /// Signed difference between two values, used as side length and sort key.
    type Diff: Copy + PartialOrd + Default + Debug + Send + Sync;
    /// Accumulator for the arithmetic mean.
    type Sum: Copy + Default + Send + Sync;

    /// Smallest representable value of the domain.
    const LOWEST: Self;
    /// Largest representable value of the domain.
    const HIGHEST: Self;

    /// Returns `self - rhs`.
    fn difference(self, rhs: Self) -> Self::Diff;

    /// Folds `value` into the accumulator.
    fn accumulate(sum: Self::Sum, value: Self) -> Self::Sum;

    /// Mean of the `count` accumulated values, narrowed back to the native representation.
    ///
    /// Integer domains truncate toward zero.
    fn mean(sum: Self::Sum, count: usize) -> Self;

    /// Total order used to sort points along a dimension.
    ///
    /// Agrees with the sign of [`difference`](Self::difference) for finite values
    /// and never fails, so sorting cannot panic on NaN.
    fn order(self, rhs: Self) -> Ordering;

    /// Whether the value is accepted as median cut input (false for NaN and infinities).
    fn is_finite(self) -> bool;
}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Diff = i64;
                type Sum = i64;

                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;

                #[inline]
                fn difference(self, rhs: Self) -> i64 {
                    self as i64 - rhs as i64
                }

                #[inline]
                fn accumulate(sum: i64, value: Self) -> i64 {
                    sum + value as i64
                }

                #[inline]
                fn mean(sum: i64, count: usize) -> Self {
                    (sum / count as i64) as $t
                }

                #[inline]
                fn order(self, rhs: Self) -> Ordering {
                    self.cmp(&rhs)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Diff = f64;
                // (running mean, values seen)
                type Sum = (f64, u64);

                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;

                #[inline]
                fn difference(self, rhs: Self) -> f64 {
                    self as f64 - rhs as f64
                }

                #[inline]
                fn accumulate((mean, seen): (f64, u64), value: Self) -> (f64, u64) {
                    let seen = seen + 1;
                    let k = seen as f64;
                    // Split into two quotients so neither term overflows near f64::MAX.
                    (mean + (value as f64 / k - mean / k), seen)
                }

                #[inline]
                fn mean((mean, _): (f64, u64), _count: usize) -> Self {
                    mean as $t
                }

                #[inline]
                fn order(self, rhs: Self) -> Ordering {
                    self.total_cmp(&rhs)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, u8, i16, u16, i32, u32);
impl_float_scalar!(f32, f64);
