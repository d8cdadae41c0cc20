/// Creates fresh points of the dimensionality in use.
///
/// Used for cluster corners and representative points, never for input data.
pub trait PointFactory<P>: Sync {
    /// Creates a new point with unspecified values.
    fn create_point(&self) -> P;
}

/// Factory producing `P::default()`, which for [`Point`](crate::Point) is the zero point.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFactory;

impl<P: Default> PointFactory<P> for DefaultFactory {
    #[inline]
    fn create_point(&self) -> P {
        P::default()
    }
}
