use crate::error::{Error, Result};
use crate::factory::PointFactory;
use crate::point::DataPoint;
use crate::scalar::Scalar;
use std::cmp::Ordering;

type Diff<P> = <<P as DataPoint>::Value as Scalar>::Diff;

/// A cluster of points, represented by the axis-aligned box enclosing them.
///
/// The cluster owns an exclusive window of the point buffer shared by the whole
/// run. Splitting hands the upper half of the window to a new cluster, so the
/// windows of live clusters never overlap.
pub struct Cluster<'a, P: DataPoint, F> {
    points: &'a mut [P],
    offset: usize,
    min_corner: P,
    max_corner: P,
    // (dimension, length) of the longest side, None until shrunk.
    longest: Option<(usize, Diff<P>)>,
    factory: &'a F,
}

/// An owned, read-only projection of a cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSummary<P> {
    /// Minimum corner of the bounding box.
    pub min: P,
    /// Maximum corner of the bounding box.
    pub max: P,
    /// Arithmetic mean of the member points.
    pub representative: P,
    /// Number of member points.
    pub count: usize,
}

impl<'a, P: DataPoint, F: PointFactory<P>> Cluster<'a, P, F> {
    /// Creates a cluster spanning the whole buffer.
    ///
    /// The corners are sentinels until [`shrink`](Self::shrink) is called.
    pub fn new(points: &'a mut [P], factory: &'a F) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self::with_offset(points, 0, factory))
    }

    fn with_offset(points: &'a mut [P], offset: usize, factory: &'a F) -> Self {
        let mut cluster = Cluster {
            points,
            offset,
            min_corner: factory.create_point(),
            max_corner: factory.create_point(),
            longest: None,
            factory,
        };
        cluster.init_corners();
        cluster
    }

    fn init_corners(&mut self) {
        self.min_corner.move_to_minimum();
        self.max_corner.move_to_maximum();
        self.longest = None;
    }

    /// Number of points in this cluster.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Index of the first point of this cluster in the shared buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The member points, in their current buffer order.
    pub fn points(&self) -> &[P] {
        self.points
    }

    pub fn min_corner(&self) -> &P {
        &self.min_corner
    }

    pub fn max_corner(&self) -> &P {
        &self.max_corner
    }

    /// Whether the bounding box is up to date.
    pub fn is_shrunk(&self) -> bool {
        self.longest.is_some()
    }

    /// Dimension and length of the longest side, or `None` if the cluster was not shrunk.
    pub fn longest_side(&self) -> Option<(usize, Diff<P>)> {
        self.longest
    }

    /// Dimension of the longest side. Ties go to the lowest dimension.
    ///
    /// # Panics
    ///
    /// Panics if the cluster has not been shrunk since its creation or last split.
    pub fn longest_side_index(&self) -> usize {
        self.shrunk_side().0
    }

    /// Length of the longest side.
    ///
    /// # Panics
    ///
    /// Panics if the cluster has not been shrunk since its creation or last split.
    pub fn longest_side_length(&self) -> Diff<P> {
        self.shrunk_side().1
    }

    #[track_caller]
    fn shrunk_side(&self) -> (usize, Diff<P>) {
        match self.longest {
            Some(side) => side,
            None => panic!("cluster geometry read before shrink()"),
        }
    }

    /// Shrinks the bounding box so that it just barely contains the points.
    pub fn shrink(&mut self) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        let dimensions = first.dimensions();
        for dim in 0..dimensions {
            let value = first.value(dim);
            self.min_corner.set_value(dim, value);
            self.max_corner.set_value(dim, value);
        }
        for point in rest {
            for dim in 0..dimensions {
                self.min_corner.set_min(dim, point);
                self.max_corner.set_max(dim, point);
            }
        }

        // First dimension strictly longer than all previous ones wins.
        let mut index = 0;
        let mut length = self.max_corner.difference(0, &self.min_corner);
        for dim in 1..dimensions {
            let diff = self.max_corner.difference(dim, &self.min_corner);
            if diff > length {
                length = diff;
                index = dim;
            }
        }
        self.longest = Some((index, length));
    }

    /// Sorts the points along the longest side and splits off the upper half.
    ///
    /// This cluster keeps the lower `ceil(count / 2)` points. Neither cluster is
    /// shrunk; both must be shrunk before their geometry is used again.
    ///
    /// # Panics
    ///
    /// Panics if the cluster holds fewer than two points or was not shrunk.
    pub fn split(&mut self) -> Cluster<'a, P, F> {
        let count = self.points.len();
        assert!(count >= 2, "cannot split a cluster of {} point(s)", count);

        let dim = self.longest_side_index();
        self.points.sort_by(|a, b| a.compare(dim, b));

        let median = (count + 1) / 2;
        let points = std::mem::take(&mut self.points);
        let (lower, upper) = points.split_at_mut(median);
        self.points = lower;
        self.init_corners();

        Cluster::with_offset(upper, self.offset + median, self.factory)
    }

    /// Arithmetic mean of the member points, per dimension.
    pub fn representative_point(&self) -> P {
        let mut average = self.factory.create_point();
        let dimensions = average.dimensions();
        let mut sums = vec![<P::Value as Scalar>::Sum::default(); dimensions];
        for point in self.points.iter() {
            for (dim, sum) in sums.iter_mut().enumerate() {
                *sum = P::Value::accumulate(*sum, point.value(dim));
            }
        }
        let count = self.points.len();
        for (dim, sum) in sums.into_iter().enumerate() {
            average.set_value(dim, P::Value::mean(sum, count));
        }
        average
    }

    /// Owned snapshot of the corners, representative point and size.
    pub fn summary(&self) -> ClusterSummary<P> {
        ClusterSummary {
            min: self.min_corner.clone(),
            max: self.max_corner.clone(),
            representative: self.representative_point(),
            count: self.points.len(),
        }
    }
}

impl<P: DataPoint, F> PartialEq for Cluster<'_, P, F> {
    fn eq(&self, other: &Self) -> bool {
        self.longest.map(|(_, l)| l) == other.longest.map(|(_, l)| l)
    }
}

impl<P: DataPoint, F> Eq for Cluster<'_, P, F> {}

impl<P: DataPoint, F> PartialOrd for Cluster<'_, P, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: DataPoint, F> Ord for Cluster<'_, P, F> {
    /// Orders by longest side length so a max-heap yields the longest cluster first.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.longest, other.longest) {
            (Some((_, a)), Some((_, b))) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<P: DataPoint + std::fmt::Debug, F> std::fmt::Debug for Cluster<'_, P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cluster")
            .field("offset", &self.offset)
            .field("count", &self.points.len())
            .field("min", &self.min_corner)
            .field("max", &self.max_corner)
            .field("longest", &self.longest)
            .finish()
    }
}
