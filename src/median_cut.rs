use crate::cluster::{Cluster, ClusterSummary};
use crate::error::{Error, Result};
use crate::factory::{DefaultFactory, PointFactory};
use crate::point::DataPoint;
use crate::scalar::Scalar;
use rayon::prelude::*;
use std::collections::BinaryHeap;
use std::marker::PhantomData;
use tracing::{debug, instrument, trace};

/// Decides whether a cluster whose points are all equal may still be split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Clusters with a zero-length longest side are never split, so identical
    /// points always end up in a single cluster.
    #[default]
    SkipUniform,
    /// Any cluster with more than one point is split by position, even when all
    /// of its points are equal.
    ByPosition,
}

impl SplitPolicy {
    fn allows<P: DataPoint, F>(self, cluster: &Cluster<'_, P, F>) -> bool
    where
        F: PointFactory<P>,
    {
        if cluster.point_count() < 2 {
            return false;
        }
        match self {
            SplitPolicy::ByPosition => true,
            SplitPolicy::SkipUniform => cluster
                .longest_side()
                .is_some_and(|(_, length)| length > <P::Value as Scalar>::Diff::default()),
        }
    }
}

/// Median cut over points of type `P`.
///
/// Repeatedly splits the cluster with the longest bounding box side at the median
/// of that side until the requested number of clusters is reached, then reduces
/// every cluster to the mean of its points.
///
/// # Example
///
/// ```
/// use mediancut::{MedianCut, Point};
///
/// let mut points: Vec<Point<i32, 1>> = [0, 10, 20, 30].into_iter().map(|v| Point::new([v])).collect();
/// let mut levels = MedianCut::new().median_cut(&mut points, 2).unwrap();
/// levels.sort_by_key(|p| p.values()[0]);
/// assert_eq!(levels, vec![Point::new([5]), Point::new([25])]);
/// ```
#[derive(Clone, Debug)]
pub struct MedianCut<P, F = DefaultFactory> {
    factory: F,
    policy: SplitPolicy,
    parallel: bool,
    _point: PhantomData<fn() -> P>,
}

impl<P: DataPoint + Default> MedianCut<P, DefaultFactory> {
    /// Creates a median cut using `P::default()` for new points.
    pub fn new() -> Self {
        Self::with_factory(DefaultFactory)
    }
}

impl<P: DataPoint + Default> Default for MedianCut<P, DefaultFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DataPoint, F: PointFactory<P>> MedianCut<P, F> {
    /// Creates a median cut that manufactures corner and representative points with `factory`.
    pub fn with_factory(factory: F) -> Self {
        MedianCut {
            factory,
            policy: SplitPolicy::default(),
            parallel: true,
            _point: PhantomData,
        }
    }

    /// Sets the handling of clusters whose points are all equal.
    pub fn policy(mut self, policy: SplitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables computing representative points on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn split_policy(&self) -> SplitPolicy {
        self.policy
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Partitions `points` into at most `desired_levels` clusters.
    ///
    /// The buffer is reordered in place so that every cluster is a contiguous run.
    /// The clusters are returned in priority order, longest side first. Fewer
    /// clusters than requested are returned when the points run out of distinct
    /// values. A `desired_levels` of zero behaves like one.
    #[instrument(level = "debug", skip_all, fields(points = points.len(), desired_levels = desired_levels))]
    pub fn clusters<'a>(&'a self, points: &'a mut [P], desired_levels: usize) -> Result<Vec<Cluster<'a, P, F>>> {
        self.validate(points)?;

        let mut root = Cluster::new(points, &self.factory)?;
        root.shrink();

        let target = desired_levels.max(1);
        let mut queue = BinaryHeap::with_capacity(target);
        queue.push(root);

        while queue.len() < target {
            if !queue.peek().is_some_and(|top| self.policy.allows(top)) {
                debug!(clusters = queue.len(), "no splittable cluster left");
                break;
            }
            let Some(mut lower) = queue.pop() else {
                break;
            };

            let dimension = lower.longest_side_index();
            let mut upper = lower.split();
            lower.shrink();
            upper.shrink();
            trace!(
                dimension,
                lower = lower.point_count(),
                upper = upper.point_count(),
                offset = upper.offset(),
                "split cluster"
            );

            queue.push(lower);
            queue.push(upper);
        }

        let mut clusters = Vec::with_capacity(queue.len());
        while let Some(cluster) = queue.pop() {
            clusters.push(cluster);
        }
        debug!(clusters = clusters.len(), "median cut finished");
        Ok(clusters)
    }

    /// Returns one representative point (the mean) per cluster.
    pub fn median_cut(&self, points: &mut [P], desired_levels: usize) -> Result<Vec<P>> {
        let clusters = self.clusters(points, desired_levels)?;
        Ok(self.map_clusters(&clusters, |cluster| cluster.representative_point()))
    }

    /// Returns the bounding box, mean and size of every cluster.
    pub fn summaries(&self, points: &mut [P], desired_levels: usize) -> Result<Vec<ClusterSummary<P>>> {
        let clusters = self.clusters(points, desired_levels)?;
        Ok(self.map_clusters(&clusters, |cluster| cluster.summary()))
    }

    /// Checks that the input is non-empty, has one consistent non-zero
    /// dimensionality matching the factory's points, and holds only finite values.
    fn validate(&self, points: &[P]) -> Result<()> {
        let Some(first) = points.first() else {
            return Err(Error::EmptyInput);
        };
        let expected = first.dimensions();
        if expected == 0 {
            return Err(Error::ZeroDimensional);
        }
        let created = self.factory.create_point().dimensions();
        if created != expected {
            return Err(Error::InvalidDimensionality {
                expected,
                actual: created,
            });
        }
        for (index, point) in points.iter().enumerate() {
            let actual = point.dimensions();
            if actual != expected {
                return Err(Error::MixedDimensionality {
                    index,
                    expected,
                    actual,
                });
            }
            if let Some(dimension) = (0..actual).find(|&dim| !point.value(dim).is_finite()) {
                return Err(Error::NonFinite { index, dimension });
            }
        }
        Ok(())
    }

    fn map_clusters<'a, T, M>(&self, clusters: &[Cluster<'a, P, F>], map: M) -> Vec<T>
    where
        T: Send,
        M: Fn(&Cluster<'a, P, F>) -> T + Sync + Send,
    {
        if self.parallel {
            clusters.par_iter().map(map).collect()
        } else {
            clusters.iter().map(map).collect()
        }
    }
}

/// Runs a median cut with the default configuration.
///
/// See [`MedianCut::median_cut`].
pub fn median_cut<P: DataPoint + Default>(points: &mut [P], desired_levels: usize) -> Result<Vec<P>> {
    MedianCut::new().median_cut(points, desired_levels)
}
