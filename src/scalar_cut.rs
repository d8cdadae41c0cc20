use crate::cluster::ClusterSummary;
use crate::error::Result;
use crate::median_cut::MedianCut;
use crate::point::{DataPoint, Point1F};

/// Quantizes a list of values (for example boat speeds) into at most `desired_levels` clusters.
///
/// Every cluster reports its smallest and largest value, the mean of its values
/// and how many values it holds. The clusters come out longest range first; sort
/// them if a canonical order is needed. The input is left untouched.
pub fn median_cut_values(values: &[f32], desired_levels: usize) -> Result<Vec<ClusterSummary<f32>>> {
    let mut points: Vec<Point1F> = values.iter().map(|&v| Point1F::new([v])).collect();
    let summaries = MedianCut::new().summaries(&mut points, desired_levels)?;
    Ok(summaries
        .into_iter()
        .map(|s| ClusterSummary {
            min: s.min.value(0),
            max: s.max.value(0),
            representative: s.representative.value(0),
            count: s.count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_speed_levels() {
        let speeds = [1.0, 1.5, 2.0, 9.0, 10.0, 11.0];
        let mut clusters = median_cut_values(&speeds, 2).expect("Median cut should succeed");
        clusters.sort_by(|a, b| a.min.total_cmp(&b.min));

        assert_eq!(clusters.len(), 2);
        assert_eq!((clusters[0].min, clusters[0].max, clusters[0].count), (1.0, 2.0, 3));
        assert_eq!((clusters[1].min, clusters[1].max, clusters[1].count), (9.0, 11.0, 3));
        assert!((clusters[0].representative - 1.5).abs() < 1e-6);
        assert!((clusters[1].representative - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_minimum_not_above_maximum() {
        let speeds = [3.5, -2.0, 7.25, 0.0, 4.0];
        for cluster in median_cut_values(&speeds, 3).expect("Median cut should succeed") {
            assert!(cluster.min <= cluster.representative);
            assert!(cluster.representative <= cluster.max);
        }
    }

    #[test]
    fn test_rejects_nan_and_empty() {
        assert_eq!(median_cut_values(&[], 2), Err(Error::EmptyInput));
        assert_eq!(
            median_cut_values(&[1.0, f32::NAN], 2),
            Err(Error::NonFinite { index: 1, dimension: 0 })
        );
    }
}
