use mediancut::{DataPoint, MedianCut, PointRgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const LEVELS: [usize; 6] = [0, 1, 2, 7, 16, 64];

fn random_colors(seed: u64, count: usize, spread: u8) -> Vec<PointRgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            PointRgb::new([
                rng.gen_range(0..=spread),
                rng.gen_range(0..=spread),
                rng.gen_range(0..=spread),
            ])
        })
        .collect()
}

fn sorted_values(points: &[PointRgb]) -> Vec<[u8; 3]> {
    let mut values: Vec<[u8; 3]> = points.iter().map(|p| *p.values()).collect();
    values.sort();
    values
}

#[test]
fn test_partition_coverage_and_count_bound() {
    for (seed, spread) in [(1, 255), (2, 3), (3, 0)] {
        let input = random_colors(seed, 500, spread);
        let distinct: BTreeSet<[u8; 3]> = input.iter().map(|p| *p.values()).collect();

        for levels in LEVELS {
            let mut points = input.clone();
            let cut = MedianCut::new();
            let clusters = cut.clusters(&mut points, levels).expect("Median cut should succeed");

            assert!(clusters.len() <= levels.max(1), "Too many clusters for {} levels", levels);
            if distinct.len() >= levels {
                assert_eq!(clusters.len(), levels.max(1), "Seed {} should reach {} levels", seed, levels);
            }

            let members: Vec<PointRgb> = clusters.iter().flat_map(|c| c.points().iter().copied()).collect();
            assert_eq!(sorted_values(&members), sorted_values(&input));
        }
    }
}

#[test]
fn test_bounding_boxes_are_tight() {
    let mut points = random_colors(7, 300, 255);
    let cut = MedianCut::new();
    let clusters = cut.clusters(&mut points, 16).expect("Median cut should succeed");

    for cluster in &clusters {
        let (min, max) = (cluster.min_corner(), cluster.max_corner());
        for dim in 0..3 {
            assert!(cluster.points().iter().all(|p| min.value(dim) <= p.value(dim) && p.value(dim) <= max.value(dim)));
            assert!(cluster.points().iter().any(|p| p.value(dim) == min.value(dim)), "Lower bound not attained");
            assert!(cluster.points().iter().any(|p| p.value(dim) == max.value(dim)), "Upper bound not attained");
        }
    }
}

#[test]
fn test_representatives_are_truncated_means() {
    let mut points = random_colors(11, 257, 255);
    let cut = MedianCut::new();
    let clusters = cut.clusters(&mut points, 10).expect("Median cut should succeed");

    for cluster in &clusters {
        let representative = cluster.representative_point();
        for dim in 0..3 {
            let sum: u64 = cluster.points().iter().map(|p| p.value(dim) as u64).sum();
            let expected = (sum / cluster.point_count() as u64) as u8;
            assert_eq!(representative.value(dim), expected);
        }
    }
}

#[test]
fn test_clusters_drain_in_priority_order() {
    let mut points = random_colors(5, 400, 255);
    let cut = MedianCut::new();
    let clusters = cut.clusters(&mut points, 32).expect("Median cut should succeed");

    let lengths: Vec<i64> = clusters.iter().map(|c| c.longest_side_length()).collect();
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "Clusters should drain longest first");
}

#[test]
fn test_deterministic() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();

    let input = random_colors(42, 1000, 255);
    let mut a = input.clone();
    let mut b = input.clone();

    let first = MedianCut::new().median_cut(&mut a, 24).expect("Median cut should succeed");
    let second = MedianCut::new().median_cut(&mut b, 24).expect("Median cut should succeed");

    assert_eq!(first, second);
    assert_eq!(a, b, "Buffers should be permuted identically");
}
