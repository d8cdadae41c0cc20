use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mediancut::{median_cut_values, MedianCut, PointRgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_POINTS: usize = 100_000;
const LEVELS: usize = 256;

fn benchmark_median_cut_rgb(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let pixels: Vec<u8> = (0..NUM_POINTS * 3).map(|_| rng.gen_range(0..=255)).collect();
    let input = PointRgb::from_flat(&pixels).expect("Pixel buffer should be a multiple of 3");

    let mut group = c.benchmark_group("median_cut_rgb");
    group.sample_size(20);

    group.bench_function("parallel", |b| {
        let cut = MedianCut::new().parallel(true);
        b.iter(|| {
            let mut points = input.clone();
            black_box(cut.median_cut(&mut points, LEVELS).expect("Median cut should succeed"));
        })
    });

    group.bench_function("sequential", |b| {
        let cut = MedianCut::new().parallel(false);
        b.iter(|| {
            let mut points = input.clone();
            black_box(cut.median_cut(&mut points, LEVELS).expect("Median cut should succeed"));
        })
    });

    group.finish();
}

fn benchmark_median_cut_values(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let speeds: Vec<f32> = (0..NUM_POINTS).map(|_| rng.gen_range(0.0..30.0)).collect();

    c.bench_function(&format!("median_cut_values_{}", NUM_POINTS), |b| {
        b.iter(|| {
            black_box(median_cut_values(black_box(&speeds), 16).expect("Median cut should succeed"));
        })
    });
}

criterion_group!(benches, benchmark_median_cut_rgb, benchmark_median_cut_values);
criterion_main!(benches);
