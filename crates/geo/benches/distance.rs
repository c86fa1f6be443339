//! Benchmarks for geo crate distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ferias_geo::{classify_distance, distance_km, format_distance, nearest_first, Coordinate};

fn create_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Grid over Montevideo
            let lat = -34.95 + (i as f64 * 0.001) % 0.1;
            let lng = -56.25 + (i as f64 * 0.002) % 0.2;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let cordon = Coordinate::new(-34.9037, -56.1869);
    let carrasco = Coordinate::new(-34.8889, -56.0444);

    c.bench_function("distance_km_single", |b| {
        b.iter(|| distance_km(black_box(&cordon), black_box(&carrasco)))
    });
}

fn bench_nearest_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_first");
    let origin = Coordinate::new(-34.9011, -56.1881);

    for size in [10, 100, 1000].iter() {
        let points = create_points(*size);

        group.bench_with_input(BenchmarkId::new("sorted", size), size, |b, _| {
            b.iter(|| nearest_first(black_box(&origin), black_box(points.iter())))
        });
    }

    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    group.bench_function("format_distance", |b| b.iter(|| format_distance(black_box(2.37))));
    group.bench_function("classify_distance", |b| b.iter(|| classify_distance(black_box(2.37))));

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_nearest_first, bench_display);
criterion_main!(benches);
