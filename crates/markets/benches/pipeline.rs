//! Benchmarks for the filter-and-sort pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ferias_geo::Coordinate;
use ferias_markets::{filter_markets, Day, Market, MarketFilter, MarketsData, NeighborhoodFilter};

fn synthetic_dataset(per_day: usize) -> MarketsData {
    let barrios = ["cordon", "pocitos", "buceo", "prado", "carrasco"];
    MarketsData::from_days(Day::ALL.into_iter().map(|day| {
        let markets = (0..per_day)
            .map(|i| Market {
                id: format!("feria-{}-{i}", day.key()),
                name: format!("Feria {i}"),
                location: "Esquina".to_string(),
                neighborhood: barrios[i % barrios.len()].to_string(),
                lat: -34.95 + (i as f64 * 0.0007) % 0.1,
                lng: -56.25 + (i as f64 * 0.0013) % 0.2,
                beginning_time: "08:00".to_string(),
                end_time: "14:00".to_string(),
                image_url: None,
                instagram_url: None,
                trip_advisor_url: None,
                google_maps_url: None,
            })
            .collect();
        (day, markets)
    }))
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_markets");
    let origin = Coordinate::new(-34.9011, -56.1881);

    for per_day in [10, 100, 1000].iter() {
        let data = synthetic_dataset(*per_day);

        let unsorted = MarketFilter::all();
        group.bench_with_input(BenchmarkId::new("all_days", per_day), per_day, |b, _| {
            b.iter(|| filter_markets(black_box(&data), black_box(&unsorted)))
        });

        let sorted = MarketFilter::all().with_origin(origin);
        group.bench_with_input(BenchmarkId::new("all_days_sorted", per_day), per_day, |b, _| {
            b.iter(|| filter_markets(black_box(&data), black_box(&sorted)))
        });

        let narrow = MarketFilter::all()
            .with_day(Day::Saturday)
            .with_neighborhood(NeighborhoodFilter::parse("pocitos"))
            .with_origin(origin);
        group.bench_with_input(BenchmarkId::new("one_day_one_barrio", per_day), per_day, |b, _| {
            b.iter(|| filter_markets(black_box(&data), black_box(&narrow)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
