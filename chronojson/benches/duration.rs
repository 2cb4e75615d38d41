//! Benchmarks for duration and interval conversion.

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use giztoy_chronojson::{Duration, Interval, JsonOptions};

fn bench_duration_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("duration_parse");

    for text in ["0:00:00", "48:00:03.123", "-256204778:48:05.4775808"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| Duration::parse(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_duration_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("duration_format");

    for dur in [Duration::ZERO, Duration::from_ticks(1_728_001_230_000), Duration::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(dur), &dur, |b, dur| {
            b.iter(|| black_box(dur).to_string());
        });
    }

    group.finish();
}

fn bench_interval_round_trip(c: &mut Criterion) {
    let options = JsonOptions::new().configure_for_time();
    let start = Utc.with_ymd_and_hms(2012, 1, 2, 3, 4, 5).unwrap();
    let end = Utc.with_ymd_and_hms(2013, 6, 7, 8, 9, 10).unwrap();
    let interval = Interval::new(Some(start), Some(end)).unwrap();
    let json = options.serialize(&interval).unwrap();

    c.bench_function("interval_serialize", |b| {
        b.iter(|| options.serialize(black_box(&interval)).unwrap());
    });

    c.bench_function("interval_deserialize", |b| {
        b.iter(|| options.deserialize::<Interval>(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_duration_parse,
    bench_duration_format,
    bench_interval_round_trip,
);
criterion_main!(benches);
