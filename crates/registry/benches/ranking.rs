//! Criterion benchmarks for the ranking hot path.
//!
//! Run with: `cargo bench -p registry`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use registry::{fuzzy_score, rank, HostEntry};

fn synthetic_fleet(n: usize) -> Vec<HostEntry> {
    (0..n)
        .map(|i| {
            let mut e = HostEntry::new(format!("host-{i:04}"));
            e.host = format!("host-{i:04}.prod.example.com");
            e.user = "deploy".to_string();
            e
        })
        .collect()
}

fn bench_fuzzy_score(c: &mut Criterion) {
    c.bench_function("fuzzy_score/prefix", |b| {
        b.iter(|| fuzzy_score(black_box("web"), black_box("web-01.prod.example.com")))
    });
    c.bench_function("fuzzy_score/scattered", |b| {
        b.iter(|| fuzzy_score(black_box("wec"), black_box("web-01.prod.example.com")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let fleet = synthetic_fleet(500);
    c.bench_function("rank/empty_query_500", |b| {
        b.iter(|| rank(black_box(&fleet), black_box("")))
    });
    c.bench_function("rank/query_500", |b| {
        b.iter(|| rank(black_box(&fleet), black_box("host-02")))
    });
}

criterion_group!(benches, bench_fuzzy_score, bench_rank);
criterion_main!(benches);
