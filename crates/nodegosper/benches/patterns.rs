//! Benchmarks for hashing single points under every indexation pattern.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nodegosper::{BoundingBox, Pattern, Point, curve_from_name, registry::PATTERN_NAMES};

/// Levels to hash at: shallow, typical and deepest.
const LEVELS: [u32; 3] = [4, 10, 20];

/// Benchmark `hash` (point -> code) for all patterns.
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    let bbox = BoundingBox::centered(1.0);
    let p = Point::new(0.3141, -0.2718);

    for name in PATTERN_NAMES {
        for level in LEVELS {
            let curve = curve_from_name(name, level, &bbox).expect("valid curve");
            group.bench_function(BenchmarkId::new(*name, level), |b| {
                b.iter(|| curve.hash(black_box(&p)))
            });
        }
    }

    group.finish();
}

/// Benchmark decoding a code back to the center code of its cell.
fn bench_to_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_center");
    let bbox = BoundingBox::centered(1.0);
    let p = Point::new(0.3141, -0.2718);

    for pattern in Pattern::ALL {
        let curve = curve_from_name(pattern.key(), 20, &bbox).expect("valid curve");
        let code = curve.hash(&p);
        group.bench_function(BenchmarkId::new(pattern.key(), 20), |b| {
            b.iter(|| pattern.to_center(black_box(code), 20))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_hash, bench_to_center);
}

pub use bench_defs::benches;
criterion_main!(benches);
