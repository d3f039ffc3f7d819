//! Benchmark for Either combinators.
//!
//! Measures flat_map chains on the success path and the short-circuit path,
//! and the cost of `or` against `lazy_or` when the alternative is unused.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lenskit::control::Either;
use std::hint::black_box;

fn step(value: u64) -> Either<String, u64> {
    if value == u64::MAX {
        Either::to_left("overflow".to_string())
    } else {
        Either::pure(value + 1)
    }
}

fn expensive_alternative() -> Either<String, u64> {
    Either::pure((0..1_000_u64).sum())
}

fn benchmark_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_flat_map_chain");

    for length in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("right", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut current: Either<String, u64> = Either::pure(black_box(0));
                    for _ in 0..length {
                        current = current.flat_map(step);
                    }
                    black_box(current)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("left", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut current: Either<String, u64> =
                        Either::to_left(black_box("failed".to_string()));
                    for _ in 0..length {
                        current = current.flat_map(step);
                    }
                    black_box(current)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_alternatives(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_alternatives");

    group.bench_function("or_unused", |bencher| {
        bencher.iter(|| {
            let primary: Either<String, u64> = Either::pure(black_box(1));
            black_box(primary.or(expensive_alternative()))
        });
    });

    group.bench_function("lazy_or_unused", |bencher| {
        bencher.iter(|| {
            let primary: Either<String, u64> = Either::pure(black_box(1));
            black_box(primary.lazy_or(expensive_alternative))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_flat_map_chain, benchmark_alternatives);

criterion_main!(benches);
