//! Benchmarks for `TaskEither` composition and the batch combinators.
//!
//! All groups use `to_async(&runtime)` so that runtime enter/exit is batched
//! per sample rather than paid on every iteration.

#![cfg(feature = "async")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kindred::control::Either;
use kindred::effect::TaskEither;
use kindred::typeclass::ConcurrencyConfig;
use std::hint::black_box;

// =============================================================================
// Composition
// =============================================================================

fn benchmark_chain_depth(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("task_either_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut task_either = TaskEither::<String, i64>::right(black_box(0));
                for _ in 0..depth {
                    task_either = task_either.chain(|n| TaskEither::right(n + 1));
                }
                black_box(task_either.await)
            });
        });

        group.bench_with_input(BenchmarkId::new("map", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut task_either = TaskEither::<String, i64>::right(black_box(0));
                for _ in 0..depth {
                    task_either = task_either.map(|n| n + 1);
                }
                black_box(task_either.await)
            });
        });
    }

    group.bench_function("short_circuit", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let mut task_either = TaskEither::<String, i64>::left(black_box("stop".to_string()));
            for _ in 0..100 {
                task_either = task_either.chain(|n| TaskEither::right(n + 1));
            }
            black_box(task_either.await)
        });
    });

    group.finish();
}

// =============================================================================
// Batches
// =============================================================================

fn items(size: i64) -> Vec<TaskEither<String, i64>> {
    (0..size).map(TaskEither::right).collect()
}

fn benchmark_batches(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("task_either_batch");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("sequence_array", size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                let result = TaskEither::sequence_array(items(size)).await;
                black_box(matches!(result, Either::Right(_)))
            });
        });

        for window in [1, 8, 64] {
            let config = ConcurrencyConfig::new(window);
            group.bench_with_input(
                BenchmarkId::new(format!("concurrency_window_{window}"), size),
                &size,
                |bencher, &size| {
                    bencher.to_async(&runtime).iter(|| async move {
                        let result = TaskEither::concurrency(&config, items(size)).await;
                        black_box(matches!(result, Either::Right(_)))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_chain_depth, benchmark_batches);

criterion_main!(benches);
