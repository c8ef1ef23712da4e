//! Benchmark for Task construction, composition and memoized runs.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functional_io::control::{Pair, Step};
use functional_io::effect::Task;
use std::hint::black_box;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// =============================================================================
// Composition
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("task_map_chain");

    for depth in [1_usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("map", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut task = Task::of(0_u64);
                for _ in 0..depth {
                    task = task.map(|n| n + 1);
                }
                black_box(task.run().await)
            });
        });

        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut task = Task::of(0_u64);
                for _ in 0..depth {
                    task = task.chain(|n| Task::of(n + 1));
                }
                black_box(task.run().await)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Memoization
// =============================================================================

fn benchmark_memoized_run(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("task_memoized_run");

    let settled = Task::of(vec![0_u8; 1024]).map(|mut raw| {
        raw.reverse();
        raw
    });
    runtime.block_on(settled.run());

    group.bench_function("settled", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| async { black_box(settled.run().await) });
    });

    group.bench_function("fresh", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let task = Task::of(vec![0_u8; 1024]).map(|mut raw| {
                raw.reverse();
                raw
            });
            black_box(task.run().await)
        });
    });

    group.finish();
}

// =============================================================================
// Trampoline
// =============================================================================

fn benchmark_chain_rec(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("task_chain_rec");

    for iterations in [10_u32, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |bencher, &iterations| {
                bencher.to_async(&runtime).iter(|| async move {
                    let task = Task::of(String::new()).chain_rec(
                        move |n: u32| {
                            if n == iterations {
                                Step::Done(())
                            } else {
                                Step::Loop(Pair::new(n + 1, Task::of("x".to_string())))
                            }
                        },
                        0,
                    );
                    black_box(task.run().await)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_chain,
    benchmark_memoized_run,
    benchmark_chain_rec
);
criterion_main!(benches);
