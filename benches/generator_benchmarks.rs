//! Performance benchmarks for quickiter generators
//!
//! Run with: cargo bench
//!
//! Most of the per-value cost is the rendezvous handoff between the producer
//! thread and the consumer, so these measure:
//! - Receive throughput of the infinite generators
//! - End-to-end cost of draining the finite generators
//! - Generator startup (thread spawn)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quickiter::{accumulate, accumulate_with_init, chain_from_iterable, count, cycle, pairwise};

/// Benchmark: one receive from an already running infinite generator
fn bench_infinite_recv(c: &mut Criterion) {
    let mut group = c.benchmark_group("infinite_recv");

    group.bench_function("count_by_one", |b| {
        let mut gen = count(0i64, 1).unwrap();
        b.iter(|| black_box(gen.next()))
    });

    group.bench_function("count_by_four", |b| {
        let mut gen = count(0i64, 4).unwrap();
        b.iter(|| black_box(gen.next()))
    });

    group.bench_function("cycle_floats", |b| {
        let mut gen = cycle(vec![1.0f64, 2.0, 3.5, 5.0]).unwrap();
        b.iter(|| black_box(gen.next()))
    });

    group.bench_function("cycle_vectors", |b| {
        let mut gen = cycle(vec![vec![1, 2], vec![3, 4]]).unwrap();
        b.iter(|| black_box(gen.next()))
    });

    group.finish();
}

/// Benchmark: spawn a finite generator and drain it
fn bench_finite_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("finite_drain");

    for size in [10usize, 100, 1000] {
        let data: Vec<i64> = (0..size as i64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("accumulate", size), &data, |b, data| {
            b.iter(|| accumulate(data.clone(), |acc, x| acc + x).unwrap().drain())
        });

        group.bench_with_input(BenchmarkId::new("accumulate_with_init", size), &data, |b, data| {
            b.iter(|| accumulate_with_init(data.clone(), |acc, x| acc + x, 0i64).unwrap().drain())
        });

        group.bench_with_input(BenchmarkId::new("pairwise", size), &data, |b, data| {
            b.iter(|| pairwise(data.clone()).unwrap().drain())
        });

        group.bench_with_input(BenchmarkId::new("chain", size), &data, |b, data| {
            let halves = vec![data[..size / 2].to_vec(), data[size / 2..].to_vec()];
            b.iter(|| chain_from_iterable(halves.clone()).unwrap().drain())
        });
    }

    group.finish();
}

/// Benchmark: generator startup and teardown
fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_and_abandon_count", |b| {
        b.iter(|| {
            let mut gen = count(0i64, 1).unwrap();
            black_box(gen.next())
        })
    });
}

criterion_group!(benches, bench_infinite_recv, bench_finite_drain, bench_spawn);
criterion_main!(benches);
