//! Benchmarks for list mutation, traversal, and lookup.

use std::hint::black_box;

use catena::List;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

// ============================================================================
// Push / pop throughput
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("push_back_pop_front", size),
            &size,
            |b, &n| {
                let mut list: List<u64> = List::with_capacity(n);
                b.iter(|| {
                    for i in 0..n as u64 {
                        list.push_back(black_box(i));
                    }
                    for _ in 0..n {
                        black_box(list.pop_front());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("push_front_pop_back", size),
            &size,
            |b, &n| {
                let mut list: List<u64> = List::with_capacity(n);
                b.iter(|| {
                    for i in 0..n as u64 {
                        list.push_front(black_box(i));
                    }
                    for _ in 0..n {
                        black_box(list.pop_back());
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Handle-addressed mutation
// ============================================================================

fn bench_handle_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_ops");

    group.bench_function("insert_remove", |b| {
        let mut list: List<u64> = (0..1_024).collect();
        b.iter(|| {
            let id = list.push_back(black_box(42));
            black_box(list.remove(id))
        });
    });

    group.bench_function("detach_attach", |b| {
        let mut list: List<u64> = (0..1_024).collect();
        let id = list.node_at(512).unwrap();
        b.iter(|| {
            list.detach(black_box(id));
            list.attach_back(id)
        });
    });

    group.finish();
}

// ============================================================================
// Traversal
// ============================================================================

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("iter_sum", size), &size, |b, &n| {
            let list: List<u64> = (0..n as u64).collect();
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
    }

    group.finish();
}

// ============================================================================
// Linear lookup
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let list: List<u64> = (0..1_024).collect();

    group.bench_function("find_hit_last", |b| b.iter(|| black_box(list.find(&1_023))));

    group.bench_function("find_miss", |b| b.iter(|| black_box(list.find(&u64::MAX))));

    group.bench_function("node_at_middle", |b| b.iter(|| black_box(list.node_at(512))));

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_handle_ops,
    bench_traversal,
    bench_lookup,
);

criterion_main!(benches);
