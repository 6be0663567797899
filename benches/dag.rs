//! Benchmarks for graph mutation and query throughput.
//!
//! Covers the three cost centers:
//! - edge insertion along the grain of the order (no reorder)
//! - edge insertion against the grain (Pearce–Kelly reorder)
//! - reachability and decomposition queries on a populated graph

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dagorder::Dag;
use std::hint::black_box;

const NODES: u32 = 1_000;

/// Chain 0 -> 1 -> ... -> NODES-1, built in insertion order so every edge
/// lands without reordering.
fn build_chain() -> Dag<u32> {
    let mut dag = Dag::new();
    for from in 0..NODES - 1 {
        dag.try_add_edge(from, from + 1);
    }
    dag
}

/// Denser graph: each node feeds its direct neighbor and a node a few
/// slots ahead, so paths braid instead of forming a single chain.
fn build_layered() -> Dag<u32> {
    let mut dag = Dag::new();
    for from in 0..NODES {
        for offset in [1, 7] {
            let to = from + offset;
            if to < NODES {
                dag.try_add_edge(from, to);
            }
        }
    }
    dag
}

fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    // Edges arrive already consistent with the order.
    group.bench_function("forward_chain", |b| {
        b.iter(|| {
            let mut dag = Dag::new();
            for from in 0..NODES - 1 {
                dag.try_add_edge(black_box(from), black_box(from + 1));
            }
            black_box(dag)
        });
    });

    // Every edge points backward through the initial order, forcing a
    // reorder on each insertion.
    group.bench_function("backward_chain", |b| {
        b.iter(|| {
            let mut dag: Dag<u32> = (0..NODES).collect();
            for to in 0..NODES - 1 {
                dag.try_add_edge(black_box(to + 1), black_box(to));
            }
            black_box(dag)
        });
    });

    // One edge spanning the whole order of a prebuilt chain: the worst
    // single-insertion reorder.
    group.bench_function("spanning_reorder", |b| {
        let pristine = {
            let mut dag: Dag<u32> = (0..NODES).collect();
            for from in 1..NODES - 1 {
                dag.try_add_edge(from, from + 1);
            }
            dag
        };
        b.iter_batched(
            || pristine.clone(),
            |mut dag| {
                dag.try_add_edge(black_box(NODES - 1), black_box(0));
                black_box(dag)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_cycle_rejection(c: &mut Criterion) {
    let dag = build_chain();

    // The rejected edge forces a forward scan across the whole chain before
    // the cycle is found; measures the fail-closed path.
    c.bench_function("cycle_rejection", |b| {
        b.iter_batched(
            || dag.clone(),
            |mut dag| {
                let result = dag.add_edge(black_box(NODES - 1), black_box(0));
                black_box(result.is_err())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_queries(c: &mut Criterion) {
    let dag = build_layered();
    let mut group = c.benchmark_group("queries");

    group.bench_function("has_path_far", |b| {
        b.iter(|| black_box(dag.has_path(black_box(&0), black_box(&(NODES - 1)))));
    });

    group.bench_function("has_path_rejected_by_order", |b| {
        b.iter(|| black_box(dag.has_path(black_box(&(NODES - 1)), black_box(&0))));
    });

    group.bench_function("successors_of", |b| {
        b.iter(|| black_box(dag.successors_of(black_box(&[0]))));
    });

    group.bench_function("ordered_successors_of", |b| {
        b.iter(|| black_box(dag.ordered_successors_of(black_box(&[0]))));
    });

    group.bench_function("components", |b| {
        b.iter(|| black_box(dag.components()));
    });

    group.finish();
}

fn bench_node_removal(c: &mut Criterion) {
    let dag = build_layered();

    // Removing an early node shifts nearly the whole order down a slot.
    c.bench_function("remove_early_node", |b| {
        b.iter_batched(
            || dag.clone(),
            |mut dag| {
                dag.remove(black_box(&1));
                black_box(dag)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_cycle_rejection,
    bench_queries,
    bench_node_removal
);
criterion_main!(benches);
