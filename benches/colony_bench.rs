//! Criterion benchmarks for the colony scheduler.
//!
//! Uses seeded random graphs so every sample optimizes the same instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stigroute::colony::{roulette, ColonyConfig, ColonyRunner};
use stigroute::graph::RouteGraph;

fn instance(nodes: usize) -> RouteGraph {
    let mut rng = StdRng::seed_from_u64(1234);
    RouteGraph::random(nodes, 0.3, 10.0, &mut rng)
}

fn bench_colony_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("colony_run");

    for &nodes in &[10usize, 25, 50] {
        let graph = instance(nodes);
        let config = ColonyConfig::new(0, nodes - 1)
            .with_population_size(20)
            .with_step_budget(nodes * 3)
            .with_iteration_cap(30)
            .with_stall_limit(30)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::new("sequential", nodes),
            &nodes,
            |b, _| b.iter(|| ColonyRunner::run(black_box(&graph), black_box(&config))),
        );

        let parallel = config.clone().with_parallel(true);
        group.bench_with_input(
            BenchmarkId::new("parallel", nodes),
            &nodes,
            |b, _| b.iter(|| ColonyRunner::run(black_box(&graph), black_box(&parallel))),
        );
    }

    group.finish();
}

fn bench_roulette(c: &mut Criterion) {
    let weights: Vec<f64> = (1..=64).map(|i| i as f64).collect();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("roulette_64", |b| {
        b.iter(|| roulette(black_box(&weights), &mut rng))
    });
}

criterion_group!(benches, bench_colony_run, bench_roulette);
criterion_main!(benches);
