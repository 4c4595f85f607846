//! Criterion benchmarks for the annealing loop.
//!
//! Uses scattered synthetic cities so only the move evaluation and the
//! acceptance test are measured.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_anneal::sa::{AnnealConfig, AnnealRunner};
use tsp_anneal::schedule::TemperatureSchedule;
use tsp_anneal::tour::{MoveStrategy, Node, TourState, WeightTable};

fn cities(n: i32) -> Vec<Node> {
    (0..n)
        .map(|i| Node::new((i * 7919) % 1000, (i * 104_729) % 1000))
        .collect()
}

fn bench_weight_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_table");
    group.sample_size(10);

    for &n in &[100, 500, 1000] {
        let nodes = cities(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &nodes, |b, nodes| {
            b.iter(|| black_box(WeightTable::new(black_box(nodes))))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for (n, strategy) in [
        (100, MoveStrategy::BothRandom),
        (500, MoveStrategy::BothRandom),
        (500, MoveStrategy::RandomNeighborPair),
    ] {
        let nodes = cities(n);
        let weights = WeightTable::new(&nodes).expect("enough nodes");
        let schedule = TemperatureSchedule::ratio(Node::bounding_diagonal(&nodes), 0.9995, 20_000)
            .expect("valid schedule");
        let config = AnnealConfig::default().with_seed(42);

        group.bench_with_input(
            BenchmarkId::new(format!("{strategy:?}"), n),
            &(weights, schedule, config),
            |b, (w, s, c)| {
                b.iter(|| {
                    let mut state = TourState::new(w, strategy).expect("enough nodes");
                    let result = AnnealRunner::run(&mut state, black_box(s), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_weight_table, bench_anneal);
criterion_main!(benches);
