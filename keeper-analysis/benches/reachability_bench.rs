//! Reachability benchmarks: fixed-point passes vs work-list propagation.
//!
//! Run with: cargo bench -p keeper-analysis --bench reachability_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keeper_analysis::graph::AssetGraph;
use keeper_analysis::reachability::{EntryPoints, ReachabilityEngine, ReachabilityInput};
use keeper_core::config::ReachabilityStrategy;
use keeper_core::events::EventDispatcher;
use keeper_core::traits::NeverCancel;

/// Maps referencing chains of props, each chain `depth` long, plus orphaned chains.
fn project_graph(chains: usize, depth: usize) -> (AssetGraph, EntryPoints) {
    let mut graph = AssetGraph::new();
    let mut entry_points = EntryPoints::new();
    for c in 0..chains {
        let root = format!("/Game/Maps/Map_{c:04}");
        graph.add_asset(&root);
        if c % 4 != 0 {
            entry_points = entry_points.with_literal(root.clone());
        }
        let mut previous = root;
        // Reverse-ordered names force one fixed-point pass per hop.
        for d in (0..depth).rev() {
            let asset = format!("/Game/Props/P_{c:04}_{d:03}");
            graph.add_reference(&previous, &asset);
            previous = asset;
        }
    }
    (graph, entry_points)
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");
    for depth in [4usize, 16, 64] {
        let (graph, entry_points) = project_graph(200, depth);
        let input = ReachabilityInput::from_graph(&graph);
        let events = EventDispatcher::new();
        for strategy in [ReachabilityStrategy::FixedPoint, ReachabilityStrategy::Worklist] {
            let engine = ReachabilityEngine::new(entry_points.clone()).with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(strategy.name(), depth), &depth, |b, _| {
                b.iter(|| engine.run(&input, &NeverCancel, &events));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
