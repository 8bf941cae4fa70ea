use std::collections::BTreeSet;

use keeper_analysis::graph::ReferenceMap;
use keeper_analysis::reachability::{
    EntryPoints, ReachabilityEngine, ReachabilityInput, ReachabilityResult,
};
use keeper_core::config::{ForcedPolicy, ReachabilityStrategy};
use keeper_core::events::EventDispatcher;
use keeper_core::traits::NeverCancel;
use proptest::prelude::*;

fn node(i: usize) -> String {
    format!("/Game/N{i:02}")
}

/// Referencer map over `n` nodes; each edge `(a, b)` makes `a` a referencer of `b`.
fn build_map(n: usize, edges: &[(usize, usize)]) -> ReferenceMap {
    let mut map: ReferenceMap = (0..n).map(|i| (node(i), BTreeSet::new())).collect();
    for &(a, b) in edges {
        let (a, b) = (a % n, b % n);
        if let Some(refs) = map.get_mut(&node(b)) {
            refs.insert(node(a));
        }
    }
    map
}

fn entry_points(n: usize, entries: &[usize]) -> EntryPoints {
    entries
        .iter()
        .fold(EntryPoints::new(), |ep, &i| ep.with_literal(node(i % n)))
}

fn run(engine: &ReachabilityEngine, map: &ReferenceMap) -> ReachabilityResult {
    let input = ReachabilityInput::from_referencer_map(map);
    engine.run(&input, &NeverCancel, &EventDispatcher::new())
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<usize>)> {
    (1usize..24).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..48),
            prop::collection::vec(0..n, 0..4),
        )
    })
}

proptest! {
    #[test]
    fn classification_is_idempotent((n, edges, entries) in graph_strategy()) {
        let map = build_map(n, &edges);
        let engine = ReachabilityEngine::new(entry_points(n, &entries));
        prop_assert_eq!(run(&engine, &map), run(&engine, &map));
    }

    #[test]
    fn every_node_is_classified_exactly_once((n, edges, entries) in graph_strategy()) {
        let map = build_map(n, &edges);
        let result = run(&ReachabilityEngine::new(entry_points(n, &entries)), &map);
        prop_assert!(result.undetermined.is_empty());
        prop_assert!(result.used.is_disjoint(&result.unreferenced));
        let all: BTreeSet<String> = result.used.union(&result.unreferenced).cloned().collect();
        let universe: BTreeSet<String> = map.keys().cloned().collect();
        prop_assert_eq!(all, universe);
    }

    #[test]
    fn adding_an_entry_point_never_shrinks_used(
        (n, edges, entries) in graph_strategy(),
        extra in 0usize..24,
    ) {
        let map = build_map(n, &edges);
        let before = run(&ReachabilityEngine::new(entry_points(n, &entries)), &map);
        let mut more = entries.clone();
        more.push(extra);
        let after = run(&ReachabilityEngine::new(entry_points(n, &more)), &map);
        prop_assert!(before.used.is_subset(&after.used));
        prop_assert!(after.unreferenced.is_subset(&before.unreferenced));
    }

    #[test]
    fn unreachable_cycle_is_unreferenced(n in 2usize..20) {
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        let map = build_map(n, &edges);
        let result = run(&ReachabilityEngine::new(EntryPoints::new()), &map);
        prop_assert!(result.is_complete());
        prop_assert!(result.used.is_empty());
        prop_assert_eq!(result.unreferenced.len(), n);
    }

    #[test]
    fn worklist_agrees_with_fixed_point(
        (n, edges, entries) in graph_strategy(),
        forced in prop::collection::vec(0usize..24, 0..3),
        reachability_wins in any::<bool>(),
    ) {
        let map = build_map(n, &edges);
        let policy = if reachability_wins {
            ForcedPolicy::ReachabilityWins
        } else {
            ForcedPolicy::ForcedWins
        };
        let engine = ReachabilityEngine::new(entry_points(n, &entries))
            .with_forced_unreferenced(forced.iter().map(|&i| node(i % n)))
            .with_policy(policy);

        let fixed = run(&engine.clone().with_strategy(ReachabilityStrategy::FixedPoint), &map);
        let worklist = run(&engine.with_strategy(ReachabilityStrategy::Worklist), &map);
        prop_assert_eq!(fixed.used, worklist.used);
        prop_assert_eq!(fixed.unreferenced, worklist.unreferenced);
    }
}
