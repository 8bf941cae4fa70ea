//! Graph cache persistence and unreferenced-report rendering.

use keeper_analysis::cache::{GraphCache, ACTOR_CLASSES_FILE, DEPENDENCIES_FILE, REFERENCERS_FILE};
use keeper_analysis::graph::AssetGraph;
use keeper_analysis::reachability::{EntryPoints, ReachabilityEngine, ReachabilityInput};
use keeper_analysis::reporters::UnusedReport;
use keeper_core::errors::CacheError;
use keeper_core::events::EventDispatcher;
use keeper_core::traits::{CancellationToken, NeverCancel};

fn sample_graph() -> AssetGraph {
    let mut graph = AssetGraph::new();
    graph.add_asset("/Game/Maps/Main");
    graph.add_reference("/Game/Maps/Main", "/Game/Props/Crate");
    graph.add_reference("/Game/Props/Crate", "/Game/Props/M_Wood");
    graph.add_reference("/Game/Props/Old", "/Game/Props/M_Wood");
    graph.add_reference("/Game/Props/Crate", "/Engine/BasicShapes/Cube");
    graph
}

#[test]
fn test_cache_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let graph = sample_graph();
    let cache = GraphCache::from_graph(&graph, &["/Game/BP/Door".to_string()]);
    cache.save(dir.path()).unwrap();

    for file in [REFERENCERS_FILE, DEPENDENCIES_FILE, ACTOR_CLASSES_FILE] {
        assert!(dir.path().join(file).exists(), "{file}");
    }

    let loaded = GraphCache::load(dir.path()).unwrap();
    assert_eq!(loaded, cache);
    let rebuilt = loaded.to_graph();
    assert_eq!(rebuilt.node_count(), graph.node_count());
    assert_eq!(rebuilt.edge_count(), graph.edge_count());
    assert_eq!(
        rebuilt.referencers_of("/Game/Props/M_Wood"),
        vec!["/Game/Props/Crate", "/Game/Props/Old"]
    );
}

#[test]
fn test_cache_written_in_sorted_map_form() {
    let dir = tempfile::tempdir().unwrap();
    GraphCache::from_graph(&sample_graph(), &[]).save(dir.path()).unwrap();
    let json = std::fs::read_to_string(dir.path().join(REFERENCERS_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["/Game/Props/Crate"], serde_json::json!(["/Game/Maps/Main"]));
    assert_eq!(value["/Game/Maps/Main"], serde_json::json!([]));
}

#[test]
fn test_missing_actor_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    GraphCache::from_graph(&sample_graph(), &[]).save(dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(ACTOR_CLASSES_FILE)).unwrap();
    let loaded = GraphCache::load(dir.path()).unwrap();
    assert!(loaded.actor_classes.is_empty());
}

#[test]
fn test_missing_or_corrupt_map_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(GraphCache::load(dir.path()), Err(CacheError::NotFound { .. })));

    GraphCache::from_graph(&sample_graph(), &[]).save(dir.path()).unwrap();
    std::fs::write(dir.path().join(DEPENDENCIES_FILE), "[1, 2").unwrap();
    assert!(matches!(GraphCache::load(dir.path()), Err(CacheError::Malformed { .. })));
}

#[test]
fn test_short_report_lists_unreferenced_under_base_path() {
    let graph = sample_graph();
    let input = ReachabilityInput::from_graph(&graph);
    let result = ReachabilityEngine::new(EntryPoints::new().with_literal("/Game/Maps/Main"))
        .run(&input, &NeverCancel, &EventDispatcher::new());

    assert!(result.used.contains("/Engine/BasicShapes/Cube"));
    let report = UnusedReport::new(&result, "/Game/").render();
    assert_eq!(report, "/Game/Props/Old\n");
}

#[test]
fn test_full_report_sections() {
    let graph = sample_graph();
    let mut entry_points = EntryPoints::new().with_literal("/Game/Maps/Main");
    entry_points.add_level_actor_classes(["/Game/BP/Door.Door_C"]);
    let input = ReachabilityInput::from_graph(&graph);
    let result = ReachabilityEngine::new(entry_points.clone())
        .run(&input, &NeverCancel, &EventDispatcher::new());

    let report = UnusedReport::new(&result, "/Game/Props/")
        .with_details(&graph, &entry_points)
        .render();
    let expected = "# Entrypoint\n\
        /Game/BP/Door FromCurrentMap=True\n\
        /Game/Maps/Main FromCurrentMap=False\n\
        \n\n\n# Asset -> Dependencies\n\
        /Game/Props/Crate={'/Engine/BasicShapes/Cube', '/Game/Props/M_Wood'}\n\
        /Game/Props/M_Wood=set()\n\
        /Game/Props/Old={'/Game/Props/M_Wood'}\n\
        \n\n\n# Asset -> Referencers\n\
        /Game/Props/Crate={'/Game/Maps/Main'}\n\
        /Game/Props/M_Wood={'/Game/Props/Crate', '/Game/Props/Old'}\n\
        /Game/Props/Old=set()\n\
        \n\n\n# Unreferenced Assets\n\
        /Game/Props/Old\n";
    assert_eq!(report, expected);
}

#[test]
fn test_cancelled_report_is_labelled_partial() {
    let graph = sample_graph();
    let input = ReachabilityInput::from_graph(&graph);
    let token = CancellationToken::new();
    token.cancel();
    let result = ReachabilityEngine::new(EntryPoints::new().with_literal("/Game/Maps/Main"))
        .run(&input, &token, &EventDispatcher::new());

    let report = UnusedReport::new(&result, "/Game/").render();
    assert!(report
        .starts_with("# PARTIAL RESULT: cancelled after 0 iterations, 5 assets undetermined\n"));
}

#[test]
fn test_report_written_to_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    let graph = sample_graph();
    let input = ReachabilityInput::from_graph(&graph);
    let result = ReachabilityEngine::new(EntryPoints::new()).run(
        &input,
        &NeverCancel,
        &EventDispatcher::new(),
    );

    let path = dir.path().join("reports").join("unused.txt");
    UnusedReport::new(&result, "/Game/").write_to(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 4);
}
