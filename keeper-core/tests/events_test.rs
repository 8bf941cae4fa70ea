//! Tests for the Keeper event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keeper_core::events::dispatcher::EventDispatcher;
use keeper_core::events::handler::KeeperEventHandler;
use keeper_core::events::types::*;

struct CountingHandler {
    passes: AtomicUsize,
    completed: AtomicUsize,
    validated: AtomicUsize,
    errors: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            passes: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            validated: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }
}

impl KeeperEventHandler for CountingHandler {
    fn on_reachability_pass(&self, _event: &ReachabilityPassEvent) {
        self.passes.fetch_add(1, Ordering::Relaxed);
    }

    fn on_reachability_complete(&self, _event: &ReachabilityCompleteEvent) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_asset_validated(&self, _event: &AssetValidatedEvent) {
        self.validated.fetch_add(1, Ordering::Relaxed);
    }

    fn on_error(&self, _event: &ErrorEvent) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }
}

fn pass_event(pass: usize) -> ReachabilityPassEvent {
    ReachabilityPassEvent {
        pass,
        used: 1,
        unreferenced: 1,
        undetermined: 0,
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct NoopHandler;
    impl KeeperEventHandler for NoopHandler {}

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(NoopHandler));
    dispatcher.emit_reachability_pass(&pass_event(1));
    dispatcher.emit_error(&ErrorEvent {
        message: "ignored".to_string(),
        error_code: "KEEPER_GRAPH".to_string(),
    });
    assert_eq!(dispatcher.handler_count(), 1);
}

#[test]
fn test_empty_dispatcher_emits_nothing() {
    let dispatcher = EventDispatcher::new();
    dispatcher.emit_reachability_pass(&pass_event(1));
    assert_eq!(dispatcher.handler_count(), 0);
}

#[test]
fn test_events_reach_every_handler() {
    let first = Arc::new(CountingHandler::new());
    let second = Arc::new(CountingHandler::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());

    dispatcher.emit_reachability_pass(&pass_event(1));
    dispatcher.emit_reachability_pass(&pass_event(2));
    dispatcher.emit_reachability_complete(&ReachabilityCompleteEvent {
        iterations: 2,
        used: 1,
        unreferenced: 1,
        cancelled: false,
    });
    dispatcher.emit_asset_validated(&AssetValidatedEvent {
        path: "/Game/T_Wall".to_string(),
        status: "valid".to_string(),
        rule_id: Some("Texture2D#0".to_string()),
    });

    for handler in [&first, &second] {
        assert_eq!(handler.passes.load(Ordering::Relaxed), 2);
        assert_eq!(handler.completed.load(Ordering::Relaxed), 1);
        assert_eq!(handler.validated.load(Ordering::Relaxed), 1);
        assert_eq!(handler.errors.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    struct PanickingHandler;
    impl KeeperEventHandler for PanickingHandler {
        fn on_reachability_pass(&self, _event: &ReachabilityPassEvent) {
            panic!("handler failure");
        }
    }

    let counter = Arc::new(CountingHandler::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_reachability_pass(&pass_event(1));
    assert_eq!(counter.passes.load(Ordering::Relaxed), 1);
}
