//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::KeeperEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, `emit` iterates over an empty Vec.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn KeeperEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn KeeperEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn KeeperEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Graph collection ----
    pub fn emit_collection_started(&self, event: &CollectionStartedEvent) {
        self.emit(|h| h.on_collection_started(event));
    }

    pub fn emit_collection_progress(&self, event: &CollectionProgressEvent) {
        self.emit(|h| h.on_collection_progress(event));
    }

    pub fn emit_collection_complete(&self, event: &CollectionCompleteEvent) {
        self.emit(|h| h.on_collection_complete(event));
    }

    // ---- Reachability ----
    pub fn emit_reachability_pass(&self, event: &ReachabilityPassEvent) {
        self.emit(|h| h.on_reachability_pass(event));
    }

    pub fn emit_reachability_complete(&self, event: &ReachabilityCompleteEvent) {
        self.emit(|h| h.on_reachability_complete(event));
    }

    // ---- Validation ----
    pub fn emit_asset_validated(&self, event: &AssetValidatedEvent) {
        self.emit(|h| h.on_asset_validated(event));
    }

    pub fn emit_rule_dropped(&self, event: &RuleDroppedEvent) {
        self.emit(|h| h.on_rule_dropped(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}
