//! Event handler trait with no-op defaults.

use super::types::*;

/// Receives Keeper events. Every method defaults to a no-op so handlers only
/// implement what they care about.
pub trait KeeperEventHandler: Send + Sync {
    // ---- Graph collection ----
    fn on_collection_started(&self, _event: &CollectionStartedEvent) {}
    fn on_collection_progress(&self, _event: &CollectionProgressEvent) {}
    fn on_collection_complete(&self, _event: &CollectionCompleteEvent) {}

    // ---- Reachability ----
    fn on_reachability_pass(&self, _event: &ReachabilityPassEvent) {}
    fn on_reachability_complete(&self, _event: &ReachabilityCompleteEvent) {}

    // ---- Validation ----
    fn on_asset_validated(&self, _event: &AssetValidatedEvent) {}
    fn on_rule_dropped(&self, _event: &RuleDroppedEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
