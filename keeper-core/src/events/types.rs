//! Event payload types.

/// Payload for `on_collection_started`.
#[derive(Debug, Clone)]
pub struct CollectionStartedEvent {
    pub base_path: String,
    pub asset_count: usize,
}

/// Payload for `on_collection_progress`.
#[derive(Debug, Clone)]
pub struct CollectionProgressEvent {
    pub asset: String,
    pub processed: usize,
    pub total: usize,
}

/// Payload for `on_collection_complete`.
#[derive(Debug, Clone)]
pub struct CollectionCompleteEvent {
    pub node_count: usize,
    pub edge_count: usize,
    pub skipped: usize,
    pub cancelled: bool,
}

/// Payload for `on_reachability_pass`.
#[derive(Debug, Clone)]
pub struct ReachabilityPassEvent {
    pub pass: usize,
    pub used: usize,
    pub unreferenced: usize,
    pub undetermined: usize,
}

/// Payload for `on_reachability_complete`.
#[derive(Debug, Clone)]
pub struct ReachabilityCompleteEvent {
    /// Full passes (fixed point) or dequeued assets (work-list).
    pub iterations: usize,
    pub used: usize,
    pub unreferenced: usize,
    pub cancelled: bool,
}

/// Payload for `on_asset_validated`.
#[derive(Debug, Clone)]
pub struct AssetValidatedEvent {
    pub path: String,
    pub status: String,
    pub rule_id: Option<String>,
}

/// Payload for `on_rule_dropped`.
#[derive(Debug, Clone)]
pub struct RuleDroppedEvent {
    pub index: usize,
    pub asset_type: String,
    pub reason: String,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
