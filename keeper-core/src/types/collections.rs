//! Hash collection aliases backed by `rustc-hash`.

pub use rustc_hash::{FxHashMap, FxHashSet};

/// Creates an empty `FxHashMap` with room for `capacity` entries.
pub fn fx_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, Default::default())
}
