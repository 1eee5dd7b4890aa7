use std::collections::HashMap;

use dioxus::prelude::*;

/// Version counters keyed by logical resource.
///
/// A resource future reads its key's version before fetching, so bumping
/// the version after a successful mutation re-runs the fetch. The counters
/// live in app context and die with it; nothing is cached ambiently or
/// across page loads.
#[derive(Clone, Copy)]
pub struct ResourceCache {
    collection: Signal<u32>,
    records: Signal<HashMap<String, u32>>,
}

pub fn provide() -> ResourceCache {
    use_context_provider(|| ResourceCache {
        collection: Signal::new(0),
        records: Signal::new(HashMap::new()),
    })
}

pub fn use_resource_cache() -> ResourceCache {
    use_context::<ResourceCache>()
}

impl ResourceCache {
    /// Read (and subscribe to) the user-collection version.
    pub fn collection_version(&self) -> u32 {
        (self.collection)()
    }

    /// Read (and subscribe to) a single record's version.
    pub fn record_version(&self, id: &str) -> u32 {
        self.records.read().get(id).copied().unwrap_or(0)
    }

    pub fn invalidate_collection(&mut self) {
        tracing::debug!("invalidating user collection");
        self.collection += 1;
    }

    pub fn invalidate_record(&mut self, id: &str) {
        tracing::debug!(id, "invalidating user record");
        *self.records.write().entry(id.to_string()).or_insert(0) += 1;
    }

    /// Logout path: drop everything cached client-side.
    pub fn clear(&mut self) {
        self.records.write().clear();
        self.collection += 1;
    }
}
