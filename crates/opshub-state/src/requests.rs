//! The read-only resource request log.

use opshub_entity::request::ResourceRequest;

use crate::seed;
use crate::store::RecordStore;

/// One session's resource request view. Display only: no create, edit, or
/// delete path exists for requests.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    store: RecordStore<ResourceRequest>,
}

impl RequestLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log pre-populated with the session seed requests.
    pub fn seeded() -> Self {
        Self {
            store: RecordStore::from_records(seed::requests()),
        }
    }

    /// All requests in log order.
    pub fn requests(&self) -> &[ResourceRequest] {
        self.store.records()
    }

    /// Look up a request by identifier.
    pub fn get(&self, id: &str) -> Option<&ResourceRequest> {
        self.store.get(id)
    }
}
