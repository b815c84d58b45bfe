use std::sync::{Arc, Mutex};

/// Parameters of the most recent successful generation, kept so the
/// regenerate endpoint can skip the page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedRequest {
    pub url: String,
    pub keywords: String,
    pub variant_count: u32,
    pub extracted_text: String,
}

/// Single-slot, process-wide store. Clones share the slot; the last write
/// wins, and concurrent callers can observe each other's entries. The slot
/// starts empty on every process start.
#[derive(Clone, Default)]
pub struct RequestCache {
    slot: Arc<Mutex<Option<CachedRequest>>>,
}

impl RequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is in the slot.
    pub fn store(&self, entry: CachedRequest) {
        let mut slot = self.slot.lock().unwrap();
        *slot = Some(entry);
    }

    /// Read the slot without clearing it.
    pub fn peek(&self) -> Option<CachedRequest> {
        self.slot.lock().unwrap().clone()
    }
}
