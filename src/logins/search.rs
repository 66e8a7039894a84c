//! Search Operations
//!
//! Query handling against a login store and request sequencing for
//! live search.

use crate::store::{LoginRecord, LoginStore, StoreResult};

/// Trimmed query, or `None` when there is nothing to search for
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Search `store`, or fetch everything when `query` is blank
pub async fn search(store: &dyn LoginStore, query: Option<&str>) -> StoreResult<Vec<LoginRecord>> {
    match query.and_then(normalize_query) {
        Some(q) => store.search_logins(&q).await,
        None => store.get_all_logins().await,
    }
}

/// Identifies one fetch or search request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Hands out increasing request ids and remembers the latest one.
///
/// Results carrying anything but the latest id are stale.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest != 0 && id.0 == self.latest
    }

    pub fn latest(&self) -> Option<RequestId> {
        (self.latest != 0).then_some(RequestId(self.latest))
    }
}
