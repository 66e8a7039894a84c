//! Login List Controller
//!
//! Drives fetches and searches against a login store and keeps the
//! sectioned index in step with the latest one.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logins::search::{self, RequestId, RequestTracker};
use crate::logins::{normalize_query, IndexPath, SectionCursor, SectionedLoginIndex};
use crate::store::{LoginRecord, LoginStore, StoreError, StoreResult};

/// A finished fetch or search
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: RequestId,
    pub query: Option<String>,
    pub result: StoreResult<Vec<LoginRecord>>,
}

/// What applying an outcome did to the index
#[derive(Debug)]
pub enum Applied {
    /// The index now holds the outcome's logins
    Replaced { rows: usize },
    /// A newer request was issued; the outcome was dropped
    Stale,
    /// The store failed; the previous logins stay in place
    Failed(StoreError),
}

/// Owns the index and is the only thing that replaces it.
///
/// Store calls run as spawned tasks. Their outcomes come back over one
/// channel and are applied in arrival order; only the outcome of the
/// latest issued request may replace the index.
pub struct LoginListController {
    store: Arc<dyn LoginStore>,
    index: SectionedLoginIndex,
    cursor: SectionCursor,
    tracker: RequestTracker,
    last_settled: Option<RequestId>,
    active_query: Option<String>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl LoginListController {
    pub fn new(store: Arc<dyn LoginStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store,
            index: SectionedLoginIndex::new(),
            cursor: SectionCursor::new(),
            tracker: RequestTracker::new(),
            last_settled: None,
            active_query: None,
            tx,
            rx,
        }
    }

    /// Start fetching every login
    pub fn request_all(&mut self) -> RequestId {
        self.spawn_request(None)
    }

    /// Start a search. A blank query clears the search and fetches
    /// everything.
    pub fn request_search(&mut self, query: &str) -> RequestId {
        self.spawn_request(normalize_query(query))
    }

    fn spawn_request(&mut self, query: Option<String>) -> RequestId {
        let request = self.tracker.issue();
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();

        let task_query = query.clone();
        let task = tokio::spawn(async move {
            search::search(&*store, task_query.as_deref()).await
        });

        // Report a store call that panicked or was cancelled as a failure
        tokio::spawn(async move {
            let result = match task.await {
                Ok(result) => result,
                Err(e) => Err(StoreError::Unavailable(format!("login request aborted: {}", e))),
            };
            let _ = tx.send(FetchOutcome {
                request,
                query,
                result,
            });
        });

        request
    }

    /// Wait for the next request to finish
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.rx.recv().await
    }

    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        if !self.tracker.is_current(outcome.request) {
            tracing::debug!("Dropping stale result for request {}", outcome.request.value());
            return Applied::Stale;
        }
        self.last_settled = Some(outcome.request);

        match outcome.result {
            Ok(logins) => {
                let rows = logins.len();
                self.index.replace(logins);
                self.cursor.clamp_to(&self.index);
                self.active_query = outcome.query;
                Applied::Replaced { rows }
            }
            Err(e) => {
                tracing::warn!("Login request {} failed: {}", outcome.request.value(), e);
                Applied::Failed(e)
            }
        }
    }

    /// Apply outcomes until the latest request has landed.
    ///
    /// Returns `None` when nothing is outstanding.
    pub async fn settle(&mut self) -> Option<Applied> {
        while self.has_pending() {
            let outcome = self.next_outcome().await?;
            match self.apply(outcome) {
                Applied::Stale => continue,
                applied => return Some(applied),
            }
        }
        None
    }

    /// Fetch every login and wait for it
    pub async fn load(&mut self) -> Option<Applied> {
        self.request_all();
        self.settle().await
    }

    /// Search and wait for the results
    pub async fn search(&mut self, query: &str) -> Option<Applied> {
        self.request_search(query);
        self.settle().await
    }

    pub fn has_pending(&self) -> bool {
        self.tracker.latest().is_some() && self.tracker.latest() != self.last_settled
    }

    pub fn index(&self) -> &SectionedLoginIndex {
        &self.index
    }

    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    pub fn selected(&self) -> Option<IndexPath> {
        self.cursor.selected()
    }

    pub fn selected_login(&self) -> Option<&LoginRecord> {
        self.cursor.selected_record(&self.index)
    }

    pub fn select(&mut self, path: IndexPath) -> bool {
        self.cursor.select(&self.index, path)
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.index);
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.index);
    }

    pub fn jump_to_title(&mut self, title: &str) {
        self.cursor.jump_to_title(&self.index, title);
    }
}
