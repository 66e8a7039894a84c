//! Logins Module
//!
//! Alphabetical sectioning, selection and search over saved logins.

pub mod cursor;
pub mod domain;
pub mod index;
pub mod search;

// Re-exports
pub use cursor::{IndexPath, SectionCursor};
pub use domain::{parse_hostname, ParsedHost};
pub use index::SectionedLoginIndex;
pub use search::{normalize_query, RequestId, RequestTracker};
