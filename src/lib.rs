//! login-index - Alphabetical Login List
//!
//! Groups saved logins into alphabetical sections by base domain, with
//! live search against a login store.

pub mod app;
pub mod logins;
pub mod store;
pub mod ui;
