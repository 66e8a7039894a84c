//! UI Module
//!
//! Text output for the command line.

pub mod listing;

pub use listing::render_listing;
