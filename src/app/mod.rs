//! Application
//!
//! Configuration and the controller tying a login store to the index.

mod config;
mod controller;

pub use config::{AppConfig, CliArgs};
pub use controller::{Applied, FetchOutcome, LoginListController};
