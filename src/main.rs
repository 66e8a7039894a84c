//! login-index command line
//!
//! Prints the sectioned login list of a JSON export, optionally filtered
//! by a search query.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use login_index::app::{Applied, CliArgs, LoginListController};
use login_index::store::MemoryLoginStore;
use login_index::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse arguments
    let cli = CliArgs::parse(std::env::args().skip(1));

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = &cli.config.logins_path;
    tracing::debug!("Using logins file: {}", path.display());

    let store = MemoryLoginStore::from_json_file(path)
        .with_context(|| format!("Failed to load logins from {}", path.display()))?;
    let mut controller = LoginListController::new(Arc::new(store));

    let applied = match cli.query.as_deref() {
        Some(query) => controller.search(query).await,
        None => controller.load().await,
    };

    if let Some(Applied::Failed(e)) = applied {
        return Err(e).context("Login store request failed");
    }

    print!("{}", ui::render_listing(controller.index()));
    Ok(())
}
