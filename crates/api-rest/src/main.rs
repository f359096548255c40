//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the notes REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `notes-run` binary serves the same
//! router with workspace-wide logging.

use api_rest::{router, AppState, DEFAULT_REST_ADDR};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the notes REST API server
///
/// # Environment Variables
/// - `NOTES_REST_ADDR`: Server address (default: "0.0.0.0:3500")
/// - `NOTES_STORE`: `file` or `memory` (default: `file`)
/// - `NOTES_DATA_DIR`: root directory for the file store (default: `notes_data`)
/// - `NOTES_EMPTY_LIST_IS_ERROR`: answer an empty list with 400 (default: `true`)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the store cannot be opened,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("NOTES_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    tracing::info!("-- Starting notes REST API on {}", addr);

    let app = router(AppState::from_env()?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
