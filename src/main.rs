use api_rest::{AppState, DEFAULT_REST_ADDR, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the notes application
///
/// Serves the notes REST API (with Swagger UI) until Ctrl-C is received.
///
/// # Environment Variables
/// - `NOTES_REST_ADDR`: REST server address (default: "0.0.0.0:3500")
/// - `NOTES_STORE`: `file` or `memory` (default: `file`)
/// - `NOTES_DATA_DIR`: Directory for note storage (default: "notes_data")
/// - `NOTES_EMPTY_LIST_IS_ERROR`: answer an empty list with 400 (default: `true`)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If startup or the server itself fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("notes_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("NOTES_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    tracing::info!("++ Starting notes REST on {}", rest_addr);

    let app = router(AppState::from_env()?);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Notes REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
