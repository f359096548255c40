//! # API REST
//!
//! REST API implementation for the notes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for the wire types and `notes-core` for everything else.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use api_shared::dto;
use axum::{routing::get, Router};
use notes_core::{open_store, CoreConfig, NotesService};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Default listen address when `NOTES_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3500";

/// Application state for the REST API server
///
/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub notes_service: NotesService,
}

impl AppState {
    /// Builds the state from `NOTES_STORE`, `NOTES_DATA_DIR` and `NOTES_EMPTY_LIST_IS_ERROR`.
    ///
    /// # Errors
    /// Returns an error if a variable holds an invalid value or the store cannot be opened.
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = Arc::new(CoreConfig::from_env_values(
            std::env::var("NOTES_DATA_DIR").ok(),
            std::env::var("NOTES_STORE").ok(),
            std::env::var("NOTES_EMPTY_LIST_IS_ERROR").ok(),
        )?);

        tracing::info!(
            "Using {:?} note store (data dir {})",
            cfg.store_kind(),
            cfg.data_dir().display()
        );

        let store = open_store(&cfg)?;
        Ok(Self {
            notes_service: NotesService::new(cfg, store),
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_notes,
        handlers::get_note,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(schemas(
        dto::HealthRes,
        dto::MessageRes,
        dto::NoteRes,
        dto::CreateNoteReq,
        dto::CreateNoteRes,
        dto::UpdateNoteReq,
        dto::DeleteNoteRes,
    ))
)]
pub struct ApiDoc;

/// Builds the full application router, including Swagger UI and the OpenAPI document.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .patch(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
