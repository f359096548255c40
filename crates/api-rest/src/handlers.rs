//! HTTP handlers for the notes endpoints.
//!
//! Handlers only translate between HTTP and [`NotesService`](notes_core::NotesService); all
//! validation lives in the service.

use crate::error::ApiError;
use crate::AppState;
use api_shared::{dto, HealthService};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use notes_core::{NotesError, ObjectId};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = dto::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<dto::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "All notes in storage order", body = Vec<dto::NoteRes>),
        (status = 400, description = "No notes found", body = dto::MessageRes)
    )
)]
/// List all notes
///
/// An empty collection is reported as 400 unless `NOTES_EMPTY_LIST_IS_ERROR` is switched off,
/// in which case it is an empty array.
#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<dto::NoteRes>>, ApiError> {
    let notes = state.notes_service.list().await?;
    Ok(Json(notes.into_iter().map(dto::NoteRes::from).collect()))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "24-character hex note id")),
    responses(
        (status = 200, description = "The note", body = dto::NoteRes),
        (status = 400, description = "Note not found", body = dto::MessageRes),
        (status = 404, description = "Malformed id", body = String, content_type = "text/plain")
    )
)]
/// Fetch one note by id
#[axum::debug_handler]
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<dto::NoteRes>, ApiError> {
    let Path(id) = path?;
    let note = state.notes_service.get(&id).await?;
    Ok(Json(note.into()))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = dto::CreateNoteReq,
    responses(
        (status = 201, description = "Note created", body = dto::CreateNoteRes),
        (status = 400, description = "Missing fields, duplicate title or invalid data", body = dto::MessageRes)
    )
)]
/// Create a note
///
/// `userid`, `title` and `text` are required; `username` is optional. Titles must be unique
/// ignoring case. New notes start with `completed = false`.
#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<dto::CreateNoteReq>, JsonRejection>,
) -> Result<(StatusCode, Json<dto::CreateNoteRes>), ApiError> {
    let Json(req) = payload?;
    let note = state.notes_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(dto::CreateNoteRes::created(note.id.to_string(), &note.title)),
    ))
}

#[utoipa::path(
    patch,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "24-character hex note id")),
    request_body = dto::UpdateNoteReq,
    responses(
        (status = 200, description = "Updated note", body = dto::NoteRes),
        (status = 400, description = "Note not found, missing fields or invalid data", body = dto::MessageRes),
        (status = 404, description = "Malformed id", body = String, content_type = "text/plain"),
        (status = 409, description = "Another note has this title", body = dto::MessageRes)
    )
)]
/// Replace every field of a note
///
/// This is a full overwrite: `user`, `title`, `text` and `completed` are required and an absent
/// `username` clears the stored one.
#[axum::debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<dto::UpdateNoteReq>, JsonRejection>,
) -> Result<Json<dto::NoteRes>, ApiError> {
    let Path(id) = path?;
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            // A malformed id is reported ahead of a malformed body.
            ObjectId::parse(&id).map_err(NotesError::from)?;
            return Err(rejection.into());
        }
    };
    let note = state.notes_service.update(&id, req).await?;
    Ok(Json(note.into()))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "24-character hex note id")),
    responses(
        (status = 200, description = "Note deleted", body = dto::DeleteNoteRes),
        (status = 400, description = "Note not found", body = dto::MessageRes),
        (status = 404, description = "Malformed id", body = String, content_type = "text/plain")
    )
)]
/// Permanently delete a note
#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<dto::DeleteNoteRes>, ApiError> {
    let Path(id) = path?;
    let removed = state.notes_service.delete(&id).await?;
    Ok(Json(dto::DeleteNoteRes::removed(
        removed.id.to_string(),
        removed.title,
    )))
}
