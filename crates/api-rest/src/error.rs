//! Mapping of service errors onto HTTP responses.
//!
//! Every failure leaves the API through [`ApiError`]. Most become a JSON `{"message": ...}` body;
//! a malformed identifier is answered with plain text.
//!
//! | Error | Status |
//! |---|---|
//! | malformed or undecodable id | 404 |
//! | missing fields, duplicate title on create, not found, empty list, store failure | 400 |
//! | duplicate title on update | 409 |
//! | invalid configuration | 500 |

use api_shared::dto::MessageRes;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use notes_core::NotesError;

/// Plain-text body returned for identifiers that cannot name a note.
pub const NO_NOTE_WITH_ID: &str = "No note with that id";

pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_DUPLICATE_TITLE: &str = "Duplicate note title";
pub const MSG_NO_NOTES: &str = "No notes found";
pub const MSG_NOT_FOUND: &str = "Note not found";
pub const MSG_INVALID_NOTE_DATA: &str = "Invalid note data received";

#[derive(Debug)]
pub enum ApiError {
    Notes(NotesError),
    InvalidBody(JsonRejection),
    /// The path segment could not be extracted at all (e.g. invalid UTF-8 once decoded).
    InvalidPath(PathRejection),
}

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        ApiError::Notes(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(MessageRes::new(message))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidPath(rejection) => {
                tracing::warn!("Rejected note id: {}", rejection.body_text());
                (StatusCode::NOT_FOUND, NO_NOTE_WITH_ID).into_response()
            }
            ApiError::InvalidBody(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                message(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid request body: {}", rejection.body_text()),
                )
            }
            ApiError::Notes(err) => match err {
                NotesError::MalformedId(e) => {
                    tracing::warn!("Malformed note id: {}", e);
                    (StatusCode::NOT_FOUND, NO_NOTE_WITH_ID).into_response()
                }
                NotesError::MissingFields(fields) => {
                    tracing::warn!("Missing note fields: {}", fields.join(", "));
                    message(StatusCode::BAD_REQUEST, MSG_ALL_FIELDS_REQUIRED)
                }
                NotesError::DuplicateTitle(_) => {
                    message(StatusCode::BAD_REQUEST, MSG_DUPLICATE_TITLE)
                }
                NotesError::TitleConflict(_) => message(StatusCode::CONFLICT, MSG_DUPLICATE_TITLE),
                NotesError::NoNotes => message(StatusCode::BAD_REQUEST, MSG_NO_NOTES),
                NotesError::NotFound(_) => message(StatusCode::BAD_REQUEST, MSG_NOT_FOUND),
                NotesError::Store(e) => {
                    tracing::error!("Note store error: {:?}", e);
                    message(StatusCode::BAD_REQUEST, MSG_INVALID_NOTE_DATA)
                }
                NotesError::InvalidConfig(e) => {
                    tracing::error!("Configuration error: {}", e);
                    message(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use notes_core::{ObjectId, StoreError};

    async fn render(err: NotesError) -> (StatusCode, String) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn malformed_id_is_plain_text_404() {
        let err = ObjectId::parse("nope").expect_err("should be malformed");

        let (status, body) = render(NotesError::from(err)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, NO_NOTE_WITH_ID);
    }

    #[tokio::test]
    async fn duplicate_title_status_depends_on_operation() {
        let (create_status, create_body) =
            render(NotesError::DuplicateTitle("Shopping".into())).await;
        let (update_status, update_body) =
            render(NotesError::TitleConflict("Shopping".into())).await;

        assert_eq!(create_status, StatusCode::BAD_REQUEST);
        assert_eq!(update_status, StatusCode::CONFLICT);
        assert_eq!(create_body, r#"{"message":"Duplicate note title"}"#);
        assert_eq!(update_body, create_body);
    }

    #[tokio::test]
    async fn store_failures_collapse_to_generic_400() {
        let (status, body) = render(NotesError::Store(StoreError::MissingDocument(
            ObjectId::new(),
        )))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"Invalid note data received"}"#);
    }

    #[tokio::test]
    async fn not_found_and_empty_list_are_400() {
        let (status, body) = render(NotesError::NotFound(ObjectId::new())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"Note not found"}"#);

        let (status, body) = render(NotesError::NoNotes).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"No notes found"}"#);
    }
}
