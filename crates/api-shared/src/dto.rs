//! Request and response bodies for the notes API.
//!
//! Field names follow the document-store convention the API has always exposed: `_id`,
//! `createdAt`, `updatedAt`, and the owning user stored as `user` (but sent as `userid` on
//! create).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of every JSON error response, and of some confirmations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A stored note as returned by list, get and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoteRes {
    /// 24-character hex identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user reference
    pub user: String,
    pub title: String,
    pub text: String,
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub completed: bool,
    /// RFC 3339 creation time
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// RFC 3339 time of the last write
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Body of `POST /notes`.
///
/// Every field is optional at the wire level so that missing fields can be reported with the
/// API's own message instead of a deserialisation failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteReq {
    pub userid: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRes {
    pub message: String,
    pub id: String,
}

impl CreateNoteRes {
    pub fn created(id: impl Into<String>, title: &str) -> Self {
        Self {
            message: format!("New note '{}' created", title),
            id: id.into(),
        }
    }
}

/// Body of `PATCH /notes/{id}`. All fields except `username` are required; the note is
/// overwritten as a whole.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteReq {
    pub user: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub username: Option<String>,
}

/// Confirmation returned by `DELETE /notes/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteRes {
    pub message: String,
    pub id: String,
    pub title: String,
}

impl DeleteNoteRes {
    pub fn removed(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        let title = title.into();
        Self {
            message: format!("Note {} with ID {} deleted", title, id),
            id,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_res_uses_document_field_names() {
        let note = NoteRes {
            id: "507f1f77bcf86cd799439011".into(),
            user: "u1".into(),
            title: "Shopping".into(),
            text: "milk".into(),
            username: None,
            completed: false,
            created_at: "2026-01-01T00:00:00.000Z".into(),
            updated_at: "2026-01-01T00:00:00.000Z".into(),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(value["createdAt"], "2026-01-01T00:00:00.000Z");
        assert_eq!(value["updatedAt"], "2026-01-01T00:00:00.000Z");
        assert!(value.get("username").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn create_req_tolerates_missing_fields() {
        let req: CreateNoteReq = serde_json::from_str(r#"{"title":"Shopping"}"#).unwrap();

        assert_eq!(req.title.as_deref(), Some("Shopping"));
        assert!(req.userid.is_none());
        assert!(req.text.is_none());
    }

    #[test]
    fn confirmation_messages() {
        let created = CreateNoteRes::created("abc", "Shopping");
        assert_eq!(created.message, "New note 'Shopping' created");

        let removed = DeleteNoteRes::removed("507f1f77bcf86cd799439011", "Shopping");
        assert_eq!(
            removed.message,
            "Note Shopping with ID 507f1f77bcf86cd799439011 deleted"
        );
        assert_eq!(removed.title, "Shopping");
    }
}
