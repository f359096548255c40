//! The note document and its validated inputs.

use api_shared::dto;
use chrono::{DateTime, SecondsFormat, Utc};
use notes_object_id::ObjectId;
use notes_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// A note as held by the document store.
///
/// `id` and `created_at` never change once the store has assigned them; `updated_at` is
/// refreshed by the store on every replace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: String,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Overwrites every client-editable field.
    pub fn replace_fields(&mut self, fields: NoteFields) {
        self.user = fields.user.into_string();
        self.title = fields.title.into_string();
        self.text = fields.text.into_string();
        self.completed = fields.completed;
        self.username = fields.username.map(NonEmptyText::into_string);
    }
}

/// A validated note that the store has not yet seen.
#[derive(Clone, Debug)]
pub struct NewNote {
    pub user: NonEmptyText,
    pub title: NonEmptyText,
    pub text: NonEmptyText,
    pub username: Option<NonEmptyText>,
}

impl NewNote {
    /// Materialises the document with the identifier and timestamp chosen by a store.
    pub fn into_note(self, id: ObjectId, now: DateTime<Utc>) -> Note {
        Note {
            id,
            user: self.user.into_string(),
            title: self.title.into_string(),
            text: self.text.into_string(),
            username: self.username.map(NonEmptyText::into_string),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The full replacement applied by an update.
#[derive(Clone, Debug)]
pub struct NoteFields {
    pub user: NonEmptyText,
    pub title: NonEmptyText,
    pub text: NonEmptyText,
    pub completed: bool,
    pub username: Option<NonEmptyText>,
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<Note> for dto::NoteRes {
    fn from(note: Note) -> Self {
        dto::NoteRes {
            id: note.id.to_string(),
            user: note.user,
            title: note.title,
            text: note.text,
            username: note.username,
            completed: note.completed,
            created_at: timestamp(&note.created_at),
            updated_at: timestamp(&note.updated_at),
        }
    }
}
