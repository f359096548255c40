//! Notes request handling.
//!
//! [`NotesService`] holds the logic behind every notes endpoint: identifier validation, required
//! field checks, case-insensitive title uniqueness and the full-overwrite update. It returns
//! domain values or a [`NotesError`]; turning those into HTTP responses belongs to `api-rest`.
//!
//! Title uniqueness is checked with a read before the write. Two concurrent requests for the same
//! title can both pass the check; the store does not enforce uniqueness.

use crate::config::CoreConfig;
use crate::error::{NotesError, NotesResult};
use crate::model::{NewNote, Note, NoteFields};
use crate::store::{Collation, NoteStore};
use api_shared::dto::{CreateNoteReq, UpdateNoteReq};
use notes_object_id::ObjectId;
use notes_types::NonEmptyText;
use std::sync::Arc;

/// Service for the notes collection.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct NotesService {
    cfg: Arc<CoreConfig>,
    store: Arc<dyn NoteStore>,
}

/// Collects required fields, remembering which ones are missing or blank.
struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    fn new() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    fn text(&mut self, name: &'static str, value: Option<String>) -> Option<NonEmptyText> {
        let text = NonEmptyText::from_optional(value);
        if text.is_none() {
            self.missing.push(name);
        }
        text
    }

    fn flag(&mut self, name: &'static str, value: Option<bool>) -> Option<bool> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    fn into_error(self) -> NotesError {
        NotesError::MissingFields(self.missing)
    }
}

impl NotesService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<dyn NoteStore>) -> Self {
        Self { cfg, store }
    }

    /// Lists every note in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::NoNotes`] for an empty collection unless the configuration
    /// disables that behaviour, and [`NotesError::Store`] if the store fails.
    pub async fn list(&self) -> NotesResult<Vec<Note>> {
        let notes = self.store.find_all().await?;
        if notes.is_empty() && self.cfg.empty_list_is_error() {
            return Err(NotesError::NoNotes);
        }
        Ok(notes)
    }

    /// Fetches one note.
    ///
    /// The identifier is validated before the store is consulted.
    pub async fn get(&self, id: &str) -> NotesResult<Note> {
        let id = ObjectId::parse(id)?;
        self.store
            .find_by_id(&id)
            .await?
            .ok_or(NotesError::NotFound(id))
    }

    /// Creates a note with `completed = false`.
    ///
    /// # Errors
    ///
    /// - [`NotesError::MissingFields`] if `userid`, `title` or `text` is absent or blank
    /// - [`NotesError::DuplicateTitle`] if any note already has the title, ignoring case
    /// - [`NotesError::Store`] if the insert fails
    pub async fn create(&self, req: CreateNoteReq) -> NotesResult<Note> {
        let mut required = Required::new();
        let user = required.text("userid", req.userid);
        let title = required.text("title", req.title);
        let text = required.text("text", req.text);
        let (Some(user), Some(title), Some(text)) = (user, title, text) else {
            return Err(required.into_error());
        };

        if self
            .store
            .find_one_by_title(title.as_str(), Collation::CaseInsensitive)
            .await?
            .is_some()
        {
            tracing::warn!("rejected duplicate note title '{}'", title);
            return Err(NotesError::DuplicateTitle(title.into_string()));
        }

        let note = self
            .store
            .create(NewNote {
                user,
                title,
                text,
                username: NonEmptyText::from_optional(req.username),
            })
            .await?;

        tracing::info!("created note {} '{}'", note.id, note.title);
        Ok(note)
    }

    /// Overwrites every field of an existing note.
    ///
    /// An absent `username` clears the stored one. The note may keep its own title, in any
    /// casing.
    ///
    /// # Errors
    ///
    /// - [`NotesError::MalformedId`] before any store access if `id` is not an identifier
    /// - [`NotesError::NotFound`] if no note has that id
    /// - [`NotesError::MissingFields`] if `user`, `title`, `text` or `completed` is absent
    /// - [`NotesError::TitleConflict`] if a different note holds the title, ignoring case
    /// - [`NotesError::Store`] if the replace fails
    pub async fn update(&self, id: &str, req: UpdateNoteReq) -> NotesResult<Note> {
        let id = ObjectId::parse(id)?;
        let mut note = self
            .store
            .find_by_id(&id)
            .await?
            .ok_or(NotesError::NotFound(id))?;

        let mut required = Required::new();
        let user = required.text("user", req.user);
        let title = required.text("title", req.title);
        let text = required.text("text", req.text);
        let completed = required.flag("completed", req.completed);
        let (Some(user), Some(title), Some(text), Some(completed)) = (user, title, text, completed)
        else {
            return Err(required.into_error());
        };

        if let Some(duplicate) = self
            .store
            .find_one_by_title(title.as_str(), Collation::CaseInsensitive)
            .await?
        {
            if duplicate.id != id {
                tracing::warn!(
                    "rejected rename of note {} to '{}' held by {}",
                    id,
                    title,
                    duplicate.id
                );
                return Err(NotesError::TitleConflict(title.into_string()));
            }
        }

        note.replace_fields(NoteFields {
            user,
            title,
            text,
            completed,
            username: NonEmptyText::from_optional(req.username),
        });

        let updated = self.store.update(note).await?;
        tracing::info!("updated note {}", updated.id);
        Ok(updated)
    }

    /// Permanently removes a note, returning it.
    pub async fn delete(&self, id: &str) -> NotesResult<Note> {
        let id = ObjectId::parse(id)?;
        let removed = self
            .store
            .delete_by_id(&id)
            .await?
            .ok_or(NotesError::NotFound(id))?;

        tracing::info!("deleted note {} '{}'", removed.id, removed.title);
        Ok(removed)
    }
}
