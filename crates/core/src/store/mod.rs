//! Note repository accessor.
//!
//! [`NoteStore`] is the document-store seam: one collection of notes keyed by [`ObjectId`], with
//! whole-document reads and writes. [`NotesService`](crate::NotesService) receives the store as
//! an `Arc<dyn NoteStore>`, so tests and tooling can swap the backend freely.
//!
//! Two backends ship with the crate:
//! - [`InMemoryNoteStore`] for tests and throwaway instances
//! - [`FileNoteStore`] persisting one JSON document per note under the data directory

mod file;
mod memory;

pub use file::FileNoteStore;
pub use memory::InMemoryNoteStore;

use crate::config::{CoreConfig, StoreKind};
use crate::error::StoreResult;
use crate::model::{NewNote, Note};
use async_trait::async_trait;
use notes_object_id::ObjectId;
use std::sync::Arc;

/// String comparison rule for filtered lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collation {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after Unicode lowercasing; `"Shopping"` matches `"SHOPPING"`.
    CaseInsensitive,
}

impl Collation {
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Collation::Exact => a == b,
            Collation::CaseInsensitive => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// A collection of note documents.
///
/// Every method is a single round trip. Implementations do not enforce title uniqueness.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Returns every note in the store's natural (insertion) order.
    async fn find_all(&self) -> StoreResult<Vec<Note>>;

    /// Returns the note with `id`, if any.
    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Note>>;

    /// Returns the first note, in natural order, whose title matches under `collation`.
    async fn find_one_by_title(&self, title: &str, collation: Collation)
        -> StoreResult<Option<Note>>;

    /// Inserts a note, assigning its identifier and timestamps.
    async fn create(&self, note: NewNote) -> StoreResult<Note>;

    /// Replaces the stored document with the same id.
    ///
    /// `created_at` is kept from the stored document and `updated_at` is refreshed. Fails with
    /// [`StoreError::MissingDocument`](crate::StoreError::MissingDocument) if there is nothing
    /// to replace.
    async fn update(&self, note: Note) -> StoreResult<Note>;

    /// Removes the note with `id`, returning the removed document.
    async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<Option<Note>>;
}

/// Builds the store selected by `cfg`.
///
/// The file store's directory is created here, so a bad data directory fails at startup rather
/// than on the first request.
pub fn open_store(cfg: &CoreConfig) -> StoreResult<Arc<dyn NoteStore>> {
    match cfg.store_kind() {
        StoreKind::Memory => Ok(Arc::new(InMemoryNoteStore::new())),
        StoreKind::File => Ok(Arc::new(FileNoteStore::open(cfg.notes_dir())?)),
    }
}
