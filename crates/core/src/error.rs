use notes_object_id::{IdError, ObjectId};

/// Failures raised by a [`NoteStore`](crate::store::NoteStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write note file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read note file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove note directory: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize note: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize note: {0}")]
    Deserialization(serde_json::Error),
    #[error("no note document with id {0}")]
    MissingDocument(ObjectId),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by [`NotesService`](crate::NotesService) operations.
///
/// Each variant corresponds to exactly one client-visible outcome; the HTTP layer maps them to
/// status codes without inspecting messages.
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("malformed note id: {0}")]
    MalformedId(#[from] IdError),
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("a note titled '{0}' already exists")]
    DuplicateTitle(String),
    #[error("another note is already titled '{0}'")]
    TitleConflict(String),
    #[error("no notes found")]
    NoNotes,
    #[error("note {0} not found")]
    NotFound(ObjectId),
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type NotesResult<T> = std::result::Result<T, NotesError>;
