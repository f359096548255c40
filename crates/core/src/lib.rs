//! # Notes Core
//!
//! Core business logic for the notes service.
//!
//! This crate contains the data operations:
//! - The [`Note`] document and its validated inputs
//! - The [`NoteStore`] repository interface with in-memory and file-backed implementations
//! - [`NotesService`], which validates requests and orchestrates the store
//! - Startup configuration ([`CoreConfig`])
//!
//! **No API concerns**: HTTP routing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use config::{CoreConfig, StoreKind};
pub use constants::DEFAULT_NOTES_DATA_DIR;
pub use error::{NotesError, NotesResult, StoreError, StoreResult};
pub use model::{NewNote, Note, NoteFields};
pub use notes_object_id::ObjectId;
pub use notes_types::{NonEmptyText, TextError};
pub use service::NotesService;
pub use store::{open_store, Collation, FileNoteStore, InMemoryNoteStore, NoteStore};
