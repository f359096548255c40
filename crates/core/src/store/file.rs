//! File-backed note store.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/notes/
//!   <s1>/
//!     <s2>/
//!       <id>/
//!         note.json
//! ```
//!
//! where `s1`/`s2` come from [`ObjectId::sharded_dir`]. Writes land in a temporary file that is
//! renamed over `note.json`, so readers never observe a half-written document.

use super::{Collation, NoteStore};
use crate::constants::{NOTE_JSON_FILENAME, TEMP_FILE_SUFFIX};
use crate::error::{StoreError, StoreResult};
use crate::model::{NewNote, Note};
use async_trait::async_trait;
use chrono::Utc;
use notes_object_id::ObjectId;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct FileNoteStore {
    notes_dir: PathBuf,
}

impl FileNoteStore {
    /// Opens the store rooted at `notes_dir`, creating the directory if needed.
    pub fn open(notes_dir: PathBuf) -> StoreResult<Self> {
        std::fs::create_dir_all(&notes_dir).map_err(StoreError::StorageDirCreation)?;
        Ok(Self { notes_dir })
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    fn document_path(&self, id: &ObjectId) -> PathBuf {
        id.sharded_dir(&self.notes_dir).join(NOTE_JSON_FILENAME)
    }

    async fn read_document(&self, id: &ObjectId) -> StoreResult<Option<Note>> {
        let bytes = match fs::read(self.document_path(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::FileRead(e)),
        };
        let note = serde_json::from_slice(&bytes).map_err(StoreError::Deserialization)?;
        Ok(Some(note))
    }

    async fn write_document(&self, note: &Note) -> StoreResult<()> {
        let dir = note.id.sharded_dir(&self.notes_dir);
        fs::create_dir_all(&dir)
            .await
            .map_err(StoreError::StorageDirCreation)?;

        let json = serde_json::to_vec_pretty(note).map_err(StoreError::Serialization)?;

        // Unique per write so concurrent replaces of one note never share a temp file.
        let tmp = dir.join(format!(
            "{}.{}{}",
            NOTE_JSON_FILENAME,
            ObjectId::new(),
            TEMP_FILE_SUFFIX
        ));
        let written = match fs::write(&tmp, json).await {
            Ok(()) => fs::rename(&tmp, dir.join(NOTE_JSON_FILENAME)).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::FileWrite(e));
        }
        Ok(())
    }

    /// Removes the two shard directories above a deleted note if they are now empty.
    ///
    /// A shard that still holds other notes fails `remove_dir` and is left alone.
    async fn prune_empty_shards(&self, id: &ObjectId) {
        let mut dir = id.sharded_dir(&self.notes_dir);
        for _ in 0..2 {
            if !dir.pop() || dir == self.notes_dir || fs::remove_dir(&dir).await.is_err() {
                return;
            }
        }
    }

    /// Lists every child directory of `path`. A missing directory yields nothing.
    async fn child_dirs(path: &Path) -> StoreResult<Vec<PathBuf>> {
        let mut entries = match fs::read_dir(path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::FileRead(e)),
        };

        let mut dirs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(StoreError::FileRead)? {
            let is_dir = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            if is_dir {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }
}

#[async_trait]
impl NoteStore for FileNoteStore {
    /// Walks the shard tree. Documents that cannot be read or parsed are logged and skipped so
    /// that one bad file does not hide the rest of the collection.
    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        let mut notes = Vec::new();

        for s1 in Self::child_dirs(&self.notes_dir).await? {
            for s2 in Self::child_dirs(&s1).await? {
                for id_dir in Self::child_dirs(&s2).await? {
                    let doc_path = id_dir.join(NOTE_JSON_FILENAME);
                    let bytes = match fs::read(&doc_path).await {
                        Ok(bytes) => bytes,
                        Err(e) if e.kind() == ErrorKind::NotFound => continue,
                        Err(e) => {
                            tracing::warn!("failed to read note {}: {}", doc_path.display(), e);
                            continue;
                        }
                    };
                    match serde_json::from_slice::<Note>(&bytes) {
                        Ok(note) => notes.push(note),
                        Err(e) => {
                            tracing::warn!("failed to parse note {}: {}", doc_path.display(), e)
                        }
                    }
                }
            }
        }

        notes.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(notes)
    }

    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Note>> {
        self.read_document(id).await
    }

    async fn find_one_by_title(
        &self,
        title: &str,
        collation: Collation,
    ) -> StoreResult<Option<Note>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .find(|n| collation.matches(&n.title, title)))
    }

    async fn create(&self, note: NewNote) -> StoreResult<Note> {
        let note = note.into_note(ObjectId::new(), Utc::now());
        self.write_document(&note).await?;
        tracing::debug!("stored note {}", note.id);
        Ok(note)
    }

    async fn update(&self, mut note: Note) -> StoreResult<Note> {
        let stored = self
            .read_document(&note.id)
            .await?
            .ok_or(StoreError::MissingDocument(note.id))?;

        note.created_at = stored.created_at;
        note.updated_at = Utc::now();
        self.write_document(&note).await?;
        Ok(note)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<Option<Note>> {
        let Some(note) = self.read_document(id).await? else {
            return Ok(None);
        };

        fs::remove_dir_all(id.sharded_dir(&self.notes_dir))
            .await
            .map_err(StoreError::FileRemove)?;
        self.prune_empty_shards(id).await;
        Ok(Some(note))
    }
}
