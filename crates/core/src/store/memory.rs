use super::{Collation, NoteStore};
use crate::error::{StoreError, StoreResult};
use crate::model::{NewNote, Note};
use async_trait::async_trait;
use chrono::Utc;
use notes_object_id::ObjectId;
use parking_lot::RwLock;

/// In-memory note store (for development/testing).
///
/// Documents live in a vector so that listing returns them in insertion order.
pub struct InMemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        Ok(self.notes.read().clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Note>> {
        Ok(self.notes.read().iter().find(|n| n.id == *id).cloned())
    }

    async fn find_one_by_title(
        &self,
        title: &str,
        collation: Collation,
    ) -> StoreResult<Option<Note>> {
        Ok(self
            .notes
            .read()
            .iter()
            .find(|n| collation.matches(&n.title, title))
            .cloned())
    }

    async fn create(&self, note: NewNote) -> StoreResult<Note> {
        let note = note.into_note(ObjectId::new(), Utc::now());
        self.notes.write().push(note.clone());
        Ok(note)
    }

    async fn update(&self, mut note: Note) -> StoreResult<Note> {
        let mut notes = self.notes.write();
        let stored = notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or(StoreError::MissingDocument(note.id))?;

        note.created_at = stored.created_at;
        note.updated_at = Utc::now();
        *stored = note.clone();
        Ok(note)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> StoreResult<Option<Note>> {
        let mut notes = self.notes.write();
        Ok(notes
            .iter()
            .position(|n| n.id == *id)
            .map(|idx| notes.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_types::NonEmptyText;

    fn new_note(title: &str) -> NewNote {
        NewNote {
            user: NonEmptyText::new("u1").unwrap(),
            title: NonEmptyText::new(title).unwrap(),
            text: NonEmptyText::new("text").unwrap(),
            username: None,
        }
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryNoteStore::new();
        for title in ["b", "a", "c"] {
            store.create(new_note(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_find_one_by_title_respects_collation() {
        let store = InMemoryNoteStore::new();
        let created = store.create(new_note("Shopping")).await.unwrap();

        let exact = store
            .find_one_by_title("shopping", Collation::Exact)
            .await
            .unwrap();
        assert!(exact.is_none());

        let folded = store
            .find_one_by_title("shopping", Collation::CaseInsensitive)
            .await
            .unwrap();
        assert_eq!(folded.map(|n| n.id), Some(created.id));
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let store = InMemoryNoteStore::new();
        let created = store.create(new_note("Shopping")).await.unwrap();

        let mut edited = created.clone();
        edited.title = "Groceries".into();
        edited.created_at = Utc::now() + chrono::Duration::days(1);

        let updated = store.update(edited).await.unwrap();
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let stored = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Groceries");
    }

    #[tokio::test]
    async fn test_update_missing_document_fails() {
        let store = InMemoryNoteStore::new();
        let ghost = new_note("Ghost").into_note(ObjectId::new(), Utc::now());

        let err = store.update(ghost).await.expect_err("should fail");
        assert!(matches!(err, StoreError::MissingDocument(_)));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_document() {
        let store = InMemoryNoteStore::new();
        let created = store.create(new_note("Shopping")).await.unwrap();

        let removed = store.delete_by_id(&created.id).await.unwrap();
        assert_eq!(removed.map(|n| n.title), Some("Shopping".to_string()));

        assert!(store.delete_by_id(&created.id).await.unwrap().is_none());
        assert!(store.find_by_id(&created.id).await.unwrap().is_none());
    }
}
