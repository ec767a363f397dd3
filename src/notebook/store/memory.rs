use super::DataStore;
use crate::error::{NotebookError, Result};
use crate::model::NoteCollection;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: NoteCollection,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `notes` already stored, as if loaded from an earlier run.
    pub fn with_notes(notes: NoteCollection) -> Self {
        Self {
            saved: notes,
            ..Self::default()
        }
    }

    /// A store whose saves always fail, like a full disk.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// The collection as of the last successful save.
    pub fn saved(&self) -> &NoteCollection {
        &self.saved
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> NoteCollection {
        self.saved.clone()
    }

    fn save(&mut self, notes: &NoteCollection) -> Result<()> {
        if self.fail_saves {
            return Err(NotebookError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        self.saved = notes.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Note;

    pub fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        Note {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            date: "2024-01-15 09:30".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub notes: NoteCollection,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                notes: NoteCollection::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self.notes.push(note(&title, &content, &[]));
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str, tags: &[&str]) -> Self {
            self.notes.push(note(title, content, tags));
            self
        }

        /// Groceries (home) and Report (work).
        pub fn two_notes() -> Self {
            Self::new()
                .with_note("Groceries", "milk eggs", &["home"])
                .with_note("Report", "quarterly numbers", &["work"])
        }
    }
}
