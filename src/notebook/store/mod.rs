//! # Storage Layer
//!
//! The [`DataStore`] trait is the durable side of the notebook: it loads the
//! whole [`NoteCollection`] once at startup and writes the whole collection
//! back after every mutation. There is no incremental or append-only write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   - Pretty-printed with a 4-space indent, UTF-8 text left unescaped
//!   - Saving overwrites the file in place (not atomic)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Counts saves, can be told to fail them
//!
//! ## Load never fails
//!
//! A missing file and a file that cannot be read or parsed both load as an
//! empty collection. The file store logs a warning in the second case, since
//! the next save will overwrite whatever was there.

use crate::error::Result;
use crate::model::NoteCollection;

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait DataStore {
    /// Load the full collection, or an empty one if nothing usable is stored.
    fn load(&self) -> NoteCollection;

    /// Replace the stored collection with `notes`.
    fn save(&mut self, notes: &NoteCollection) -> Result<()>;
}
