//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every notebook operation, whatever the UI.
//!
//! `NotebookApi` owns the store and the [`NoteCollection`] loaded from it at
//! construction. There is no global state: a dispatcher builds one api value
//! per run and passes raw user strings in.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: No stdout, stderr, or prompting
//! - **Presentation**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! - Production: `NotebookApi<FileStore>`
//! - Testing: `NotebookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::{DisplayNote, Position};
use crate::model::NoteCollection;
use crate::store::DataStore;

pub struct NotebookApi<S: DataStore> {
    store: S,
    notes: NoteCollection,
    paths: commands::NotebookPaths,
}

impl<S: DataStore> NotebookApi<S> {
    /// Loads the collection from `store`.
    pub fn new(store: S, paths: commands::NotebookPaths) -> Self {
        let notes = store.load();
        Self {
            store,
            notes,
            paths,
        }
    }

    pub fn add_note(
        &mut self,
        title: &str,
        content: &str,
        tags: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.notes, title, content, tags)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.notes)
    }

    pub fn search_notes(&self, text: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.notes, text)
    }

    /// Validates the note number picked after a search.
    pub fn search_follow_up(&self, raw_position: &str) -> Result<Position> {
        commands::search::follow_up_position(&self.notes, raw_position)
    }

    pub fn filter_by_tag(&self, tag: &str) -> Result<commands::CmdResult> {
        commands::tags::filter(&self.notes, tag)
    }

    pub fn list_tags(&self) -> Result<commands::CmdResult> {
        commands::tags::list(&self.notes)
    }

    /// Parses and validates a raw note number.
    pub fn position(&self, raw: &str) -> Result<Position> {
        let position = Position::parse(raw)?;
        crate::index::resolve(position, self.notes.len())?;
        Ok(position)
    }

    pub fn view_note(&self, position: Position) -> Result<commands::CmdResult> {
        commands::view::run(&self.notes, position)
    }

    /// The note at `position`, for showing current values before an edit.
    pub fn note(&self, position: Position) -> Result<DisplayNote> {
        commands::helpers::note_at(&self.notes, position)
    }

    pub fn edit_note(
        &mut self,
        position: Position,
        update: commands::NoteUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.notes, position, update)
    }

    pub fn delete_note<F>(&mut self, position: Position, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&DisplayNote) -> bool,
    {
        commands::delete::run(&mut self.store, &mut self.notes, position, confirm)
    }

    /// Final save, e.g. on exit.
    pub fn save(&mut self) -> Result<()> {
        commands::helpers::persist(&mut self.store, &self.notes)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::FollowUp;
pub use commands::delete::is_confirmed;
pub use commands::{
    CmdMessage, CmdResult, MessageLevel, NotebookPaths, NoteUpdate, Outcome, TagCount,
};
