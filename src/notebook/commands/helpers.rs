use crate::error::{NotebookError, Result};
use crate::index::{resolve, DisplayNote, Position};
use crate::model::NoteCollection;
use crate::store::DataStore;

/// Writes the whole collection back.
pub fn persist<S: DataStore>(store: &mut S, notes: &NoteCollection) -> Result<()> {
    store.save(notes).inspect_err(|e| {
        log::error!("saving {} notes failed: {}", notes.len(), e);
    })
}

/// Trims required input, rejecting it when nothing is left.
pub fn required(raw: &str, field: &'static str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NotebookError::EmptyInput(field));
    }
    Ok(trimmed.to_string())
}

/// Resolves `position` and clones the note it points at.
pub fn note_at(notes: &NoteCollection, position: Position) -> Result<DisplayNote> {
    let slot = resolve(position, notes.len())?;
    let note = notes
        .get(slot)
        .cloned()
        .ok_or(NotebookError::OutOfRange {
            position: position.get(),
            len: notes.len(),
        })?;
    Ok(DisplayNote { position, note })
}
