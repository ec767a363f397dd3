use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::index::{resolve, DisplayNote, Position};
use crate::model::NoteCollection;
use crate::store::DataStore;

use super::helpers::{note_at, persist};

/// Removes the note at `position` once `confirm` agrees. Later notes move up
/// one position. Declining leaves everything untouched.
pub fn run<S, F>(
    store: &mut S,
    notes: &mut NoteCollection,
    position: Position,
    confirm: F,
) -> Result<CmdResult>
where
    S: DataStore,
    F: FnOnce(&DisplayNote) -> bool,
{
    let target = note_at(notes, position)?;

    if !confirm(&target) {
        return Ok(CmdResult::default()
            .with_outcome(Outcome::Cancelled)
            .with_message(CmdMessage::info("Delete cancelled.")));
    }

    let slot = resolve(position, notes.len())?;
    let removed = notes.remove(slot);
    if let Err(e) = persist(store, notes) {
        notes.insert(slot, removed);
        return Err(e);
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Note deleted: {}",
            removed.title
        )))
        .with_affected_notes(vec![DisplayNote {
            position,
            note: removed,
        }]))
}

/// Reads a yes/no answer. Only `y` or `yes` (any case) count as yes.
pub fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
