use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::index::index_notes;
use crate::model::NoteCollection;

pub fn run(notes: &NoteCollection) -> Result<CmdResult> {
    if notes.is_empty() {
        return Ok(CmdResult::default()
            .with_outcome(Outcome::NothingToShow)
            .with_message(CmdMessage::info("No notes yet.")));
    }

    Ok(CmdResult::default().with_listed_notes(index_notes(notes)))
}
