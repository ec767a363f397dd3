use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayNote, Position};
use crate::model::{parse_tags, Note, NoteCollection};
use crate::store::DataStore;

use super::helpers::{persist, required};

pub fn run<S: DataStore>(
    store: &mut S,
    notes: &mut NoteCollection,
    title: &str,
    content: &str,
    tags: &str,
) -> Result<CmdResult> {
    let title = required(title, "Title")?;
    let note = Note::new(title, content.trim().to_string(), parse_tags(tags));

    notes.push(note.clone());
    if let Err(e) = persist(store, notes) {
        notes.pop();
        return Err(e);
    }

    // Appended, so it always lands last
    let display = DisplayNote {
        position: Position::new(notes.len()),
        note,
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Note added successfully!"))
        .with_affected_notes(vec![display]))
}
