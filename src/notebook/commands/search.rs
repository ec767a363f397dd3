use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::index::{index_matching, resolve_raw, Position};
use crate::model::NoteCollection;

use super::helpers::required;

/// Case-insensitive substring search over titles and contents. Matches come
/// back in collection order, unranked.
pub fn run(notes: &NoteCollection, text: &str) -> Result<CmdResult> {
    let needle = required(text, "Search text")?.to_lowercase();
    let matches = index_matching(notes, |note| note.contains_text(&needle));

    if matches.is_empty() {
        return Ok(CmdResult::default()
            .with_outcome(Outcome::NothingToShow)
            .with_message(CmdMessage::info("No matching notes were found.")));
    }

    let found = format!("{} result(s) found", matches.len());
    Ok(CmdResult::default()
        .with_listed_notes(matches)
        .with_message(CmdMessage::info(found)))
}

/// What the user may do with a note after a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Edit,
    Delete,
}

impl FollowUp {
    /// `edit` or `delete`, any case. Anything else means "no follow-up".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "edit" => Some(FollowUp::Edit),
            "delete" => Some(FollowUp::Delete),
            _ => None,
        }
    }
}

/// Validates the note number picked after a search. The bound is the whole
/// collection, not the match list, so any listed position is accepted.
pub fn follow_up_position(notes: &NoteCollection, raw: &str) -> Result<Position> {
    resolve_raw(raw, notes).map(|(position, _)| position)
}
