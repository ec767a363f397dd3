use crate::commands::{CmdMessage, CmdResult, Outcome, TagCount};
use crate::error::Result;
use crate::index::index_matching;
use crate::model::NoteCollection;

use super::helpers::required;

/// Notes carrying `tag`, compared whole and case-insensitively.
pub fn filter(notes: &NoteCollection, tag: &str) -> Result<CmdResult> {
    let tag = required(tag, "Tag")?;
    let matches = index_matching(notes, |note| note.has_tag(&tag));

    if matches.is_empty() {
        return Ok(CmdResult::default()
            .with_outcome(Outcome::NothingToShow)
            .with_message(CmdMessage::info("No notes matched the selected tag.")));
    }

    let found = format!("{} note(s) found for tag '{}'", matches.len(), tag.to_lowercase());
    Ok(CmdResult::default()
        .with_listed_notes(matches)
        .with_message(CmdMessage::info(found)))
}

/// Every tag in use with its note count. Tags differing only in case are
/// counted together under the first spelling seen.
pub fn list(notes: &NoteCollection) -> Result<CmdResult> {
    let mut counts: Vec<TagCount> = Vec::new();

    for note in notes {
        let mut seen_here: Vec<String> = Vec::new();
        for tag in &note.tags {
            let key = tag.to_lowercase();
            if seen_here.contains(&key) {
                continue;
            }
            seen_here.push(key.clone());

            match counts.iter_mut().find(|tc| tc.tag.to_lowercase() == key) {
                Some(tc) => tc.count += 1,
                None => counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    if counts.is_empty() {
        return Ok(CmdResult::default()
            .with_outcome(Outcome::NothingToShow)
            .with_message(CmdMessage::info("No tags in use.")));
    }

    Ok(CmdResult::default().with_tags(counts))
}
