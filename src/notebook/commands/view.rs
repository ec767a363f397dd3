use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::Position;
use crate::model::NoteCollection;

use super::helpers::note_at;

pub fn run(notes: &NoteCollection, position: Position) -> Result<CmdResult> {
    let note = note_at(notes, position)?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotebookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_note_at_position() {
        let fx = StoreFixture::two_notes();
        let result = run(&fx.notes, Position::new(2)).unwrap();
        assert_eq!(result.listed_notes[0].note.title, "Report");
    }

    #[test]
    fn empty_collection_is_out_of_range() {
        let fx = StoreFixture::new();
        assert!(matches!(
            run(&fx.notes, Position::new(1)),
            Err(NotebookError::OutOfRange { position: 1, len: 0 })
        ));
    }
}
