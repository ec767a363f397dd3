use crate::commands::{CmdMessage, CmdResult, NoteUpdate};
use crate::error::{NotebookError, Result};
use crate::index::{resolve, DisplayNote, Position};
use crate::model::NoteCollection;
use crate::store::DataStore;

use super::helpers::persist;

/// Applies `update` to the note at `position`. The creation date is never
/// touched. The collection is saved even when nothing changed.
pub fn run<S: DataStore>(
    store: &mut S,
    notes: &mut NoteCollection,
    position: Position,
    update: NoteUpdate,
) -> Result<CmdResult> {
    let slot = resolve(position, notes.len())?;
    let len = notes.len();
    let note = notes.get_mut(slot).ok_or(NotebookError::OutOfRange {
        position: position.get(),
        len,
    })?;
    let original = note.clone();

    if let Some(title) = update.title {
        // A title is never blanked out
        if !title.trim().is_empty() {
            note.title = title.trim().to_string();
        }
    }
    if let Some(content) = update.content {
        if !content.trim().is_empty() {
            note.content = content.trim().to_string();
        }
    }
    if let Some(tags) = update.tags {
        note.tags = tags;
    }
    let edited = note.clone();

    if let Err(e) = persist(store, notes) {
        if let Some(note) = notes.get_mut(slot) {
            *note = original;
        }
        return Err(e);
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::success("The note is updated!"))
        .with_affected_notes(vec![DisplayNote {
            position,
            note: edited,
        }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn replaces_supplied_fields_only() {
        let mut fx = StoreFixture::two_notes();
        let update = NoteUpdate::from_raw("Shopping", "", "");
        run(&mut fx.store, &mut fx.notes, Position::new(1), update).unwrap();

        let note = fx.notes.get(0).unwrap();
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.content, "milk eggs");
        assert_eq!(note.tags, vec!["home"]);
    }

    #[test]
    fn replaces_tags_and_content() {
        let mut fx = StoreFixture::two_notes();
        let update = NoteUpdate::from_raw("", "annual numbers", "work, finance");
        run(&mut fx.store, &mut fx.notes, Position::new(2), update).unwrap();

        let note = fx.notes.get(1).unwrap();
        assert_eq!(note.title, "Report");
        assert_eq!(note.content, "annual numbers");
        assert_eq!(note.tags, vec!["work", "finance"]);
    }

    #[test]
    fn date_is_never_modified() {
        let mut fx = StoreFixture::two_notes();
        let before = fx.notes.get(0).unwrap().date.clone();
        let update = NoteUpdate::from_raw("X", "Y", "z");
        run(&mut fx.store, &mut fx.notes, Position::new(1), update).unwrap();
        assert_eq!(fx.notes.get(0).unwrap().date, before);
    }

    #[test]
    fn blank_update_is_identity_but_still_saves() {
        let mut fx = StoreFixture::two_notes();
        let before = fx.notes.clone();

        run(
            &mut fx.store,
            &mut fx.notes,
            Position::new(2),
            NoteUpdate::from_raw("", "", ""),
        )
        .unwrap();

        assert_eq!(fx.notes, before);
        assert_eq!(fx.store.save_count(), 1);
        assert_eq!(fx.store.saved(), &before);
    }

    #[test]
    fn blank_title_in_update_is_ignored() {
        let mut fx = StoreFixture::two_notes();
        let update = NoteUpdate {
            title: Some("   ".into()),
            ..NoteUpdate::default()
        };
        run(&mut fx.store, &mut fx.notes, Position::new(1), update).unwrap();
        assert_eq!(fx.notes.get(0).unwrap().title, "Groceries");
    }

    #[test]
    fn blank_content_in_update_is_ignored() {
        let mut fx = StoreFixture::two_notes();
        let update = NoteUpdate {
            content: Some("   ".into()),
            ..NoteUpdate::default()
        };
        run(&mut fx.store, &mut fx.notes, Position::new(1), update).unwrap();
        assert_eq!(fx.notes.get(0).unwrap().content, "milk eggs");
    }

    #[test]
    fn content_in_update_is_trimmed() {
        let mut fx = StoreFixture::two_notes();
        let update = NoteUpdate {
            content: Some("  bread  ".into()),
            ..NoteUpdate::default()
        };
        run(&mut fx.store, &mut fx.notes, Position::new(1), update).unwrap();
        assert_eq!(fx.notes.get(0).unwrap().content, "bread");
    }

    #[test]
    fn out_of_range_is_rejected_without_saving() {
        let mut fx = StoreFixture::two_notes();
        let err = run(
            &mut fx.store,
            &mut fx.notes,
            Position::new(3),
            NoteUpdate::from_raw("X", "", ""),
        )
        .unwrap_err();

        assert!(matches!(err, NotebookError::OutOfRange { position: 3, len: 2 }));
        assert_eq!(fx.store.save_count(), 0);
    }

    #[test]
    fn surfaces_save_failure() {
        let fx = StoreFixture::two_notes();
        let mut notes = fx.notes;
        let mut store = InMemoryStore::failing();
        let err = run(
            &mut store,
            &mut notes,
            Position::new(1),
            NoteUpdate::from_raw("X", "", ""),
        )
        .unwrap_err();
        assert!(!err.is_validation());
    }

    #[test]
    fn failed_save_restores_the_note() {
        let fx = StoreFixture::two_notes();
        let mut notes = fx.notes;
        let before = notes.clone();
        let mut store = InMemoryStore::failing();

        run(
            &mut store,
            &mut notes,
            Position::new(2),
            NoteUpdate::from_raw("Renamed", "new body", "a, b"),
        )
        .unwrap_err();
        assert_eq!(notes, before);
    }
}
