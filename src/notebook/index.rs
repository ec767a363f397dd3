//! # Positions
//!
//! A note has no identifier of its own: the user refers to it by its 1-based
//! position in the collection, the same number shown next to it in listings.
//! Positions are **not stable** across deletions. Removing note `k` shifts
//! every later note down by one, so callers must re-resolve after any mutation.
//!
//! All position handling goes through this module: [`Position::parse`] turns
//! raw input into a [`Position`], and [`resolve`] checks it against the
//! collection and yields the zero-based slot. Swapping in stable ids later
//! only touches this file.

use crate::error::{NotebookError, Result};
use crate::model::{Note, NoteCollection};
use std::num::IntErrorKind;
use std::str::FromStr;

/// A user-facing, 1-based note number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Parses raw user input, mapping anything non-numeric to
    /// [`NotebookError::InvalidPosition`].
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse()
            .map_err(|_| NotebookError::InvalidPosition(raw.trim().to_string()))
    }

    fn from_slot(slot: usize) -> Self {
        Self(slot + 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) => Ok(Position(n)),
            // Too big to be any note, but still a number
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Position(usize::MAX)),
            Err(_) => Err(format!("Invalid note number: {}", s)),
        }
    }
}

/// Checks `position` against a collection of `len` notes and returns the
/// zero-based slot it refers to.
pub fn resolve(position: Position, len: usize) -> Result<usize> {
    if position.0 == 0 || position.0 > len {
        return Err(NotebookError::OutOfRange {
            position: position.0,
            len,
        });
    }
    Ok(position.0 - 1)
}

/// Parses and resolves in one step.
pub fn resolve_raw(raw: &str, notes: &NoteCollection) -> Result<(Position, usize)> {
    let position = Position::parse(raw)?;
    let slot = resolve(position, notes.len())?;
    Ok((position, slot))
}

/// A note paired with the position it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub position: Position,
    pub note: Note,
}

/// Pairs every note with its position, in collection order.
pub fn index_notes(notes: &NoteCollection) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(slot, note)| DisplayNote {
            position: Position::from_slot(slot),
            note: note.clone(),
        })
        .collect()
}

/// Like [`index_notes`], keeping only the notes that satisfy `keep`.
/// Positions still refer to the whole collection.
pub fn index_matching<F>(notes: &NoteCollection, keep: F) -> Vec<DisplayNote>
where
    F: Fn(&Note) -> bool,
{
    notes
        .iter()
        .enumerate()
        .filter(|(_, note)| keep(note))
        .map(|(slot, note)| DisplayNote {
            position: Position::from_slot(slot),
            note: note.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(titles: &[&str]) -> NoteCollection {
        titles
            .iter()
            .map(|t| Note::new(t.to_string(), String::new(), vec![]))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_parsing() {
        assert_eq!(Position::parse("1").unwrap(), Position::new(1));
        assert_eq!(Position::parse(" 42 ").unwrap(), Position::new(42));

        assert!(matches!(
            Position::parse(""),
            Err(NotebookError::InvalidPosition(_))
        ));
        assert!(matches!(
            Position::parse("abc"),
            Err(NotebookError::InvalidPosition(_))
        ));
        assert!(matches!(
            Position::parse("-1"),
            Err(NotebookError::InvalidPosition(_))
        ));
        assert!(matches!(
            Position::parse("1.5"),
            Err(NotebookError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_resolve_bounds() {
        assert_eq!(resolve(Position::new(1), 3).unwrap(), 0);
        assert_eq!(resolve(Position::new(3), 3).unwrap(), 2);

        assert!(matches!(
            resolve(Position::new(0), 3),
            Err(NotebookError::OutOfRange { position: 0, len: 3 })
        ));
        assert!(matches!(
            resolve(Position::new(4), 3),
            Err(NotebookError::OutOfRange { position: 4, len: 3 })
        ));
        assert!(resolve(Position::new(1), 0).is_err());
    }

    #[test]
    fn test_huge_number_is_out_of_range() {
        let notes = collection(&["A"]);
        assert!(matches!(
            resolve_raw("99999999999999999999999", &notes),
            Err(NotebookError::OutOfRange { len: 1, .. })
        ));
    }

    #[test]
    fn test_index_notes_is_one_based_in_order() {
        let notes = collection(&["A", "B", "C"]);
        let indexed = index_notes(&notes);

        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed[0].position, Position::new(1));
        assert_eq!(indexed[0].note.title, "A");
        assert_eq!(indexed[2].position, Position::new(3));
        assert_eq!(indexed[2].note.title, "C");
    }

    #[test]
    fn test_index_matching_keeps_original_positions() {
        let notes = collection(&["keep", "skip", "keep too"]);
        let indexed = index_matching(&notes, |n| n.title.starts_with("keep"));

        let positions: Vec<_> = indexed.iter().map(|dp| dp.position.get()).collect();
        assert_eq!(positions, vec![1, 3]);
    }
}
