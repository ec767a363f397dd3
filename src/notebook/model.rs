use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Creation timestamps are stored as text in this format, e.g. `2024-03-01 09:15`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
    // Older files may lack these two fields
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: String,
}

impl Note {
    pub fn new(title: String, content: String, tags: Vec<String>) -> Self {
        Self::created_at(title, content, tags, Local::now())
    }

    pub fn created_at(
        title: String,
        content: String,
        tags: Vec<String>,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            title,
            content,
            tags,
            date: at.format(DATE_FORMAT).to_string(),
        }
    }

    /// Case-insensitive exact match against one of the note's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match against title or content.
    /// `needle_lower` must already be lowercased.
    pub fn contains_text(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

/// Splits comma-separated tag input. Blank tokens are dropped; order and
/// duplicates are kept as typed.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// The ordered set of notes. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Appends at the end; notes are never inserted elsewhere.
    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn get(&self, slot: usize) -> Option<&Note> {
        self.notes.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Note> {
        self.notes.get_mut(slot)
    }

    /// Removes the note at `slot`, shifting later notes down by one.
    pub fn remove(&mut self, slot: usize) -> Note {
        self.notes.remove(slot)
    }

    /// Puts `note` back at `slot`, shifting later notes up by one.
    pub fn insert(&mut self, slot: usize, note: Note) {
        self.notes.insert(slot, note);
    }

    pub fn pop(&mut self) -> Option<Note> {
        self.notes.pop()
    }

    pub fn last(&self) -> Option<&Note> {
        self.notes.last()
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
