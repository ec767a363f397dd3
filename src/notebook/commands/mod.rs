//! # Command Layer
//!
//! One module per repository operation. Each command takes the loaded
//! [`NoteCollection`], raw user strings where the user typed something, and
//! (for mutations) the [`DataStore`](crate::store::DataStore) to persist
//! through. It returns a [`CmdResult`] describing what happened; rendering is
//! left to the caller.
//!
//! Mutating commands change the collection in place and then save the whole
//! collection. A failed save is returned as an error and the change is rolled
//! back, so the collection always matches what was last written.

use crate::config::NotebookConfig;
use crate::index::DisplayNote;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod tags;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct NotebookPaths {
    pub config_dir: PathBuf,
    pub notes_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// How a command ended, for UIs that need more than the message list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Done,
    /// Valid request, but there is nothing to display (no notes, no matches).
    NothingToShow,
    /// The user declined a confirmation. Not an error.
    Cancelled,
}

/// A tag and how many notes carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub listed_notes: Vec<DisplayNote>,
    pub affected_notes: Vec<DisplayNote>,
    pub tags: Vec<TagCount>,
    pub config: Option<NotebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagCount>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_config(mut self, config: NotebookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn nothing_to_show(&self) -> bool {
        self.outcome == Outcome::NothingToShow
    }

    pub fn cancelled(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }
}

/// Per-field replacement values for an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NoteUpdate {
    /// Builds an update from raw prompt answers. Blank input keeps the field,
    /// so tags can't be cleared by leaving the answer empty.
    pub fn from_raw(title: &str, content: &str, tags: &str) -> Self {
        Self {
            title: non_blank(title),
            content: non_blank(content),
            tags: non_blank(tags).map(|raw| crate::model::parse_tags(&raw)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answers_keep_everything() {
        let update = NoteUpdate::from_raw("", "   ", "\t");
        assert!(update.is_empty());
    }

    #[test]
    fn answers_are_trimmed_and_tags_split() {
        let update = NoteUpdate::from_raw("  New ", " body ", "a, b ,");
        assert_eq!(update.title.as_deref(), Some("New"));
        assert_eq!(update.content.as_deref(), Some("body"));
        assert_eq!(update.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }
}
