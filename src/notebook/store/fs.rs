use super::DataStore;
use crate::error::{NotebookError, Result};
use crate::model::NoteCollection;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(NotebookError::Io)?;
            }
        }
        Ok(())
    }
}

/// Renders the collection the way it is written to disk.
pub fn to_pretty_json(notes: &NoteCollection) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    notes
        .serialize(&mut ser)
        .map_err(NotebookError::Serialization)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> NoteCollection {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no notes file at {}, starting empty", self.path.display());
                return NoteCollection::new();
            }
            Err(e) => {
                log::warn!(
                    "could not read {}: {}; starting with no notes",
                    self.path.display(),
                    e
                );
                return NoteCollection::new();
            }
        };

        match serde_json::from_str::<NoteCollection>(&content) {
            Ok(notes) => {
                log::debug!("loaded {} notes from {}", notes.len(), self.path.display());
                notes
            }
            Err(e) => {
                log::warn!(
                    "{} is not a valid notes file ({}); starting with no notes",
                    self.path.display(),
                    e
                );
                NoteCollection::new()
            }
        }
    }

    fn save(&mut self, notes: &NoteCollection) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(notes)?;
        fs::write(&self.path, content).map_err(NotebookError::Io)?;
        log::debug!("saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}
