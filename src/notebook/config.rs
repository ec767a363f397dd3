use crate::error::{NotebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_NOTES_FILENAME: &str = "notes.json";

/// Configuration for the notebook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotebookConfig {
    /// Backing file for the notes. `None` means the default data location.
    #[serde(default)]
    pub notes_file: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            notes_file: None,
            color: default_color(),
        }
    }
}

impl NotebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotebookError::Io)?;
        let config: NotebookConfig =
            serde_json::from_str(&content).map_err(NotebookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotebookError::Serialization)?;
        fs::write(config_path, content).map_err(NotebookError::Io)?;
        Ok(())
    }

    /// Picks the notes file: explicit override first, then the configured
    /// path, then `<data dir>/notes.json`.
    pub fn resolve_notes_file(&self, explicit: Option<PathBuf>, data_dir: &Path) -> PathBuf {
        explicit
            .or_else(|| self.notes_file.clone())
            .unwrap_or_else(|| data_dir.join(DEFAULT_NOTES_FILENAME))
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "notes-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(NotebookError::Config("notes-file cannot be empty".into()));
                }
                self.notes_file = Some(PathBuf::from(value));
            }
            "color" => {
                self.color = parse_bool(value).ok_or_else(|| {
                    NotebookError::Config(format!("color must be true or false, got '{}'", value))
                })?;
            }
            other => return Err(NotebookError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "notes-file" => Ok(self
                .notes_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(default)".to_string())),
            "color" => Ok(self.color.to_string()),
            other => Err(NotebookError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["notes-file", "color"]
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotebookConfig::default();
        assert_eq!(config.notes_file, None);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotebookConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotebookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("cfg");

        let mut config = NotebookConfig::default();
        config.set("notes-file", "/tmp/elsewhere.json").unwrap();
        config.set("color", "off").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = NotebookConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.notes_file, Some(PathBuf::from("/tmp/elsewhere.json")));
        assert!(!loaded.color);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = NotebookConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotebookConfig::default());
    }

    #[test]
    fn test_notes_file_precedence() {
        let data_dir = PathBuf::from("/data");
        let mut config = NotebookConfig::default();

        assert_eq!(
            config.resolve_notes_file(None, &data_dir),
            PathBuf::from("/data/notes.json")
        );

        config.notes_file = Some(PathBuf::from("/configured.json"));
        assert_eq!(
            config.resolve_notes_file(None, &data_dir),
            PathBuf::from("/configured.json")
        );
        assert_eq!(
            config.resolve_notes_file(Some(PathBuf::from("/flag.json")), &data_dir),
            PathBuf::from("/flag.json")
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = NotebookConfig::default();
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("notes-file", "  ").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert!(config.get("theme").is_err());
    }
}
