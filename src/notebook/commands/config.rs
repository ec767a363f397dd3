use crate::commands::{CmdMessage, CmdResult, NotebookPaths};
use crate::config::NotebookConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &NotebookPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = NotebookConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = NotebookConfig::load(dir)?;
            let value = config.get(&key)?;
            Ok(CmdResult::default().with_message(CmdMessage::info(value)))
        }
        ConfigAction::Set(key, value) => {
            let mut config = NotebookConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key)?;
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotebookError;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> NotebookPaths {
        NotebookPaths {
            config_dir: dir.path().to_path_buf(),
            notes_file: dir.path().join("notes.json"),
        }
    }

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let result = run(&paths, ConfigAction::Set("color".into(), "false".into())).unwrap();
        assert_eq!(result.messages[0].content, "color set to false");

        let shown = run(&paths, ConfigAction::ShowKey("color".into())).unwrap();
        assert_eq!(shown.messages[0].content, "false");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert!(!all.config.unwrap().color);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap_err();
        assert!(matches!(err, NotebookError::Config(_)));
    }
}
