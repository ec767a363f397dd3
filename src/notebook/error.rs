use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("Not a valid note number: {0}")]
    InvalidPosition(String),

    #[error("Note number {position} is out of range (notes: {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl NotebookError {
    /// Validation errors abort only the current operation; the caller reports
    /// them and carries on.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NotebookError::EmptyInput(_)
                | NotebookError::InvalidPosition(_)
                | NotebookError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NotebookError>;
