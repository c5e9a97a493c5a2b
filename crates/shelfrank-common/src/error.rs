use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShelfrankError {
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShelfrankError {
    /// True when the failure is an absent upstream source rather than a read/parse problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShelfrankError::SourceNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ShelfrankError>;
