use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Product with ID '{0}' already exists")]
    AlreadyExists(String),

    #[error("Product with ID '{0}' not found")]
    NotFound(String),

    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InvError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        InvError::InvalidInput(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, InvError>;
