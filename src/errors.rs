use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("No more elements: traversal is exhausted")]
    Exhausted,

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Path resolution failed: {path}, reason: {reason}")]
    PathResolution {
        path: PathBuf,
        reason: String,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
