use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnstitchError {
    #[error("failed to read archive '{}': {source}", path.display())]
    ReadArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsafe path: {0}")]
    UnsafePath(String),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid format: {0}")]
    Config(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, UnstitchError>;
