use crate::cue::error::CueError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error("Cue file already exists, use --force to overwrite: {0}")]
    CueFileAlreadyExists(PathBuf),

    #[error("The specified path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Could not determine the file name of: {0}")]
    InvalidFileName(PathBuf),
}

pub type BatchResult<T> = Result<T, BatchError>;
