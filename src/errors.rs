use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyRepoError {
    #[error("Usage: copy-repo")]
    UsageError,

    #[error("Path not found: {}", .0.display())]
    NotFoundError(PathBuf),

    #[error("Failed to walk {}: {message}", .path.display())]
    WalkError { path: PathBuf, message: String },

    #[error("Failed to read {}: {message}", .path.display())]
    ReadError { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    WriteError { path: PathBuf, message: String },

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl CopyRepoError {
    /// Whether the run can continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CopyRepoError::ReadError { .. })
    }
}

impl From<std::io::Error> for CopyRepoError {
    fn from(err: std::io::Error) -> Self {
        CopyRepoError::IoError(err.to_string())
    }
}

impl From<walkdir::Error> for CopyRepoError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        CopyRepoError::WalkError {
            path,
            message: err.to_string(),
        }
    }
}
