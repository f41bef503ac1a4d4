use std::fmt;

/// Error types for urldupes operations
#[derive(Debug)]
pub enum UrlDupesError {
    /// Listing the target directory failed
    DirectoryRead(String, std::io::Error),

    /// Opening or reading a scanned file failed
    FileRead(String, std::io::Error),

    /// Deleting a duplicate failed
    FileRemove(String, std::io::Error),

    /// The target path exists but is not a directory
    NotADirectory(String),

    /// Configuration error
    Config(String),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for UrlDupesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlDupesError::DirectoryRead(path, err) => {
                write!(f, "Could not read directory '{path}': {err}")
            }
            UrlDupesError::FileRead(path, err) => write!(f, "Could not read file '{path}': {err}"),
            UrlDupesError::FileRemove(path, err) => {
                write!(f, "Could not remove file '{path}': {err}")
            }
            UrlDupesError::NotADirectory(path) => write!(f, "Not a directory: {path}"),
            UrlDupesError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlDupesError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for UrlDupesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlDupesError::DirectoryRead(_, err) => Some(err),
            UrlDupesError::FileRead(_, err) => Some(err),
            UrlDupesError::FileRemove(_, err) => Some(err),
            UrlDupesError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for UrlDupesError {
    fn from(err: serde_json::Error) -> Self {
        UrlDupesError::Json(err)
    }
}

/// Type alias for Results using UrlDupesError
pub type Result<T> = std::result::Result<T, UrlDupesError>;
