//! Error types for path and file tree operations

use thiserror::Error;

/// The error type for path and file tree operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Operation needs a path but got the empty File
    #[error("Empty paths are not allowed")]
    EmptyPath,

    /// Path does not exist
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// Path exists but is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    /// Path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    /// Copy or move target lies inside the tree being copied or moved
    #[error("Destination {dest} is inside source {src}")]
    DestinationInsideSource { src: String, dest: String },

    /// General argument validation failure
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Path construction failure
    #[error("Path construction failed: {message}")]
    ConstructionFailed { message: String },

    /// I/O error reported by the operating system
    #[error("I/O error on '{path}': {message}")]
    IoError { path: String, message: String },
}

impl PathError {
    pub(crate) fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        PathError::IoError {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::IoError {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for PathError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        PathError::IoError {
            path,
            message: err.to_string(),
        }
    }
}

/// Result type for path and file tree operations
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_path() {
        let err = PathError::io(
            "dir/file.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "I/O error on 'dir/file.txt': missing");
    }

    #[test]
    fn test_from_io_error() {
        let err: PathError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, PathError::IoError { ref message, .. } if message == "boom"));
    }
}
