use thiserror::Error;

/// Errors produced by path operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A required path segment was absent.
    #[error("path segment is required")]
    MissingSegment,
}

/// Result alias for path operations.
pub type Result<T> = std::result::Result<T, PathError>;
