use thiserror::Error;

/// Errors from storage engine operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path argument was missing or empty.
    #[error("the specified path must not be empty")]
    PathRequired,

    /// The operation requires a file-shaped path (no trailing separator).
    #[error("the path is not a file: {path}")]
    NotAFile { path: String },

    /// The operation requires a directory-shaped path.
    #[error("the path is not a directory: {path}")]
    NotADirectory { path: String },

    /// Write without overwrite targeting an existing key.
    #[error("file already exists and cannot be overwritten: {path}")]
    AlreadyExists { path: String },

    /// The requested key is not present.
    #[error("the specified path does not exist: {path}")]
    NotFound { path: String },

    /// A content object carried neither raw bytes nor text.
    #[error("the entered data is invalid for '{id}'")]
    InvalidData { id: String },

    /// The write payload had an unrecognized shape.
    #[error("the entered data format is not supported")]
    UnsupportedDataFormat,

    /// Listing was attempted against a bucket that does not exist.
    #[error("bucket does not exist: {name}")]
    BucketNotFound { name: String },

    /// The engine was configured with an empty bucket name.
    #[error("bucket name is required")]
    BucketNameRequired,

    /// Cancellation was observed before or during the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// A path segment failed low-level validation.
    #[error(transparent)]
    Path(#[from] silo_path::PathError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
