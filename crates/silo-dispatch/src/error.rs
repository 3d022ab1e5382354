use thiserror::Error;

use silo_store::StoreError;

/// Errors from dispatching an operation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The operation name does not map to a storage verb.
    #[error("operation '{name}' is not supported")]
    UnsupportedOperation { name: String },

    /// The parameter bag could not be decoded for the operation.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// The engine rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
