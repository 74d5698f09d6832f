//! Transaction error types.

use optic_core::ErrorTree;
use optic_lens::LensError;
use thiserror::Error;

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A validation failure raised deliberately by application logic.
    /// Intercepted and recorded by the nearest enclosing context scope.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Every validation failure of one transaction attempt, addressed by
    /// context path. Raised only by the top-level atomic scope.
    #[error("validation failed:\n{errors}")]
    Aggregated { errors: ErrorTree },

    /// Commit hooks cannot be added outside of a transaction.
    #[error("on_commit hooks cannot be added outside of a transaction")]
    NoActiveTransaction,

    /// Structural lens error during the transaction. Fail-fast, never
    /// aggregated.
    #[error(transparent)]
    Structural(#[from] LensError),
}

impl TransactionError {
    /// Raise a validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The aggregated error tree, if this is the aggregated form.
    pub fn as_aggregated(&self) -> Option<&ErrorTree> {
        match self {
            Self::Aggregated { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
