//! Structural lens errors.

use optic_core::ValueKind;
use thiserror::Error;

/// Structural errors: caller contract violations detected while applying
/// a lens. These are raised synchronously and never aggregated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LensError {
    /// The value's kind does not match the expected kind exactly.
    #[error("expected type {expected}, got a value of type {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A map was required but something else was supplied.
    #[error("expected a map, got a value of type {actual}")]
    ExpectedMap { actual: &'static str },

    /// The supplied map is missing a declared attribute.
    #[error("missing key: {key}")]
    MissingKey { key: String },

    /// The supplied map carries a key that is not a declared attribute.
    #[error("unexpected key: {key}")]
    UnexpectedKey { key: String },

    /// The target has no field with the given name.
    #[error("no field named {name}")]
    MissingField { name: String },
}

impl LensError {
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch {
            expected: expected.name(),
            actual: actual.name(),
        }
    }

    pub fn expected_map(actual: ValueKind) -> Self {
        Self::ExpectedMap {
            actual: actual.name(),
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn unexpected_key(key: impl Into<String>) -> Self {
        Self::UnexpectedKey { key: key.into() }
    }

    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField { name: name.into() }
    }
}

/// Result type for lens operations.
pub type LensResult<T> = Result<T, LensError>;
