//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level validation error.
///
/// This is a closed set: every way a raw notice document can be rejected is
/// one of these variants. Each carries the field path of the offending input
/// so callers can build a machine-readable diagnostic. No variant holds
/// partial aggregate state, and a failure is always a normal outcome for
/// malformed input — never fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mandatory collection had zero elements.
    #[error("{path}: must not be empty")]
    EmptyCollection { path: String },

    /// A collection contained repeated keys.
    #[error("{path}: duplicate values [{}]", duplicates.join(", "))]
    UniquenessViolation {
        path: String,
        duplicates: Vec<String>,
    },

    /// A raw scalar did not match its required lexical grammar.
    #[error("{path}: '{value}' does not match the required format")]
    PatternMismatch { path: String, value: String },

    /// An identifier referred to an entity absent from the same document.
    #[error("{path}: reference to unknown id '{referenced_id}'")]
    MissingReference {
        path: String,
        referenced_id: String,
    },

    /// Monetary arithmetic was attempted across two different currencies.
    #[error("incompatible currencies: {left} vs {right}")]
    IncompatibleCurrency { left: String, right: String },

    /// A field was present and well-formed but semantically wrong.
    #[error("{path}: {reason}")]
    IncorrectAttribute { path: String, reason: String },
}

impl DomainError {
    pub fn empty_collection(path: impl Into<String>) -> Self {
        Self::EmptyCollection { path: path.into() }
    }

    pub fn uniqueness(path: impl Into<String>, duplicates: Vec<String>) -> Self {
        Self::UniquenessViolation {
            path: path.into(),
            duplicates,
        }
    }

    pub fn pattern_mismatch(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::PatternMismatch {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn missing_reference(path: impl Into<String>, referenced_id: impl Into<String>) -> Self {
        Self::MissingReference {
            path: path.into(),
            referenced_id: referenced_id.into(),
        }
    }

    pub fn incompatible_currency(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::IncompatibleCurrency {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn incorrect_attribute(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IncorrectAttribute {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
