//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Callers at the
/// processing boundary fold these into a delivery status rather than
/// surfacing them as errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent (e.g. `items[0].price`).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The inventory cannot satisfy the order.
    #[error("unfulfillable: {0}")]
    Unfulfillable(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    /// Shorthand for a missing required field.
    pub fn missing(field: impl AsRef<str>) -> Self {
        Self::Validation(format!("missing field `{}`", field.as_ref()))
    }

    pub fn unfulfillable(msg: impl Into<String>) -> Self {
        Self::Unfulfillable(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
