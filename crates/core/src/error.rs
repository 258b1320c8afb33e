//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is an expected, recoverable condition: the operation that
/// returned it left the store untouched and the caller may retry with
/// corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input failed a stated constraint (empty name, negative quantity,
    /// malformed date, non-positive amount, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced identifier does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock (requested: {requested}, available: {available})")]
    InsufficientStock { requested: i64, available: i64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    /// Units still available when the error is an insufficient-stock rejection.
    pub fn available(&self) -> Option<i64> {
        match self {
            Self::InsufficientStock { available, .. } => Some(*available),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_reports_available_quantity() {
        let err = DomainError::insufficient_stock(5, 3);
        assert_eq!(err.available(), Some(3));
        assert_eq!(
            err.to_string(),
            "insufficient stock (requested: 5, available: 3)"
        );
    }

    #[test]
    fn other_variants_carry_no_available_quantity() {
        assert_eq!(DomainError::validation("name cannot be empty").available(), None);
        assert_eq!(DomainError::not_found("M9").available(), None);
        assert_eq!(DomainError::not_found("M9").to_string(), "not found: M9");
    }
}
