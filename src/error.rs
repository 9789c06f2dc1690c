//! Error types for operation lookup and execution
//!
//! Both kinds surface directly to the caller and are never retried
//! internally: [`LookupError`] when a requested name is not in the
//! registry, [`DomainError`] when a zero operand makes an operation
//! mathematically undefined.

use thiserror::Error;

/// Raised when a requested operation name is not in the registry
///
/// Carries the offending name and every registered name, in the
/// registry's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {name}. Available operations: {}", .available.join(", "))]
pub struct LookupError {
    /// The name that failed to resolve
    pub name: String,
    /// All registered operation names, in enumeration order
    pub available: Vec<&'static str>,
}

impl LookupError {
    /// Creates a lookup error for `name` against the given catalog
    pub fn new(name: impl Into<String>, available: Vec<&'static str>) -> Self {
        Self {
            name: name.into(),
            available,
        }
    }
}

/// Raised when a zero-valued second operand makes a binary operation
/// mathematically undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Division with a zero divisor
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    /// Root extraction with degree zero
    #[error("Cannot take the root with degree zero.")]
    ZeroRootDegree,

    /// Modulus with a zero divisor
    #[error("Cannot take modulus with zero.")]
    ModulusByZero,

    /// Integer division with a zero divisor
    #[error("Cannot perform integer division by zero.")]
    IntegerDivisionByZero,

    /// Percentage with a zero denominator
    #[error("Cannot calculate percentage with zero as denominator.")]
    ZeroPercentageDenominator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::new("bogus", vec!["add", "subtract"]);
        assert_eq!(
            err.to_string(),
            "Unknown operation: bogus. Available operations: add, subtract"
        );
    }

    #[test]
    fn test_lookup_error_owns_offending_name() {
        let err = LookupError::new(String::from("cube"), vec!["add"]);
        assert_eq!(err.name, "cube");
        assert_eq!(err.available, vec!["add"]);
    }

    #[test]
    fn test_domain_error_display() {
        assert_eq!(
            DomainError::DivisionByZero.to_string(),
            "Cannot divide by zero."
        );
        assert_eq!(
            DomainError::ZeroRootDegree.to_string(),
            "Cannot take the root with degree zero."
        );
        assert_eq!(
            DomainError::ModulusByZero.to_string(),
            "Cannot take modulus with zero."
        );
        assert_eq!(
            DomainError::IntegerDivisionByZero.to_string(),
            "Cannot perform integer division by zero."
        );
        assert_eq!(
            DomainError::ZeroPercentageDenominator.to_string(),
            "Cannot calculate percentage with zero as denominator."
        );
    }
}
