//! Operation values, metadata, and arity variants
//!
//! An operation pairs catalog metadata with a pure arithmetic function.
//! Unary and binary operations are separate variants so that each exposes
//! an `execute` taking exactly the operand count it consumes; calling an
//! operation with the wrong number of arguments is therefore a compile
//! error, not a runtime failure.

use serde::Serialize;

use crate::error::DomainError;

/// Signature of a one-operand arithmetic function
pub type UnaryFn = fn(f64) -> Result<f64, DomainError>;

/// Signature of a two-operand arithmetic function
pub type BinaryFn = fn(f64, f64) -> Result<f64, DomainError>;

/// Number of operands an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Operand count for this arity
    pub fn operand_count(&self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// Identity of a catalog operation - the single source of truth for how
/// an entry presents itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationMetadata {
    /// Registry key, unique across the catalog (e.g. "integer_divide")
    pub name: &'static str,
    /// Human-facing name (e.g. "Integer Divide")
    pub display_name: &'static str,
    /// One-line summary of the computation
    pub description: &'static str,
    /// Number of operands the operation consumes
    pub arity: Arity,
}

impl OperationMetadata {
    /// Creates metadata for a catalog operation
    pub fn new(
        name: &'static str,
        display_name: &'static str,
        arity: Arity,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            display_name,
            description,
            arity,
        }
    }
}

/// One-operand operation: metadata plus the wrapped function
#[derive(Debug, Clone)]
pub struct UnaryOperation {
    metadata: OperationMetadata,
    func: UnaryFn,
}

impl UnaryOperation {
    /// Creates a unary operation from metadata and a function
    pub fn new(metadata: OperationMetadata, func: UnaryFn) -> Self {
        Self { metadata, func }
    }

    /// Applies the wrapped function to `x`
    pub fn execute(&self, x: f64) -> Result<f64, DomainError> {
        (self.func)(x)
    }

    /// Metadata for this operation
    pub fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }
}

/// Two-operand operation: metadata plus the wrapped function
#[derive(Debug, Clone)]
pub struct BinaryOperation {
    metadata: OperationMetadata,
    func: BinaryFn,
}

impl BinaryOperation {
    /// Creates a binary operation from metadata and a function
    pub fn new(metadata: OperationMetadata, func: BinaryFn) -> Self {
        Self { metadata, func }
    }

    /// Applies the wrapped function to `(x, y)`
    pub fn execute(&self, x: f64, y: f64) -> Result<f64, DomainError> {
        (self.func)(x, y)
    }

    /// Metadata for this operation
    pub fn metadata(&self) -> &OperationMetadata {
        &self.metadata
    }
}

/// A runnable catalog operation
///
/// Constructed on demand by the registry, immutable, and stateless beyond
/// its metadata and function pointer.
#[derive(Debug, Clone)]
pub enum Operation {
    Unary(UnaryOperation),
    Binary(BinaryOperation),
}

impl Operation {
    /// Wraps a unary function together with its metadata
    pub fn unary(metadata: OperationMetadata, func: UnaryFn) -> Self {
        debug_assert_eq!(metadata.arity, Arity::Unary);
        Operation::Unary(UnaryOperation::new(metadata, func))
    }

    /// Wraps a binary function together with its metadata
    pub fn binary(metadata: OperationMetadata, func: BinaryFn) -> Self {
        debug_assert_eq!(metadata.arity, Arity::Binary);
        Operation::Binary(BinaryOperation::new(metadata, func))
    }

    /// Metadata for this operation
    pub fn metadata(&self) -> &OperationMetadata {
        match self {
            Operation::Unary(op) => op.metadata(),
            Operation::Binary(op) => op.metadata(),
        }
    }

    /// Registry name of this operation
    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    /// Operand count variant of this operation
    pub fn arity(&self) -> Arity {
        self.metadata().arity
    }

    /// Checks if this operation is unary
    pub fn is_unary(&self) -> bool {
        matches!(self, Operation::Unary(_))
    }

    /// Checks if this operation is binary
    pub fn is_binary(&self) -> bool {
        matches!(self, Operation::Binary(_))
    }

    /// The unary variant, if this operation takes one operand
    pub fn as_unary(&self) -> Option<&UnaryOperation> {
        match self {
            Operation::Unary(op) => Some(op),
            Operation::Binary(_) => None,
        }
    }

    /// The binary variant, if this operation takes two operands
    pub fn as_binary(&self) -> Option<&BinaryOperation> {
        match self {
            Operation::Binary(op) => Some(op),
            Operation::Unary(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unary_metadata() -> OperationMetadata {
        OperationMetadata::new("negate", "Negate", Arity::Unary, "Flips the sign")
    }

    fn binary_metadata() -> OperationMetadata {
        OperationMetadata::new("sum", "Sum", Arity::Binary, "Adds two values")
    }

    #[test]
    fn test_unary_execute() {
        let op = UnaryOperation::new(unary_metadata(), |x| Ok(-x));
        assert_eq!(op.execute(4.0).unwrap(), -4.0);
        assert_eq!(op.metadata().name, "negate");
    }

    #[test]
    fn test_binary_execute() {
        let op = BinaryOperation::new(binary_metadata(), |x, y| Ok(x + y));
        assert_eq!(op.execute(1.5, 2.5).unwrap(), 4.0);
    }

    #[test]
    fn test_operation_accessors() {
        let op = Operation::binary(binary_metadata(), |x, y| Ok(x + y));
        assert!(op.is_binary());
        assert!(!op.is_unary());
        assert!(op.as_unary().is_none());
        assert!(op.as_binary().is_some());
        assert_eq!(op.name(), "sum");
        assert_eq!(op.arity(), Arity::Binary);
    }

    #[test]
    fn test_unary_variant_accessors() {
        let op = Operation::unary(unary_metadata(), |x| Ok(-x));
        assert!(op.is_unary());
        assert!(op.as_binary().is_none());
        let unary = op.as_unary().expect("unary variant");
        assert_eq!(unary.execute(-3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_operand_counts() {
        assert_eq!(Arity::Unary.operand_count(), 1);
        assert_eq!(Arity::Binary.operand_count(), 2);
    }
}
