//! Absolute value operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Absolute value of a single operand
///
/// The only unary entry in the catalog.
#[derive(Default)]
pub struct Absolute;

impl OperationFactory for Absolute {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "absolute",
            "Absolute",
            Arity::Unary,
            "Takes the absolute value of a single operand",
        )
    }

    fn create() -> Operation {
        Operation::unary(Self::metadata(), absolute)
    }
}

fn absolute(x: f64) -> Result<f64, DomainError> {
    Ok(x.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute() {
        assert_eq!(absolute(-5.0).unwrap(), 5.0);
        assert_eq!(absolute(5.0).unwrap(), 5.0);
        assert_eq!(absolute(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_absolute_metadata() {
        let meta = Absolute::metadata();
        assert_eq!(meta.name, "absolute");
        assert_eq!(meta.arity, Arity::Unary);
    }

    #[test]
    fn test_created_operation_is_unary() {
        let op = Absolute::create();
        let unary = op.as_unary().expect("absolute is unary");
        assert_eq!(unary.execute(-2.5).unwrap(), 2.5);
    }
}
