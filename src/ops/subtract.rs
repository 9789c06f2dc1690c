//! Subtraction operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Subtraction of the second value from the first
#[derive(Default)]
pub struct Subtract;

impl OperationFactory for Subtract {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "subtract",
            "Subtract",
            Arity::Binary,
            "Subtracts the second value from the first",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), subtract)
    }
}

fn subtract(x: f64, y: f64) -> Result<f64, DomainError> {
    Ok(x - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(subtract(3.0, 5.0).unwrap(), -2.0);
    }

    #[test]
    fn test_subtract_metadata() {
        let meta = Subtract::metadata();
        assert_eq!(meta.name, "subtract");
        assert_eq!(meta.arity, Arity::Binary);
    }
}
