//! Division operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Division of the first value by the second
#[derive(Default)]
pub struct Divide;

impl OperationFactory for Divide {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "divide",
            "Divide",
            Arity::Binary,
            "Divides the first value by the second",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), divide)
    }
}

fn divide(x: f64, y: f64) -> Result<f64, DomainError> {
    if y == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(x / y)
}
