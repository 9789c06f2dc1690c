//! Multiplication operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Multiplication of two values
#[derive(Default)]
pub struct Multiply;

impl OperationFactory for Multiply {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "multiply",
            "Multiply",
            Arity::Binary,
            "Multiplies two values together",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), multiply)
    }
}

fn multiply(x: f64, y: f64) -> Result<f64, DomainError> {
    Ok(x * y)
}
