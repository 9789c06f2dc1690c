//! Root extraction operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Root of the first value with the second as degree
#[derive(Default)]
pub struct Root;

impl OperationFactory for Root {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "root",
            "Root",
            Arity::Binary,
            "Takes the root of the first value with the second as degree",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), root)
    }
}

fn root(x: f64, y: f64) -> Result<f64, DomainError> {
    if y == 0.0 {
        return Err(DomainError::ZeroRootDegree);
    }
    Ok(x.powf(1.0 / y))
}
