//! Addition operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Addition of two values
#[derive(Default)]
pub struct Add;

impl OperationFactory for Add {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new("add", "Add", Arity::Binary, "Adds two values together")
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), add)
    }
}

fn add(x: f64, y: f64) -> Result<f64, DomainError> {
    Ok(x + y)
}
