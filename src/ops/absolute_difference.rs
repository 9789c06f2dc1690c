//! Absolute difference operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Absolute difference between two values
#[derive(Default)]
pub struct AbsoluteDifference;

impl OperationFactory for AbsoluteDifference {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "absolute_difference",
            "Absolute Difference",
            Arity::Binary,
            "Takes the absolute difference between two values",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), absolute_difference)
    }
}

fn absolute_difference(x: f64, y: f64) -> Result<f64, DomainError> {
    Ok((x - y).abs())
}
