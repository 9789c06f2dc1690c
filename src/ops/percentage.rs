//! Percentage operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// First value as a percentage of the second
#[derive(Default)]
pub struct Percentage;

impl OperationFactory for Percentage {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "percentage",
            "Percentage",
            Arity::Binary,
            "Expresses the first value as a percentage of the second",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), percentage)
    }
}

fn percentage(x: f64, y: f64) -> Result<f64, DomainError> {
    if y == 0.0 {
        return Err(DomainError::ZeroPercentageDenominator);
    }
    Ok((x / y) * 100.0)
}
