//! Integer division operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Floor division of the first value by the second
#[derive(Default)]
pub struct IntegerDivide;

impl OperationFactory for IntegerDivide {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "integer_divide",
            "Integer Divide",
            Arity::Binary,
            "Divides the first value by the second, rounding toward negative infinity",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), integer_divide)
    }
}

// Floor semantics, not truncation toward zero: -7 / 2 gives -4.
fn integer_divide(x: f64, y: f64) -> Result<f64, DomainError> {
    if y == 0.0 {
        return Err(DomainError::IntegerDivisionByZero);
    }
    Ok((x / y).floor())
}
