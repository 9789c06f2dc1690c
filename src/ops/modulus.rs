//! Modulus operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Remainder of dividing the first value by the second
#[derive(Default)]
pub struct Modulus;

impl OperationFactory for Modulus {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "modulus",
            "Modulus",
            Arity::Binary,
            "Takes the remainder of dividing the first value by the second",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), modulus)
    }
}

// Floored modulo: the result carries the divisor's sign and pairs with
// floor division, so x == y * floor(x / y) + modulus(x, y).
fn modulus(x: f64, y: f64) -> Result<f64, DomainError> {
    if y == 0.0 {
        return Err(DomainError::ModulusByZero);
    }
    Ok(x - y * (x / y).floor())
}
