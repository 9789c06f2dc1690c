//! Exponentiation operation

use crate::error::DomainError;
use crate::factory::OperationFactory;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Exponentiation of the first value by the second
#[derive(Default)]
pub struct Power;

impl OperationFactory for Power {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "power",
            "Power",
            Arity::Binary,
            "Raises the first value to the power of the second",
        )
    }

    fn create() -> Operation {
        Operation::binary(Self::metadata(), power)
    }
}

// A negative base with a fractional exponent yields NaN per IEEE powf;
// that result is propagated, not trapped.
fn power(x: f64, y: f64) -> Result<f64, DomainError> {
    Ok(x.powf(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(power(5.0, 0.0).unwrap(), 1.0);
        assert!((power(9.0, 0.5).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_exponent() {
        assert!((power(2.0, -2.0).unwrap() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_negative_base_fractional_exponent_is_nan() {
        assert!(power(-8.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn test_power_metadata() {
        let meta = Power::metadata();
        assert_eq!(meta.name, "power");
        assert_eq!(meta.arity, Arity::Binary);
    }
}
