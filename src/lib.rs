//! opcalc - A factory-based arithmetic operation library
//!
//! This library provides a fixed catalog of named arithmetic operations,
//! each wrapped in a uniform callable value and selectable at runtime by
//! name through a registry.

pub mod error;
pub mod factory;
pub mod operation;
pub mod ops;

pub use error::{DomainError, LookupError};
pub use factory::{
    available_operations, create_operation, operation_metadata, OperationFactory,
    OperationRegistry,
};
pub use operation::{Arity, BinaryOperation, Operation, OperationMetadata, UnaryOperation};
