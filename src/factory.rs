//! Operation factory system with name registration and lookup
//!
//! The registry maps each operation name to a zero-argument constructor
//! plus a metadata provider, so callers can inspect an entry without
//! constructing it. The fixed default catalog is assembled in `Default`
//! and exposed through a process-wide static; [`create_operation`] and
//! [`available_operations`] are the crate-level entry points over that
//! static.

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::error::LookupError;
use crate::operation::{Arity, Operation, OperationMetadata};

/// Factory trait implemented by each concrete operation
pub trait OperationFactory {
    /// Get the catalog metadata for this operation
    fn metadata() -> OperationMetadata
    where
        Self: Sized;

    /// Construct the operation value
    fn create() -> Operation
    where
        Self: Sized;
}

/// Function pointer type for constructing operations
type OperationCreator = fn() -> Operation;
type MetadataProvider = fn() -> OperationMetadata;

/// Registry resolving operation names to constructors
///
/// Listings preserve registration order; lookups go through the maps.
pub struct OperationRegistry {
    names: Vec<&'static str>,
    creators: HashMap<&'static str, OperationCreator>,
    metadata_providers: HashMap<&'static str, MetadataProvider>,
}

impl OperationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            creators: HashMap::new(),
            metadata_providers: HashMap::new(),
        }
    }

    /// Register an operation factory
    ///
    /// Re-registering an existing name replaces its entry without
    /// duplicating the name in the enumeration.
    pub fn register<F: OperationFactory + 'static>(&mut self) {
        let metadata = F::metadata();
        let name = metadata.name;

        if self.creators.insert(name, F::create).is_none() {
            self.names.push(name);
        }
        self.metadata_providers.insert(name, F::metadata);
    }

    /// Construct an operation by name
    ///
    /// A hit constructs and returns the operation; a miss reports the
    /// unknown name together with the full catalog.
    pub fn create(&self, name: &str) -> Result<Operation, LookupError> {
        match self.creators.get(name) {
            Some(creator) => {
                debug!("creating operation: {}", name);
                Ok(creator())
            }
            None => {
                warn!("unknown operation requested: {}", name);
                Err(LookupError::new(name, self.names.clone()))
            }
        }
    }

    /// Get metadata for an operation without constructing it
    pub fn metadata(&self, name: &str) -> Option<OperationMetadata> {
        self.metadata_providers.get(name).map(|provider| provider())
    }

    /// Check if an operation name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// All registered names, in registration order
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Registered names with the given arity, in registration order
    pub fn names_with_arity(&self, arity: Arity) -> Vec<&'static str> {
        self.names
            .iter()
            .copied()
            .filter(|name| self.metadata(name).map_or(false, |meta| meta.arity == arity))
            .collect()
    }

    /// Number of registered operations
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the registry has no registered operations
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        // The fixed catalog, in its normative enumeration order
        registry.register::<crate::ops::add::Add>();
        registry.register::<crate::ops::subtract::Subtract>();
        registry.register::<crate::ops::multiply::Multiply>();
        registry.register::<crate::ops::divide::Divide>();
        registry.register::<crate::ops::power::Power>();
        registry.register::<crate::ops::root::Root>();
        registry.register::<crate::ops::modulus::Modulus>();
        registry.register::<crate::ops::integer_divide::IntegerDivide>();
        registry.register::<crate::ops::percentage::Percentage>();
        registry.register::<crate::ops::absolute::Absolute>();
        registry.register::<crate::ops::absolute_difference::AbsoluteDifference>();

        registry
    }
}

/// Process-wide registry holding the fixed catalog
///
/// Built on first use and never mutated afterwards, so concurrent
/// lookups need no locking.
static REGISTRY: Lazy<OperationRegistry> = Lazy::new(OperationRegistry::default);

/// Construct an operation from the fixed catalog by name
pub fn create_operation(name: &str) -> Result<Operation, LookupError> {
    REGISTRY.create(name)
}

/// All catalog operation names, in enumeration order
pub fn available_operations() -> &'static [&'static str] {
    REGISTRY.names()
}

/// Metadata for a catalog operation, without constructing it
pub fn operation_metadata(name: &str) -> Option<OperationMetadata> {
    REGISTRY.metadata(name)
}
