//! Named schema storage and call-time reference resolution.
//!
//! A [`SchemaRegistry`] stores schemas under string names so they can be
//! reused and referenced from other schemas. A [`Reference`] resolves
//! its name when a value is actually validated (the same deferred
//! pattern as `lazy`), which is what makes mutually recursive named
//! schemas possible.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Issue, Origin};
use crate::parse::{safe_parse, ValidationError};
use crate::path::Path;
use crate::schema::{SchemaRef, Validate};
use crate::value::Value;
use stillwater::Validation;

type SchemaMap = Arc<RwLock<HashMap<String, SchemaRef>>>;

/// A thread-safe registry of named schemas.
///
/// Registration takes the write lock; validation and lookup take the
/// read lock, so any number of threads can validate concurrently.
///
/// # Example
///
/// ```rust
/// use verdict::{Schema, SchemaRegistry, Value};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register("UserId", Schema::integer()).unwrap();
/// registry
///     .register(
///         "User",
///         Schema::object()
///             .field("id", registry.reference("UserId"))
///             .field("name", Schema::string()),
///     )
///     .unwrap();
///
/// let result = registry.validate("User", Value::from(json!({"id": 7, "name": "Ada"})));
/// assert!(result.unwrap().is_success());
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a schema under a name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken.
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: impl Validate + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut schemas = self.schemas.write();
        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<SchemaRef> {
        self.schemas.read().get(name).cloned()
    }

    /// Creates a validator that resolves the named schema at check time.
    ///
    /// The name may be registered after the reference is created, as
    /// long as it exists by the time a value is validated. Validating
    /// an unresolved reference reports an issue rather than panicking.
    pub fn reference(&self, name: impl Into<String>) -> Reference {
        Reference {
            name: name.into(),
            schemas: Arc::clone(&self.schemas),
        }
    }

    /// Validates a value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SchemaNotFound`] if the name is not
    /// registered; validation failures are carried inside the returned
    /// `Validation`.
    pub fn validate(
        &self,
        name: &str,
        value: Value,
    ) -> Result<Validation<Value, ValidationError>, RegistryError> {
        let schema = self
            .get(name)
            .ok_or_else(|| RegistryError::SchemaNotFound(name.to_string()))?;
        Ok(safe_parse(&schema, value))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
        }
    }
}

/// A validator that resolves a named schema when invoked.
pub struct Reference {
    name: String,
    schemas: SchemaMap,
}

impl Reference {
    /// The name this reference resolves.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Validate for Reference {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let schema = self.schemas.read().get(&self.name).cloned();
        match schema {
            Some(schema) => schema.check(value, path, origin),
            None => vec![Issue::new(
                path.clone(),
                origin,
                "reference",
                value.clone(),
                format!("Schema '{}' is not registered", self.name),
            )],
        }
    }
}

/// Errors from registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema under a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate against a name that is not registered.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}
