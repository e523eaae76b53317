//! The validator contract every schema satisfies.

use std::sync::Arc;

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::value::Value;

/// A stateless validator: a pure function from a value (plus path/origin
/// context) to a list of issues.
///
/// An empty result means the value is valid under this schema; a
/// non-empty result lists every violation found. Validators never panic
/// on invalid input and hold no mutable state, so one schema can be
/// shared across threads via [`SchemaRef`] and invoked concurrently.
///
/// # Example
///
/// ```rust
/// use verdict::{Path, Origin, Schema, Validate, Value};
///
/// let schema = Schema::string();
/// assert!(schema.check(&Value::from("hi"), &Path::root(), Origin::Value).is_empty());
/// assert_eq!(schema.check(&Value::Null, &Path::root(), Origin::Value).len(), 1);
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value`, reporting issues at `path` with the given origin.
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue>;

    /// True iff the value is valid under this schema, checked from the
    /// root with a value origin.
    fn accepts(&self, value: &Value) -> bool {
        self.check(value, &Path::root(), Origin::Value).is_empty()
    }
}

/// A shared, type-erased schema.
///
/// Children may be shared across multiple parents; sharing is safe
/// because validators are stateless.
pub type SchemaRef = Arc<dyn Validate>;

impl<T: Validate + ?Sized> Validate for Arc<T> {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        (**self).check(value, path, origin)
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        (**self).check(value, path, origin)
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        (**self).check(value, path, origin)
    }
}
