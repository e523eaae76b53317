//! Object and record schemas.
//!
//! [`ObjectSchema`] validates keyed records field by field; in exact
//! mode it additionally rejects keys the schema does not declare.
//! [`RecordSchema`] validates homogeneous key/value entries instead of
//! declared fields.

use indexmap::IndexMap;

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::schema::leaf::type_issue;
use crate::schema::traits::{SchemaRef, Validate};
use crate::value::Value;

/// A schema for objects with declared fields.
///
/// Every declared field is validated against `value[field]` at path
/// `parent.field`; a missing key is presented to the field schema as
/// `Undefined`, which is how `optional` fields compose. Keys the schema
/// does not declare are ignored, unless the schema is exact.
///
/// In exact mode ([`Schema::strict`](crate::Schema::strict)), unexpected
/// keys produce a single key-origin issue and field validation is
/// skipped entirely.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string())
///     .field("age", Schema::number());
///
/// assert!(is(&schema, &Value::from(json!({"name": "Alice", "age": 30}))));
/// assert!(!is(&schema, &Value::from(json!({"name": "Alice", "age": "x"}))));
/// ```
#[derive(Clone)]
pub struct ObjectSchema {
    fields: IndexMap<String, SchemaRef>,
    exact: bool,
    message: Option<String>,
}

impl ObjectSchema {
    pub(crate) fn new(exact: bool) -> Self {
        Self {
            fields: IndexMap::new(),
            exact,
            message: None,
        }
    }

    /// Declares a field and the schema its value must satisfy.
    ///
    /// Fields are validated in declaration order, so issue order is
    /// deterministic.
    pub fn field(mut self, name: impl Into<String>, schema: impl Validate + 'static) -> Self {
        self.fields.insert(name.into(), std::sync::Arc::new(schema));
        self
    }

    /// Overrides the message reported when the value is not an object.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for ObjectSchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let entries = match value {
            Value::Object(entries) => entries,
            _ => {
                return vec![type_issue(
                    "object",
                    self.message.as_deref(),
                    value,
                    path,
                    origin,
                )]
            }
        };

        if self.exact {
            let unexpected: Vec<&str> = entries
                .keys()
                .filter(|k| !self.fields.contains_key(k.as_str()))
                .map(String::as_str)
                .collect();
            if !unexpected.is_empty() {
                // Extra keys preempt field validation entirely.
                return vec![Issue::new(
                    path.clone(),
                    Origin::Key,
                    "object",
                    value.clone(),
                    format!("Unexpected keys found: {}", unexpected.join(", ")),
                )];
            }
        }

        let mut issues = Vec::new();
        for (name, schema) in &self.fields {
            let field_value = entries.get(name).unwrap_or(&Value::Undefined);
            issues.extend(schema.check(field_value, &path.push_field(name), Origin::Value));
        }
        issues
    }
}

/// A schema for objects treated as homogeneous key/value entries.
///
/// Each entry's key is validated as a string value with `Origin::Key`,
/// and its value with `Origin::Value`, both at the same path segment
/// `parent.key`. The origin is the only thing distinguishing them.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
/// use serde_json::json;
///
/// let counts = Schema::record(Schema::string(), Schema::number());
/// assert!(is(&counts, &Value::from(json!({"a": 1, "b": 2}))));
/// assert!(!is(&counts, &Value::from(json!({"a": "one"}))));
/// ```
#[derive(Clone)]
pub struct RecordSchema {
    key: SchemaRef,
    value: SchemaRef,
    message: Option<String>,
}

impl RecordSchema {
    pub(crate) fn new(key: impl Validate + 'static, value: impl Validate + 'static) -> Self {
        Self {
            key: std::sync::Arc::new(key),
            value: std::sync::Arc::new(value),
            message: None,
        }
    }

    /// Overrides the message reported when the value is not an object.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for RecordSchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let entries = match value {
            Value::Object(entries) => entries,
            _ => {
                return vec![type_issue(
                    "record",
                    self.message.as_deref(),
                    value,
                    path,
                    origin,
                )]
            }
        };

        let mut issues = Vec::new();
        for (name, entry_value) in entries {
            let entry_path = path.push_field(name);
            let key_value = Value::String(name.clone());
            issues.extend(self.key.check(&key_value, &entry_path, Origin::Key));
            issues.extend(self.value.check(entry_value, &entry_path, Origin::Value));
        }
        issues
    }
}
