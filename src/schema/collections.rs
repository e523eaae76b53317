//! Map and set schemas.
//!
//! Both recurse by entry position: paths use the numeric index of the
//! entry in iteration order, never the key itself.

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::schema::leaf::type_issue;
use crate::schema::traits::{SchemaRef, Validate};
use crate::value::Value;

/// A schema for map containers.
///
/// Entries are validated in iteration order at path `[index]`; the key
/// check carries `Origin::Key` and the value check `Origin::Value`,
/// both at the same indexed path.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
///
/// let schema = Schema::map(Schema::string(), Schema::number());
/// let m = Value::Map(vec![(Value::from("a"), Value::from(1.0))]);
/// assert!(is(&schema, &m));
///
/// let bad = Value::Map(vec![(Value::from(1.0), Value::from(1.0))]);
/// assert!(!is(&schema, &bad));
/// ```
#[derive(Clone)]
pub struct MapSchema {
    key: SchemaRef,
    value: SchemaRef,
    message: Option<String>,
}

impl MapSchema {
    pub(crate) fn new(key: impl Validate + 'static, value: impl Validate + 'static) -> Self {
        Self {
            key: std::sync::Arc::new(key),
            value: std::sync::Arc::new(value),
            message: None,
        }
    }

    /// Overrides the message reported when the value is not a map.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for MapSchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let entries = match value {
            Value::Map(entries) => entries,
            _ => {
                return vec![type_issue(
                    "map",
                    self.message.as_deref(),
                    value,
                    path,
                    origin,
                )]
            }
        };

        let mut issues = Vec::new();
        for (i, (entry_key, entry_value)) in entries.iter().enumerate() {
            let entry_path = path.push_index(i);
            issues.extend(self.key.check(entry_key, &entry_path, Origin::Key));
            issues.extend(self.value.check(entry_value, &entry_path, Origin::Value));
        }
        issues
    }
}

/// A schema for set containers.
///
/// Members are validated in iteration order at path `[index]`.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
///
/// let schema = Schema::set(Schema::number());
/// assert!(is(&schema, &Value::Set(vec![Value::from(1.0), Value::from(2.0)])));
/// assert!(!is(&schema, &Value::Set(vec![Value::from("x")])));
/// ```
#[derive(Clone)]
pub struct SetSchema {
    member: SchemaRef,
    message: Option<String>,
}

impl SetSchema {
    pub(crate) fn new(member: impl Validate + 'static) -> Self {
        Self {
            member: std::sync::Arc::new(member),
            message: None,
        }
    }

    /// Overrides the message reported when the value is not a set.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for SetSchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let members = match value {
            Value::Set(members) => members,
            _ => {
                return vec![type_issue(
                    "set",
                    self.message.as_deref(),
                    value,
                    path,
                    origin,
                )]
            }
        };

        members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| self.member.check(member, &path.push_index(i), Origin::Value))
            .collect()
    }
}
