//! Array and tuple schemas.

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::schema::leaf::type_issue;
use crate::schema::traits::{SchemaRef, Validate};
use crate::value::Value;

/// A schema for homogeneous ordered sequences.
///
/// Each element is validated against the item schema at path `[i]`, and
/// all element issues are accumulated.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string());
/// assert!(is(&tags, &Value::from(json!(["a", "b"]))));
/// assert!(!is(&tags, &Value::from(json!(["a", 1]))));
/// ```
#[derive(Clone)]
pub struct ArraySchema {
    item: SchemaRef,
    message: Option<String>,
}

impl ArraySchema {
    pub(crate) fn new(item: impl Validate + 'static) -> Self {
        Self {
            item: std::sync::Arc::new(item),
            message: None,
        }
    }

    /// Overrides the message reported when the value is not an array.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for ArraySchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                return vec![type_issue(
                    "array",
                    self.message.as_deref(),
                    value,
                    path,
                    origin,
                )]
            }
        };

        items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| self.item.check(item, &path.push_index(i), Origin::Value))
            .collect()
    }
}

/// A schema for fixed-length heterogeneous sequences.
///
/// A length mismatch yields exactly one issue tagged `"tuple"` carrying
/// the actual length, and element-wise checks are skipped; when the
/// length matches, element `i` is validated against the `i`-th schema
/// at path `[i]`.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
/// use serde_json::json;
///
/// let pair = Schema::tuple(vec![
///     Box::new(Schema::string()) as Box<dyn verdict::Validate>,
///     Box::new(Schema::number()),
/// ]);
/// assert!(is(&pair, &Value::from(json!(["x", 1]))));
/// assert!(!is(&pair, &Value::from(json!(["x"]))));
/// ```
#[derive(Clone)]
pub struct TupleSchema {
    items: Vec<SchemaRef>,
    message: Option<String>,
}

impl TupleSchema {
    pub(crate) fn new(items: Vec<Box<dyn Validate>>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| std::sync::Arc::new(item) as SchemaRef)
                .collect(),
            message: None,
        }
    }

    /// Overrides the message reported when the value is not a sequence.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Validate for TupleSchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                return vec![type_issue(
                    "tuple",
                    self.message.as_deref(),
                    value,
                    path,
                    origin,
                )]
            }
        };

        if items.len() != self.items.len() {
            // Length mismatch preempts element checks; the actual length
            // stands in for the value.
            return vec![Issue::new(
                path.clone(),
                origin,
                "tuple",
                Value::Number(items.len() as f64),
                format!(
                    "Expected tuple of {} elements, received {}",
                    self.items.len(),
                    items.len()
                ),
            )];
        }

        items
            .iter()
            .zip(&self.items)
            .enumerate()
            .flat_map(|(i, (item, schema))| {
                schema.check(item, &path.push_index(i), Origin::Value)
            })
            .collect()
    }
}
