//! JSON conversion for the value model.
//!
//! JSON covers a strict subset of the value kinds, so the conversion in
//! is total and the conversion out is partial: kinds JSON cannot
//! represent yield `None`.

use indexmap::IndexMap;

use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut fields = IndexMap::with_capacity(entries.len());
                for (k, v) in entries {
                    fields.insert(k, Value::from(v));
                }
                Value::Object(fields)
            }
        }
    }
}

impl Value {
    /// Converts to JSON, or `None` for kinds JSON cannot represent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Value;
    /// use serde_json::json;
    ///
    /// let v = Value::from(json!({"a": [1, true, null]}));
    /// assert_eq!(v.to_json(), Some(json!({"a": [1.0, true, null]})));
    /// assert_eq!(Value::Promise.to_json(), None);
    /// ```
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => serde_json::Number::from_f64(*n).map(serde_json::Value::Number),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Object(fields) => {
                let mut entries = serde_json::Map::with_capacity(fields.len());
                for (k, v) in fields {
                    entries.insert(k.clone(), v.to_json()?);
                }
                Some(serde_json::Value::Object(entries))
            }
            _ => None,
        }
    }
}
