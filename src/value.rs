//! The dynamic value model validated by schemas.
//!
//! Schemas in this crate validate [`Value`], a closed set of runtime value
//! kinds. Dispatching on an explicit discriminant ([`Kind`]) replaces the
//! runtime reflection a dynamically typed host would use to tell containers
//! apart.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A runtime value that can be validated against a schema.
///
/// The set of kinds is closed: every validator predicate is a match on
/// these variants. `Object` fields and `Map` entries preserve insertion
/// order so issue ordering is deterministic.
///
/// # Example
///
/// ```rust
/// use verdict::Value;
///
/// let v = Value::from(serde_json::json!({"name": "Alice", "tags": ["a", "b"]}));
/// assert_eq!(v.type_name(), "object");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value, as seen by field validators for missing object keys.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-magnitude integer.
    BigInt(i128),
    /// A character sequence.
    String(String),
    /// An interned symbol, identified by name.
    Symbol(String),
    /// An opaque named callable handle.
    Function(String),
    /// A point in time.
    Date(DateTime<Utc>),
    /// An opaque handle to a deferred computation.
    Promise,
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A keyed record with insertion-ordered string keys.
    Object(IndexMap<String, Value>),
    /// A map container: insertion-ordered key/value entry pairs.
    Map(Vec<(Value, Value)>),
    /// A set container: insertion-ordered members.
    Set(Vec<Value>),
}

/// The discriminant of a [`Value`].
///
/// Used by `instance` schemas for explicit tagged dispatch, and to name
/// the runtime type in generated issue messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Date,
    Promise,
    Array,
    Object,
    Map,
    Set,
}

impl Kind {
    /// The runtime-type name used in generated issue messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Function => "function",
            Kind::Date => "date",
            Kind::Promise => "promise",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Map => "map",
            Kind::Set => "set",
        }
    }
}

impl Value {
    /// Returns the discriminant of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Function(_) => Kind::Function,
            Value::Date(_) => Kind::Date,
            Value::Promise => Kind::Promise,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Map(_) => Kind::Map,
            Value::Set(_) => Kind::Set,
        }
    }

    /// Returns the runtime-type name of this value (e.g. `"string"`).
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// True for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// The size or magnitude used by `min`/`max` constraints.
    ///
    /// Character count for strings, length for arrays, cardinality for
    /// maps and sets, the numeric value itself for numbers and bigints.
    /// `None` for kinds with neither a size nor a magnitude.
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            Value::String(s) => Some(s.chars().count() as f64),
            Value::Array(items) => Some(items.len() as f64),
            Value::Map(entries) => Some(entries.len() as f64),
            Value::Set(members) => Some(members.len() as f64),
            Value::Number(n) => Some(*n),
            Value::BigInt(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Undefined.type_name(), "undefined");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
        assert_eq!(Value::Number(1.5).type_name(), "number");
        assert_eq!(Value::BigInt(1).type_name(), "bigint");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::Symbol("s".into()).type_name(), "symbol");
        assert_eq!(Value::Function("f".into()).type_name(), "function");
        assert_eq!(Value::Promise.type_name(), "promise");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(Default::default()).type_name(), "object");
        assert_eq!(Value::Map(vec![]).type_name(), "map");
        assert_eq!(Value::Set(vec![]).type_name(), "set");
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(Value::Number(1.0).kind(), Kind::Number);
        assert_ne!(Value::Number(1.0).kind(), Kind::BigInt);
        assert_eq!(Value::Map(vec![]).kind(), Kind::Map);
    }

    #[test]
    fn test_nullish() {
        assert!(Value::Null.is_nullish());
        assert!(Value::Undefined.is_nullish());
        assert!(!Value::Bool(false).is_nullish());
    }

    #[test]
    fn test_magnitude() {
        // Character count, not byte count.
        assert_eq!(Value::from("日本語").magnitude(), Some(3.0));
        assert_eq!(Value::Array(vec![Value::Null]).magnitude(), Some(1.0));
        assert_eq!(
            Value::Map(vec![(Value::from("k"), Value::Null)]).magnitude(),
            Some(1.0)
        );
        assert_eq!(Value::Set(vec![]).magnitude(), Some(0.0));
        assert_eq!(Value::Number(42.0).magnitude(), Some(42.0));
        assert_eq!(Value::BigInt(7).magnitude(), Some(7.0));
        assert_eq!(Value::Bool(true).magnitude(), None);
        assert_eq!(Value::Null.magnitude(), None);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Value::from("a"), Value::from("a"));
        assert_ne!(Value::from("a"), Value::from("b"));
        assert_ne!(Value::Number(1.0), Value::BigInt(1));
    }
}
