//! Primitive (leaf) validators.
//!
//! Each is a [`Leaf`] with a fixed predicate over the closed value model.

use crate::schema::leaf::Leaf;
use crate::value::{Kind, Value};

pub(crate) fn string() -> Leaf {
    Leaf::new("string", |v| matches!(v, Value::String(_)))
}

pub(crate) fn number() -> Leaf {
    Leaf::new("number", |v| matches!(v, Value::Number(_)))
}

pub(crate) fn boolean() -> Leaf {
    Leaf::new("boolean", |v| matches!(v, Value::Bool(_)))
}

pub(crate) fn bigint() -> Leaf {
    Leaf::new("bigint", |v| matches!(v, Value::BigInt(_)))
}

pub(crate) fn symbol() -> Leaf {
    Leaf::new("symbol", |v| matches!(v, Value::Symbol(_)))
}

pub(crate) fn function() -> Leaf {
    Leaf::new("function", |v| matches!(v, Value::Function(_)))
}

pub(crate) fn date() -> Leaf {
    Leaf::new("date", |v| matches!(v, Value::Date(_)))
}

pub(crate) fn promise() -> Leaf {
    Leaf::new("promise", |v| matches!(v, Value::Promise))
}

// A number with a zero fractional part; infinities and NaN are rejected.
pub(crate) fn integer() -> Leaf {
    Leaf::new(
        "integer",
        |v| matches!(v, Value::Number(n) if n.is_finite() && n.fract() == 0.0),
    )
}

pub(crate) fn nullish() -> Leaf {
    Leaf::new("nullish", Value::is_nullish)
}

pub(crate) fn never() -> Leaf {
    Leaf::new("never", |_| false)
}

pub(crate) fn any() -> Leaf {
    Leaf::new("any", |_| true)
}

pub(crate) fn unknown() -> Leaf {
    Leaf::new("unknown", |_| true)
}

pub(crate) fn literal(expected: Value) -> Leaf {
    Leaf::new("literal", move |v| *v == expected)
}

// Tagged-variant dispatch in place of an instance-of test.
pub(crate) fn instance(kind: Kind) -> Leaf {
    Leaf::new("instance", move |v| v.kind() == kind)
}

pub(crate) fn enums(values: Vec<Value>) -> Leaf {
    Leaf::new("enum", move |v| values.contains(v))
}
