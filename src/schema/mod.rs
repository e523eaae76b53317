//! Schema constructors.
//!
//! Schemas are built top-down by composing constructors (an object
//! schema wraps its field schemas, and so on); at validation time
//! control flows bottom-up as each validator invokes its children and
//! flattens their issues into its own.
//!
//! # Example
//!
//! ```rust
//! use verdict::{is, Schema, Value};
//! use serde_json::json;
//!
//! let user = Schema::object()
//!     .field("name", Schema::string())
//!     .field("age", Schema::number())
//!     .field("email", Schema::optional(Schema::string()));
//!
//! assert!(is(&user, &Value::from(json!({"name": "Alice", "age": 30}))));
//! assert!(!is(&user, &Value::from(json!({"name": 1, "age": "x"}))));
//! ```

mod array;
mod collections;
mod combinators;
mod constraint;
mod leaf;
mod object;
mod primitive;
mod traits;

use std::sync::Arc;

pub use array::{ArraySchema, TupleSchema};
pub use collections::{MapSchema, SetSchema};
pub use combinators::Combinator;
pub use constraint::BoundSchema;
pub use leaf::Leaf;
pub use object::{ObjectSchema, RecordSchema};
pub use traits::{SchemaRef, Validate};

use crate::value::{Kind, Value};

/// Entry point for creating validation schemas.
///
/// Every constructor returns an immutable validator: created once when
/// the schema is declared, reused across arbitrarily many validation
/// calls, and freely shareable (children may appear under several
/// parents).
pub struct Schema;

impl Schema {
    /// Builds a leaf validator from a type tag and a predicate.
    ///
    /// The foundation every primitive routes through. The returned
    /// [`Leaf`] can be configured with a message override
    /// ([`Leaf::error`]) and extension validations ([`Leaf::refine`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{is, Schema, Value};
    ///
    /// let short = Schema::define("string", |v: &Value| matches!(v, Value::String(_)));
    /// assert!(is(&short, &Value::from("x")));
    /// assert!(!is(&short, &Value::Null));
    /// ```
    pub fn define(
        tag: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Leaf {
        Leaf::new(tag, predicate)
    }

    /// A character-sequence value.
    pub fn string() -> Leaf {
        primitive::string()
    }

    /// A double-precision number.
    pub fn number() -> Leaf {
        primitive::number()
    }

    /// A boolean.
    pub fn boolean() -> Leaf {
        primitive::boolean()
    }

    /// An arbitrary-magnitude integer value.
    pub fn bigint() -> Leaf {
        primitive::bigint()
    }

    /// A symbol.
    pub fn symbol() -> Leaf {
        primitive::symbol()
    }

    /// A callable handle.
    pub fn function() -> Leaf {
        primitive::function()
    }

    /// A point in time.
    pub fn date() -> Leaf {
        primitive::date()
    }

    /// A deferred-computation handle.
    pub fn promise() -> Leaf {
        primitive::promise()
    }

    /// A number with a zero fractional part.
    pub fn integer() -> Leaf {
        primitive::integer()
    }

    /// `Null` or `Undefined`.
    pub fn nullish() -> Leaf {
        primitive::nullish()
    }

    /// Rejects every value.
    pub fn never() -> Leaf {
        primitive::never()
    }

    /// Accepts every value.
    pub fn any() -> Leaf {
        primitive::any()
    }

    /// Accepts every value (alias of [`Schema::any`] with its own tag).
    pub fn unknown() -> Leaf {
        primitive::unknown()
    }

    /// Exactly the given value, by structural equality.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{is, Schema, Value};
    ///
    /// let version = Schema::literal(Value::from(2i64));
    /// assert!(is(&version, &Value::from(2i64)));
    /// assert!(!is(&version, &Value::from(3i64)));
    /// ```
    pub fn literal(expected: impl Into<Value>) -> Leaf {
        primitive::literal(expected.into())
    }

    /// A value of the given kind: explicit tagged dispatch in place of
    /// an instance-of test.
    pub fn instance(kind: Kind) -> Leaf {
        primitive::instance(kind)
    }

    /// A member of the given value set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{is, Schema, Value};
    ///
    /// let direction = Schema::enums(vec![Value::from("north"), Value::from("south")]);
    /// assert!(is(&direction, &Value::from("north")));
    /// assert!(!is(&direction, &Value::from("east")));
    /// ```
    pub fn enums(values: Vec<Value>) -> Leaf {
        primitive::enums(values)
    }

    /// An object with declared fields; keys not declared are ignored.
    pub fn object() -> ObjectSchema {
        ObjectSchema::new(false)
    }

    /// An exact object: any key not declared is rejected with a single
    /// key-origin issue, and field validation is skipped entirely.
    pub fn strict() -> ObjectSchema {
        ObjectSchema::new(true)
    }

    /// An object of homogeneous key/value entries.
    pub fn record(key: impl Validate + 'static, value: impl Validate + 'static) -> RecordSchema {
        RecordSchema::new(key, value)
    }

    /// An ordered sequence of values matching one item schema.
    pub fn array(item: impl Validate + 'static) -> ArraySchema {
        ArraySchema::new(item)
    }

    /// A fixed-length sequence with one schema per position.
    pub fn tuple(items: Vec<Box<dyn Validate>>) -> TupleSchema {
        TupleSchema::new(items)
    }

    /// A map container with key and value schemas.
    pub fn map(key: impl Validate + 'static, value: impl Validate + 'static) -> MapSchema {
        MapSchema::new(key, value)
    }

    /// A set container with a member schema.
    pub fn set(member: impl Validate + 'static) -> SetSchema {
        SetSchema::new(member)
    }

    /// `Undefined` passes; anything else is delegated unchanged.
    pub fn optional(schema: impl Validate + 'static) -> Combinator {
        Combinator::Optional(Arc::new(schema))
    }

    /// `Null` passes; anything else is delegated unchanged.
    pub fn nullable(schema: impl Validate + 'static) -> Combinator {
        Combinator::Nullable(Arc::new(schema))
    }

    /// At least one alternative must pass.
    ///
    /// When every alternative fails, the issues of all of them are
    /// returned so the caller sees how each branch was rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Origin, Path, Schema, Validate, Value};
    ///
    /// let id = Schema::or(vec![
    ///     Box::new(Schema::string()) as Box<dyn Validate>,
    ///     Box::new(Schema::number()),
    /// ]);
    /// assert!(id.check(&Value::from("x"), &Path::root(), Origin::Value).is_empty());
    /// assert_eq!(id.check(&Value::Bool(true), &Path::root(), Origin::Value).len(), 2);
    /// ```
    pub fn or(schemas: Vec<Box<dyn Validate>>) -> Combinator {
        Combinator::Or(erase(schemas))
    }

    /// Every schema must pass; all of them run even after a failure.
    pub fn and(schemas: Vec<Box<dyn Validate>>) -> Combinator {
        Combinator::And(erase(schemas))
    }

    /// Valid iff the inner schema fails.
    pub fn not(schema: impl Validate + 'static) -> Combinator {
        Combinator::Not(Arc::new(schema))
    }

    /// Defers schema resolution until validation time.
    ///
    /// The sole mechanism for self-referential schemas: the thunk runs
    /// per call, so a schema function may refer to itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use verdict::{is, Schema, SchemaRef, Value};
    /// use serde_json::json;
    ///
    /// fn node() -> SchemaRef {
    ///     Arc::new(
    ///         Schema::object()
    ///             .field("id", Schema::number())
    ///             .field("children", Schema::array(Schema::lazy(node))),
    ///     )
    /// }
    ///
    /// let tree = json!({"id": 1, "children": [{"id": 2, "children": []}]});
    /// assert!(is(&node(), &Value::from(tree)));
    /// ```
    pub fn lazy(resolve: impl Fn() -> SchemaRef + Send + Sync + 'static) -> Combinator {
        Combinator::Lazy(Arc::new(resolve))
    }

    /// Maps the value before delegating to the inner schema.
    ///
    /// A pre-check mapping only: the caller-visible value is never
    /// altered.
    pub fn transform(
        schema: impl Validate + 'static,
        map: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Combinator {
        Combinator::Transform {
            schema: Arc::new(schema),
            map: Arc::new(map),
        }
    }

    /// A size/magnitude lower bound; see [`BoundSchema`].
    pub fn min(limit: f64) -> BoundSchema {
        BoundSchema::min(limit)
    }

    /// A size/magnitude upper bound; see [`BoundSchema`].
    pub fn max(limit: f64) -> BoundSchema {
        BoundSchema::max(limit)
    }

    /// Wraps an arbitrary predicate as a leaf with an empty type tag.
    pub fn custom(
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Leaf {
        constraint::custom(predicate, message)
    }

    /// A string matching the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for an invalid pattern.
    pub fn pattern(source: &str) -> Result<Leaf, regex::Error> {
        constraint::pattern(source)
    }
}

fn erase(schemas: Vec<Box<dyn Validate>>) -> Vec<SchemaRef> {
    schemas
        .into_iter()
        .map(|schema| Arc::new(schema) as SchemaRef)
        .collect()
}
