//! Composable runtime validation for dynamic values.
//!
//! A schema is a pure function from a value, a path, and an origin to a
//! list of issues. An empty list means the value is valid; a non-empty
//! list describes *every* violation found, not just the first. Schemas
//! never mutate the value and never panic on invalid input, so building
//! a schema once and sharing it across threads is always safe.
//!
//! # Quick start
//!
//! ```rust
//! use verdict::{safe_parse, Schema, Value};
//! use serde_json::json;
//!
//! let user = Schema::object()
//!     .field("name", Schema::string())
//!     .field("age", Schema::number().refine(Schema::min(0.0)))
//!     .field("email", Schema::optional(Schema::string()));
//!
//! let result = safe_parse(&user, Value::from(json!({
//!     "name": "Alice",
//!     "age": 30,
//! })));
//! assert!(result.is_success());
//!
//! let result = safe_parse(&user, Value::from(json!({
//!     "name": 42,
//!     "age": -1,
//! })));
//! match result {
//!     stillwater::Validation::Failure(error) => {
//!         // Both violations are reported in one pass.
//!         assert_eq!(error.issues.len(), 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Composition
//!
//! Composite schemas ([`Schema::object`], [`Schema::array`],
//! [`Schema::tuple`], [`Schema::map`], [`Schema::set`],
//! [`Schema::record`]) hold child schemas and extend the path as they
//! descend, so every issue pinpoints where in the value it arose.
//! Combinators ([`Schema::or`], [`Schema::and`], [`Schema::not`],
//! [`Schema::optional`], [`Schema::nullable`], [`Schema::lazy`],
//! [`Schema::transform`]) wrap schemas without inspecting structure.
//! [`Schema::lazy`] defers resolution to validation time, which is what
//! makes recursive schemas possible.
//!
//! # Boundary
//!
//! The wrappers [`is`], [`parse`], and [`safe_parse`] consume a schema
//! and a value at the edge of the system: a boolean, a `Result`, or a
//! [`stillwater::Validation`] that accumulates failures instead of
//! propagating the first one.

pub mod error;
mod interop;
mod parse;
mod path;
mod registry;
mod schema;
mod value;

pub use error::{Issue, Issues, Origin};
pub use parse::{is, parse, safe_parse, ValidationError};
pub use path::{Path, PathSegment};
pub use registry::{Reference, RegistryError, SchemaRegistry};
pub use schema::{
    ArraySchema, BoundSchema, Combinator, Leaf, MapSchema, ObjectSchema, RecordSchema, Schema,
    SchemaRef, SetSchema, TupleSchema, Validate,
};
pub use value::{Kind, Value};

/// Alias for the accumulating validation result used at the boundary.
pub type ValidationResult<T> = stillwater::Validation<T, ValidationError>;
