//! Combinators: validators over other validators.
//!
//! Combinators change pass/fail semantics without inspecting element
//! values themselves:
//!
//! - `or`: every alternative is evaluated; issues surface only when all
//!   of them fail, and then the caller gets every alternative's issues.
//! - `and`: every schema is evaluated unconditionally and all issues
//!   are concatenated.
//! - `not`: valid iff the inner schema fails.
//! - `optional` / `nullable`: admit `Undefined` / `Null`, otherwise
//!   delegate with path and origin forwarded unchanged.
//! - `lazy`: resolves its thunk per call, which is what makes
//!   self-referential schemas possible.
//! - `transform`: maps the value before delegating.

use std::sync::Arc;

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::schema::leaf::type_issue;
use crate::schema::traits::{SchemaRef, Validate};
use crate::value::Value;

type Resolver = Arc<dyn Fn() -> SchemaRef + Send + Sync>;
type Mapper = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A validator built from other validators.
///
/// Created via the [`Schema`](crate::Schema) combinator constructors.
#[derive(Clone)]
pub enum Combinator {
    /// `Undefined` passes; anything else delegates to the inner schema.
    Optional(SchemaRef),

    /// `Null` passes; anything else delegates to the inner schema.
    Nullable(SchemaRef),

    /// Passes when at least one alternative passes. When every
    /// alternative fails, the issues of *all* alternatives are returned
    /// so callers can see how each branch was rejected; no single "best
    /// match" is selected.
    Or(Vec<SchemaRef>),

    /// Passes when every schema passes. All schemas run even after a
    /// failure, and their issues are concatenated.
    And(Vec<SchemaRef>),

    /// Passes when the inner schema fails. The inner schema's own
    /// issues are discarded; inner success reports one generic issue
    /// tagged `"not"`.
    Not(SchemaRef),

    /// Defers schema resolution until a value is actually validated.
    ///
    /// The sole mechanism for self-referential schemas: resolution
    /// happens per call, so recursion terminates when the input value
    /// bottoms out, independent of schema self-reference.
    Lazy(Resolver),

    /// Maps the value before delegating to the inner schema. The
    /// caller-visible value is never altered; only the inner schema
    /// sees the mapped value.
    Transform { schema: SchemaRef, map: Mapper },
}

impl Validate for Combinator {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        match self {
            Combinator::Optional(inner) => {
                if matches!(value, Value::Undefined) {
                    Vec::new()
                } else {
                    inner.check(value, path, origin)
                }
            }

            Combinator::Nullable(inner) => {
                if matches!(value, Value::Null) {
                    Vec::new()
                } else {
                    inner.check(value, path, origin)
                }
            }

            Combinator::Or(alternatives) => {
                let results: Vec<Vec<Issue>> = alternatives
                    .iter()
                    .map(|schema| schema.check(value, path, origin))
                    .collect();
                let failed = results.iter().filter(|r| !r.is_empty()).count();
                if failed == alternatives.len() {
                    results.into_iter().flatten().collect()
                } else {
                    Vec::new()
                }
            }

            Combinator::And(schemas) => schemas
                .iter()
                .flat_map(|schema| schema.check(value, path, origin))
                .collect(),

            Combinator::Not(inner) => {
                if inner.check(value, path, origin).is_empty() {
                    vec![type_issue("not", None, value, path, origin)]
                } else {
                    Vec::new()
                }
            }

            Combinator::Lazy(resolve) => resolve().check(value, path, origin),

            Combinator::Transform { schema, map } => schema.check(&map(value), path, origin),
        }
    }
}
