//! The leaf constructor every schema routes through.
//!
//! [`Leaf`] binds a type tag to a predicate, an optional message
//! override, and an ordered extension list of secondary validators. The
//! same mechanism serves both "is it the right shape" (the predicate)
//! and "are its parts right" (the extensions), so primitives and
//! composites alike share one issue-producing chokepoint.

use std::sync::Arc;

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::schema::traits::{SchemaRef, Validate};
use crate::value::Value;

/// Builds the single issue reported when a type or shape gate fails.
///
/// Every predicate failure in the crate, container shape gates
/// included, goes through here so message generation stays uniform:
/// `"Expected <tag>, received <runtime-type-name>"` unless overridden.
pub(crate) fn type_issue(
    tag: &str,
    message: Option<&str>,
    value: &Value,
    path: &Path,
    origin: Origin,
) -> Issue {
    let message = match message {
        Some(m) => m.to_string(),
        None => format!("Expected {}, received {}", tag, value.type_name()),
    };
    Issue::new(path.clone(), origin, tag, value.clone(), message)
}

/// A leaf validator: a type tag plus a predicate, with optional message
/// override and extension validations.
///
/// Created via [`Schema::define`](crate::Schema::define) or one of the
/// primitive constructors. If the predicate rejects the value, exactly
/// one issue is returned. If it accepts, every extension runs against
/// the same value/path/origin and their issues are concatenated in
/// insertion order (no short-circuit).
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
///
/// let even = Schema::define("number", |v| matches!(v, Value::Number(_)))
///     .refine(Schema::custom(
///         |v| matches!(v, Value::Number(n) if n % 2.0 == 0.0),
///         "must be even",
///     ));
/// assert!(is(&even, &Value::from(4.0)));
/// assert!(!is(&even, &Value::from(3.0)));
/// ```
#[derive(Clone)]
pub struct Leaf {
    tag: String,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
    message: Option<String>,
    validations: Vec<SchemaRef>,
}

impl Leaf {
    /// Creates a leaf from a type tag and a predicate.
    pub fn new(
        tag: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            tag: tag.into(),
            predicate: Arc::new(predicate),
            message: None,
            validations: Vec::new(),
        }
    }

    /// Overrides the generated message for predicate failures.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Appends a secondary validator that runs after the predicate passes.
    ///
    /// Extensions run in insertion order; all of them run even when an
    /// earlier one reports issues.
    pub fn refine(mut self, validation: impl Validate + 'static) -> Self {
        self.validations.push(Arc::new(validation));
        self
    }

    /// The type tag this leaf reports in issues.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Validate for Leaf {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        if !(self.predicate)(value) {
            return vec![type_issue(
                &self.tag,
                self.message.as_deref(),
                value,
                path,
                origin,
            )];
        }
        self.validations
            .iter()
            .flat_map(|v| v.check(value, path, origin))
            .collect()
    }
}
