//! Constraint validators layered onto existing schemas via `refine`.

use regex::Regex;

use crate::error::{Issue, Origin};
use crate::path::Path;
use crate::schema::leaf::Leaf;
use crate::schema::traits::Validate;
use crate::value::Value;

/// Which end of the range a bound constrains.
#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
}

/// A polymorphic size/magnitude bound.
///
/// Compares character count for strings, length for arrays,
/// cardinality for maps and sets, and the numeric value itself for
/// numbers and bigints. Kinds with neither a size nor a magnitude
/// always violate the bound.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
/// use serde_json::json;
///
/// let username = Schema::string().refine(Schema::min(3.0));
/// assert!(is(&username, &Value::from("abc")));
/// assert!(!is(&username, &Value::from("ab")));
///
/// let small = Schema::number().refine(Schema::max(10.0));
/// assert!(is(&small, &Value::from(7.0)));
/// assert!(!is(&small, &Value::from(11.0)));
/// ```
#[derive(Clone)]
pub struct BoundSchema {
    bound: Bound,
    limit: f64,
    message: Option<String>,
}

impl BoundSchema {
    pub(crate) fn min(limit: f64) -> Self {
        Self {
            bound: Bound::Min,
            limit,
            message: None,
        }
    }

    pub(crate) fn max(limit: f64) -> Self {
        Self {
            bound: Bound::Max,
            limit,
            message: None,
        }
    }

    /// Overrides the generated violation message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn tag(&self) -> &'static str {
        match self.bound {
            Bound::Min => "min",
            Bound::Max => "max",
        }
    }

    fn holds(&self, magnitude: f64) -> bool {
        match self.bound {
            Bound::Min => magnitude >= self.limit,
            Bound::Max => magnitude <= self.limit,
        }
    }

    fn describe(&self, value: &Value) -> String {
        let direction = match self.bound {
            Bound::Min => "at least",
            Bound::Max => "at most",
        };
        match value.magnitude() {
            Some(m) => format!("Expected {} {}, received {}", direction, self.limit, m),
            None => format!(
                "Expected {} {}, received {}",
                direction,
                self.limit,
                value.type_name()
            ),
        }
    }
}

impl Validate for BoundSchema {
    fn check(&self, value: &Value, path: &Path, origin: Origin) -> Vec<Issue> {
        let satisfied = value.magnitude().is_some_and(|m| self.holds(m));
        if satisfied {
            return Vec::new();
        }
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| self.describe(value));
        vec![Issue::new(
            path.clone(),
            origin,
            self.tag(),
            value.clone(),
            message,
        )]
    }
}

/// Wraps an arbitrary predicate as a leaf with an empty type tag.
///
/// A panic inside the predicate is a programming defect in the
/// predicate and propagates to the caller unchanged.
pub(crate) fn custom(
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
) -> Leaf {
    Leaf::new("", predicate).error(message)
}

/// A string whose contents match the given pattern.
///
/// An invalid pattern is a construction-time error, never a validation
/// issue.
pub(crate) fn pattern(source: &str) -> Result<Leaf, regex::Error> {
    let regex = Regex::new(source)?;
    Ok(
        Leaf::new("pattern", move |v| {
            matches!(v, Value::String(s) if regex.is_match(s))
        })
        .error(format!("Expected string matching '{}'", source)),
    )
}
