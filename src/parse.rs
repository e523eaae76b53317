//! Boundary wrappers that consume a schema and a value.
//!
//! The core never raises for invalid input; these wrappers are where an
//! issue list becomes a boolean ([`is`]), a `Result` ([`parse`]), or a
//! success/failure discriminated value ([`safe_parse`]).

use stillwater::Validation;

use crate::error::{Issues, Origin};
use crate::path::Path;
use crate::schema::Validate;
use crate::value::Value;

/// The error carried out of [`parse`] and [`safe_parse`].
///
/// The headline message is the *first* issue's message; the full issue
/// list remains accessible for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The first issue's message.
    pub message: String,
    /// Every issue the schema reported.
    pub issues: Issues,
}

impl ValidationError {
    /// Builds the error from a non-empty issue collection.
    pub fn new(issues: Issues) -> Self {
        Self {
            message: issues.first().message.clone(),
            issues,
        }
    }
}

/// True iff the value is valid under the schema.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Schema, Value};
///
/// assert!(is(&Schema::string(), &Value::from("hello")));
/// assert!(!is(&Schema::string(), &Value::from(1.0)));
/// ```
pub fn is<S: Validate + ?Sized>(schema: &S, value: &Value) -> bool {
    schema
        .check(value, &Path::root(), Origin::Value)
        .is_empty()
}

/// Returns the value unchanged if valid, otherwise the full error.
///
/// Validation never mutates the value; `transform` schemas only map
/// what their inner schema sees.
///
/// # Example
///
/// ```rust
/// use verdict::{parse, Schema, Value};
///
/// assert_eq!(parse(&Schema::string(), Value::from("ok")), Ok(Value::from("ok")));
///
/// let err = parse(&Schema::string(), Value::Null).unwrap_err();
/// assert_eq!(err.message, "Expected string, received null");
/// assert_eq!(err.issues.len(), 1);
/// ```
pub fn parse<S: Validate + ?Sized>(schema: &S, value: Value) -> Result<Value, ValidationError> {
    let issues = schema.check(&value, &Path::root(), Origin::Value);
    if issues.is_empty() {
        Ok(value)
    } else {
        Err(ValidationError::new(Issues::from_vec(issues)))
    }
}

/// The crash-free counterpart to [`parse`].
///
/// Callers branch on the success/failure discriminator instead of
/// relying on error propagation for control flow.
///
/// # Example
///
/// ```rust
/// use verdict::{safe_parse, Schema, Value};
///
/// let ok = safe_parse(&Schema::number(), Value::from(1.0));
/// assert!(ok.is_success());
///
/// let bad = safe_parse(&Schema::number(), Value::from("x"));
/// assert!(bad.is_failure());
/// ```
pub fn safe_parse<S: Validate + ?Sized>(
    schema: &S,
    value: Value,
) -> Validation<Value, ValidationError> {
    match parse(schema, value) {
        Ok(value) => Validation::Success(value),
        Err(error) => Validation::Failure(error),
    }
}
