//! The issue model: one structured record per validation failure.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::Path;
use crate::value::Value;

/// Whether an issue concerns a container's value or one of its keys.
///
/// Record entries share one path segment between their key check and
/// their value check; the origin is what tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// The failure concerns a value.
    #[default]
    Value,
    /// The failure concerns a container key.
    Key,
}

/// A single validation failure.
///
/// Issues compare structurally, so tests can assert on whole records.
///
/// # Example
///
/// ```rust
/// use verdict::{Issue, Origin, Path, Value};
///
/// let issue = Issue::new(
///     Path::root().push_field("age"),
///     Origin::Value,
///     "number",
///     Value::from("x"),
///     "Expected number, received string",
/// );
/// assert_eq!(issue.path.to_string(), "age");
/// assert_eq!(issue.expected, "number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Human-readable description of the failure.
    pub message: String,
    /// The schema's declared type tag (empty for ad-hoc custom checks).
    pub expected: String,
    /// The offending value, or a summary of it (e.g. a length count).
    pub received: Value,
    /// Accessor path from the validation root to the offending location.
    pub path: Path,
    /// Whether the failure concerns a value or a key.
    pub origin: Origin,
}

impl Issue {
    /// Creates an issue with every field supplied.
    pub fn new(
        path: Path,
        origin: Origin,
        expected: impl Into<String>,
        received: Value,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            expected: expected.into(),
            received,
            path,
            origin,
        }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };
        match self.origin {
            Origin::Value => write!(f, "{}: {}", location, self.message),
            Origin::Key => write!(f, "{} (key): {}", location, self.message),
        }
    }
}

impl std::error::Error for Issue {}

/// A non-empty collection of issues.
///
/// Wraps `NonEmptyVec` so a failure always carries at least one issue,
/// and implements `Semigroup` so failures from sibling validations can
/// be accumulated.
///
/// # Example
///
/// ```rust
/// use verdict::{Issue, Issues, Origin, Path, Value};
/// use stillwater::prelude::*;
///
/// let a = Issues::single(Issue::new(
///     Path::root().push_field("a"), Origin::Value, "string", Value::Null,
///     "Expected string, received null",
/// ));
/// let b = Issues::single(Issue::new(
///     Path::root().push_field("b"), Origin::Value, "number", Value::Null,
///     "Expected number, received null",
/// ));
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// A collection holding a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Builds a collection from a non-empty vec of issues.
    ///
    /// # Panics
    ///
    /// Panics if `issues` is empty. Callers convert only after checking
    /// that a validator actually failed.
    pub fn from_vec(issues: Vec<Issue>) -> Self {
        Self(NonEmptyVec::from_vec(issues).expect("Issues requires at least one issue"))
    }

    /// The number of issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first issue.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Iterates over the issues in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// All issues reported at the given path.
    pub fn at_path(&self, path: &Path) -> Vec<&Issue> {
        self.0.iter().filter(|i| &i.path == path).collect()
    }

    /// All issues with the given expected-type tag.
    pub fn with_expected(&self, tag: &str) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.expected == tag).collect()
    }

    /// Converts into a plain vec.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} issue(s):", self.len())?;
        for (i, issue) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// All fields are owned types, so these hold automatically; the assertions
// keep that true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
    assert_send::<Issues>();
    assert_sync::<Issues>();
};
