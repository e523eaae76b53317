//! Accessor paths locating values inside nested structures.
//!
//! Issues carry a [`Path`] from the validation root to the offending
//! location, rendered in dotted/bracketed form such as `users[0].email`.

use std::fmt::{self, Display};

/// One step of an accessor path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field access (`user`, `email`).
    Field(String),
    /// A positional access (`[0]`, `[42]`).
    Index(usize),
}

/// An accessor path from the validation root to a nested location.
///
/// Paths are immutable: the push methods return a new path, so a parent
/// schema can hand the same base path to every child it recurses into.
///
/// # Example
///
/// ```rust
/// use verdict::Path;
///
/// let path = Path::root().push_field("users").push_index(0).push_field("email");
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path, identifying the validation root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// True if this path identifies the root (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The number of segments from the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Iterates over the segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        let path = Path::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_field_and_index_rendering() {
        assert_eq!(Path::root().push_field("a").to_string(), "a");
        assert_eq!(Path::root().push_index(2).to_string(), "[2]");
        assert_eq!(
            Path::root().push_field("a").push_field("b").to_string(),
            "a.b"
        );
        assert_eq!(
            Path::root().push_field("a").push_index(2).to_string(),
            "a[2]"
        );
        // An index directly under an index takes no dot.
        assert_eq!(
            Path::root().push_index(0).push_index(1).to_string(),
            "[0][1]"
        );
    }

    #[test]
    fn test_deep_nesting() {
        let path = Path::root()
            .push_field("body")
            .push_field("items")
            .push_index(3)
            .push_field("name");
        assert_eq!(path.to_string(), "body.items[3].name");
        assert_eq!(path.depth(), 4);
    }

    #[test]
    fn test_push_does_not_mutate() {
        let base = Path::root().push_field("users");
        let a = base.push_index(0);
        let b = base.push_index(1);
        assert_eq!(base.to_string(), "users");
        assert_eq!(a.to_string(), "users[0]");
        assert_eq!(b.to_string(), "users[1]");
    }

    #[test]
    fn test_structural_equality() {
        let a = Path::root().push_field("x").push_index(0);
        let b = Path::root().push_field("x").push_index(0);
        let c = Path::root().push_field("x").push_index(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_segments_iterator() {
        let path = Path::root().push_field("a").push_index(1);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments[0], &PathSegment::Field("a".to_string()));
        assert_eq!(segments[1], &PathSegment::Index(1));
    }
}
