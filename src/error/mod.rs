//! Issue types for validation failures.
//!
//! Invalid input is always a returned value, never a panic: validators
//! return [`Issue`] lists, and only the boundary wrappers turn them into
//! an error.

mod issue;

pub use issue::{Issue, Issues, Origin};
