//! Error types for form document access
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All failures are deterministic, pure functions of the document and the
//! path: there is no I/O here and nothing is retried.

use thiserror::Error;

/// Result type alias for form document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for property path operations over a form document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or empty property path string
    #[error("invalid property path '{path}': {reason}")]
    InvalidPath {
        /// The offending path string
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// A `get` style operation was called on a path that does not resolve
    #[error("property '{path}' doesn't exist")]
    PropertyMissing {
        /// The full path that failed to resolve
        path: String,
    },

    /// A write path's segment addressed an existing container of the wrong kind
    ///
    /// Silently overwriting the container could destroy sibling data, so this
    /// is never auto-corrected.
    #[error("path conflict at segment '{segment}' of '{path}': expected {expected}, found {found}")]
    PathConflict {
        /// The full path being written
        path: String,
        /// The segment where the conflict occurred
        segment: String,
        /// Container kind required by the segment
        expected: &'static str,
        /// Container kind actually present
        found: &'static str,
    },

    /// The stored raw value cannot be decoded into the requested type
    #[error("property '{path}' is not a {expected}: found {found}")]
    TypeMismatch {
        /// The path of the undecodable value
        path: String,
        /// The requested type
        expected: &'static str,
        /// Description of what was stored
        found: String,
    },

    /// A list index strictly beyond the current length was addressed
    ///
    /// Writes support in-bounds overwrite and append-at-end only; indices
    /// further past the end are rejected rather than padded with nulls.
    #[error("index {index} out of bounds at '{path}' (list length {len})")]
    IndexOutOfBounds {
        /// The full path being accessed
        path: String,
        /// The requested index
        index: usize,
        /// The list length at the time of access
        len: usize,
    },
}
