//! Property paths into a form document
//!
//! A [`PropertyPath`] is a dot-separated address into the nested JSON value a
//! form holder stores its data in (e.g. `user.name` or `users.0.name`).
//! Each dot-separated piece becomes a [`PathSegment`], classified at parse
//! time: a segment whose text is a non-negative integer is an index, every
//! other segment is an object key.
//!
//! Classification is purely lexical — the scheme has no escaping mechanism,
//! so a map key consisting of numeric text cannot be addressed as a key, and
//! literal dots inside keys cannot be expressed. This is inherent to the
//! wire format, not something this module tries to fix.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A segment in a property path
///
/// Paths are composed of key segments (object property access)
/// and index segments (array element access).
///
/// # Examples
///
/// ```
/// use kuflow_forms_core::path::PathSegment;
///
/// let key = PathSegment::Key("name".to_string());
/// let idx = PathSegment::Index(0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    /// Object key: `user`
    Key(String),
    /// Array index: `0`
    Index(usize),
}

impl PathSegment {
    /// Container kind this segment requires during traversal
    pub fn container_kind(&self) -> &'static str {
        match self {
            PathSegment::Key(_) => "object",
            PathSegment::Index(_) => "array",
        }
    }

    /// Classify a single path piece: index iff it matches `^[0-9]+$`
    fn classify(piece: &str) -> PathSegment {
        if !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()) {
            match piece.parse::<usize>() {
                Ok(index) => PathSegment::Index(index),
                // Digits overflowing usize stay a key; such an index could
                // never address a real list element anyway.
                Err(_) => PathSegment::Key(piece.to_string()),
            }
        } else {
            PathSegment::Key(piece.to_string())
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, "{}", k),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// A parsed dot-separated property path
///
/// Holds an ordered, non-empty sequence of [`PathSegment`]s. Parse one from
/// a string with [`FromStr`], or build one with [`PropertyPath::key`] /
/// [`PropertyPath::index`] and the `child_*` methods.
///
/// # Examples
///
/// ```
/// use kuflow_forms_core::path::{PathSegment, PropertyPath};
///
/// let path: PropertyPath = "users.0.name".parse().unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.segments()[1], PathSegment::Index(0));
/// assert_eq!(path.to_string(), "users.0.name");
///
/// let built = PropertyPath::key("users").child_index(0).child_key("name");
/// assert_eq!(built, path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyPath {
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Start a path with a key segment (builder pattern)
    ///
    /// Extend with [`PropertyPath::child_key`] / [`PropertyPath::child_index`]:
    /// `PropertyPath::key("a").child_index(0)` addresses `a.0`.
    pub fn key(key: impl Into<String>) -> Self {
        PropertyPath {
            segments: vec![PathSegment::Key(key.into())],
        }
    }

    /// Start a path with an index segment (builder pattern)
    ///
    /// Only useful against a document whose root is itself a list; the
    /// object-root operations reject a leading index.
    pub fn index(index: usize) -> Self {
        PropertyPath {
            segments: vec![PathSegment::Index(index)],
        }
    }

    /// Create a path from a non-empty vector of segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::InvalidPath {
                path: String::new(),
                reason: "path has no segments".to_string(),
            });
        }
        Ok(PropertyPath { segments })
    }

    /// Get the path segments
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Paths are never empty; always false
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the last segment
    pub fn last_segment(&self) -> &PathSegment {
        // Invariant: constructors reject empty segment lists.
        &self.segments[self.segments.len() - 1]
    }

    /// A copy of this path with an extra index segment appended
    ///
    /// Used by the accessor layer to address `path.<len>` when appending to
    /// the list stored at `path`.
    pub fn child_index(&self, index: usize) -> PropertyPath {
        let mut child = self.clone();
        child.segments.push(PathSegment::Index(index));
        child
    }

    /// A copy of this path with an extra key segment appended
    pub fn child_key(&self, key: impl Into<String>) -> PropertyPath {
        let mut child = self.clone();
        child.segments.push(PathSegment::Key(key.into()));
        child
    }
}

impl FromStr for PropertyPath {
    type Err = Error;

    /// Parse a dot-separated path
    ///
    /// Splits on `.`; empty pieces (leading/trailing/doubled dots) are
    /// skipped. A path that yields no segments at all is invalid.
    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<PathSegment> = s
            .split('.')
            .filter(|piece| !piece.is_empty())
            .map(PathSegment::classify)
            .collect();

        if segments.is_empty() {
            return Err(Error::InvalidPath {
                path: s.to_string(),
                reason: "path is empty".to_string(),
            });
        }

        Ok(PropertyPath { segments })
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
