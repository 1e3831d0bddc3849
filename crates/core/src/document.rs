//! Document navigation and in-place mutation
//!
//! The document is a plain [`serde_json::Value`] tree owned by whatever
//! holder object embeds it. This module walks a parsed [`PropertyPath`]
//! through that tree and either:
//!
//! - reads the addressed value ([`find_property`] never errors on a miss,
//!   [`get_property`] does), or
//! - writes/removes it in place ([`update_property`]), creating missing
//!   intermediate containers on the way down (auto-vivification).
//!
//! # Write semantics
//!
//! - A missing or `null` location where a segment must descend is
//!   materialized as an empty array (index segment) or empty object (key
//!   segment).
//! - An existing container of the wrong kind for its segment is a
//!   [`Error::PathConflict`]; it is never replaced.
//! - An index equal to the current list length appends; anything further
//!   past the end is [`Error::IndexOutOfBounds`] — lists are never padded
//!   with nulls.
//! - Writing `None` removes the addressed entry: map keys are deleted,
//!   list elements are removed with a left shift so no hole remains.
//!
//! # Read semantics
//!
//! A stored JSON `null` reads as "not found", matching the write side where
//! removal is expressed as writing `null`.

use crate::error::{Error, Result};
use crate::path::{PathSegment, PropertyPath};
use serde_json::{Map, Value};

// =============================================================================
// Read
// =============================================================================

/// Human-readable kind of a JSON value, for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walk `segments` down from `current`, total over every kind of miss.
fn walk<'a>(mut current: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    for segment in segments {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key)?,
            (PathSegment::Index(index), Value::Array(list)) => list.get(*index)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Find the value addressed by `path` within a document
///
/// Total over misses: a missing key, an out-of-bounds index, a stored
/// `null`, or a segment applied to the wrong container kind all yield
/// `None`, never an error.
///
/// # Examples
///
/// ```
/// use kuflow_forms_core::{find_property, PropertyPath};
///
/// let doc = serde_json::json!({"users": [{"name": "Alice"}]});
/// let path: PropertyPath = "users.0.name".parse().unwrap();
/// assert_eq!(find_property(&doc, &path).and_then(|v| v.as_str()), Some("Alice"));
///
/// let missing: PropertyPath = "users.7.name".parse().unwrap();
/// assert!(find_property(&doc, &missing).is_none());
/// ```
pub fn find_property<'a>(root: &'a Value, path: &PropertyPath) -> Option<&'a Value> {
    walk(root, path.segments())
}

/// Find the value addressed by `path` below an object root
///
/// Same contract as [`find_property`], for callers that hold the document
/// data as a top-level JSON object (the shape form holders store). An index
/// first segment can never match an object root and yields `None`.
pub fn find_object_property<'a>(
    root: &'a Map<String, Value>,
    path: &PropertyPath,
) -> Option<&'a Value> {
    let (first, rest) = path.segments().split_first()?;
    let entry = match first {
        PathSegment::Key(key) => root.get(key)?,
        PathSegment::Index(_) => return None,
    };
    if entry.is_null() {
        return None;
    }
    walk(entry, rest)
}

/// Get the value addressed by `path`, erroring when absent
///
/// Same traversal as [`find_property`], but a miss is
/// [`Error::PropertyMissing`] naming the full path. Use wherever the caller
/// asserts the value must exist.
pub fn get_property<'a>(root: &'a Value, path: &PropertyPath) -> Result<&'a Value> {
    find_property(root, path).ok_or_else(|| Error::PropertyMissing {
        path: path.to_string(),
    })
}

/// Object-root variant of [`get_property`]
pub fn get_object_property<'a>(
    root: &'a Map<String, Value>,
    path: &PropertyPath,
) -> Result<&'a Value> {
    find_object_property(root, path).ok_or_else(|| Error::PropertyMissing {
        path: path.to_string(),
    })
}

// =============================================================================
// Write
// =============================================================================

/// Write or remove the value addressed by `path`, in place
///
/// `Some(value)` writes (key upsert, in-bounds index overwrite, or append
/// when the index equals the list length). `None` removes: the map entry is
/// deleted (a no-op when already absent), or the list element is removed
/// with a left shift.
///
/// Missing intermediate containers are created on the way down; see the
/// module docs for the conflict and bounds rules.
///
/// # Examples
///
/// ```
/// use kuflow_forms_core::{update_property, PropertyPath};
///
/// let mut doc = serde_json::json!({});
/// let path: PropertyPath = "users.0.name".parse().unwrap();
/// update_property(&mut doc, &path, Some("Alice".into())).unwrap();
/// assert_eq!(doc, serde_json::json!({"users": [{"name": "Alice"}]}));
///
/// update_property(&mut doc, &"users.0".parse().unwrap(), None).unwrap();
/// assert_eq!(doc, serde_json::json!({"users": []}));
/// ```
pub fn update_property(root: &mut Value, path: &PropertyPath, value: Option<Value>) -> Result<()> {
    update_walk(root, path.segments(), value, path)
}

/// Object-root variant of [`update_property`]
///
/// The root is the document's top-level object, so a leading index segment
/// is a [`Error::PathConflict`] rather than an auto-created list.
pub fn update_object_property(
    root: &mut Map<String, Value>,
    path: &PropertyPath,
    value: Option<Value>,
) -> Result<()> {
    let Some((first, rest)) = path.segments().split_first() else {
        return Err(Error::InvalidPath {
            path: path.to_string(),
            reason: "path has no segments".to_string(),
        });
    };

    let key = match first {
        PathSegment::Key(key) => key,
        PathSegment::Index(_) => {
            return Err(Error::PathConflict {
                path: path.to_string(),
                segment: first.to_string(),
                expected: "array",
                found: "object",
            });
        }
    };

    if rest.is_empty() {
        match value {
            Some(value) => {
                root.insert(key.clone(), value);
            }
            None => {
                root.remove(key);
            }
        }
        return Ok(());
    }

    let entry = root.entry(key.clone()).or_insert(Value::Null);
    update_walk(entry, rest, value, path)
}

fn update_walk(
    root: &mut Value,
    segments: &[PathSegment],
    value: Option<Value>,
    full_path: &PropertyPath,
) -> Result<()> {
    let mut value = value;
    let mut current = root;

    for (depth, segment) in segments.iter().enumerate() {
        let is_last = depth + 1 == segments.len();

        // Auto-vivification: the container a segment applies to is created
        // from that segment's own kind.
        if current.is_null() {
            *current = match segment {
                PathSegment::Key(_) => Value::Object(Map::new()),
                PathSegment::Index(_) => Value::Array(Vec::new()),
            };
        }

        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => {
                if is_last {
                    match value.take() {
                        Some(value) => {
                            map.insert(key.clone(), value);
                        }
                        None => {
                            map.remove(key);
                        }
                    }
                    return Ok(());
                }
                map.entry(key.clone()).or_insert(Value::Null)
            }
            (PathSegment::Index(index), Value::Array(list)) => {
                if is_last {
                    return match value.take() {
                        Some(value) if *index < list.len() => {
                            list[*index] = value;
                            Ok(())
                        }
                        Some(value) if *index == list.len() => {
                            list.push(value);
                            Ok(())
                        }
                        None if *index < list.len() => {
                            list.remove(*index);
                            Ok(())
                        }
                        _ => Err(Error::IndexOutOfBounds {
                            path: full_path.to_string(),
                            index: *index,
                            len: list.len(),
                        }),
                    };
                }
                if *index < list.len() {
                    &mut list[*index]
                } else if *index == list.len() {
                    list.push(Value::Null);
                    &mut list[*index]
                } else {
                    return Err(Error::IndexOutOfBounds {
                        path: full_path.to_string(),
                        index: *index,
                        len: list.len(),
                    });
                }
            }
            (segment, other) => {
                return Err(Error::PathConflict {
                    path: full_path.to_string(),
                    segment: segment.to_string(),
                    expected: segment.container_kind(),
                    found: value_kind(other),
                });
            }
        };
    }

    Ok(())
}
