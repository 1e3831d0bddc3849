//! Core path and navigation types for form documents
//!
//! This crate defines the foundational pieces the accessor layers build on:
//! - PropertyPath / PathSegment: dot-separated addresses into a document
//! - Document navigation: find/get/update with auto-vivification
//! - Error: the error taxonomy for path operations
//!
//! The document itself is a plain [`serde_json::Value`] tree; this crate
//! never copies it, only navigates and mutates it in place.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod path;

// Re-export commonly used types and functions
pub use document::{
    find_object_property, find_property, get_object_property, get_property,
    update_object_property, update_property, value_kind,
};
pub use error::{Error, Result};
pub use path::{PathSegment, PropertyPath};
