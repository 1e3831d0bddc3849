//! kuflow-forms - data access for JSON-Forms documents
//!
//! A form document is a JSON object exchanged with a workflow service.
//! This crate navigates it at dot paths (`"order.items.0.qty"`), reads and
//! writes typed values through those paths, and speaks the `kuflow-*:`
//! tagged reference strings embedded in documents. A sibling element-value
//! model covers the older list-based form fields.
//!
//! # Quick Start
//!
//! ```
//! use kuflow_forms::{FormValue, FileReference, get_property, set_property};
//!
//! let mut form = FormValue::default();
//!
//! // Writes create missing parents, objects or lists as the path dictates
//! set_property(&mut form, "order.items.0.qty", Some(3i64))?;
//!
//! // References serialize as tagged strings inside the document
//! let file = FileReference::new("ku:doc/abc", "application/pdf", 11111, "invoice.pdf");
//! set_property(&mut form, "order.invoice", Some(file.clone()))?;
//!
//! assert_eq!(get_property::<i64, _>(&form, "order.items.0.qty")?, 3);
//! assert_eq!(get_property::<FileReference, _>(&form, "order.invoice")?, file);
//! # Ok::<(), kuflow_forms::Error>(())
//! ```
//!
//! # Layout
//!
//! Paths, the document navigator and the error type live in
//! [`kuflow_forms_core`]; the reference codec family in
//! [`kuflow_forms_reference`]; the typed accessors and the element-value
//! model in [`kuflow_forms_access`]. Everything public is re-exported here.

pub use kuflow_forms_access::*;
pub use kuflow_forms_reference::*;

// The raw `serde_json::Value` navigator in `document` shares names with the
// typed accessors above, so core is re-exported selectively; the free
// functions stay reachable as `kuflow_forms::document::*`.
pub use kuflow_forms_core::{document, path, value_kind, Error, PathSegment, PropertyPath, Result};
