//! Tagged reference string codecs
//!
//! Form documents embed references to files, principals and groups as plain
//! strings with a `tag:key=value;...;` shape, for example:
//!
//! ```text
//! kuflow-file:uri=ku%3Adummy%2Fxxx-ssss-yyyy;type=application%2Fpdf;size=11111;name=dummy.pdf;
//! ```
//!
//! Each reference kind here parses and re-serializes that shape. Parsing is
//! tolerant (`Option`-returning, case-insensitive keys and tags, duplicate
//! keys resolved last-wins); serialization is canonical, so a parse followed
//! by [`to_source`](FileReference::to_source) normalizes the string. All
//! reference types serialize through [`serde`] as the tagged string itself,
//! which lets them sit directly inside JSON documents.
//!
//! [`TaggedString`] is the shared key/value layer the typed codecs build on,
//! and [`Reference`] dispatches an unknown string across every known tag.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod group;
pub mod principal;
pub mod reference;
pub mod tagged;

pub use file::{FileReference, FILE_TAG};
pub use group::{GroupReference, GROUP_TAG};
pub use principal::{
    PrincipalReference, PrincipalType, PrincipalUserReference, PRINCIPAL_TAG, PRINCIPAL_USER_TAG,
};
pub use reference::Reference;
pub use tagged::{MalformedReference, TaggedString};
