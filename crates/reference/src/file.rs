//! File reference codec (`kuflow-file:`)

use crate::tagged::{MalformedReference, TaggedString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Tag prefix for file reference strings
pub const FILE_TAG: &str = "kuflow-file";

/// A document-embedded reference to an uploaded file
///
/// Serialized as a single tagged string inside the form document:
///
/// ```text
/// kuflow-file:uri=<pct>;type=<pct>;size=<digits>;name=<pct>;[original-name=<pct>;][extras...]
/// ```
///
/// `uri`, `type`, `size` and `name` are required; `original-name` is
/// optional. Unlike the other reference kinds, unknown key/value pairs are
/// retained in [`FileReference::metadata`] and re-emitted on serialize, so
/// forward-compatible extra metadata survives a round-trip.
///
/// # Examples
///
/// ```
/// use kuflow_forms_reference::FileReference;
///
/// let file = FileReference::new("ku:dummy/xxx-ssss-yyyy", "application/pdf", 11111, "dummy.pdf");
/// let raw = file.to_source();
/// assert_eq!(
///     raw,
///     "kuflow-file:uri=ku%3Adummy%2Fxxx-ssss-yyyy;type=application%2Fpdf;size=11111;name=dummy.pdf;"
/// );
/// assert_eq!(FileReference::parse(&raw), Some(file));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FileReference {
    /// Storage URI of the file contents
    pub uri: String,
    /// Media type (`type` on the wire)
    pub content_type: String,
    /// File size in bytes
    pub size: u64,
    /// File name presented to the user
    pub name: String,
    /// Name the file had when originally uploaded, when different
    pub original_name: Option<String>,
    /// Unknown key/value pairs, keys lower-cased; round-trips verbatim
    pub metadata: BTreeMap<String, String>,
}

impl FileReference {
    /// Create a file reference with the required fields
    pub fn new(
        uri: impl Into<String>,
        content_type: impl Into<String>,
        size: u64,
        name: impl Into<String>,
    ) -> Self {
        FileReference {
            uri: uri.into(),
            content_type: content_type.into(),
            size,
            name: name.into(),
            original_name: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Parse a `kuflow-file:` tagged string
    ///
    /// Returns `None` when the prefix, a required key, or the size format
    /// is wrong; never errors. Unknown keys land in `metadata`.
    pub fn parse(source: &str) -> Option<FileReference> {
        let mut tagged = TaggedString::parse(FILE_TAG, source)?;

        let uri = tagged.take("uri");
        let content_type = tagged.take("type");
        let size = tagged.take("size");
        let name = tagged.take("name");
        let (Some(uri), Some(content_type), Some(size), Some(name)) =
            (uri, content_type, size, name)
        else {
            debug!(source, "file reference is missing a required key");
            return None;
        };
        let Ok(size) = size.parse::<u64>() else {
            debug!(source, %size, "file reference size is not a non-negative integer");
            return None;
        };

        let original_name = tagged.take("original-name");
        let metadata = tagged
            .pairs()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Some(FileReference {
            uri,
            content_type,
            size,
            name,
            original_name,
            metadata,
        })
    }

    /// Serialize to the canonical tagged string
    pub fn to_source(&self) -> String {
        let mut tagged = TaggedString::new(FILE_TAG);
        tagged.push("uri", self.uri.clone());
        tagged.push("type", self.content_type.clone());
        tagged.push("size", self.size.to_string());
        tagged.push("name", self.name.clone());
        if let Some(original_name) = &self.original_name {
            tagged.push("original-name", original_name.clone());
        }
        for (key, value) in &self.metadata {
            tagged.push(key.clone(), value.clone());
        }
        tagged.to_source()
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl From<FileReference> for String {
    fn from(value: FileReference) -> Self {
        value.to_source()
    }
}

impl TryFrom<String> for FileReference {
    type Error = MalformedReference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FileReference::parse(&value).ok_or_else(|| MalformedReference::new("file"))
    }
}
