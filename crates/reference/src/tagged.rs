//! Generic tagged key/value string codec
//!
//! Every reference kind travels inside the document as one delimited string:
//!
//! ```text
//! <tag>:<key1>=<value1>;<key2>=<value2>;...;
//! ```
//!
//! - the tag prefix is fixed per kind and matched case-insensitively;
//! - keys are lower-cased on parse;
//! - values are percent-encoded (space as `%20`, never `+`);
//! - a trailing `;` terminates the final pair.
//!
//! [`TaggedString`] is the shared engine the typed codecs are built on: it
//! parses any such string into an ordered pair list (preserving unknown
//! keys) and serializes back to the canonical form. Parsing never errors;
//! rejected input yields `None` and a `tracing` debug line, so callers can
//! treat unparsable strings as opaque text.

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Error for `TryFrom<String>` conversions of reference types
///
/// The `parse` functions themselves never error (they return `Option`);
/// this exists for the serde string-deserialization seam.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed {kind} reference string")]
pub struct MalformedReference {
    kind: &'static str,
}

impl MalformedReference {
    pub(crate) fn new(kind: &'static str) -> Self {
        MalformedReference { kind }
    }
}

/// Percent-encode a field value for the wire
///
/// Surrounding whitespace is trimmed first; spaces inside the value become
/// `%20`.
pub(crate) fn encode_value(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

/// A parsed tagged key/value string with its pairs in wire order
///
/// Unknown keys are preserved verbatim (values decoded), so a
/// `TaggedString` round-trips content the typed codecs would drop.
///
/// # Examples
///
/// ```
/// use kuflow_forms_reference::TaggedString;
///
/// let raw = "kuflow-file:uri=ku%3Aa%2Fb;size=10;";
/// let tagged = TaggedString::parse("kuflow-file", raw).unwrap();
/// assert_eq!(tagged.get("uri"), Some("ku:a/b"));
/// assert_eq!(tagged.to_source(), raw);
///
/// // Wrong tag, missing '=', or escapes decoding to invalid UTF-8 are rejected.
/// assert!(TaggedString::parse("kuflow-group", raw).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedString {
    tag: String,
    pairs: Vec<(String, String)>,
}

impl TaggedString {
    /// Create an empty tagged string for serialization
    pub fn new(tag: impl Into<String>) -> Self {
        TaggedString {
            tag: tag.into(),
            pairs: Vec::new(),
        }
    }

    /// Parse `source` as a tagged string with the given tag
    ///
    /// The `<tag>:` prefix is matched case-insensitively. Returns `None`
    /// for a wrong prefix, a pair without `=`, or a value whose percent
    /// escapes decode to invalid UTF-8.
    pub fn parse(tag: &str, source: &str) -> Option<TaggedString> {
        if source.is_empty() {
            return None;
        }

        // Byte-wise prefix check; slicing the str could panic when the
        // input puts a multi-byte character across the boundary.
        let prefix_len = tag.len() + 1;
        let bytes = source.as_bytes();
        let prefix_matches = bytes.len() >= prefix_len
            && bytes[..tag.len()].eq_ignore_ascii_case(tag.as_bytes())
            && bytes[tag.len()] == b':';
        if !prefix_matches {
            debug!(source, tag, "input does not start with the expected tag prefix");
            return None;
        }

        let mut pairs = Vec::new();
        for pair in source[prefix_len..].split(';') {
            if pair.is_empty() {
                // The trailing ';' produces one empty piece.
                continue;
            }
            let Some((key, value)) = pair.split_once('=') else {
                debug!(source, pair, "key-value pair without '='");
                return None;
            };
            let Ok(value) = urlencoding::decode(value) else {
                debug!(source, pair, "value is not valid percent-encoded UTF-8");
                return None;
            };
            pairs.push((key.to_ascii_lowercase(), value.into_owned()));
        }

        Some(TaggedString {
            tag: tag.to_string(),
            pairs,
        })
    }

    /// The tag this string was parsed with (or created for)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All pairs in wire order, keys lower-cased, values decoded
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Look up the last value for a key (later pairs win, as on the wire)
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove and return the last value for a key
    ///
    /// The typed codecs drain their required keys this way and treat the
    /// remainder as unknown metadata.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let key = key.to_ascii_lowercase();
        let position = self.pairs.iter().rposition(|(k, _)| *k == key)?;
        Some(self.pairs.remove(position).1)
    }

    /// Append a pair for serialization
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Serialize to the canonical wire form
    ///
    /// Values are trimmed and percent-encoded; a `;` terminates every pair
    /// including the last.
    pub fn to_source(&self) -> String {
        let mut out = String::with_capacity(self.tag.len() + 1 + self.pairs.len() * 8);
        out.push_str(&self.tag);
        out.push(':');
        for (key, value) in &self.pairs {
            out.push_str(key);
            out.push('=');
            out.push_str(&encode_value(value));
            out.push(';');
        }
        out
    }
}

impl fmt::Display for TaggedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}
