//! Group reference codec (`kuflow-group:`)

use crate::tagged::{MalformedReference, TaggedString};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Tag prefix for group reference strings
pub const GROUP_TAG: &str = "kuflow-group";

/// A document-embedded reference to a principal group
///
/// Serialized as `kuflow-group:id=<uuid>;type=<pct>;name=<pct>;`. The group
/// type is free text on the wire; unknown key/value pairs are dropped on
/// parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GroupReference {
    /// Group id
    pub id: Uuid,
    /// Group type, as free text
    pub group_type: String,
    /// Display name
    pub name: String,
}

impl GroupReference {
    /// Create a group reference
    pub fn new(id: Uuid, group_type: impl Into<String>, name: impl Into<String>) -> Self {
        GroupReference {
            id,
            group_type: group_type.into(),
            name: name.into(),
        }
    }

    /// Parse a `kuflow-group:` tagged string; `None` when malformed
    pub fn parse(source: &str) -> Option<GroupReference> {
        let mut tagged = TaggedString::parse(GROUP_TAG, source)?;

        let id = tagged.take("id");
        let group_type = tagged.take("type");
        let name = tagged.take("name");
        let (Some(id), Some(group_type), Some(name)) = (id, group_type, name) else {
            debug!(source, "group reference is missing a required key");
            return None;
        };
        let Ok(id) = Uuid::parse_str(&id) else {
            debug!(source, %id, "group reference id is not a well-formed UUID");
            return None;
        };

        Some(GroupReference {
            id,
            group_type,
            name,
        })
    }

    /// Serialize to the canonical tagged string
    pub fn to_source(&self) -> String {
        let mut tagged = TaggedString::new(GROUP_TAG);
        tagged.push("id", self.id.to_string());
        tagged.push("type", self.group_type.clone());
        tagged.push("name", self.name.clone());
        tagged.to_source()
    }
}

impl fmt::Display for GroupReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl From<GroupReference> for String {
    fn from(value: GroupReference) -> Self {
        value.to_source()
    }
}

impl TryFrom<String> for GroupReference {
    type Error = MalformedReference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupReference::parse(&value).ok_or_else(|| MalformedReference::new("group"))
    }
}
