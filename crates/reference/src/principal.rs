//! Principal reference codecs (`kuflow-principal:` and `kuflow-principal-user:`)

use crate::tagged::{MalformedReference, TaggedString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Tag prefix for principal reference strings
pub const PRINCIPAL_TAG: &str = "kuflow-principal";

/// Tag prefix for principal-user reference strings
pub const PRINCIPAL_USER_TAG: &str = "kuflow-principal-user";

/// The kind of principal a reference points at
///
/// The wire carries the upper-case name (`USER`, `APPLICATION`, `SYSTEM`);
/// unrecognized names are preserved in [`PrincipalType::Other`] so future
/// kinds still parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PrincipalType {
    /// A human user
    User,
    /// An application principal
    Application,
    /// The system itself
    System,
    /// A kind this library does not know about yet
    Other(String),
}

impl PrincipalType {
    fn classify(s: &str) -> PrincipalType {
        match s.to_ascii_uppercase().as_str() {
            "USER" => PrincipalType::User,
            "APPLICATION" => PrincipalType::Application,
            "SYSTEM" => PrincipalType::System,
            _ => PrincipalType::Other(s.to_string()),
        }
    }
}

impl FromStr for PrincipalType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PrincipalType::classify(s))
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalType::User => f.write_str("USER"),
            PrincipalType::Application => f.write_str("APPLICATION"),
            PrincipalType::System => f.write_str("SYSTEM"),
            PrincipalType::Other(other) => f.write_str(other),
        }
    }
}

impl From<PrincipalType> for String {
    fn from(value: PrincipalType) -> Self {
        value.to_string()
    }
}

impl From<String> for PrincipalType {
    fn from(value: String) -> Self {
        PrincipalType::classify(&value)
    }
}

/// Parse the shared `id=<uuid>;type=...;name=...;` body of both principal tags.
fn parse_principal_fields(tag: &str, source: &str) -> Option<(Uuid, PrincipalType, String)> {
    let mut tagged = TaggedString::parse(tag, source)?;

    let id = tagged.take("id");
    let principal_type = tagged.take("type");
    let name = tagged.take("name");
    let (Some(id), Some(principal_type), Some(name)) = (id, principal_type, name) else {
        debug!(source, "principal reference is missing a required key");
        return None;
    };
    let Ok(id) = Uuid::parse_str(&id) else {
        debug!(source, %id, "principal reference id is not a well-formed UUID");
        return None;
    };
    // Unknown pairs are discarded for principal references.
    Some((id, PrincipalType::classify(&principal_type), name))
}

fn principal_source(tag: &str, id: &Uuid, principal_type: &PrincipalType, name: &str) -> String {
    let mut tagged = TaggedString::new(tag);
    tagged.push("id", id.to_string());
    tagged.push("type", principal_type.to_string());
    tagged.push("name", name.to_string());
    tagged.to_source()
}

/// A document-embedded reference to a user or application principal
///
/// Serialized as `kuflow-principal:id=<uuid>;type=<pct>;name=<pct>;`.
/// Unknown key/value pairs are dropped on parse (only file references keep
/// them).
///
/// # Examples
///
/// ```
/// use kuflow_forms_reference::{PrincipalReference, PrincipalType};
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let p = PrincipalReference::new(id, PrincipalType::User, "John Doe");
/// let raw = p.to_source();
/// assert!(raw.starts_with("kuflow-principal:id="));
/// assert!(raw.ends_with("name=John%20Doe;"));
/// assert_eq!(PrincipalReference::parse(&raw), Some(p));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PrincipalReference {
    /// Principal id
    pub id: Uuid,
    /// Principal kind
    pub principal_type: PrincipalType,
    /// Display name
    pub name: String,
}

impl PrincipalReference {
    /// Create a principal reference
    pub fn new(id: Uuid, principal_type: PrincipalType, name: impl Into<String>) -> Self {
        PrincipalReference {
            id,
            principal_type,
            name: name.into(),
        }
    }

    /// Parse a `kuflow-principal:` tagged string; `None` when malformed
    pub fn parse(source: &str) -> Option<PrincipalReference> {
        let (id, principal_type, name) = parse_principal_fields(PRINCIPAL_TAG, source)?;
        Some(PrincipalReference {
            id,
            principal_type,
            name,
        })
    }

    /// Serialize to the canonical tagged string
    pub fn to_source(&self) -> String {
        principal_source(PRINCIPAL_TAG, &self.id, &self.principal_type, &self.name)
    }
}

impl fmt::Display for PrincipalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl From<PrincipalReference> for String {
    fn from(value: PrincipalReference) -> Self {
        value.to_source()
    }
}

impl TryFrom<String> for PrincipalReference {
    type Error = MalformedReference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PrincipalReference::parse(&value).ok_or_else(|| MalformedReference::new("principal"))
    }
}

/// A document-embedded reference pinned to a user principal
///
/// Same shape as [`PrincipalReference`] under its own
/// `kuflow-principal-user:` tag; some form controls only accept users and
/// use this variant to say so on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PrincipalUserReference {
    /// Principal id
    pub id: Uuid,
    /// Principal kind
    pub principal_type: PrincipalType,
    /// Display name
    pub name: String,
}

impl PrincipalUserReference {
    /// Create a principal-user reference
    pub fn new(id: Uuid, principal_type: PrincipalType, name: impl Into<String>) -> Self {
        PrincipalUserReference {
            id,
            principal_type,
            name: name.into(),
        }
    }

    /// Parse a `kuflow-principal-user:` tagged string; `None` when malformed
    pub fn parse(source: &str) -> Option<PrincipalUserReference> {
        let (id, principal_type, name) = parse_principal_fields(PRINCIPAL_USER_TAG, source)?;
        Some(PrincipalUserReference {
            id,
            principal_type,
            name,
        })
    }

    /// Serialize to the canonical tagged string
    pub fn to_source(&self) -> String {
        principal_source(
            PRINCIPAL_USER_TAG,
            &self.id,
            &self.principal_type,
            &self.name,
        )
    }
}

impl fmt::Display for PrincipalUserReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl From<PrincipalUserReference> for String {
    fn from(value: PrincipalUserReference) -> Self {
        value.to_source()
    }
}

impl TryFrom<String> for PrincipalUserReference {
    type Error = MalformedReference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PrincipalUserReference::parse(&value)
            .ok_or_else(|| MalformedReference::new("principal user"))
    }
}
