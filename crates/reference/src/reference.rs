//! Dispatch over every known tagged reference kind

use crate::file::{FileReference, FILE_TAG};
use crate::group::{GroupReference, GROUP_TAG};
use crate::principal::{
    PrincipalReference, PrincipalUserReference, PRINCIPAL_TAG, PRINCIPAL_USER_TAG,
};
use crate::tagged::MalformedReference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any tagged reference a document string may carry
///
/// [`Reference::parse`] tries each known tag in turn, so callers that only
/// hold an opaque string can still discover what it points at:
///
/// ```
/// use kuflow_forms_reference::Reference;
///
/// let raw = "kuflow-file:uri=ku%3Adummy%2Fxxx;type=application%2Fpdf;size=11;name=a.pdf;";
/// match Reference::parse(raw) {
///     Some(Reference::File(file)) => assert_eq!(file.name, "a.pdf"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Reference {
    /// `kuflow-file:` document reference
    File(FileReference),
    /// `kuflow-principal:` principal reference
    Principal(PrincipalReference),
    /// `kuflow-principal-user:` user principal reference
    PrincipalUser(PrincipalUserReference),
    /// `kuflow-group:` group reference
    Group(GroupReference),
}

impl Reference {
    /// Parse a string against every known tag; `None` when no codec accepts it
    pub fn parse(source: &str) -> Option<Reference> {
        if let Some(file) = FileReference::parse(source) {
            return Some(Reference::File(file));
        }
        if let Some(principal) = PrincipalReference::parse(source) {
            return Some(Reference::Principal(principal));
        }
        if let Some(user) = PrincipalUserReference::parse(source) {
            return Some(Reference::PrincipalUser(user));
        }
        GroupReference::parse(source).map(Reference::Group)
    }

    /// The tag prefix of this reference kind
    pub fn tag(&self) -> &'static str {
        match self {
            Reference::File(_) => FILE_TAG,
            Reference::Principal(_) => PRINCIPAL_TAG,
            Reference::PrincipalUser(_) => PRINCIPAL_USER_TAG,
            Reference::Group(_) => GROUP_TAG,
        }
    }

    /// Serialize to the canonical tagged string of the inner kind
    pub fn to_source(&self) -> String {
        match self {
            Reference::File(file) => file.to_source(),
            Reference::Principal(principal) => principal.to_source(),
            Reference::PrincipalUser(user) => user.to_source(),
            Reference::Group(group) => group.to_source(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

impl From<Reference> for String {
    fn from(value: Reference) -> Self {
        value.to_source()
    }
}

impl TryFrom<String> for Reference {
    type Error = MalformedReference;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Reference::parse(&value).ok_or_else(|| MalformedReference::new("reference"))
    }
}

impl From<FileReference> for Reference {
    fn from(value: FileReference) -> Self {
        Reference::File(value)
    }
}

impl From<PrincipalReference> for Reference {
    fn from(value: PrincipalReference) -> Self {
        Reference::Principal(value)
    }
}

impl From<PrincipalUserReference> for Reference {
    fn from(value: PrincipalUserReference) -> Self {
        Reference::PrincipalUser(value)
    }
}

impl From<GroupReference> for Reference {
    fn from(value: GroupReference) -> Self {
        Reference::Group(value)
    }
}
