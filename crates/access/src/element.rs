//! Element-value list model
//!
//! The older form model keeps a flat map from element code to a list of
//! tagged values, each carrying its own validity flag. It shares nothing
//! with the path-based document: values live under a single code, and the
//! payload is a closed set of kinds discriminated on the wire by a `type`
//! field (`STRING`, `NUMBER`, `OBJECT`, `DOCUMENT`, `PRINCIPAL`).

use chrono::NaiveDate;
use kuflow_forms_core::{Error, Result};
use kuflow_forms_reference::PrincipalType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

// ===== Model =====

/// A document attached as an element value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDocumentItem {
    /// Service-assigned id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Storage URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Original file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path of the content inside the storage backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<String>,
    /// MIME type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<u64>,
}

/// A principal attached as an element value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPrincipalItem {
    /// Principal id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Principal type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub principal_type: Option<PrincipalType>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The payload of one element value, discriminated by kind
///
/// Dates travel as `Text` in `YYYY-MM-DD` form; the typed readers below
/// re-interpret across kinds the way clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ElementPayload {
    /// Free text, also used for dates
    #[serde(rename = "STRING")]
    Text(Option<String>),
    /// A double-precision number
    #[serde(rename = "NUMBER")]
    Number(Option<f64>),
    /// An arbitrary JSON object
    #[serde(rename = "OBJECT")]
    Object(Option<Map<String, Value>>),
    /// An attached document
    #[serde(rename = "DOCUMENT")]
    Document(Option<ElementDocumentItem>),
    /// An attached principal
    #[serde(rename = "PRINCIPAL")]
    Principal(Option<ElementPrincipalItem>),
}

impl ElementPayload {
    /// Kind name used in mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            ElementPayload::Text(_) => "string",
            ElementPayload::Number(_) => "number",
            ElementPayload::Object(_) => "object",
            ElementPayload::Document(_) => "document",
            ElementPayload::Principal(_) => "principal",
        }
    }
}

/// One value of a multi-valued form element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementValue {
    /// Validity verdict for this single value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// The value itself
    #[serde(flatten)]
    pub payload: ElementPayload,
}

impl ElementValue {
    /// Wrap a payload, valid by default
    pub fn new(payload: ElementPayload) -> Self {
        ElementValue {
            valid: Some(true),
            payload,
        }
    }
}

impl From<&str> for ElementValue {
    fn from(value: &str) -> Self {
        ElementValue::new(ElementPayload::Text(Some(value.to_string())))
    }
}

impl From<String> for ElementValue {
    fn from(value: String) -> Self {
        ElementValue::new(ElementPayload::Text(Some(value)))
    }
}

impl From<f64> for ElementValue {
    fn from(value: f64) -> Self {
        ElementValue::new(ElementPayload::Number(Some(value)))
    }
}

impl From<NaiveDate> for ElementValue {
    fn from(value: NaiveDate) -> Self {
        ElementValue::new(ElementPayload::Text(Some(
            value.format("%Y-%m-%d").to_string(),
        )))
    }
}

impl From<Map<String, Value>> for ElementValue {
    fn from(value: Map<String, Value>) -> Self {
        ElementValue::new(ElementPayload::Object(Some(value)))
    }
}

impl From<ElementDocumentItem> for ElementValue {
    fn from(value: ElementDocumentItem) -> Self {
        ElementValue::new(ElementPayload::Document(Some(value)))
    }
}

impl From<ElementPrincipalItem> for ElementValue {
    fn from(value: ElementPrincipalItem) -> Self {
        ElementValue::new(ElementPayload::Principal(Some(value)))
    }
}

// ===== Holders =====

/// Anything that keeps element values keyed by element code
pub trait HasElementValues {
    /// Values currently under `code`; empty slice when absent
    fn element_values(&self, code: &str) -> &[ElementValue];
    /// Replace the values under `code`; an empty vec clears the field
    fn set_element_values(&mut self, code: &str, values: Vec<ElementValue>);
}

/// A plain code-to-values map, the shape task DTOs carry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementValuesMap {
    values: HashMap<String, Vec<ElementValue>>,
}

impl ElementValuesMap {
    /// An empty holder
    pub fn new() -> Self {
        ElementValuesMap::default()
    }

    /// Codes that currently hold at least one value
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl HasElementValues for ElementValuesMap {
    fn element_values(&self, code: &str) -> &[ElementValue] {
        self.values.get(code).map_or(&[], Vec::as_slice)
    }

    fn set_element_values(&mut self, code: &str, values: Vec<ElementValue>) {
        if values.is_empty() {
            self.values.remove(code);
        } else {
            self.values.insert(code.to_string(), values);
        }
    }
}

// ===== Writers =====

/// Replace the field with a single value; `None` clears it
pub fn set_element_value<H, V>(holder: &mut H, code: &str, value: Option<V>)
where
    H: HasElementValues,
    V: Into<ElementValue>,
{
    let values = value.map(|v| vec![v.into()]).unwrap_or_default();
    holder.set_element_values(code, values);
}

/// Replace the field with the given values; an empty vec clears it
pub fn set_element_values<H, V>(holder: &mut H, code: &str, values: Vec<V>)
where
    H: HasElementValues,
    V: Into<ElementValue>,
{
    holder.set_element_values(code, values.into_iter().map(Into::into).collect());
}

/// Append one value to the field
pub fn add_element_value<H, V>(holder: &mut H, code: &str, value: V)
where
    H: HasElementValues,
    V: Into<ElementValue>,
{
    add_element_values(holder, code, vec![value]);
}

/// Append values to the field
pub fn add_element_values<H, V>(holder: &mut H, code: &str, values: Vec<V>)
where
    H: HasElementValues,
    V: Into<ElementValue>,
{
    let mut current = holder.element_values(code).to_vec();
    current.extend(values.into_iter().map(Into::into));
    holder.set_element_values(code, current);
}

// ===== Readers =====

fn as_text(value: &ElementValue) -> Option<String> {
    match &value.payload {
        ElementPayload::Text(text) => text.clone(),
        ElementPayload::Number(number) => number.map(|n| n.to_string()),
        _ => None,
    }
}

fn as_number(value: &ElementValue) -> Option<f64> {
    match &value.payload {
        ElementPayload::Number(number) => *number,
        ElementPayload::Text(text) => text.as_deref().and_then(|t| t.parse().ok()),
        _ => None,
    }
}

fn as_date(value: &ElementValue) -> Option<NaiveDate> {
    match &value.payload {
        ElementPayload::Text(text) => text
            .as_deref()
            .and_then(|t| NaiveDate::parse_from_str(t, "%Y-%m-%d").ok()),
        _ => None,
    }
}

fn as_object(value: &ElementValue) -> Option<Map<String, Value>> {
    match &value.payload {
        ElementPayload::Object(object) => object.clone(),
        _ => None,
    }
}

fn as_document(value: &ElementValue) -> Option<ElementDocumentItem> {
    match &value.payload {
        ElementPayload::Document(item) => item.clone(),
        _ => None,
    }
}

fn as_principal(value: &ElementValue) -> Option<ElementPrincipalItem> {
    match &value.payload {
        ElementPayload::Principal(item) => item.clone(),
        _ => None,
    }
}

fn get_first<H, T>(
    holder: &H,
    code: &str,
    expected: &'static str,
    convert: fn(&ElementValue) -> Option<T>,
) -> Result<T>
where
    H: HasElementValues,
{
    let values = holder.element_values(code);
    let first = values.first().ok_or_else(|| Error::PropertyMissing {
        path: code.to_string(),
    })?;
    convert(first).ok_or_else(|| Error::TypeMismatch {
        path: code.to_string(),
        expected,
        found: first.payload.kind().to_string(),
    })
}

fn get_all<H, T>(
    holder: &H,
    code: &str,
    expected: &'static str,
    convert: fn(&ElementValue) -> Option<T>,
) -> Result<Vec<T>>
where
    H: HasElementValues,
{
    holder
        .element_values(code)
        .iter()
        .map(|value| {
            convert(value).ok_or_else(|| Error::TypeMismatch {
                path: code.to_string(),
                expected,
                found: value.payload.kind().to_string(),
            })
        })
        .collect()
}

macro_rules! element_readers {
    ($get:ident, $find:ident, $list:ident, $convert:ident, $expected:literal, $ty:ty) => {
        /// First value of the field as this kind; errors when absent or
        /// not convertible
        pub fn $get<H: HasElementValues>(holder: &H, code: &str) -> Result<$ty> {
            get_first(holder, code, $expected, $convert)
        }

        /// First value of the field as this kind, `None` when absent or
        /// not convertible
        pub fn $find<H: HasElementValues>(holder: &H, code: &str) -> Option<$ty> {
            holder.element_values(code).first().and_then($convert)
        }

        /// Every value of the field as this kind; errors on the first
        /// value that does not convert
        pub fn $list<H: HasElementValues>(holder: &H, code: &str) -> Result<Vec<$ty>> {
            get_all(holder, code, $expected, $convert)
        }
    };
}

element_readers!(
    get_element_value_as_str,
    find_element_value_as_str,
    get_element_value_as_str_list,
    as_text,
    "string",
    String
);
element_readers!(
    get_element_value_as_number,
    find_element_value_as_number,
    get_element_value_as_number_list,
    as_number,
    "number",
    f64
);
element_readers!(
    get_element_value_as_date,
    find_element_value_as_date,
    get_element_value_as_date_list,
    as_date,
    "date",
    NaiveDate
);
element_readers!(
    get_element_value_as_map,
    find_element_value_as_map,
    get_element_value_as_map_list,
    as_object,
    "object",
    Map<String, Value>
);
element_readers!(
    get_element_value_as_document,
    find_element_value_as_document,
    get_element_value_as_document_list,
    as_document,
    "document",
    ElementDocumentItem
);
element_readers!(
    get_element_value_as_principal,
    find_element_value_as_principal,
    get_element_value_as_principal_list,
    as_principal,
    "principal",
    ElementPrincipalItem
);

// ===== Validity =====

/// Combined validity of the field: `None` when empty, otherwise `true`
/// iff no value is explicitly invalid
pub fn element_values_valid<H: HasElementValues>(holder: &H, code: &str) -> Option<bool> {
    let values = holder.element_values(code);
    if values.is_empty() {
        return None;
    }
    Some(!values.iter().any(|value| value.valid == Some(false)))
}

/// Validity flag of the value at `index`
pub fn element_value_valid_at<H: HasElementValues>(
    holder: &H,
    code: &str,
    index: usize,
) -> Result<Option<bool>> {
    let values = holder.element_values(code);
    values
        .get(index)
        .map(|value| value.valid)
        .ok_or_else(|| Error::IndexOutOfBounds {
            path: code.to_string(),
            index,
            len: values.len(),
        })
}

/// Stamp every value of the field with the given validity
pub fn set_element_values_valid<H: HasElementValues>(
    holder: &mut H,
    code: &str,
    valid: Option<bool>,
) {
    let mut values = holder.element_values(code).to_vec();
    for value in &mut values {
        value.valid = valid;
    }
    holder.set_element_values(code, values);
}

/// Stamp the value at `index` with the given validity
pub fn set_element_value_valid_at<H: HasElementValues>(
    holder: &mut H,
    code: &str,
    valid: Option<bool>,
    index: usize,
) -> Result<()> {
    let mut values = holder.element_values(code).to_vec();
    let len = values.len();
    let value = values.get_mut(index).ok_or_else(|| Error::IndexOutOfBounds {
        path: code.to_string(),
        index,
        len,
    })?;
    value.valid = valid;
    holder.set_element_values(code, values);
    Ok(())
}
