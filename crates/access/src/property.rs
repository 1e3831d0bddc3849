//! Typed property accessors over a form document
//!
//! The functions here combine path navigation with a [`PropertyValue`]
//! encode/decode seam, so callers read and write `String`, numbers, dates
//! and tagged references at a dot path without touching raw JSON:
//!
//! ```
//! use kuflow_forms_access::{set_property, get_property, FormValue};
//!
//! let mut form = FormValue::default();
//! set_property(&mut form, "order.items.0.qty", Some(3i64)).unwrap();
//! let qty: i64 = get_property(&form, "order.items.0.qty").unwrap();
//! assert_eq!(qty, 3);
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use kuflow_forms_core::{
    find_object_property, update_object_property, value_kind, Error, PropertyPath, Result,
};
use kuflow_forms_reference::{
    FileReference, GroupReference, PrincipalReference, PrincipalUserReference,
};
use serde_json::{Map, Number, Value};

use crate::holder::HasFormValue;

// ===== PropertyValue =====

/// Conversion between a JSON property and a typed Rust value
///
/// `decode` is lenient the way form clients are: a number stored where a
/// string is read still decodes, a numeric string still reads as a number.
/// `encode` always produces the canonical JSON shape for the type.
pub trait PropertyValue: Sized {
    /// Human-readable type name used in mismatch errors
    const EXPECTED: &'static str;

    /// Decode a stored JSON value; `None` when not convertible
    fn decode(raw: &Value) -> Option<Self>;

    /// Encode into the JSON shape stored in the document
    fn encode(self) -> Value;
}

impl PropertyValue for String {
    const EXPECTED: &'static str = "string";

    fn decode(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    fn encode(self) -> Value {
        Value::String(self)
    }
}

impl PropertyValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn decode(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.parse().ok(),
            _ => None,
        }
    }

    fn encode(self) -> Value {
        Value::Number(self.into())
    }
}

impl PropertyValue for f64 {
    const EXPECTED: &'static str = "number";

    fn decode(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.parse().ok(),
            _ => None,
        }
    }

    fn encode(self) -> Value {
        Number::from_f64(self).map_or(Value::Null, Value::Number)
    }
}

impl PropertyValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn decode(raw: &Value) -> Option<Self> {
        raw.as_bool()
    }

    fn encode(self) -> Value {
        Value::Bool(self)
    }
}

impl PropertyValue for NaiveDate {
    const EXPECTED: &'static str = "date";

    fn decode(raw: &Value) -> Option<Self> {
        let text = raw.as_str()?;
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
    }

    fn encode(self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl PropertyValue for DateTime<Utc> {
    const EXPECTED: &'static str = "date-time";

    fn decode(raw: &Value) -> Option<Self> {
        let text = raw.as_str()?;
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|instant| instant.with_timezone(&Utc))
    }

    fn encode(self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl PropertyValue for DateTime<FixedOffset> {
    const EXPECTED: &'static str = "date-time";

    fn decode(raw: &Value) -> Option<Self> {
        let text = raw.as_str()?;
        DateTime::parse_from_rfc3339(text).ok()
    }

    fn encode(self) -> Value {
        Value::String(self.to_rfc3339())
    }
}

impl PropertyValue for FileReference {
    const EXPECTED: &'static str = "file reference";

    fn decode(raw: &Value) -> Option<Self> {
        FileReference::parse(raw.as_str()?)
    }

    fn encode(self) -> Value {
        Value::String(self.to_source())
    }
}

impl PropertyValue for PrincipalReference {
    const EXPECTED: &'static str = "principal reference";

    fn decode(raw: &Value) -> Option<Self> {
        PrincipalReference::parse(raw.as_str()?)
    }

    fn encode(self) -> Value {
        Value::String(self.to_source())
    }
}

impl PropertyValue for PrincipalUserReference {
    const EXPECTED: &'static str = "user principal reference";

    fn decode(raw: &Value) -> Option<Self> {
        PrincipalUserReference::parse(raw.as_str()?)
    }

    fn encode(self) -> Value {
        Value::String(self.to_source())
    }
}

impl PropertyValue for GroupReference {
    const EXPECTED: &'static str = "group reference";

    fn decode(raw: &Value) -> Option<Self> {
        GroupReference::parse(raw.as_str()?)
    }

    fn encode(self) -> Value {
        Value::String(self.to_source())
    }
}

impl PropertyValue for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn decode(raw: &Value) -> Option<Self> {
        raw.as_array().cloned()
    }

    fn encode(self) -> Value {
        Value::Array(self)
    }
}

impl PropertyValue for Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn decode(raw: &Value) -> Option<Self> {
        raw.as_object().cloned()
    }

    fn encode(self) -> Value {
        Value::Object(self)
    }
}

impl PropertyValue for Value {
    const EXPECTED: &'static str = "value";

    fn decode(raw: &Value) -> Option<Self> {
        Some(raw.clone())
    }

    fn encode(self) -> Value {
        self
    }
}

// ===== Accessors =====

fn find_raw<'a, H: HasFormValue>(holder: &'a H, path: &PropertyPath) -> Option<&'a Value> {
    let data = holder.form_value()?.data.as_ref()?;
    find_object_property(data, path)
}

/// Read a typed property; errors when absent or not convertible
pub fn get_property<T, H>(holder: &H, path: &str) -> Result<T>
where
    T: PropertyValue,
    H: HasFormValue,
{
    let parsed: PropertyPath = path.parse()?;
    let raw = find_raw(holder, &parsed).ok_or_else(|| Error::PropertyMissing {
        path: path.to_string(),
    })?;
    T::decode(raw).ok_or_else(|| Error::TypeMismatch {
        path: path.to_string(),
        expected: T::EXPECTED,
        found: value_kind(raw).to_string(),
    })
}

/// Read a typed property; absent paths and unconvertible values are `Ok(None)`
///
/// Only a malformed path is an error.
pub fn find_property<T, H>(holder: &H, path: &str) -> Result<Option<T>>
where
    T: PropertyValue,
    H: HasFormValue,
{
    let parsed: PropertyPath = path.parse()?;
    Ok(find_raw(holder, &parsed).and_then(T::decode))
}

/// Write a typed property, creating missing parents; `None` removes it
///
/// A value that encodes to JSON `null` (a non-finite float, or `Value::Null`
/// itself) also removes: stored nulls read as absent, so writing one would
/// only leave a tombstone behind.
pub fn set_property<T, H>(holder: &mut H, path: &str, value: Option<T>) -> Result<()>
where
    T: PropertyValue,
    H: HasFormValue,
{
    let parsed: PropertyPath = path.parse()?;
    let data = holder.form_value_mut().data_mut();
    let encoded = match value.map(T::encode) {
        Some(Value::Null) => None,
        encoded => encoded,
    };
    update_object_property(data, &parsed, encoded)
}

/// Remove the property at `path`; absent properties are a no-op
pub fn remove_property<H: HasFormValue>(holder: &mut H, path: &str) -> Result<()> {
    set_property::<Value, H>(holder, path, None)
}

/// Append a typed value to the list at `path`
///
/// An absent property becomes a one-element list; an existing non-list
/// property is a mismatch error.
pub fn add_property<T, H>(holder: &mut H, path: &str, value: T) -> Result<()>
where
    T: PropertyValue,
    H: HasFormValue,
{
    let parsed: PropertyPath = path.parse()?;
    let data = holder.form_value_mut().data_mut();

    let next_index = match find_object_property(data, &parsed) {
        Some(Value::Array(items)) => items.len(),
        Some(other) => {
            return Err(Error::TypeMismatch {
                path: path.to_string(),
                expected: "array",
                found: value_kind(other).to_string(),
            })
        }
        None => {
            update_object_property(data, &parsed, Some(Value::Array(Vec::new())))?;
            0
        }
    };
    update_object_property(data, &parsed.child_index(next_index), Some(value.encode()))
}

/// Replace the list at `path` with the given elements
pub fn set_property_list<T, H>(holder: &mut H, path: &str, values: Vec<T>) -> Result<()>
where
    T: PropertyValue,
    H: HasFormValue,
{
    let encoded = values.into_iter().map(T::encode).collect();
    set_property(holder, path, Some(Value::Array(encoded)))
}

/// Append each element to the list at `path`
pub fn add_property_list<T, H>(holder: &mut H, path: &str, values: Vec<T>) -> Result<()>
where
    T: PropertyValue,
    H: HasFormValue,
{
    for value in values {
        add_property(holder, path, value)?;
    }
    Ok(())
}
