//! Form value payload and the capability trait accessors work through

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON-Forms payload a task or process carries
///
/// `data` is the form document itself; `valid` is the service-side verdict
/// on it. Both are optional on the wire and omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValue {
    /// Whether the service considers the document valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// The form document, a JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl FormValue {
    /// The document map, creating an empty one when absent
    ///
    /// Write paths call this so a fresh holder can be populated without
    /// seeding `data` by hand.
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        self.data.get_or_insert_with(Map::new)
    }
}

/// Anything that carries a [`FormValue`]
///
/// Task and process DTOs outside this crate implement it by delegating to
/// their form-value field; the accessor functions in
/// [`property`](crate::property) are generic over it. Reads on a holder
/// whose value is still absent see an empty document; the first write
/// materializes one.
pub trait HasFormValue {
    /// The current form value, if any
    fn form_value(&self) -> Option<&FormValue>;
    /// The form value for writing, created empty on first use
    fn form_value_mut(&mut self) -> &mut FormValue;
}

impl HasFormValue for FormValue {
    fn form_value(&self) -> Option<&FormValue> {
        Some(self)
    }

    fn form_value_mut(&mut self) -> &mut FormValue {
        self
    }
}
