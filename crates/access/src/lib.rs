//! Typed access to form values
//!
//! Two independent models live here:
//!
//! - the JSON-Forms document model: a [`FormValue`] holding a JSON object,
//!   read and written at dot paths through the typed accessors in
//!   [`property`] (`get_property`, `set_property`, `add_property`, ...);
//! - the element-value list model in [`element`]: per-code lists of tagged
//!   values with individual validity flags.
//!
//! Both are generic over capability traits ([`HasFormValue`],
//! [`HasElementValues`]) so task and process DTOs plug in with a couple of
//! delegating methods.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod holder;
pub mod property;

pub use element::{
    add_element_value, add_element_values, element_value_valid_at, element_values_valid,
    find_element_value_as_date, find_element_value_as_document, find_element_value_as_map,
    find_element_value_as_number, find_element_value_as_principal, find_element_value_as_str,
    get_element_value_as_date, get_element_value_as_date_list, get_element_value_as_document,
    get_element_value_as_document_list, get_element_value_as_map, get_element_value_as_map_list,
    get_element_value_as_number, get_element_value_as_number_list, get_element_value_as_principal,
    get_element_value_as_principal_list, get_element_value_as_str, get_element_value_as_str_list,
    set_element_value, set_element_value_valid_at, set_element_values, set_element_values_valid,
    ElementDocumentItem, ElementPayload, ElementPrincipalItem, ElementValue, ElementValuesMap,
    HasElementValues,
};
pub use holder::{FormValue, HasFormValue};
pub use property::{
    add_property, add_property_list, find_property, get_property, remove_property, set_property,
    set_property_list, PropertyValue,
};
