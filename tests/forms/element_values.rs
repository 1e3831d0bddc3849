//! Element-value list model lifecycle

use chrono::NaiveDate;
use kuflow_forms::{
    add_element_value, element_values_valid, find_element_value_as_number,
    get_element_value_as_date, get_element_value_as_document, get_element_value_as_map,
    get_element_value_as_principal, get_element_value_as_str, get_element_value_as_str_list,
    set_element_value, set_element_value_valid_at, set_element_values, ElementDocumentItem,
    ElementPrincipalItem, ElementValue, ElementValuesMap, HasElementValues, PrincipalType,
};
use serde_json::{json, Map};
use uuid::Uuid;

#[test]
fn test_field_lifecycle_set_add_replace_clear() {
    let mut holder = ElementValuesMap::new();

    set_element_value(&mut holder, "CODE", Some("one"));
    add_element_value(&mut holder, "CODE", "two");
    assert_eq!(
        get_element_value_as_str_list(&holder, "CODE").unwrap(),
        vec!["one", "two"]
    );

    // Set replaces the whole field.
    set_element_values(&mut holder, "CODE", vec!["three"]);
    assert_eq!(
        get_element_value_as_str_list(&holder, "CODE").unwrap(),
        vec!["three"]
    );

    // None clears it.
    set_element_value::<_, &str>(&mut holder, "CODE", None);
    assert!(holder.element_values("CODE").is_empty());
    assert_eq!(element_values_valid(&holder, "CODE"), None);
}

#[test]
fn test_cross_kind_reads() {
    let mut holder = ElementValuesMap::new();

    set_element_value(&mut holder, "N", Some(505.0));
    assert_eq!(get_element_value_as_str(&holder, "N").unwrap(), "505");

    set_element_value(&mut holder, "T", Some("2.5"));
    assert_eq!(find_element_value_as_number(&holder, "T"), Some(2.5));

    set_element_value(
        &mut holder,
        "D",
        Some(NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()),
    );
    assert_eq!(get_element_value_as_str(&holder, "D").unwrap(), "2022-01-15");
    assert_eq!(
        get_element_value_as_date(&holder, "D").unwrap(),
        NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()
    );
}

#[test]
fn test_object_document_and_principal_items() {
    let mut holder = ElementValuesMap::new();

    let mut object = Map::new();
    object.insert("k".to_string(), json!("v"));
    set_element_value(&mut holder, "OBJ", Some(object.clone()));
    assert_eq!(get_element_value_as_map(&holder, "OBJ").unwrap(), object);

    let document = ElementDocumentItem {
        id: Some(Uuid::from_u128(7)),
        uri: Some("ku:doc/abc".to_string()),
        name: Some("invoice.pdf".to_string()),
        content_type: Some("application/pdf".to_string()),
        content_length: Some(11111),
        ..Default::default()
    };
    set_element_value(&mut holder, "DOC", Some(document.clone()));
    assert_eq!(
        get_element_value_as_document(&holder, "DOC").unwrap(),
        document
    );

    let principal = ElementPrincipalItem {
        id: Some(Uuid::from_u128(9)),
        principal_type: Some(PrincipalType::User),
        name: Some("John Doe".to_string()),
    };
    set_element_value(&mut holder, "WHO", Some(principal.clone()));
    assert_eq!(
        get_element_value_as_principal(&holder, "WHO").unwrap(),
        principal
    );
}

#[test]
fn test_validity_follows_individual_flags() {
    let mut holder = ElementValuesMap::new();
    set_element_values(&mut holder, "V", vec!["a", "b"]);
    assert_eq!(element_values_valid(&holder, "V"), Some(true));

    set_element_value_valid_at(&mut holder, "V", Some(false), 0).unwrap();
    assert_eq!(element_values_valid(&holder, "V"), Some(false));

    set_element_value_valid_at(&mut holder, "V", Some(true), 0).unwrap();
    assert_eq!(element_values_valid(&holder, "V"), Some(true));
}

#[test]
fn test_holder_serde_shape() {
    let mut holder = ElementValuesMap::new();
    set_element_value(&mut holder, "CODE", Some("hello"));
    assert_eq!(
        serde_json::to_value(&holder).unwrap(),
        json!({"CODE": [{"valid": true, "type": "STRING", "value": "hello"}]})
    );

    let parsed: ElementValuesMap = serde_json::from_value(
        json!({"CODE": [{"type": "NUMBER", "value": 2.5}]}),
    )
    .unwrap();
    assert_eq!(find_element_value_as_number(&parsed, "CODE"), Some(2.5));
    let first: &ElementValue = &parsed.element_values("CODE")[0];
    assert_eq!(first.valid, None);
}
