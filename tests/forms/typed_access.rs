//! Typed accessors over a form-value holder

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use kuflow_forms::{
    add_property, find_property, get_property, remove_property, set_property, Error, FormValue,
    HasFormValue,
};
use serde_json::json;

#[test]
fn test_scalar_write_read_inverse() {
    let mut form = FormValue::default();

    set_property(&mut form, "s", Some("text".to_string())).unwrap();
    set_property(&mut form, "i", Some(42i64)).unwrap();
    set_property(&mut form, "d", Some(2.5f64)).unwrap();
    set_property(&mut form, "b", Some(true)).unwrap();

    let date = NaiveDate::from_ymd_opt(3000, 1, 1).unwrap();
    set_property(&mut form, "date", Some(date)).unwrap();

    let instant = Utc.with_ymd_and_hms(3002, 1, 1, 2, 0, 0).unwrap();
    set_property(&mut form, "instant", Some(instant)).unwrap();

    let offset: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("3001-01-01T01:00:00+05:05").unwrap();
    set_property(&mut form, "offset", Some(offset)).unwrap();

    assert_eq!(get_property::<String, _>(&form, "s").unwrap(), "text");
    assert_eq!(get_property::<i64, _>(&form, "i").unwrap(), 42);
    assert_eq!(get_property::<f64, _>(&form, "d").unwrap(), 2.5);
    assert!(get_property::<bool, _>(&form, "b").unwrap());
    assert_eq!(get_property::<NaiveDate, _>(&form, "date").unwrap(), date);
    assert_eq!(
        get_property::<DateTime<Utc>, _>(&form, "instant").unwrap(),
        instant
    );
    assert_eq!(
        get_property::<DateTime<FixedOffset>, _>(&form, "offset").unwrap(),
        offset
    );
}

#[test]
fn test_integer_double_coercion_on_same_path() {
    let mut form = FormValue::default();
    set_property(&mut form, "n", Some(505i64)).unwrap();
    assert_eq!(get_property::<i64, _>(&form, "n").unwrap(), 505);
    assert_eq!(get_property::<f64, _>(&form, "n").unwrap(), 505.0);
}

#[test]
fn test_find_vs_get_on_missing_path() {
    let form = FormValue::default();
    assert_eq!(find_property::<String, _>(&form, "nope.0.x").unwrap(), None);
    assert_eq!(
        get_property::<String, _>(&form, "nope.0.x"),
        Err(Error::PropertyMissing {
            path: "nope.0.x".to_string()
        })
    );
}

#[test]
fn test_deep_write_then_remove() {
    let mut form = FormValue::default();
    set_property(&mut form, "a.0.b", Some("v".to_string())).unwrap();
    assert_eq!(
        form.form_value().unwrap().data,
        json!({"a": [{"b": "v"}]}).as_object().cloned()
    );

    remove_property(&mut form, "a.0.b").unwrap();
    assert_eq!(
        form.form_value().unwrap().data,
        json!({"a": [{}]}).as_object().cloned()
    );
}

#[test]
fn test_add_builds_lists() {
    let mut form = FormValue::default();
    add_property(&mut form, "dates", NaiveDate::from_ymd_opt(3000, 1, 1).unwrap()).unwrap();
    add_property(&mut form, "dates", NaiveDate::from_ymd_opt(3001, 1, 1).unwrap()).unwrap();
    assert_eq!(
        form.form_value().unwrap().data,
        json!({"dates": ["3000-01-01", "3001-01-01"]})
            .as_object()
            .cloned()
    );
}

// A holder outside the crate plugs in with two delegating methods.
#[derive(Default)]
struct SaveCommand {
    form: Option<FormValue>,
}

impl HasFormValue for SaveCommand {
    fn form_value(&self) -> Option<&FormValue> {
        self.form.as_ref()
    }

    fn form_value_mut(&mut self) -> &mut FormValue {
        self.form.get_or_insert_with(FormValue::default)
    }
}

#[test]
fn test_custom_holder_shares_the_accessors() {
    let mut command = SaveCommand::default();
    assert_eq!(
        find_property::<String, _>(&command, "a").unwrap(),
        None
    );
    set_property(&mut command, "a", Some("v".to_string())).unwrap();
    assert_eq!(get_property::<String, _>(&command, "a").unwrap(), "v");
}
