//! Reference codec round-trips and document embedding

use kuflow_forms::{
    get_property, set_property, FileReference, FormValue, GroupReference, PrincipalReference,
    PrincipalType, PrincipalUserReference, Reference,
};
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn test_file_reference_embedding_scenario() {
    let mut form = FormValue::default();
    let file = FileReference::new(
        "ku:dummy/xxx-ssss-yyyy",
        "application/pdf",
        11111,
        "dummy.pdf",
    );
    set_property(&mut form, "key6", Some(file)).unwrap();

    assert_eq!(
        *form.data.as_ref().unwrap().get("key6").unwrap(),
        "kuflow-file:uri=ku%3Adummy%2Fxxx-ssss-yyyy;type=application%2Fpdf;size=11111;name=dummy.pdf;".to_string()
    );

    let read: FileReference = get_property(&form, "key6").unwrap();
    assert_eq!(read.uri, "ku:dummy/xxx-ssss-yyyy");
    assert_eq!(read.size, 11111);
}

#[test]
fn test_unknown_file_metadata_round_trips() {
    let raw = "kuflow-file:uri=a;type=t;size=1;name=n;camera=front;quality=high;";
    let file = FileReference::parse(raw).unwrap();
    assert_eq!(file.metadata.get("camera").map(String::as_str), Some("front"));
    assert_eq!(file.to_source(), raw);
}

#[test]
fn test_unknown_tags_stay_opaque() {
    let mut form = FormValue::default();
    set_property(
        &mut form,
        "key",
        Some("kuflow-widget:id=1;".to_string()),
    )
    .unwrap();
    // No known codec accepts it, but the raw string is still readable.
    assert_eq!(Reference::parse("kuflow-widget:id=1;"), None);
    assert_eq!(
        get_property::<String, _>(&form, "key").unwrap(),
        "kuflow-widget:id=1;"
    );
}

#[test]
fn test_principal_reference_in_document() {
    let mut form = FormValue::default();
    let id = Uuid::parse_str("3465a91e-8ed3-4aa1-b7e1-1a9bfe52e1a4").unwrap();
    let principal = PrincipalReference::new(id, PrincipalType::User, "John Doe");
    set_property(&mut form, "assignee", Some(principal.clone())).unwrap();

    assert_eq!(
        get_property::<PrincipalReference, _>(&form, "assignee").unwrap(),
        principal
    );
    // The raw string dispatches through the closed tag set too.
    let raw: String = get_property(&form, "assignee").unwrap();
    assert_eq!(Reference::parse(&raw), Some(Reference::Principal(principal)));
}

// Field text without leading/trailing whitespace; encode trims, so padded
// input would not compare equal after a round trip.
fn field() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9 ./:_-]{0,18}[a-zA-Z0-9]|[a-zA-Z0-9]")
        .unwrap()
}

fn uuid_value() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

proptest! {
    #[test]
    fn prop_file_reference_round_trips(
        uri in field(),
        content_type in field(),
        size in any::<u64>(),
        name in field(),
        original_name in proptest::option::of(field()),
    ) {
        let mut file = FileReference::new(uri, content_type, size, name);
        file.original_name = original_name;
        prop_assert_eq!(FileReference::parse(&file.to_source()), Some(file));
    }

    #[test]
    fn prop_principal_reference_round_trips(id in uuid_value(), name in field()) {
        for principal_type in [
            PrincipalType::User,
            PrincipalType::Application,
            PrincipalType::System,
        ] {
            let principal = PrincipalReference::new(id, principal_type, name.clone());
            prop_assert_eq!(
                PrincipalReference::parse(&principal.to_source()),
                Some(principal)
            );
        }
    }

    #[test]
    fn prop_principal_user_reference_round_trips(id in uuid_value(), name in field()) {
        let user = PrincipalUserReference::new(id, PrincipalType::User, name);
        prop_assert_eq!(
            PrincipalUserReference::parse(&user.to_source()),
            Some(user)
        );
    }

    #[test]
    fn prop_group_reference_round_trips(
        id in uuid_value(),
        group_type in field(),
        name in field(),
    ) {
        let group = GroupReference::new(id, group_type, name);
        prop_assert_eq!(GroupReference::parse(&group.to_source()), Some(group));
    }
}
