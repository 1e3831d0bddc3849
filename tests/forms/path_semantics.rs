//! Path parsing and segment classification

use kuflow_forms::{Error, PathSegment, PropertyPath};

#[test]
fn test_segments_classified_lexically() {
    let path: PropertyPath = "order.items.0.qty".parse().unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Key("order".to_string()),
            PathSegment::Key("items".to_string()),
            PathSegment::Index(0),
            PathSegment::Key("qty".to_string()),
        ]
    );
}

#[test]
fn test_empty_pieces_are_skipped() {
    let path: PropertyPath = ".a..b.".parse().unwrap();
    assert_eq!(path.to_string(), "a.b");
    assert_eq!(path.len(), 2);
}

#[test]
fn test_all_empty_is_invalid() {
    for raw in ["", ".", "..."] {
        assert!(matches!(
            raw.parse::<PropertyPath>(),
            Err(Error::InvalidPath { .. })
        ));
    }
}

#[test]
fn test_display_round_trip() {
    for raw in ["a", "a.0.b", "key_1.0.key_2.2.key_1"] {
        let path: PropertyPath = raw.parse().unwrap();
        assert_eq!(path.to_string(), raw);
        assert_eq!(path.to_string().parse::<PropertyPath>().unwrap(), path);
    }
}

#[test]
fn test_negative_and_mixed_segments_are_keys() {
    // Classification is lexical: only pure digit runs index lists.
    let path: PropertyPath = "-1.2x.3".parse().unwrap();
    assert_eq!(
        path.segments(),
        &[
            PathSegment::Key("-1".to_string()),
            PathSegment::Key("2x".to_string()),
            PathSegment::Index(3),
        ]
    );
}

#[test]
fn test_builder_appends_children() {
    let path = PropertyPath::key("items").child_index(2).child_key("name");
    assert_eq!(path.to_string(), "items.2.name");
    assert_eq!(path.last_segment(), &PathSegment::Key("name".to_string()));
}
