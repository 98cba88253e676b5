use cpm::config::{parse_config, Config, ConfigFormat};
use cpm::error::Error;
use cpm::replacements::{build_replacements, positional_values, validate_type_value};

fn config() -> Config {
    parse_config(
        r#"{
            "types": {
                "page": "namePage",
                "component": "name/subname"
            },
            "staticReplacePairs": {
                "author": "team",
                "name": "static-name"
            },
            "structure": {},
            "dirFileTemplates": "templates",
            "dirDestination": "src"
        }"#,
        ConfigFormat::Json,
    )
    .unwrap()
}

#[test]
fn test_excess_segments_are_ignored() {
    let replacements = build_replacements(&config(), "component", "foo/bar/baz").unwrap();

    assert_eq!(replacements.get("name"), Some("foo"));
    assert_eq!(replacements.get("subname"), Some("bar"));
    assert_eq!(replacements.get("baz"), None);
}

#[test]
fn test_positional_values_override_static_pairs() {
    let replacements = build_replacements(&config(), "component", "foo/bar").unwrap();

    assert_eq!(replacements.get("author"), Some("team"));
    assert_eq!(replacements.get("name"), Some("foo"));
    assert_eq!(replacements.len(), 3);
}

#[test]
fn test_too_few_segments_fail() {
    let err = build_replacements(&config(), "component", "foo").unwrap_err();
    match err {
        Error::TypeValueMismatch { value, template } => {
            assert_eq!(value, "foo");
            assert_eq!(template, "name/subname");
        }
        other => panic!("Expected TypeValueMismatch, got {other:?}"),
    }
}

#[test]
fn test_empty_segments_do_not_count() {
    assert!(validate_type_value("name/subname", "foo//").is_err());
    assert!(validate_type_value("name/subname", "/foo//bar/").is_ok());
    assert!(validate_type_value("/name//", "x").is_ok());
}

#[test]
fn test_unknown_type_fails() {
    let err = build_replacements(&config(), "widget", "x").unwrap_err();
    assert!(matches!(err, Error::UnknownType { type_id } if type_id == "widget"));
}

#[test]
fn test_positional_values_keep_declared_order() {
    let values = positional_values("b/a/c", "1/2");
    let pairs: Vec<(&str, &str)> =
        values.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(pairs, vec![("b", "1"), ("a", "2")]);
}
