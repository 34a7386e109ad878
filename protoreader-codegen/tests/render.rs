use pretty_assertions::assert_eq;
use protoreader_codegen::{load_descriptors, render_types, Error};
use protoreader_core::TypeDescriptor;

#[test]
fn test_render_expressions() {
    let types = [
        "java.util.List",
        "java.lang.String",
        "java.util.Map<String, Integer>",
        "RawType<>",
        "java.util.List<java.util.Map<String, ? extends Number>>",
    ]
    .map(|expression| TypeDescriptor::try_from(expression).unwrap());

    let rendered = render_types(&types, false).unwrap();
    assert_eq!(
        rendered,
        "List\n\
         java.lang.String\n\
         java.util.Map<String,Integer>\n\
         RawType<>\n\
         List<java.util.Map<String,? extends Number>>\n"
    );
}

#[test]
fn test_render_with_factories() {
    let types = [
        TypeDescriptor::try_from("org.example.protocol.EventData").unwrap(),
        TypeDescriptor::try_from("java.util.List<String>").unwrap(),
        TypeDescriptor::Other("T"),
    ];

    let rendered = render_types(&types, true).unwrap();
    assert_eq!(
        rendered,
        "org.example.protocol.EventData\tFEventData\nList<String>\tFList\nT\n"
    );
}

#[test]
fn test_load_descriptors() {
    let json = r#"[
        {"simple": "java.lang.String"},
        {"parameterized": {"raw": {"simple": "Map"}, "arguments": ["String", {"simple": "Integer"}]}},
        {"wildcard": {"upper_bounds": [{"simple": "Number"}]}},
        "java.util.List<? extends Number>"
    ]"#;

    let types = load_descriptors(json).unwrap();
    assert_eq!(types.len(), 4);
    assert_eq!(
        render_types(&types, false).unwrap(),
        "java.lang.String\nMap<String,Integer>\n? extends Number\nList<? extends Number>\n"
    );

    // A single descriptor doesn't need to be wrapped in an array.
    let types = load_descriptors(r#"{"other": "T[]"}"#).unwrap();
    assert_eq!(types, vec![TypeDescriptor::Other("T[]")]);
}

#[test]
fn test_malformed_wildcard() {
    let json = r#"{"parameterized": {
        "raw": "Map",
        "arguments": ["String", {"wildcard": {"upper_bounds": ["Number", "Comparable"]}}]
    }}"#;

    let types = load_descriptors(json).unwrap();
    match render_types(&types, false) {
        Err(Error::Core(protoreader_core::Error::MalformedWildcard { upper_bounds })) => {
            assert_eq!(upper_bounds, 2);
        }
        other => panic!("Expected malformed wildcard error, got {other:?}"),
    }
}

#[test]
fn test_invalid_json() {
    assert!(matches!(load_descriptors("{"), Err(Error::Json(_))));
    assert!(matches!(
        load_descriptors(r#"{"unknown": "String"}"#),
        Err(Error::Json(_))
    ));
}
