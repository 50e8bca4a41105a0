use super::common::{assert_finding, single, validate};
use jsonshape::ErrorCode;
use serde_json::json;

#[test]
fn positional_item_under_property() {
    let schema = json!({
        "type": "object",
        "properties": {
            "b": {"items": [{}, {}, {"minimum": 10}]},
        },
    });
    let outcome = validate(&json!({"b": [0, 0, 3]}), &schema);
    assert_finding(
        single(&outcome),
        ErrorCode::NumberMinimum,
        "/b/2",
        "/properties/b/items/2/minimum",
    );
}

#[test]
fn deeply_nested_paths() {
    let schema = json!({
        "properties": {
            "servers": {
                "items": {
                    "properties": {
                        "ports": {"items": {"type": "integer"}},
                    },
                },
            },
        },
    });
    let data = json!({"servers": [{"ports": [80]}, {"ports": [443, "x"]}]});
    let outcome = validate(&data, &schema);
    assert_finding(
        single(&outcome),
        ErrorCode::InvalidType,
        "/servers/1/ports/1",
        "/properties/servers/items/properties/ports/items/type",
    );
}

#[test]
fn findings_follow_stage_order() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "minLength": 3},
            "tags": {"type": "array", "uniqueItems": true},
        },
        "required": ["id"],
        "anyOf": [{"required": ["name"]}, {"required": ["id"]}],
        "minProperties": 5,
    });
    let outcome = validate(&json!({"tags": ["a", "a"], "name": "x"}), &schema);
    let paths: Vec<_> = outcome.findings.iter().map(|f| f.schema_path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/required/0",
            "/properties/name/minLength",
            "/properties/tags/uniqueItems",
            "/minProperties",
        ]
    );
}

#[test]
fn repeated_runs_yield_identical_outcomes() {
    let schema = json!({
        "properties": {
            "a": {"oneOf": [{"type": "integer"}, {"type": "number"}]},
            "b": {"items": {"enum": [1, 2]}},
        },
        "additionalProperties": false,
    });
    let data = json!({"a": 1, "b": [1, 3, 4], "c": null});
    let first = validate(&data, &schema);
    assert!(!first.valid);
    for _ in 0..5 {
        assert_eq!(validate(&data, &schema), first);
    }
}

#[test]
fn finding_display_names_code_and_location() {
    let outcome = validate(&json!({"a": "x"}), &json!({"properties": {"a": {"type": "integer"}}}));
    assert_eq!(
        single(&outcome).to_string(),
        "INVALID_TYPE at /a: Invalid type: string"
    );

    let outcome = validate(&json!(1), &json!({"type": "string"}));
    assert_eq!(
        single(&outcome).to_string(),
        "INVALID_TYPE at /: Invalid type: integer"
    );
}

#[test]
fn findings_serialize_with_stable_codes() {
    let outcome = validate(&json!([1, 1]), &json!({"uniqueItems": true}));
    let encoded = serde_json::to_value(single(&outcome)).unwrap();
    assert_eq!(
        encoded,
        json!({
            "code": "ARRAY_UNIQUE",
            "data_path": "",
            "schema_path": "/uniqueItems",
            "message": "Array items must be unique (items 0 and 1)",
        })
    );
    assert_eq!(ErrorCode::ArrayUnique.number(), 402);
}

#[test]
fn code_names_match_their_serialized_form() {
    let all = [
        ErrorCode::InvalidType,
        ErrorCode::EnumMismatch,
        ErrorCode::AnyOfMissing,
        ErrorCode::OneOfMissing,
        ErrorCode::OneOfMultiple,
        ErrorCode::NotPassed,
        ErrorCode::NumberMultipleOf,
        ErrorCode::NumberMinimum,
        ErrorCode::NumberMinimumExclusive,
        ErrorCode::NumberMaximum,
        ErrorCode::NumberMaximumExclusive,
        ErrorCode::StringLengthShort,
        ErrorCode::StringLengthLong,
        ErrorCode::StringPattern,
        ErrorCode::ObjectPropertiesMinimum,
        ErrorCode::ObjectPropertiesMaximum,
        ErrorCode::ObjectRequired,
        ErrorCode::ObjectAdditionalProperties,
        ErrorCode::ObjectDependencyKey,
        ErrorCode::ObjectNoDefault,
        ErrorCode::ArrayLengthShort,
        ErrorCode::ArrayLengthLong,
        ErrorCode::ArrayUnique,
        ErrorCode::ArrayAdditionalItems,
        ErrorCode::ArrayIndexType,
    ];
    for code in all {
        let serialized = serde_json::to_value(code).unwrap();
        assert_eq!(serialized, json!(code.as_str()), "{:?}", code);
        let parsed: ErrorCode = serde_json::from_value(serialized).unwrap();
        assert_eq!(parsed, code);
    }
}
