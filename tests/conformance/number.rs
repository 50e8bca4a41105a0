use super::common::{assert_finding, codes, single, validate};
use jsonshape::{ErrorCode, Options};
use serde_json::{Value, json};

fn fault_path(schema: Value) -> String {
    jsonshape::validate(&json!(1), &schema, &Options::default())
        .expect_err("schema should be rejected")
        .schema_path
}

#[test]
fn multiple_of_integer_divisor() {
    let schema = json!({"multipleOf": 3});
    assert!(validate(&json!(9), &schema).valid);
    assert!(validate(&json!(-6), &schema).valid);

    let outcome = validate(&json!(10), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::NumberMultipleOf, "", "/multipleOf");
    assert_eq!(finding.message, "Number must be a multiple of 3");
}

#[test]
fn multiple_of_fractional_divisor() {
    let schema = json!({"multipleOf": 0.5});
    assert!(validate(&json!(2.5), &schema).valid);
    assert!(validate(&json!(4), &schema).valid);
    assert!(!validate(&json!(2.25), &schema).valid);
}

#[test]
fn inclusive_minimum() {
    let schema = json!({"minimum": 5});
    assert!(validate(&json!(5), &schema).valid);

    let outcome = validate(&json!(4), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::NumberMinimum, "", "/minimum");
    assert_eq!(finding.message, "Number must be >= 5");
}

#[test]
fn exclusive_minimum() {
    let schema = json!({"minimum": 5, "exclusiveMinimum": true});
    assert!(validate(&json!(5.01), &schema).valid);

    let outcome = validate(&json!(5), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::NumberMinimumExclusive, "", "/minimum");
    assert_eq!(finding.message, "Number must be > 5");
}

#[test]
fn inclusive_maximum() {
    let schema = json!({"maximum": 1.5});
    assert!(validate(&json!(1.5), &schema).valid);

    let outcome = validate(&json!(2), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::NumberMaximum, "", "/maximum");
    assert_eq!(finding.message, "Number must be <= 1.5");
}

#[test]
fn exclusive_maximum() {
    let schema = json!({"maximum": 1.5, "exclusiveMaximum": true});
    let outcome = validate(&json!(1.5), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::NumberMaximumExclusive, "", "/maximum");
    assert_eq!(finding.message, "Number must be < 1.5");
}

#[test]
fn false_exclusive_flag_keeps_bound_inclusive() {
    let schema = json!({"minimum": 0, "exclusiveMinimum": false});
    assert!(validate(&json!(0), &schema).valid);
}

#[test]
fn all_number_findings_are_reported() {
    let schema = json!({"multipleOf": 2, "maximum": 3});
    let outcome = validate(&json!(5), &schema);
    assert_eq!(
        codes(&outcome),
        vec![ErrorCode::NumberMultipleOf, ErrorCode::NumberMaximum]
    );
}

#[test]
fn number_keywords_ignore_other_kinds() {
    let schema = json!({"minimum": 10, "multipleOf": 7});
    assert!(validate(&json!("3"), &schema).valid);
    assert!(validate(&json!(null), &schema).valid);
}

#[test]
fn malformed_number_keywords_are_schema_faults() {
    assert_eq!(fault_path(json!({"multipleOf": 0})), "/multipleOf");
    assert_eq!(fault_path(json!({"multipleOf": -2})), "/multipleOf");
    assert_eq!(fault_path(json!({"minimum": "3"})), "/minimum");
    assert_eq!(
        fault_path(json!({"minimum": 0, "exclusiveMinimum": 1})),
        "/exclusiveMinimum"
    );
    assert_eq!(
        fault_path(json!({"maximum": 9, "exclusiveMaximum": "yes"})),
        "/exclusiveMaximum"
    );
}
