use super::common::{assert_finding, codes, coerce, single, validate};
use jsonshape::ErrorCode;
use serde_json::json;

// ─── allOf ──────────────────────────────────────────────────────────────────

#[test]
fn all_of_accumulates_every_branch() {
    let schema = json!({"allOf": [{"type": "integer"}, {"minimum": 5}]});
    let outcome = validate(&json!(2.5), &schema);
    assert_eq!(outcome.findings.len(), 2);
    assert_finding(&outcome.findings[0], ErrorCode::InvalidType, "", "/allOf/0/type");
    assert_finding(&outcome.findings[1], ErrorCode::NumberMinimum, "", "/allOf/1/minimum");
}

#[test]
fn all_of_branches_coerce_in_sequence() {
    let schema = json!({"allOf": [{"type": "integer"}, {"minimum": 3}]});
    let outcome = coerce(&json!("5"), &schema);
    assert!(outcome.valid);
    assert_eq!(outcome.value, Some(json!(5)));
}

// ─── anyOf ──────────────────────────────────────────────────────────────────

#[test]
fn any_of_passes_when_one_branch_passes() {
    let schema = json!({"anyOf": [{"type": "integer"}, {"type": "string"}]});
    assert!(validate(&json!("x"), &schema).valid);
    assert!(validate(&json!(1), &schema).valid);
}

#[test]
fn any_of_failure_nests_every_branch() {
    let schema = json!({"anyOf": [{"type": "integer"}, {"type": "string", "minLength": 3}]});
    let outcome = validate(&json!("ab"), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::AnyOfMissing, "", "/anyOf");
    assert_eq!(finding.message, "Value must satisfy at least one of the options");

    assert_eq!(finding.branches.len(), 2);
    assert_eq!(finding.branches[0].index, 0);
    assert_finding(
        &finding.branches[0].findings[0],
        ErrorCode::InvalidType,
        "",
        "/anyOf/0/type",
    );
    assert_eq!(finding.branches[1].index, 1);
    assert_finding(
        &finding.branches[1].findings[0],
        ErrorCode::StringLengthShort,
        "",
        "/anyOf/1/minLength",
    );
}

#[test]
fn nested_branch_findings_are_fully_rooted() {
    let schema = json!({"properties": {"v": {"anyOf": [{"type": "integer"}, {"type": "boolean"}]}}});
    let outcome = validate(&json!({"v": "ab"}), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::AnyOfMissing, "/v", "/properties/v/anyOf");
    assert_finding(
        &finding.branches[1].findings[0],
        ErrorCode::InvalidType,
        "/v",
        "/properties/v/anyOf/1/type",
    );
}

#[test]
fn any_of_adopts_first_passing_branch_copy() {
    let schema = json!({"anyOf": [{"type": "integer"}, {"type": "boolean"}]});
    assert_eq!(coerce(&json!("7"), &schema).value, Some(json!(7)));
    assert_eq!(coerce(&json!("yes"), &schema).value, Some(json!(true)));
}

#[test]
fn failed_branch_coercions_do_not_leak() {
    let schema = json!({"anyOf": [
        {"type": "object", "properties": {"a": {"type": "integer"}}, "required": ["b"]},
        {"type": "object"},
    ]});
    let outcome = coerce(&json!({"a": "1"}), &schema);
    assert!(outcome.valid);
    assert_eq!(outcome.value, Some(json!({"a": "1"})));
}

// ─── oneOf ──────────────────────────────────────────────────────────────────

#[test]
fn one_of_passes_with_exactly_one_branch() {
    let schema = json!({"oneOf": [{"type": "integer"}, {"type": "string"}]});
    assert!(validate(&json!(5), &schema).valid);
}

#[test]
fn one_of_with_no_passing_branch() {
    let schema = json!({"oneOf": [{"type": "integer"}, {"type": "string"}]});
    let outcome = validate(&json!(true), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::OneOfMissing, "", "/oneOf");
    assert_eq!(finding.message, "Value must satisfy one of the options");
    let nested: Vec<_> = finding
        .branches
        .iter()
        .map(|b| b.findings[0].schema_path.as_str())
        .collect();
    assert_eq!(nested, vec!["/oneOf/0/type", "/oneOf/1/type"]);
}

#[test]
fn one_of_reports_each_successive_passing_pair() {
    let schema = json!({"oneOf": [{"type": "integer"}, {"minimum": 0}, {"type": "number"}]});
    let outcome = validate(&json!(5), &schema);
    assert_eq!(
        codes(&outcome),
        vec![ErrorCode::OneOfMultiple, ErrorCode::OneOfMultiple]
    );
    assert_eq!(
        outcome.findings[0].message,
        "Value satisfies more than one of the options (0 and 1)"
    );
    assert_eq!(
        outcome.findings[1].message,
        "Value satisfies more than one of the options (1 and 2)"
    );
    assert!(outcome.findings.iter().all(|f| f.schema_path == "/oneOf"));
}

#[test]
fn one_of_adopts_the_passing_branch_copy() {
    let schema = json!({"oneOf": [{"type": "integer"}, {"type": "boolean"}]});
    let outcome = coerce(&json!("yes"), &schema);
    assert!(outcome.valid);
    assert_eq!(outcome.value, Some(json!(true)));
}

#[test]
fn one_of_branches_each_start_from_the_original_node() {
    let schema = json!({"oneOf": [{"type": "integer"}, {"type": "boolean"}]});
    let outcome = coerce(&json!("1"), &schema);
    assert!(!outcome.valid);
    assert_eq!(single(&outcome).code, ErrorCode::OneOfMultiple);
    assert_eq!(outcome.value, None);
}

// ─── not ────────────────────────────────────────────────────────────────────

#[test]
fn not_rejects_matching_value() {
    let schema = json!({"not": {"type": "string"}});
    assert!(validate(&json!(1), &schema).valid);

    let outcome = validate(&json!("x"), &schema);
    let finding = single(&outcome);
    assert_finding(finding, ErrorCode::NotPassed, "", "/not");
    assert_eq!(finding.message, "Value satisfies prohibited schema");
}

#[test]
fn not_never_coerces() {
    let schema = json!({"not": {"type": "integer"}});
    let outcome = coerce(&json!("5"), &schema);
    assert!(outcome.valid);
    assert_eq!(outcome.value, Some(json!("5")));
}
