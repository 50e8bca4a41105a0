use super::strategies::{arb_json, arb_schema};
use jsonshape::{Options, is_valid, validate};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // The same (data, schema) pair always produces the same outcome.
    #[test]
    fn validation_is_deterministic(data in arb_json(3), schema in arb_schema(3)) {
        let first = validate(&data, &schema, &Options::default()).unwrap();
        let second = validate(&data, &schema, &Options::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    // Stopping at the first finding never changes the verdict.
    #[test]
    fn fail_fast_agrees_with_complete_mode(data in arb_json(3), schema in arb_schema(3)) {
        let complete = validate(&data, &schema, &Options::default()).unwrap();
        let fast = is_valid(&data, &schema, &Options::default()).unwrap();
        prop_assert_eq!(fast, complete.valid);
    }

    // The valid flag and the finding list never disagree, and every path is
    // rooted.
    #[test]
    fn outcome_is_consistent(data in arb_json(3), schema in arb_schema(3)) {
        let outcome = validate(&data, &schema, &Options::default()).unwrap();
        prop_assert_eq!(outcome.valid, outcome.findings.is_empty());
        for finding in &outcome.findings {
            prop_assert!(finding.data_path.is_empty() || finding.data_path.starts_with('/'));
            prop_assert!(finding.schema_path.starts_with('/'));
        }
    }
}
