#![no_main]

use jsonshape::Options;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

// Input is `<schema JSON>\0<data JSON>`. Schemas are arbitrary, so faults are
// expected; the validator must simply never panic, and both modes must agree
// whenever the complete run finishes.
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let Ok(schema) = serde_json::from_slice::<Value>(&data[..split]) else {
        return;
    };
    let Ok(value) = serde_json::from_slice::<Value>(&data[split + 1..]) else {
        return;
    };

    let options = Options::default();
    if let Ok(outcome) = jsonshape::validate(&value, &schema, &options) {
        assert_eq!(outcome.valid, outcome.findings.is_empty());
        let fast = jsonshape::is_valid(&value, &schema, &options);
        assert_eq!(fast, Ok(outcome.valid));
    }
});
