#![no_main]

use jsonshape::Options;
use libfuzzer_sys::fuzz_target;
use serde_json::json;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(value) = jsonshape::parse::parse(&s) {
        let _ = jsonshape::validate(&value, &json!({"type": "object"}), &Options::default());
    }
    let _ = jsonshape::parse::parse_options(&s);
});
