#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsonshape::Options;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value, json};

const KINDS: [&str; 7] = [
    "object", "array", "string", "number", "integer", "boolean", "null",
];

/// Generate an arbitrary JSON value from fuzzer bytes.
fn arbitrary_value(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let max = if depth == 0 { 4 } else { 6 };
    match u.int_in_range(0..=max)? {
        0 => Ok(Value::Null),
        1 => Ok(Value::Bool(bool::arbitrary(u)?)),
        2 => {
            let n = f64::arbitrary(u)?;
            Ok(serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null))
        }
        3 => Ok(json!(i64::arbitrary(u)?)),
        4 => Ok(Value::String(String::arbitrary(u)?)),
        5 => {
            let len = u.int_in_range(0..=4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Array(items))
        }
        _ => {
            let len = u.int_in_range(0..=4)?;
            let mut map = Map::new();
            for _ in 0..len {
                let key = ["a", "b", "c"][u.int_in_range(0..=2)?];
                map.insert(key.to_string(), arbitrary_value(u, depth - 1)?);
            }
            Ok(Value::Object(map))
        }
    }
}

/// Generate a well-formed schema from fuzzer bytes.
fn arbitrary_schema(u: &mut Unstructured<'_>, depth: u32) -> arbitrary::Result<Value> {
    let max = if depth == 0 { 5 } else { 11 };
    Ok(match u.int_in_range(0..=max)? {
        0 => json!({}),
        1 => json!({"type": KINDS[u.int_in_range(0..=6)?]}),
        2 => json!({"type": [KINDS[u.int_in_range(0..=6)?], KINDS[u.int_in_range(0..=6)?]]}),
        3 => json!({"minimum": i32::arbitrary(u)?, "exclusiveMinimum": bool::arbitrary(u)?}),
        4 => json!({"required": ["a", "b"], "properties": {"a": {"type": KINDS[u.int_in_range(0..=6)?]}}}),
        5 => json!({"enum": [arbitrary_value(u, 1)?, arbitrary_value(u, 1)?]}),
        6 => json!({"properties": {"a": arbitrary_schema(u, depth - 1)?}, "additionalProperties": bool::arbitrary(u)?}),
        7 => json!({"items": arbitrary_schema(u, depth - 1)?, "uniqueItems": true}),
        8 => json!({"allOf": [arbitrary_schema(u, depth - 1)?, arbitrary_schema(u, depth - 1)?]}),
        9 => json!({"anyOf": [arbitrary_schema(u, depth - 1)?, arbitrary_schema(u, depth - 1)?]}),
        10 => json!({"oneOf": [arbitrary_schema(u, depth - 1)?, arbitrary_schema(u, depth - 1)?]}),
        _ => json!({"not": arbitrary_schema(u, depth - 1)?}),
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let Ok(schema) = arbitrary_schema(&mut u, 3) else {
        return;
    };
    let Ok(value) = arbitrary_value(&mut u, 3) else {
        return;
    };
    let Ok(flags) = <[bool; 3]>::arbitrary(&mut u) else {
        return;
    };
    let options = Options::new()
        .with_no_implicit_default(flags[0])
        .with_set_missing_to_default(flags[1])
        .with_ignore_null_properties(flags[2]);

    let before = value.clone();
    let outcome = jsonshape::coerce(&value, &schema, &options).expect("generated schemas are well formed");
    assert_eq!(value, before);
    assert_eq!(outcome.value.is_some(), outcome.valid);
});
