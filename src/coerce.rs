//! Conversions applied by the type stage when coercion is enabled.

use crate::enums::Kind;
use crate::primitives::{format_number, integral_number, parse_numeric};
use serde_json::{Map, Number, Value};

/// Converts `value` toward `target`, or returns `None` when no conversion
/// applies. Values already of the target kind are not passed here.
pub(crate) fn convert(value: &Value, target: Kind) -> Option<Value> {
    match target {
        Kind::Number => to_number(value),
        Kind::Integer => to_integer(value),
        Kind::String => to_string(value),
        Kind::Boolean => to_boolean(value),
        Kind::Object => is_empty_string(value).then(|| Value::Object(Map::new())),
        Kind::Array => is_empty_string(value).then(|| Value::Array(Vec::new())),
        Kind::Null => None,
    }
}

fn to_number(value: &Value) -> Option<Value> {
    match value {
        Value::String(text) => parse_numeric(text)
            .and_then(Number::from_f64)
            .map(Value::Number),
        Value::Bool(flag) => Some(bit(*flag)),
        _ => None,
    }
}

fn to_integer(value: &Value) -> Option<Value> {
    match value {
        Value::String(text) => parse_numeric(text)
            .and_then(integral_number)
            .map(Value::Number),
        Value::Bool(flag) => Some(bit(*flag)),
        _ => None,
    }
}

fn to_string(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => Some(Value::String(format_number(n))),
        Value::Bool(flag) => Some(Value::String(flag.to_string())),
        Value::Null => Some(Value::String(String::new())),
        _ => None,
    }
}

fn to_boolean(value: &Value) -> Option<Value> {
    let flag = match value {
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Null => false,
        Value::String(text) => match text.as_str() {
            "yes" | "true" => true,
            "no" | "false" | "" => false,
            other => parse_numeric(other)? != 0.0,
        },
        _ => return None,
    };
    Some(Value::Bool(flag))
}

fn bit(flag: bool) -> Value {
    Value::Number(Number::from(u8::from(flag)))
}

fn is_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}
