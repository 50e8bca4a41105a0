//! Leaf utilities used throughout validation: pointer paths, structural
//! equality, numeric text handling and pattern compilation.

use regex::{Regex, RegexBuilder};
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::sync::LazyLock;

// ─── Pointer paths ──────────────────────────────────────────────────────────

/// Escapes one pointer segment: `~` becomes `~0`, then `/` becomes `~1`.
pub fn escape_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains(['~', '/']) {
        return Cow::Borrowed(segment);
    }
    Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
}

/// Joins segments into a pointer path, each escaped and prefixed with `/`.
///
/// No segments yields the empty (root) path.
pub fn pointer_join<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&escape_segment(segment.as_ref()));
    }
    path
}

// ─── Structural equality ────────────────────────────────────────────────────

/// Deep, kind-strict equality.
///
/// Scalars never match across kinds, and integer `1` does not equal float
/// `1.0`. Maps compare by key set regardless of key order.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, va)| b.get(key).is_some_and(|vb| values_equal(va, vb)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        return a.is_f64() && b.is_f64() && a.as_f64() == b.as_f64();
    }
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => a == b,
        _ => a.as_u64().is_some() && a.as_u64() == b.as_u64(),
    }
}

// ─── Numbers ────────────────────────────────────────────────────────────────

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap()
});

/// Whether a number has an exact integral value, in any representation.
pub fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Reads a numeric string: optional surrounding whitespace, optional sign,
/// decimal digits with an optional fraction and exponent.
///
/// Hex, `inf`, `nan` and anything overflowing to infinity return `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !NUMERIC_RE.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Converts a float to an integer number when it has an integral value that
/// fits in `i64`.
pub fn integral_number(value: f64) -> Option<Number> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(Number::from(value as i64))
}

/// Decimal text for a float, without a trailing `.0` for integral values.
pub fn format_float(value: f64) -> String {
    match integral_number(value) {
        Some(n) if value.abs() < 1e15 => n.to_string(),
        _ => value.to_string(),
    }
}

/// Decimal text for a JSON number.
pub fn format_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(format_float).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

// ─── Patterns ───────────────────────────────────────────────────────────────

/// Compiles a schema pattern for unanchored search.
///
/// `flags` takes PCRE-style modifier letters: `i` (case-insensitive), `m`
/// (multi-line anchors), `s` (dot matches newline), `x` (extended), `U`
/// (swap greediness) and `u` (accepted, matching is always Unicode-aware).
pub fn compile_pattern(pattern: &str, flags: &str) -> Result<Regex, String> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'U' => {
                builder.swap_greed(true);
            }
            'u' => {}
            other => return Err(format!("unsupported pattern flag '{}'", other)),
        }
    }
    builder
        .build()
        .map_err(|e| format!("invalid pattern '{}': {}", pattern, e))
}
