//! Entry points: [`validate`], [`is_valid`] and [`coerce`].
//!
//! All three return `Err` when the schema itself is malformed; a fault means
//! the data could not be judged at all.

use crate::dispatch::{Slot, evaluate};
use crate::error::{Outcome, SchemaFault};
use crate::options::Options;
use serde_json::Value;

/// Validates `data` against `schema`, reporting every finding.
///
/// The data is never modified.
///
/// # Errors
///
/// Returns the [`SchemaFault`] that stopped the run if the schema is
/// malformed.
///
/// # Example
///
/// ```rust
/// use jsonshape::{Options, validate};
/// use serde_json::json;
///
/// let schema = json!({"type": "object", "required": ["name"]});
/// let outcome = validate(&json!({}), &schema, &Options::default()).unwrap();
/// assert!(!outcome.valid);
/// assert_eq!(outcome.findings[0].schema_path, "/required/0");
/// ```
pub fn validate(data: &Value, schema: &Value, options: &Options) -> Result<Outcome, SchemaFault> {
    let findings = evaluate(Slot::Read(data), schema, *options, false).inspect_err(log_fault)?;
    tracing::debug!(
        mode = "validate",
        findings = findings.len(),
        valid = findings.is_empty(),
        "validation finished"
    );
    Ok(Outcome {
        valid: findings.is_empty(),
        findings,
        value: None,
    })
}

/// Reports whether `data` conforms to `schema`, stopping at the first
/// finding.
///
/// # Errors
///
/// Returns the [`SchemaFault`] that stopped the run if the schema is
/// malformed before the first finding is reached.
pub fn is_valid(data: &Value, schema: &Value, options: &Options) -> Result<bool, SchemaFault> {
    let findings = evaluate(Slot::Read(data), schema, *options, true).inspect_err(log_fault)?;
    tracing::debug!(mode = "is_valid", valid = findings.is_empty(), "validation finished");
    Ok(findings.is_empty())
}

/// Validates a copy of `data`, converting it toward the schema's declared
/// types and filling in defaults along the way.
///
/// The caller's value is never modified. A valid outcome carries the
/// normalized value in [`Outcome::value`]; an invalid one carries no value.
///
/// # Errors
///
/// Returns the [`SchemaFault`] that stopped the run if the schema is
/// malformed.
///
/// # Example
///
/// ```rust
/// use jsonshape::{Options, coerce};
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {"port": {"type": "integer"}},
/// });
/// let outcome = coerce(&json!({"port": "8080"}), &schema, &Options::default()).unwrap();
/// assert_eq!(outcome.value, Some(json!({"port": 8080})));
/// ```
pub fn coerce(data: &Value, schema: &Value, options: &Options) -> Result<Outcome, SchemaFault> {
    let mut working = data.clone();
    let findings =
        evaluate(Slot::Write(&mut working), schema, *options, false).inspect_err(log_fault)?;
    let valid = findings.is_empty();
    tracing::debug!(
        mode = "coerce",
        findings = findings.len(),
        valid,
        "validation finished"
    );
    Ok(Outcome {
        valid,
        findings,
        value: valid.then_some(working),
    })
}

fn log_fault(fault: &SchemaFault) {
    tracing::debug!(
        schema_path = %fault.schema_path,
        message = %fault.message,
        "schema fault aborted validation"
    );
}
