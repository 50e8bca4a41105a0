//! Structural validation of JSON-like data against draft-4 style schemas,
//! with an optional coercion mode.
//!
//! Data and schemas are both [`serde_json::Value`] trees. Validation walks
//! them together and reports every violation as a [`Finding`] carrying a
//! JSON Pointer into the data and into the schema. Coercion does the same
//! walk over a copy of the data, converting values toward the declared types
//! and filling in defaults, and hands back the normalized copy when it
//! conforms.
//!
//! ```text
//! validate(data, schema) → Outcome { valid, findings }
//! is_valid(data, schema) → bool                       (stops at the first finding)
//! coerce(data, schema)   → Outcome { valid, findings, value }
//! ```
//!
//! A malformed schema is reported separately from invalid data: every entry
//! point returns `Err(SchemaFault)` when the schema cannot be applied.
//!
//! # Quick Start
//!
//! ```rust
//! use jsonshape::{ErrorCode, Options};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string", "minLength": 1},
//!         "retries": {"type": "integer", "default": 3},
//!     },
//!     "required": ["name", "retries"],
//! });
//!
//! let outcome = jsonshape::validate(&json!({"name": ""}), &schema, &Options::default())
//!     .expect("schema is well formed");
//! assert!(!outcome.valid);
//! assert_eq!(outcome.findings.len(), 2);
//! assert!(outcome.findings.iter().any(|f| f.code == ErrorCode::ObjectRequired));
//!
//! let outcome = jsonshape::coerce(&json!({"name": "api"}), &schema, &Options::default())
//!     .expect("schema is well formed");
//! assert_eq!(outcome.value, Some(json!({"name": "api", "retries": 3})));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `yaml`  | yes     | Text loading via [`serde-saphyr`](https://docs.rs/serde-saphyr): enables [`parse`](crate::parse) and [`load`]. |

pub mod enums;
pub mod error;
pub mod options;
#[cfg(feature = "yaml")]
pub mod parse;
pub mod primitives;
pub mod validate;

pub(crate) mod array;
pub(crate) mod coerce;
pub(crate) mod composite;
pub(crate) mod defaults;
pub(crate) mod dispatch;
pub(crate) mod keywords;
pub(crate) mod object;
pub(crate) mod scalar;

pub use enums::{ErrorCode, Kind};
pub use error::*;
pub use options::Options;

// Re-export entry-point functions at the crate root for convenience.
pub use validate::{coerce, is_valid, validate};

/// Convenience entry point composing parse → coerce.
///
/// Parses `input` as YAML or JSON, coerces it against `schema` and returns
/// the normalized value.
///
/// # Errors
///
/// Returns [`Error::Parse`] for unreadable input, [`Error::Schema`] for a
/// malformed schema and [`Error::Invalid`] with every finding when the data
/// does not conform.
///
/// # Example
///
/// ```rust
/// use jsonshape::Options;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "port": {"type": "integer"},
///         "debug": {"type": "boolean"},
///     },
///     "additionalProperties": false,
/// });
///
/// let config = jsonshape::load("port: '8080'\ndebug: yes\nstale: 1\n", &schema, &Options::default())
///     .expect("conforming config");
/// assert_eq!(config, json!({"port": 8080, "debug": true}));
/// ```
#[cfg(feature = "yaml")]
pub fn load(
    input: &str,
    schema: &serde_json::Value,
    options: &Options,
) -> Result<serde_json::Value, Error> {
    let data = parse::parse(input)?;
    let outcome = validate::coerce(&data, schema, options)?;
    match outcome.value {
        Some(value) => Ok(value),
        None => Err(Error::Invalid(outcome.findings)),
    }
}
