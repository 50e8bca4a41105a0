//! Validator options.

use serde::{Deserialize, Serialize};

/// Boolean switches that adjust validation and coercion. All default to off.
///
/// Deserializes from a map with the field names as keys, so options can live
/// in a configuration file next to the schema they apply to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Never derive a missing property's value from its declared type.
    /// Explicit `default` values are still used.
    pub no_implicit_default: bool,
    /// When coercing, also fill in declared but not required properties that
    /// carry an explicit `default`.
    pub set_missing_to_default: bool,
    /// Recognize the `ignoreNullProperties` schema keyword, which treats
    /// null-valued properties as absent.
    pub enable_ignore_null_properties: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_implicit_default(mut self, enabled: bool) -> Self {
        self.no_implicit_default = enabled;
        self
    }

    pub fn with_set_missing_to_default(mut self, enabled: bool) -> Self {
        self.set_missing_to_default = enabled;
        self
    }

    pub fn with_ignore_null_properties(mut self, enabled: bool) -> Self {
        self.enable_ignore_null_properties = enabled;
        self
    }
}
