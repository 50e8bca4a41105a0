//! Values for properties that coercion has to fill in.

use crate::dispatch::{Dispatcher, Halt};
use crate::keywords::{Additional, declared_kinds};
use crate::primitives::pointer_join;
use serde_json::Value;

impl<'d, 's> Dispatcher<'d, 's> {
    /// Writes a value for the absent property `key`, if the schema provides
    /// one. Returns whether a value was written.
    pub(crate) fn synthesize_default(&mut self, key: &str) -> Result<bool, Halt> {
        let Some(schema) = self.property_schema(key)? else {
            return Ok(false);
        };
        let Some(value) = default_value(schema, self.ctx.options.no_implicit_default) else {
            return Ok(false);
        };
        tracing::trace!(property = key, value = %value, "synthesized default");
        self.put_property(key, value);
        Ok(true)
    }

    /// The sub-schema that would govern `key`: its `properties` entry, else
    /// the first matching `patternProperties` entry, else an
    /// `additionalProperties` schema.
    fn property_schema(&self, key: &str) -> Result<Option<&'s Value>, Halt> {
        if let Some(schema) = self.object_keyword("properties")?.and_then(|p| p.get(key)) {
            return Ok(Some(schema));
        }
        if let Some(patterns) = self.object_keyword("patternProperties")? {
            for (pattern, schema) in patterns {
                let path = pointer_join(["patternProperties", pattern.as_str()]);
                if self.ctx.pattern(pattern, "", &path)?.is_match(key) {
                    return Ok(Some(schema));
                }
            }
        }
        let additional = Additional::resolve(
            self.keyword("additionalProperties"),
            "/additionalProperties",
        )?;
        Ok(match additional {
            Additional::Schema(schema) => Some(schema),
            Additional::Forbidden | Additional::AllowAny => None,
        })
    }
}

/// The explicit `default` of `schema`, or unless `no_implicit` is set, the
/// implicit default of its first declared type.
pub(crate) fn default_value(schema: &Value, no_implicit: bool) -> Option<Value> {
    if let Some(explicit) = schema.get("default") {
        return Some(explicit.clone());
    }
    if no_implicit {
        return None;
    }
    let declared = schema.get("type")?;
    declared_kinds(declared)
        .first()
        .map(|kind| kind.implicit_default())
}
