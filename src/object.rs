//! Object keyword family: `required`, `properties`, `patternProperties`,
//! `additionalProperties`, `dependencies`, `minProperties`, `maxProperties`,
//! and the opt-in `ignoreNullProperties`.

use crate::dispatch::{Dispatcher, Step};
use crate::enums::ErrorCode;
use crate::error::SchemaFault;
use crate::keywords::{Additional, Dependency};
use crate::primitives::pointer_join;
use serde_json::Value;
use std::collections::HashSet;

impl<'d, 's> Dispatcher<'d, 's> {
    pub(crate) fn check_object(&mut self) -> Step {
        if !self.data.get().is_object() {
            return Ok(());
        }

        if self.ctx.options.enable_ignore_null_properties
            && self.flag_keyword("ignoreNullProperties")?
        {
            self.data.strip_null_properties();
        }

        self.check_required()?;
        let mut checked = HashSet::new();
        self.check_properties(&mut checked)?;
        self.check_pattern_properties(&mut checked)?;
        self.check_additional_properties(&checked)?;
        self.check_dependencies()?;
        self.check_property_count()
    }

    // ─── Property access ────────────────────────────────────────────────────

    pub(crate) fn has_property(&self, key: &str) -> bool {
        self.data.get().get(key).is_some()
    }

    fn present_keys(&self) -> Vec<String> {
        match self.data.get() {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn put_property(&mut self, key: &str, value: Value) {
        if let Some(Value::Object(map)) = self.data.get_mut() {
            map.insert(key.to_string(), value);
        }
    }

    fn remove_property(&mut self, key: &str) {
        if let Some(Value::Object(map)) = self.data.get_mut() {
            map.shift_remove(key);
        }
    }

    /// Sub-validates the value under `key` against `schema`.
    fn check_property(&mut self, key: &str, schema: &'s Value, schema_prefix: &str) -> Step {
        let result = match self.data.property(key) {
            Some(slot) => Dispatcher::run(slot, schema, self.ctx),
            None => return Ok(()),
        };
        self.include(result, &pointer_join([key]), schema_prefix)
    }

    // ─── Keywords ───────────────────────────────────────────────────────────

    fn check_required(&mut self) -> Step {
        let Some(required) = self.array_keyword("required")? else {
            return Ok(());
        };
        for (index, key) in required.iter().enumerate() {
            let schema_path = format!("/required/{}", index);
            let Some(key) = key.as_str() else {
                return Err(SchemaFault::new(schema_path, "must be a property name").into());
            };
            if self.has_property(key) {
                continue;
            }
            if self.data.coercing() && self.synthesize_default(key)? {
                continue;
            }
            self.fail(
                ErrorCode::ObjectRequired,
                "",
                schema_path,
                format!("Missing required property: {}", key),
            )?;
        }
        Ok(())
    }

    fn check_properties(&mut self, checked: &mut HashSet<String>) -> Step {
        let Some(properties) = self.object_keyword("properties")? else {
            return Ok(());
        };
        for (key, schema) in properties {
            checked.insert(key.clone());
            let schema_prefix = pointer_join(["properties", key.as_str()]);

            if !self.has_property(key)
                && self.data.coercing()
                && self.ctx.options.set_missing_to_default
                && schema.get("default").is_some()
                && !self.synthesize_default(key)?
            {
                self.fail(
                    ErrorCode::ObjectNoDefault,
                    "",
                    schema_prefix.clone(),
                    format!("Missing default value for property: {}", key),
                )?;
            }

            if self.has_property(key) {
                self.check_property(key, schema, &schema_prefix)?;
            }
        }
        Ok(())
    }

    fn check_pattern_properties(&mut self, checked: &mut HashSet<String>) -> Step {
        let Some(patterns) = self.object_keyword("patternProperties")? else {
            return Ok(());
        };
        for (pattern, schema) in patterns {
            let schema_prefix = pointer_join(["patternProperties", pattern.as_str()]);
            let regex = self.ctx.pattern(pattern, "", &schema_prefix)?;
            for key in self.present_keys() {
                if !regex.is_match(&key) {
                    continue;
                }
                self.check_property(&key, schema, &schema_prefix)?;
                checked.insert(key);
            }
        }
        Ok(())
    }

    fn check_additional_properties(&mut self, checked: &HashSet<String>) -> Step {
        let additional = Additional::resolve(
            self.keyword("additionalProperties"),
            "/additionalProperties",
        )?;
        if let Additional::AllowAny = additional {
            return Ok(());
        }
        for key in self.present_keys() {
            if checked.contains(&key) {
                continue;
            }
            match additional {
                Additional::Forbidden if self.data.coercing() => {
                    tracing::trace!(property = %key, "dropped additional property");
                    self.remove_property(&key);
                }
                Additional::Forbidden => self.fail(
                    ErrorCode::ObjectAdditionalProperties,
                    pointer_join([key.as_str()]),
                    "/additionalProperties",
                    format!("Additional property not allowed: {}", key),
                )?,
                Additional::Schema(schema) => {
                    self.check_property(&key, schema, "/additionalProperties")?
                }
                Additional::AllowAny => {}
            }
        }
        Ok(())
    }

    fn check_dependencies(&mut self) -> Step {
        let Some(dependencies) = self.object_keyword("dependencies")? else {
            return Ok(());
        };
        for (key, dependency) in dependencies {
            if !self.has_property(key) {
                continue;
            }
            let schema_prefix = pointer_join(["dependencies", key.as_str()]);
            match Dependency::resolve(dependency, &schema_prefix)? {
                Dependency::Schema(schema) => {
                    let result = Dispatcher::run(self.data.reborrow(), schema, self.ctx);
                    self.include(result, "", &schema_prefix)?;
                }
                Dependency::Keys(names) => {
                    for (index, name) in names.into_iter().enumerate() {
                        if !self.has_property(name) {
                            self.fail(
                                ErrorCode::ObjectDependencyKey,
                                "",
                                format!("{}/{}", schema_prefix, index),
                                format!("Property {} depends on {}", key, name),
                            )?;
                        }
                    }
                }
                Dependency::Key(name) => {
                    if !self.has_property(name) {
                        self.fail(
                            ErrorCode::ObjectDependencyKey,
                            "",
                            schema_prefix,
                            format!("Property {} depends on {}", key, name),
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn check_property_count(&mut self) -> Step {
        let count = self.present_keys().len() as u64;
        if let Some(min) = self.count_keyword("minProperties")?
            && count < min
        {
            let message = if min == 1 {
                "Object cannot be empty".to_string()
            } else {
                format!("Object must have at least {} defined properties", min)
            };
            self.fail(
                ErrorCode::ObjectPropertiesMinimum,
                "",
                "/minProperties",
                message,
            )?;
        }
        if let Some(max) = self.count_keyword("maxProperties")?
            && count > max
        {
            let message = if max == 1 {
                "Object must have at most one defined property".to_string()
            } else {
                format!("Object must have at most {} defined properties", max)
            };
            self.fail(
                ErrorCode::ObjectPropertiesMaximum,
                "",
                "/maxProperties",
                message,
            )?;
        }
        Ok(())
    }
}
