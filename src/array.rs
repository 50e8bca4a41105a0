//! Array keyword family: `items`, `additionalItems`, `minItems`, `maxItems`,
//! `uniqueItems`.

use crate::dispatch::{Dispatcher, Step};
use crate::enums::ErrorCode;
use crate::keywords::{Additional, Items};
use crate::primitives::values_equal;
use serde_json::Value;

impl<'d, 's> Dispatcher<'d, 's> {
    pub(crate) fn check_array(&mut self) -> Step {
        let Some(len) = self.data.get().as_array().map(Vec::len) else {
            return Ok(());
        };

        if let Some(items) = self.keyword("items") {
            match Items::resolve(items)? {
                Items::Uniform(schema) => {
                    for index in 0..len {
                        self.check_element(index, schema, "/items")?;
                    }
                }
                Items::Positional(schemas) => self.check_positional(len, schemas)?,
            }
        }

        if let Some(min) = self.count_keyword("minItems")?
            && (len as u64) < min
        {
            self.fail(
                ErrorCode::ArrayLengthShort,
                "",
                "/minItems",
                format!("Array is too short (must have at least {} items)", min),
            )?;
        }
        if let Some(max) = self.count_keyword("maxItems")?
            && (len as u64) > max
        {
            self.fail(
                ErrorCode::ArrayLengthLong,
                "",
                "/maxItems",
                format!("Array is too long (must have at most {} items)", max),
            )?;
        }

        if self.keyword("uniqueItems").is_some()
            && let Some((first, second)) = self
                .data
                .get()
                .as_array()
                .map(Vec::as_slice)
                .and_then(first_duplicate)
        {
            self.fail(
                ErrorCode::ArrayUnique,
                "",
                "/uniqueItems",
                format!("Array items must be unique (items {} and {})", first, second),
            )?;
        }
        Ok(())
    }

    fn check_positional(&mut self, len: usize, schemas: &'s [Value]) -> Step {
        let additional =
            Additional::resolve(self.keyword("additionalItems"), "/additionalItems")?;
        for index in 0..len {
            if let Some(schema) = schemas.get(index) {
                self.check_element(index, schema, &format!("/items/{}", index))?;
                continue;
            }
            match additional {
                Additional::Forbidden => self.fail(
                    ErrorCode::ArrayAdditionalItems,
                    format!("/{}", index),
                    "/additionalItems",
                    format!(
                        "Additional items (index {} or more) are not allowed",
                        schemas.len()
                    ),
                )?,
                Additional::Schema(schema) => {
                    self.check_element(index, schema, "/additionalItems")?
                }
                Additional::AllowAny => {}
            }
        }
        Ok(())
    }

    fn check_element(&mut self, index: usize, schema: &'s Value, schema_prefix: &str) -> Step {
        let result = match self.data.element(index) {
            Some(slot) => Dispatcher::run(slot, schema, self.ctx),
            None => return Ok(()),
        };
        self.include(result, &format!("/{}", index), schema_prefix)
    }
}

/// The first pair of equal items, scanning pairs in ascending index order.
fn first_duplicate(items: &[Value]) -> Option<(usize, usize)> {
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            if values_equal(a, b) {
                return Some((i, j));
            }
        }
    }
    None
}
