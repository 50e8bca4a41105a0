//! String and number keyword families.

use crate::dispatch::{Dispatcher, Step};
use crate::enums::ErrorCode;
use crate::error::SchemaFault;
use crate::primitives::format_float;

impl<'d, 's> Dispatcher<'d, 's> {
    pub(crate) fn check_string(&mut self) -> Step {
        let (length, pattern_miss) = {
            let Some(text) = self.data.get().as_str() else {
                return Ok(());
            };
            let miss = match self.str_keyword("pattern")? {
                Some(pattern) => {
                    let flags = self.str_keyword("patternFlags")?.unwrap_or("");
                    let regex = self.ctx.pattern(pattern, flags, "/pattern")?;
                    (!regex.is_match(text)).then_some(pattern)
                }
                None => None,
            };
            (text.chars().count() as u64, miss)
        };

        if let Some(min) = self.count_keyword("minLength")?
            && length < min
        {
            self.fail(
                ErrorCode::StringLengthShort,
                "",
                "/minLength",
                format!("String must be at least {} characters long", min),
            )?;
        }
        if let Some(max) = self.count_keyword("maxLength")?
            && length > max
        {
            self.fail(
                ErrorCode::StringLengthLong,
                "",
                "/maxLength",
                format!("String must be at most {} characters long", max),
            )?;
        }
        if let Some(pattern) = pattern_miss {
            self.fail(
                ErrorCode::StringPattern,
                "",
                "/pattern",
                format!("String does not match pattern: {}", pattern),
            )?;
        }
        Ok(())
    }

    pub(crate) fn check_number(&mut self) -> Step {
        let Some(value) = self.data.get().as_f64() else {
            return Ok(());
        };

        if let Some(divisor) = self.number_keyword("multipleOf")? {
            if divisor <= 0.0 {
                return Err(SchemaFault::new("/multipleOf", "must be greater than 0").into());
            }
            if (value / divisor) % 1.0 != 0.0 {
                self.fail(
                    ErrorCode::NumberMultipleOf,
                    "",
                    "/multipleOf",
                    format!("Number must be a multiple of {}", format_float(divisor)),
                )?;
            }
        }

        if let Some(minimum) = self.number_keyword("minimum")? {
            let bound = format_float(minimum);
            if self.flag_keyword("exclusiveMinimum")? {
                if value <= minimum {
                    self.fail(
                        ErrorCode::NumberMinimumExclusive,
                        "",
                        "/minimum",
                        format!("Number must be > {}", bound),
                    )?;
                }
            } else if value < minimum {
                self.fail(
                    ErrorCode::NumberMinimum,
                    "",
                    "/minimum",
                    format!("Number must be >= {}", bound),
                )?;
            }
        }

        if let Some(maximum) = self.number_keyword("maximum")? {
            let bound = format_float(maximum);
            if self.flag_keyword("exclusiveMaximum")? {
                if value >= maximum {
                    self.fail(
                        ErrorCode::NumberMaximumExclusive,
                        "",
                        "/maximum",
                        format!("Number must be < {}", bound),
                    )?;
                }
            } else if value > maximum {
                self.fail(
                    ErrorCode::NumberMaximum,
                    "",
                    "/maximum",
                    format!("Number must be <= {}", bound),
                )?;
            }
        }
        Ok(())
    }
}
