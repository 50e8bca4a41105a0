//! Closed enumerations shared by the validator: finding codes and value kinds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Stable code attached to every [`Finding`](crate::error::Finding).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidType,
    EnumMismatch,
    AnyOfMissing,
    OneOfMissing,
    OneOfMultiple,
    NotPassed,
    NumberMultipleOf,
    NumberMinimum,
    NumberMinimumExclusive,
    NumberMaximum,
    NumberMaximumExclusive,
    StringLengthShort,
    StringLengthLong,
    StringPattern,
    ObjectPropertiesMinimum,
    ObjectPropertiesMaximum,
    ObjectRequired,
    ObjectAdditionalProperties,
    ObjectDependencyKey,
    ObjectNoDefault,
    ArrayLengthShort,
    ArrayLengthLong,
    ArrayUnique,
    ArrayAdditionalItems,
    ArrayIndexType,
}

impl ErrorCode {
    /// The code's name as it appears in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::EnumMismatch => "ENUM_MISMATCH",
            ErrorCode::AnyOfMissing => "ANY_OF_MISSING",
            ErrorCode::OneOfMissing => "ONE_OF_MISSING",
            ErrorCode::OneOfMultiple => "ONE_OF_MULTIPLE",
            ErrorCode::NotPassed => "NOT_PASSED",
            ErrorCode::NumberMultipleOf => "NUMBER_MULTIPLE_OF",
            ErrorCode::NumberMinimum => "NUMBER_MINIMUM",
            ErrorCode::NumberMinimumExclusive => "NUMBER_MINIMUM_EXCLUSIVE",
            ErrorCode::NumberMaximum => "NUMBER_MAXIMUM",
            ErrorCode::NumberMaximumExclusive => "NUMBER_MAXIMUM_EXCLUSIVE",
            ErrorCode::StringLengthShort => "STRING_LENGTH_SHORT",
            ErrorCode::StringLengthLong => "STRING_LENGTH_LONG",
            ErrorCode::StringPattern => "STRING_PATTERN",
            ErrorCode::ObjectPropertiesMinimum => "OBJECT_PROPERTIES_MINIMUM",
            ErrorCode::ObjectPropertiesMaximum => "OBJECT_PROPERTIES_MAXIMUM",
            ErrorCode::ObjectRequired => "OBJECT_REQUIRED",
            ErrorCode::ObjectAdditionalProperties => "OBJECT_ADDITIONAL_PROPERTIES",
            ErrorCode::ObjectDependencyKey => "OBJECT_DEPENDENCY_KEY",
            ErrorCode::ObjectNoDefault => "OBJECT_NO_DEFAULT",
            ErrorCode::ArrayLengthShort => "ARRAY_LENGTH_SHORT",
            ErrorCode::ArrayLengthLong => "ARRAY_LENGTH_LONG",
            ErrorCode::ArrayUnique => "ARRAY_UNIQUE",
            ErrorCode::ArrayAdditionalItems => "ARRAY_ADDITIONAL_ITEMS",
            ErrorCode::ArrayIndexType => "ARRAY_INDEX_TYPE",
        }
    }

    /// Numeric form of the code. Codes are grouped by family: 0–13 general,
    /// 1xx number, 2xx string, 3xx object, 4xx array.
    pub fn number(&self) -> u16 {
        match self {
            ErrorCode::InvalidType => 0,
            ErrorCode::EnumMismatch => 1,
            ErrorCode::AnyOfMissing => 10,
            ErrorCode::OneOfMissing => 11,
            ErrorCode::OneOfMultiple => 12,
            ErrorCode::NotPassed => 13,
            ErrorCode::NumberMultipleOf => 100,
            ErrorCode::NumberMinimum => 101,
            ErrorCode::NumberMinimumExclusive => 102,
            ErrorCode::NumberMaximum => 103,
            ErrorCode::NumberMaximumExclusive => 104,
            ErrorCode::StringLengthShort => 200,
            ErrorCode::StringLengthLong => 201,
            ErrorCode::StringPattern => 202,
            ErrorCode::ObjectPropertiesMinimum => 300,
            ErrorCode::ObjectPropertiesMaximum => 301,
            ErrorCode::ObjectRequired => 302,
            ErrorCode::ObjectAdditionalProperties => 303,
            ErrorCode::ObjectDependencyKey => 304,
            ErrorCode::ObjectNoDefault => 305,
            ErrorCode::ArrayLengthShort => 400,
            ErrorCode::ArrayLengthLong => 401,
            ErrorCode::ArrayUnique => 402,
            ErrorCode::ArrayAdditionalItems => 403,
            ErrorCode::ArrayIndexType => 404,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven value kinds a `type` keyword can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl Kind {
    pub fn from_name(name: &str) -> Option<Kind> {
        match name {
            "object" => Some(Kind::Object),
            "array" => Some(Kind::Array),
            "string" => Some(Kind::String),
            "number" => Some(Kind::Number),
            "integer" => Some(Kind::Integer),
            "boolean" => Some(Kind::Boolean),
            "null" => Some(Kind::Null),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        }
    }

    /// The kind a value reports in messages. Numbers with an integral value
    /// report as `integer`, whatever their representation.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(n) if crate::primitives::is_integral(n) => Kind::Integer,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Whether `value` satisfies this kind without any conversion.
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (Kind::Object, Value::Object(_)) => true,
            (Kind::Array, Value::Array(_)) => true,
            (Kind::String, Value::String(_)) => true,
            (Kind::Number, Value::Number(_)) => true,
            (Kind::Integer, Value::Number(n)) => crate::primitives::is_integral(n),
            (Kind::Boolean, Value::Bool(_)) => true,
            (Kind::Null, Value::Null) => true,
            _ => false,
        }
    }

    /// Value manufactured for a missing property whose schema declares this
    /// kind and no explicit default.
    pub fn implicit_default(&self) -> Value {
        match self {
            Kind::Null => Value::Null,
            Kind::Boolean => Value::Bool(true),
            Kind::Integer | Kind::Number => Value::Number(Number::from(0)),
            Kind::String => Value::String(String::new()),
            Kind::Object => Value::Object(Map::new()),
            Kind::Array => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
