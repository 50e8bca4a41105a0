//! Keywords whose value can take several shapes, resolved into closed
//! variants. Shapes outside a variant are schema faults.

use crate::enums::Kind;
use crate::error::SchemaFault;
use serde_json::Value;

/// `additionalProperties` / `additionalItems`.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Additional<'s> {
    Forbidden,
    AllowAny,
    Schema(&'s Value),
}

impl<'s> Additional<'s> {
    /// Absent keywords allow anything. `path` is the keyword's schema path.
    pub(crate) fn resolve(value: Option<&'s Value>, path: &str) -> Result<Self, SchemaFault> {
        match value {
            None | Some(Value::Bool(true)) => Ok(Additional::AllowAny),
            Some(Value::Bool(false)) => Ok(Additional::Forbidden),
            Some(schema @ Value::Object(_)) => Ok(Additional::Schema(schema)),
            Some(_) => Err(SchemaFault::new(path, "must be a boolean or a schema")),
        }
    }
}

/// One entry of `dependencies`.
#[derive(Debug)]
pub(crate) enum Dependency<'s> {
    Key(&'s str),
    Keys(Vec<&'s str>),
    Schema(&'s Value),
}

impl<'s> Dependency<'s> {
    pub(crate) fn resolve(value: &'s Value, path: &str) -> Result<Self, SchemaFault> {
        match value {
            Value::String(key) => Ok(Dependency::Key(key)),
            Value::Array(keys) => keys
                .iter()
                .enumerate()
                .map(|(index, key)| {
                    key.as_str().ok_or_else(|| {
                        SchemaFault::new(format!("{}/{}", path, index), "must be a property name")
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Dependency::Keys),
            Value::Object(_) => Ok(Dependency::Schema(value)),
            _ => Err(SchemaFault::new(
                path,
                "must be a property name, a list of property names or a schema",
            )),
        }
    }
}

/// `items`.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Items<'s> {
    Uniform(&'s Value),
    Positional(&'s [Value]),
}

impl<'s> Items<'s> {
    pub(crate) fn resolve(value: &'s Value) -> Result<Self, SchemaFault> {
        match value {
            Value::Object(_) => Ok(Items::Uniform(value)),
            Value::Array(schemas) => Ok(Items::Positional(schemas)),
            _ => Err(SchemaFault::new(
                "/items",
                "must be a schema or an array of schemas",
            )),
        }
    }
}

/// The kinds named by a `type` keyword, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TypeSet(Vec<Kind>);

impl TypeSet {
    pub(crate) fn resolve(value: &Value) -> Result<Self, SchemaFault> {
        let names: Vec<&Value> = match value {
            Value::String(_) => vec![value],
            Value::Array(names) if !names.is_empty() => names.iter().collect(),
            _ => {
                return Err(SchemaFault::new(
                    "/type",
                    "must be a type name or a non-empty array of type names",
                ));
            }
        };
        names
            .into_iter()
            .map(|name| {
                name.as_str().and_then(Kind::from_name).ok_or_else(|| {
                    SchemaFault::new("/type", format!("unknown type name {}", name))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TypeSet)
    }

    pub(crate) fn kinds(&self) -> &[Kind] {
        &self.0
    }

    pub(crate) fn admits(&self, value: &Value) -> bool {
        self.0.iter().any(|kind| kind.admits(value))
    }
}

/// Leniently reads the kinds named by a `type` keyword, skipping names that
/// are not recognized. Used where the keyword is only consulted, not enforced.
pub(crate) fn declared_kinds(value: &Value) -> Vec<Kind> {
    match value {
        Value::String(name) => Kind::from_name(name).into_iter().collect(),
        Value::Array(names) => names
            .iter()
            .filter_map(|name| name.as_str().and_then(Kind::from_name))
            .collect(),
        _ => Vec::new(),
    }
}
