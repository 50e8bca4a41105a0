//! The recursive constraint dispatcher.
//!
//! A [`Dispatcher`] checks one data node against one schema node, running the
//! keyword families in a fixed order: type, enum, object, array, string,
//! number, composite. Sub-trees are checked by child dispatchers whose
//! findings are re-rooted into the parent when they finish.
//!
//! Data is reached through a [`Slot`]: a shared borrow when validating, an
//! exclusive borrow when coercing, or a private copy when a read-only run
//! needs the node rewritten. Early exits (first-error-fast mode, schema
//! faults) travel up as [`Halt`] values.

use crate::coerce;
use crate::enums::{ErrorCode, Kind};
use crate::error::{Finding, SchemaFault};
use crate::keywords::TypeSet;
use crate::options::Options;
use crate::primitives::{compile_pattern, values_equal};
use regex::Regex;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::HashMap;

/// Access to the data node under test.
pub(crate) enum Slot<'d> {
    Read(&'d Value),
    Write(&'d mut Value),
    /// A read-only private copy, used when a read-only run must see the node
    /// rewritten (null properties stripped).
    Owned(Value),
}

impl<'d> Slot<'d> {
    pub(crate) fn get(&self) -> &Value {
        match self {
            Slot::Read(value) => value,
            Slot::Write(value) => value,
            Slot::Owned(value) => value,
        }
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut Value> {
        match self {
            Slot::Read(_) | Slot::Owned(_) => None,
            Slot::Write(value) => Some(&mut **value),
        }
    }

    pub(crate) fn coercing(&self) -> bool {
        matches!(self, Slot::Write(_))
    }

    /// The same node, for a child dispatch that shares it.
    pub(crate) fn reborrow(&mut self) -> Slot<'_> {
        match self {
            Slot::Read(value) => Slot::Read(*value),
            Slot::Write(value) => Slot::Write(&mut **value),
            Slot::Owned(value) => Slot::Read(value),
        }
    }

    pub(crate) fn property(&mut self, key: &str) -> Option<Slot<'_>> {
        match self {
            Slot::Read(value) => value.get(key).map(Slot::Read),
            Slot::Write(value) => value.get_mut(key).map(Slot::Write),
            Slot::Owned(value) => value.get(key).map(Slot::Read),
        }
    }

    pub(crate) fn element(&mut self, index: usize) -> Option<Slot<'_>> {
        match self {
            Slot::Read(value) => value.get(index).map(Slot::Read),
            Slot::Write(value) => value.get_mut(index).map(Slot::Write),
            Slot::Owned(value) => value.get(index).map(Slot::Read),
        }
    }

    /// Replaces the node. Read-only slots are left untouched.
    pub(crate) fn replace(&mut self, replacement: Value) {
        if let Slot::Write(value) = self {
            **value = replacement;
        }
    }

    /// Removes null-valued properties from an object node. Read-only slots
    /// switch to a stripped private copy so later stages see the same node a
    /// coercing run would.
    pub(crate) fn strip_null_properties(&mut self) {
        match self {
            Slot::Write(value) => {
                if let Value::Object(map) = &mut **value {
                    map.retain(|_, value| !value.is_null());
                }
            }
            Slot::Owned(Value::Object(map)) => map.retain(|_, value| !value.is_null()),
            Slot::Read(Value::Object(map)) => {
                if map.values().any(Value::is_null) {
                    let stripped = map
                        .iter()
                        .filter(|(_, value)| !value.is_null())
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();
                    *self = Slot::Owned(Value::Object(stripped));
                }
            }
            Slot::Read(_) | Slot::Owned(_) => {}
        }
    }
}

/// Why a dispatch stopped before running every stage.
#[derive(Debug)]
pub(crate) enum Halt {
    FirstFinding,
    Fault(SchemaFault),
}

impl From<SchemaFault> for Halt {
    fn from(fault: SchemaFault) -> Self {
        Halt::Fault(fault)
    }
}

pub(crate) type Step = Result<(), Halt>;

/// State shared by every dispatcher of one run.
pub(crate) struct Context {
    pub(crate) options: Options,
    pub(crate) fail_fast: bool,
    patterns: RefCell<HashMap<(String, String), Regex>>,
}

impl Context {
    pub(crate) fn new(options: Options, fail_fast: bool) -> Self {
        Context {
            options,
            fail_fast,
            patterns: RefCell::new(HashMap::new()),
        }
    }

    /// Compiles `pattern`, reusing earlier compilations within this run.
    /// Compile errors become faults at `path`.
    pub(crate) fn pattern(&self, pattern: &str, flags: &str, path: &str) -> Result<Regex, SchemaFault> {
        let key = (pattern.to_owned(), flags.to_owned());
        if let Some(regex) = self.patterns.borrow().get(&key) {
            return Ok(regex.clone());
        }
        let regex = compile_pattern(pattern, flags).map_err(|msg| SchemaFault::new(path, msg))?;
        self.patterns.borrow_mut().insert(key, regex.clone());
        Ok(regex)
    }
}

/// Runs a full check of `data` against `schema` with a fresh context.
pub(crate) fn evaluate(
    data: Slot<'_>,
    schema: &Value,
    options: Options,
    fail_fast: bool,
) -> Result<Vec<Finding>, SchemaFault> {
    let ctx = Context::new(options, fail_fast);
    Dispatcher::run(data, schema, &ctx)
}

pub(crate) struct Dispatcher<'d, 's> {
    pub(crate) data: Slot<'d>,
    pub(crate) schema: &'s Map<String, Value>,
    pub(crate) ctx: &'d Context,
    pub(crate) findings: Vec<Finding>,
}

impl<'d, 's> Dispatcher<'d, 's> {
    /// Checks `data` against `schema`, returning findings relative to both.
    pub(crate) fn run(
        data: Slot<'d>,
        schema: &'s Value,
        ctx: &'d Context,
    ) -> Result<Vec<Finding>, SchemaFault> {
        let Some(schema) = schema.as_object() else {
            return Err(SchemaFault::new("", "schema must be an object"));
        };
        let mut dispatcher = Dispatcher {
            data,
            schema,
            ctx,
            findings: Vec::new(),
        };
        match dispatcher.check_all() {
            Ok(()) | Err(Halt::FirstFinding) => Ok(dispatcher.findings),
            Err(Halt::Fault(fault)) => Err(fault),
        }
    }

    fn check_all(&mut self) -> Step {
        self.check_type()?;
        self.check_enum()?;
        self.check_object()?;
        self.check_array()?;
        self.check_string()?;
        self.check_number()?;
        self.check_composite()
    }

    // ─── Findings ───────────────────────────────────────────────────────────

    pub(crate) fn report(&mut self, finding: Finding) -> Step {
        tracing::trace!(
            code = %finding.code,
            data_path = %finding.data_path,
            schema_path = %finding.schema_path,
            "finding"
        );
        self.findings.push(finding);
        if self.ctx.fail_fast {
            Err(Halt::FirstFinding)
        } else {
            Ok(())
        }
    }

    pub(crate) fn fail(
        &mut self,
        code: ErrorCode,
        data_path: impl Into<String>,
        schema_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Step {
        self.report(Finding::new(code, data_path, schema_path, message))
    }

    /// Merges a child dispatch's result, re-rooting its findings or fault.
    pub(crate) fn include(
        &mut self,
        result: Result<Vec<Finding>, SchemaFault>,
        data_prefix: &str,
        schema_prefix: &str,
    ) -> Step {
        let findings = result.map_err(|fault| fault.prefixed(schema_prefix))?;
        if findings.is_empty() {
            return Ok(());
        }
        self.findings.extend(
            findings
                .into_iter()
                .map(|f| f.prefixed(data_prefix, schema_prefix)),
        );
        if self.ctx.fail_fast {
            Err(Halt::FirstFinding)
        } else {
            Ok(())
        }
    }

    // ─── Keyword access ─────────────────────────────────────────────────────

    pub(crate) fn keyword(&self, name: &str) -> Option<&'s Value> {
        self.schema.get(name)
    }

    pub(crate) fn object_keyword(&self, name: &str) -> Result<Option<&'s Map<String, Value>>, SchemaFault> {
        match self.keyword(name) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(SchemaFault::new(format!("/{}", name), "must be an object")),
        }
    }

    pub(crate) fn array_keyword(&self, name: &str) -> Result<Option<&'s [Value]>, SchemaFault> {
        match self.keyword(name) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(SchemaFault::new(format!("/{}", name), "must be an array")),
        }
    }

    pub(crate) fn str_keyword(&self, name: &str) -> Result<Option<&'s str>, SchemaFault> {
        match self.keyword(name) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(_) => Err(SchemaFault::new(format!("/{}", name), "must be a string")),
        }
    }

    /// A non-negative integer keyword such as `minLength`.
    pub(crate) fn count_keyword(&self, name: &str) -> Result<Option<u64>, SchemaFault> {
        let Some(value) = self.keyword(name) else {
            return Ok(None);
        };
        if let Some(count) = value.as_u64() {
            return Ok(Some(count));
        }
        match value.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(Some(f as u64)),
            _ => Err(SchemaFault::new(
                format!("/{}", name),
                "must be a non-negative integer",
            )),
        }
    }

    pub(crate) fn number_keyword(&self, name: &str) -> Result<Option<f64>, SchemaFault> {
        match self.keyword(name) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| SchemaFault::new(format!("/{}", name), "must be a number")),
        }
    }

    /// A boolean keyword. Absent reads as `false`.
    pub(crate) fn flag_keyword(&self, name: &str) -> Result<bool, SchemaFault> {
        match self.keyword(name) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(_) => Err(SchemaFault::new(format!("/{}", name), "must be a boolean")),
        }
    }

    // ─── Type ───────────────────────────────────────────────────────────────

    fn check_type(&mut self) -> Step {
        let Some(declared) = self.keyword("type") else {
            return Ok(());
        };
        let types = TypeSet::resolve(declared)?;
        if types.admits(self.data.get()) {
            return Ok(());
        }

        if let Slot::Write(data) = &mut self.data {
            for &kind in types.kinds() {
                if let Some(converted) = coerce::convert(data, kind) {
                    tracing::trace!(from = %Kind::of(data), to = %kind, "coerced value");
                    **data = converted;
                    return Ok(());
                }
            }
        }

        let actual = Kind::of(self.data.get());
        self.fail(
            ErrorCode::InvalidType,
            "",
            "/type",
            format!("Invalid type: {}", actual),
        )
    }

    // ─── Enum ───────────────────────────────────────────────────────────────

    fn check_enum(&mut self) -> Step {
        let Some(options) = self.keyword("enum") else {
            return Ok(());
        };
        let Some(options) = options.as_array() else {
            return Err(SchemaFault::new("/enum", "enum must be an array").into());
        };
        if options.iter().any(|option| values_equal(self.data.get(), option)) {
            return Ok(());
        }
        self.fail(
            ErrorCode::EnumMismatch,
            "",
            "/enum",
            "Value must be one of the enum options",
        )
    }
}
