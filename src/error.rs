use crate::enums::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// One violation found while validating a data tree.
///
/// Both paths are pointer paths rooted at the top of the data and schema
/// trees passed to the entry point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub code: ErrorCode,
    pub data_path: String,
    pub schema_path: String,
    pub message: String,
    /// Failing alternatives of an `anyOf`/`oneOf`, one entry per branch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<BranchFailure>,
}

impl Finding {
    pub fn new(
        code: ErrorCode,
        data_path: impl Into<String>,
        schema_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Finding {
            code,
            data_path: data_path.into(),
            schema_path: schema_path.into(),
            message: message.into(),
            branches: Vec::new(),
        }
    }

    pub fn with_branches(mut self, branches: Vec<BranchFailure>) -> Self {
        self.branches = branches;
        self
    }

    /// Re-roots this finding, and every finding nested in its branches, under
    /// the given data and schema path prefixes.
    pub fn prefixed(mut self, data_prefix: &str, schema_prefix: &str) -> Self {
        if !data_prefix.is_empty() {
            self.data_path.insert_str(0, data_prefix);
        }
        if !schema_prefix.is_empty() {
            self.schema_path.insert_str(0, schema_prefix);
        }
        self.branches = self
            .branches
            .into_iter()
            .map(|branch| branch.prefixed(data_prefix, schema_prefix))
            .collect();
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.data_path.is_empty() {
            "/"
        } else {
            self.data_path.as_str()
        };
        write!(f, "{} at {}: {}", self.code, at, self.message)
    }
}

/// A failed combinator alternative and the findings explaining why.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchFailure {
    pub index: usize,
    pub findings: Vec<Finding>,
}

impl BranchFailure {
    fn prefixed(self, data_prefix: &str, schema_prefix: &str) -> Self {
        BranchFailure {
            index: self.index,
            findings: self
                .findings
                .into_iter()
                .map(|f| f.prefixed(data_prefix, schema_prefix))
                .collect(),
        }
    }
}

/// A malformed schema. Aborts the run it is found in.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("malformed schema at '{schema_path}': {message}")]
pub struct SchemaFault {
    pub schema_path: String,
    pub message: String,
}

impl SchemaFault {
    pub fn new(schema_path: impl Into<String>, message: impl Into<String>) -> Self {
        SchemaFault {
            schema_path: schema_path.into(),
            message: message.into(),
        }
    }

    pub fn prefixed(mut self, schema_prefix: &str) -> Self {
        self.schema_path.insert_str(0, schema_prefix);
        self
    }
}

/// Result of a completed validation or coercion run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    pub valid: bool,
    pub findings: Vec<Finding>,
    /// The normalized value. Only set by a successful coercion.
    pub value: Option<Value>,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Findings matching `code`, in report order. Nested branch findings are
    /// not included.
    pub fn findings_with(&self, code: ErrorCode) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.code == code)
    }
}

/// Error kind for text loading failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Empty,
    Syntax,
    MultiDocument,
}

/// Produced by [`parse`](crate::parse::parse) when input text cannot be read
/// as a single document.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

/// Combined error type for the [`load`](crate::load) entry point.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Schema(#[from] SchemaFault),
    #[error("data does not conform to schema ({} finding(s))", .0.len())]
    Invalid(Vec<Finding>),
}
