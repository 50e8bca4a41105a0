//! Reading data, schemas and options from YAML or JSON text.
//!
//! Validation itself works on parsed [`Value`] trees; this module is the
//! convenience layer for callers that hold text, such as configuration
//! loaders. JSON input is accepted as YAML.

use crate::error::{ParseError, ParseErrorKind};
use crate::options::Options;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a single YAML (or JSON) document into a value tree.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_as(input)
}

/// Parses validator options, e.g. `no_implicit_default: true`.
pub fn parse_options(input: &str) -> Result<Options, ParseError> {
    parse_as(input)
}

fn parse_as<T: DeserializeOwned>(input: &str) -> Result<T, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Empty,
            message: "empty input".to_string(),
        });
    }

    check_multi_document(input)?;

    serde_saphyr::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
    })
}

/// Rejects streams holding more than one document.
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for line in input.lines() {
        if let Some(rest) = line.strip_prefix("---")
            && (rest.is_empty() || rest.starts_with([' ', '\t']))
        {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError {
                    kind: ParseErrorKind::MultiDocument,
                    message: "multi-document YAML is not supported".to_string(),
                });
            }
        }
    }
    Ok(())
}
