//! Combinators: `allOf`, `anyOf`, `oneOf`, `not`.
//!
//! `allOf` branches share the node and may coerce it in turn. `anyOf` and
//! `oneOf` branches are speculative: when coercing, each one works on its own
//! copy of the node and only a passing branch's copy is adopted.

use crate::dispatch::{Dispatcher, Slot, Step};
use crate::enums::ErrorCode;
use crate::error::{BranchFailure, Finding, SchemaFault};
use serde_json::Value;

/// Result of one speculative branch.
enum Attempt {
    /// Carries the branch's coerced copy when coercing.
    Passed(Option<Value>),
    Failed(Vec<Finding>),
}

impl<'d, 's> Dispatcher<'d, 's> {
    pub(crate) fn check_composite(&mut self) -> Step {
        self.check_all_of()?;
        self.check_any_of()?;
        self.check_one_of()?;
        self.check_not()
    }

    fn check_all_of(&mut self) -> Step {
        let Some(branches) = self.array_keyword("allOf")? else {
            return Ok(());
        };
        for (index, schema) in branches.iter().enumerate() {
            let result = Dispatcher::run(self.data.reborrow(), schema, self.ctx);
            self.include(result, "", &format!("/allOf/{}", index))?;
        }
        Ok(())
    }

    fn check_any_of(&mut self) -> Step {
        let Some(branches) = self.array_keyword("anyOf")? else {
            return Ok(());
        };
        let mut failures = Vec::new();
        for (index, schema) in branches.iter().enumerate() {
            let schema_prefix = format!("/anyOf/{}", index);
            match self.attempt(schema, &schema_prefix)? {
                Attempt::Passed(adopted) => {
                    if let Some(value) = adopted {
                        tracing::trace!(branch = index, "adopted anyOf branch");
                        self.data.replace(value);
                    }
                    return Ok(());
                }
                Attempt::Failed(findings) => {
                    failures.push(branch_failure(index, findings, &schema_prefix))
                }
            }
        }
        self.report(
            Finding::new(
                ErrorCode::AnyOfMissing,
                "",
                "/anyOf",
                "Value must satisfy at least one of the options",
            )
            .with_branches(failures),
        )
    }

    fn check_one_of(&mut self) -> Step {
        let Some(branches) = self.array_keyword("oneOf")? else {
            return Ok(());
        };
        let mut failures = Vec::new();
        let mut passed = Vec::new();
        let mut adopted = None;
        for (index, schema) in branches.iter().enumerate() {
            let schema_prefix = format!("/oneOf/{}", index);
            match self.attempt(schema, &schema_prefix)? {
                Attempt::Passed(value) => {
                    if passed.is_empty() {
                        adopted = value;
                    }
                    passed.push(index);
                }
                Attempt::Failed(findings) => {
                    failures.push(branch_failure(index, findings, &schema_prefix))
                }
            }
        }

        if let Some(value) = adopted {
            tracing::trace!(branch = passed[0], "adopted oneOf branch");
            self.data.replace(value);
        }
        if passed.is_empty() {
            return self.report(
                Finding::new(
                    ErrorCode::OneOfMissing,
                    "",
                    "/oneOf",
                    "Value must satisfy one of the options",
                )
                .with_branches(failures),
            );
        }
        for pair in passed.windows(2) {
            self.fail(
                ErrorCode::OneOfMultiple,
                "",
                "/oneOf",
                format!(
                    "Value satisfies more than one of the options ({} and {})",
                    pair[0], pair[1]
                ),
            )?;
        }
        Ok(())
    }

    fn check_not(&mut self) -> Step {
        let Some(schema) = self.keyword("not") else {
            return Ok(());
        };
        let findings = Dispatcher::run(Slot::Read(self.data.get()), schema, self.ctx)
            .map_err(|fault| fault.prefixed("/not"))?;
        if findings.is_empty() {
            self.fail(
                ErrorCode::NotPassed,
                "",
                "/not",
                "Value satisfies prohibited schema",
            )?;
        }
        Ok(())
    }

    /// Runs one `anyOf`/`oneOf` branch. Read-only runs borrow the node;
    /// coercing runs get a private copy of it.
    fn attempt(&self, schema: &'s Value, schema_prefix: &str) -> Result<Attempt, SchemaFault> {
        let (findings, copy) = match &self.data {
            Slot::Read(data) => (Dispatcher::run(Slot::Read(*data), schema, self.ctx), None),
            Slot::Owned(data) => (Dispatcher::run(Slot::Read(data), schema, self.ctx), None),
            Slot::Write(data) => {
                let mut copy = (**data).clone();
                let findings = Dispatcher::run(Slot::Write(&mut copy), schema, self.ctx);
                (findings, Some(copy))
            }
        };
        let findings = findings.map_err(|fault| fault.prefixed(schema_prefix))?;
        Ok(if findings.is_empty() {
            Attempt::Passed(copy)
        } else {
            Attempt::Failed(findings)
        })
    }
}

fn branch_failure(index: usize, findings: Vec<Finding>, schema_prefix: &str) -> BranchFailure {
    BranchFailure {
        index,
        findings: findings
            .into_iter()
            .map(|f| f.prefixed("", schema_prefix))
            .collect(),
    }
}
