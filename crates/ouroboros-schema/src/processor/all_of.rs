//! Conjunction: every operand must accept the value

use super::{merge_edits, run_operands, Processor};
use crate::errors::ProcessorError;
use crate::field_name::FieldName;
use crate::result::ProcessResult;
use crate::types::Value;

/// Runs every operand against the same input and merges all outcomes
///
/// Messages from every failing operand are kept, not just the first.
#[derive(Debug, Clone)]
pub struct AllOf {
    name: String,
    operands: Vec<Processor>,
}

impl AllOf {
    pub fn new(name: impl Into<String>, operands: Vec<Processor>) -> Result<Self, ProcessorError> {
        if operands.len() < 2 {
            return Err(ProcessorError::TooFewOperands {
                processor: "AllOf",
                given: operands.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            operands,
        })
    }

    pub fn processes(&self) -> &str {
        &self.name
    }

    pub fn operands(&self) -> &[Processor] {
        &self.operands
    }

    pub fn process(&self, parent: &FieldName, value: Value) -> ProcessResult {
        let results = run_operands(&self.operands, parent, &value);
        let merged_value = merge_edits(&value, results.iter().map(ProcessResult::value));

        let result = results
            .into_iter()
            .fold(ProcessResult::no_result(Value::Null), ProcessResult::merge);

        if !result.is_valid() {
            tracing::trace!(
                "AllOf '{}' rejected value with {} message set(s)",
                parent.push(self.name.as_str()),
                result.message_sets().len()
            );
        }

        result.with_value(merged_value)
    }
}
