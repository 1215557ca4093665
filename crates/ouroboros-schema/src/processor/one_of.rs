//! Exclusive disjunction: exactly one operand must accept the value

use super::{run_operands, Processor};
use crate::errors::ProcessorError;
use crate::field_name::FieldName;
use crate::message::{Message, MessageSet};
use crate::result::ProcessResult;
use crate::types::Value;

/// Message reported when zero or several operands accept the value
pub const ONE_OF_MESSAGE: &str = "exactly one of the given schemas must match";

/// Succeeds only when a single operand accepts the value
///
/// With one success that operand's result is returned as-is. With none, the
/// exclusivity message is followed by every operand's messages. With more
/// than one, only the exclusivity message is reported since no operand
/// actually failed.
#[derive(Debug, Clone)]
pub struct OneOf {
    name: String,
    operands: Vec<Processor>,
}

impl OneOf {
    pub fn new(name: impl Into<String>, operands: Vec<Processor>) -> Result<Self, ProcessorError> {
        if operands.len() < 2 {
            return Err(ProcessorError::TooFewOperands {
                processor: "OneOf",
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
        let (mut passed, failed): (Vec<_>, Vec<_>) =
            results.into_iter().partition(ProcessResult::is_valid);

        if passed.len() == 1 {
            return passed.swap_remove(0);
        }

        tracing::trace!(
            "OneOf '{}' rejected value: {} of {} operands matched",
            parent.push(self.name.as_str()),
            passed.len(),
            self.operands.len()
        );

        let exclusivity = ProcessResult::invalid(
            value.clone(),
            [MessageSet::at(
                parent.push(self.name.as_str()),
                vec![Message::new(ONE_OF_MESSAGE, vec![])],
            )],
        );

        if passed.is_empty() {
            failed
                .into_iter()
                .fold(exclusivity, ProcessResult::merge)
                .with_value(value)
        } else {
            exclusivity
        }
    }
}
