//! Disjunction: at least one operand must accept the value

use super::{merge_edits, run_operands, Processor};
use crate::errors::ProcessorError;
use crate::field_name::FieldName;
use crate::result::{ProcessResult, Validity};
use crate::types::Value;

/// Succeeds unless every operand rejects the value
///
/// An operand succeeds when it is not `Invalid`. On success the result is
/// `Valid` if any operand was `Valid`, otherwise `NoResult`, and carries no
/// messages; only the accepting operands' edits reach its value. When all
/// operands fail, every operand's messages are reported in operand order.
#[derive(Debug, Clone)]
pub struct AnyOf {
    name: String,
    operands: Vec<Processor>,
}

impl AnyOf {
    pub fn new(name: impl Into<String>, operands: Vec<Processor>) -> Result<Self, ProcessorError> {
        if operands.len() < 2 {
            return Err(ProcessorError::TooFewOperands {
                processor: "AnyOf",
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

        if results.iter().all(|result| !result.is_valid()) {
            let merged_value = merge_edits(&value, results.iter().map(ProcessResult::value));
            tracing::trace!(
                "AnyOf '{}' rejected value: all {} operands failed",
                parent.push(self.name.as_str()),
                results.len()
            );
            return results
                .into_iter()
                .fold(ProcessResult::no_result(Value::Null), ProcessResult::merge)
                .with_value(merged_value);
        }

        // Only accepting operands contribute edits.
        let merged_value = merge_edits(
            &value,
            results
                .iter()
                .filter(|result| result.is_valid())
                .map(ProcessResult::value),
        );

        if results.iter().any(|result| result.validity() == Validity::Valid) {
            ProcessResult::valid(merged_value)
        } else {
            ProcessResult::no_result(merged_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ToInt;
    use crate::primitives::Step;
    use crate::processor::Field;
    use crate::validators::{IsBool, IsInt, IsNull, IsString, Maximum};

    fn check(validator: impl crate::primitives::Validator + 'static) -> Processor {
        Field::new("v", vec![Step::validator(validator)]).into()
    }

    #[test]
    fn test_requires_two_operands() {
        assert!(matches!(
            AnyOf::new("v", vec![check(IsInt)]),
            Err(ProcessorError::TooFewOperands { processor: "AnyOf", given: 1 })
        ));
    }

    #[test]
    fn test_one_success_is_enough() {
        let any_of = AnyOf::new("v", vec![check(IsInt), check(IsString)]).unwrap();
        let result = any_of.process(&FieldName::root(), Value::from("x"));

        assert_eq!(result.validity(), Validity::Valid);
        assert!(result.message_sets().is_empty());
    }

    #[test]
    fn test_all_failures_report_every_operand_in_order() {
        let operands = vec![check(IsInt), check(IsBool), check(IsNull)];
        let expected: Vec<_> = operands
            .iter()
            .flat_map(|op| op.process(&FieldName::root(), Value::from("x")).message_sets().to_vec())
            .collect();

        let any_of = AnyOf::new("v", operands).unwrap();
        let result = any_of.process(&FieldName::root(), Value::from("x"));

        assert_eq!(result.validity(), Validity::Invalid);
        assert_eq!(result.message_sets(), expected.as_slice());
    }

    #[test]
    fn test_no_result_operands_stay_no_result() {
        let any_of = AnyOf::new(
            "v",
            vec![Field::new("v", vec![]).into(), check(IsInt)],
        )
        .unwrap();

        let result = any_of.process(&FieldName::root(), Value::from("x"));
        assert_eq!(result.validity(), Validity::NoResult);
    }

    #[test]
    fn test_transformed_value_wins_over_untouched() {
        let any_of = AnyOf::new(
            "v",
            vec![
                Field::new("v", vec![Step::filter(ToInt), Step::validator(IsInt)]).into(),
                check(IsString),
            ],
        )
        .unwrap();

        let result = any_of.process(&FieldName::root(), Value::from("5"));
        assert_eq!(result.validity(), Validity::Valid);
        assert_eq!(result.value(), &Value::Int(5));
    }

    #[test]
    fn test_rejected_operand_edits_are_dropped() {
        let any_of = AnyOf::new(
            "v",
            vec![
                Field::new(
                    "v",
                    vec![
                        Step::filter(ToInt),
                        Step::validator(IsInt),
                        Step::validator(Maximum::new(3.0, false)),
                    ],
                )
                .into(),
                check(IsString),
            ],
        )
        .unwrap();

        let result = any_of.process(&FieldName::root(), Value::from("5"));
        assert_eq!(result.validity(), Validity::Valid);
        assert_eq!(result.value(), &Value::from("5"));
    }
}
