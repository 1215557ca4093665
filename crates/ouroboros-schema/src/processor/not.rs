//! Inversion of a processor's verdict

use super::Processor;
use crate::field_name::FieldName;
use crate::message::{Message, MessageSet};
use crate::result::{ProcessResult, Validity};
use crate::types::Value;

pub const NOT_MESSAGE: &str = "value must not match the given schema";

/// Flips `Valid` and `Invalid`; `NoResult` stays `NoResult`
///
/// The value always passes through untouched: whatever the inner processor
/// did to it belongs to a verdict that is being discarded.
#[derive(Debug, Clone)]
pub struct Not {
    processor: Box<Processor>,
}

impl Not {
    pub fn new(processor: Processor) -> Self {
        Self {
            processor: Box::new(processor),
        }
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    pub fn processes(&self) -> &str {
        self.processor.processes()
    }

    pub fn process(&self, parent: &FieldName, value: Value) -> ProcessResult {
        let verdict = self.processor.process(parent, value.clone()).validity();

        match verdict {
            Validity::NoResult => ProcessResult::no_result(value),
            Validity::Invalid => ProcessResult::valid(value),
            Validity::Valid => ProcessResult::invalid(
                value,
                [MessageSet::at(
                    parent.push(self.processes()),
                    vec![Message::new(NOT_MESSAGE, vec![])],
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ToInt;
    use crate::primitives::Step;
    use crate::processor::Field;
    use crate::validators::IsString;

    #[test]
    fn test_inverts_validity() {
        let not = Not::new(Field::new("tag", vec![Step::validator(IsString)]).into());

        let result = not.process(&FieldName::root(), Value::Int(1));
        assert_eq!(result.validity(), Validity::Valid);
        assert!(result.message_sets().is_empty());

        let result = not.process(&FieldName::new("body"), Value::from("x"));
        assert_eq!(result.validity(), Validity::Invalid);
        assert_eq!(
            result.message_sets()[0].field_name().map(FieldName::rendered).as_deref(),
            Some("body->tag")
        );
    }

    #[test]
    fn test_no_result_is_not_inverted() {
        let not = Not::new(Field::new("tag", vec![]).into());
        let result = not.process(&FieldName::root(), Value::Null);
        assert_eq!(result.validity(), Validity::NoResult);
    }

    #[test]
    fn test_value_passes_through() {
        let not = Not::new(Field::new("n", vec![Step::filter(ToInt)]).into());
        let result = not.process(&FieldName::root(), Value::from("4"));
        assert_eq!(result.validity(), Validity::Invalid);
        assert_eq!(result.value(), &Value::from("4"));
    }
}
