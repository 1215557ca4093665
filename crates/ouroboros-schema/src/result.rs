//! Processing results
//!
//! Every processor returns a [`ProcessResult`]: the (possibly transformed)
//! value, a [`Validity`], and the message sets explaining an invalid
//! outcome. Results combine with [`ProcessResult::merge`], where `Invalid`
//! dominates `Valid`, which dominates `NoResult`.

use crate::errors::{ValidationError, ValidationErrors};
use crate::field_name::FieldName;
use crate::message::MessageSet;
use crate::types::Value;

// ============================================================================
// Validity
// ============================================================================

/// Outcome status of a processing step
///
/// Variants are declared in dominance order so that `max` yields the merged
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Validity {
    /// No opinion yet; neutral element for merging
    NoResult,
    /// Checked and accepted
    Valid,
    /// Checked and rejected
    Invalid,
}

// ============================================================================
// Process Result
// ============================================================================

/// Value, validity and messages produced by a processor
///
/// Only `Invalid` results carry message sets; the constructors keep that
/// invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    value: Value,
    validity: Validity,
    message_sets: Vec<MessageSet>,
}

impl ProcessResult {
    /// A value that was checked and accepted
    pub fn valid(value: Value) -> Self {
        Self {
            value,
            validity: Validity::Valid,
            message_sets: Vec::new(),
        }
    }

    /// A value nothing has checked yet
    pub fn no_result(value: Value) -> Self {
        Self {
            value,
            validity: Validity::NoResult,
            message_sets: Vec::new(),
        }
    }

    /// A rejected value with the reasons why
    pub fn invalid(value: Value, message_sets: impl IntoIterator<Item = MessageSet>) -> Self {
        Self {
            value,
            validity: Validity::Invalid,
            message_sets: message_sets.into_iter().collect(),
        }
    }

    /// The (possibly transformed) value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the result, keeping only the value
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Outcome status
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// True unless the result is `Invalid`
    pub fn is_valid(&self) -> bool {
        self.validity != Validity::Invalid
    }

    /// Message sets explaining an invalid result
    pub fn message_sets(&self) -> &[MessageSet] {
        &self.message_sets
    }

    /// Combine with a later result
    ///
    /// The status follows the dominance order, the value is taken from
    /// `other`, and message sets from both sides are concatenated.
    pub fn merge(mut self, other: ProcessResult) -> ProcessResult {
        self.value = self.absorb(other);
        self
    }

    /// Merge `other`'s status and messages in place, handing back its value
    ///
    /// Containers use this to fold child outcomes into their own result while
    /// writing the child's value back into the container.
    pub(crate) fn absorb(&mut self, other: ProcessResult) -> Value {
        let ProcessResult {
            value,
            validity,
            message_sets,
        } = other;
        self.validity = self.validity.max(validity);
        self.message_sets.extend(message_sets);
        value
    }

    /// Move the value out, leaving `Null` behind
    pub(crate) fn take_value(&mut self) -> Value {
        std::mem::take(&mut self.value)
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Replace the value, keeping status and messages
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Assign `field_name` to every unlocated message set
    pub fn located_at(mut self, field_name: &FieldName) -> Self {
        self.message_sets = self
            .message_sets
            .into_iter()
            .map(|set| set.located_at(field_name))
            .collect();
        self
    }

    /// Flatten message sets into `(path, rendered message)` errors
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for set in &self.message_sets {
            let field = set.field_name().map(FieldName::rendered).unwrap_or_default();
            for message in set.messages() {
                errors.add(ValidationError::new(field.clone(), message.rendered()));
            }
        }
        errors
    }

    /// Convert to `Ok(value)` unless invalid
    pub fn into_outcome(self) -> Result<Value, ValidationErrors> {
        if self.is_valid() {
            Ok(self.value)
        } else {
            Err(self.errors())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    fn failure(field: &str, template: &str) -> ProcessResult {
        ProcessResult::invalid(
            Value::Null,
            [MessageSet::at(
                FieldName::new(field),
                vec![Message::new(template, vec![])],
            )],
        )
    }

    #[test]
    fn test_validity_dominance() {
        use Validity::*;

        assert_eq!(NoResult.max(Valid), Valid);
        assert_eq!(Valid.max(Invalid), Invalid);
        assert_eq!(NoResult.max(NoResult), NoResult);
    }

    #[test]
    fn test_merge_valid_and_no_result() {
        let a = ProcessResult::valid(Value::Int(1));
        let b = ProcessResult::no_result(Value::Int(2));

        let merged = a.clone().merge(b.clone());
        assert_eq!(merged.validity(), Validity::Valid);
        assert_eq!(merged.value(), &Value::Int(2));

        let merged = b.merge(a);
        assert_eq!(merged.validity(), Validity::Valid);
        assert_eq!(merged.value(), &Value::Int(1));
    }

    #[test]
    fn test_merge_no_result_pair() {
        let merged =
            ProcessResult::no_result(Value::Null).merge(ProcessResult::no_result(Value::Null));
        assert_eq!(merged.validity(), Validity::NoResult);
        assert!(merged.message_sets().is_empty());
    }

    #[test]
    fn test_merge_concatenates_invalid_sides() {
        let merged = failure("a", "first")
            .merge(ProcessResult::valid(Value::Int(3)))
            .merge(failure("b", "second"));

        assert_eq!(merged.validity(), Validity::Invalid);
        assert_eq!(merged.message_sets().len(), 2);
        assert_eq!(merged.message_sets()[0].messages()[0].template(), "first");
        assert_eq!(merged.message_sets()[1].messages()[0].template(), "second");
    }

    #[test]
    fn test_located_at_only_fills_unlocated_sets() {
        let result = ProcessResult::invalid(
            Value::Null,
            [
                MessageSet::unlocated(vec![Message::new("x", vec![])]),
                MessageSet::at(FieldName::new("kept"), vec![Message::new("y", vec![])]),
            ],
        )
        .located_at(&FieldName::new("pet"));

        let paths: Vec<_> = result
            .message_sets()
            .iter()
            .map(|set| set.field_name().map(FieldName::rendered).unwrap_or_default())
            .collect();
        assert_eq!(paths, vec!["pet", "kept"]);
    }

    #[test]
    fn test_into_outcome() {
        assert_eq!(
            ProcessResult::valid(Value::Int(5)).into_outcome().ok(),
            Some(Value::Int(5))
        );

        let errors = failure("id", "bad").into_outcome().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.as_slice()[0].field, "id");
        assert_eq!(errors.as_slice()[0].message, "bad");
    }
}
