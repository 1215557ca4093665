//! Processor tree
//!
//! A compiled schema is a tree of [`Processor`]s. Leaves ([`Field`]) run a
//! chain of filters and validators over one value; containers
//! ([`FieldSet`], [`Collection`]) decompose maps and lists; compositions
//! ([`AllOf`], [`AnyOf`], [`OneOf`], [`Discriminator`], [`Not`]) combine the
//! verdicts of other processors.
//!
//! Every processor is immutable once built. All per-call state travels
//! through the `FieldName` argument and the returned [`ProcessResult`], so a
//! tree can be shared across threads and reused indefinitely.

mod all_of;
mod any_of;
mod collection;
mod discriminator;
mod field;
mod field_set;
mod hooks;
mod not;
mod one_of;

pub use all_of::AllOf;
pub use any_of::AnyOf;
pub use collection::Collection;
pub use discriminator::{Discriminator, DISCRIMINATOR_MESSAGE};
pub use field::Field;
pub use field_set::FieldSet;
pub use hooks::{AfterSet, BeforeSet};
pub use not::{Not, NOT_MESSAGE};
pub use one_of::{OneOf, ONE_OF_MESSAGE};

use crate::field_name::FieldName;
use crate::result::ProcessResult;
use crate::types::Value;

// ============================================================================
// Processor
// ============================================================================

/// Any node of a processor tree
#[derive(Debug, Clone)]
pub enum Processor {
    Field(Field),
    FieldSet(FieldSet),
    Collection(Collection),
    BeforeSet(BeforeSet),
    AfterSet(AfterSet),
    AllOf(AllOf),
    AnyOf(AnyOf),
    OneOf(OneOf),
    Discriminator(Discriminator),
    Not(Not),
}

impl Processor {
    /// Name of the value this processor handles
    ///
    /// Containers use it as the key of a child; hooks report `""` since they
    /// act on their container's own value.
    pub fn processes(&self) -> &str {
        match self {
            Processor::Field(p) => p.processes(),
            Processor::FieldSet(p) => p.processes(),
            Processor::Collection(p) => p.processes(),
            Processor::BeforeSet(p) => p.processes(),
            Processor::AfterSet(p) => p.processes(),
            Processor::AllOf(p) => p.processes(),
            Processor::AnyOf(p) => p.processes(),
            Processor::OneOf(p) => p.processes(),
            Processor::Discriminator(p) => p.processes(),
            Processor::Not(p) => p.processes(),
        }
    }

    /// Process `value` located under `parent`
    pub fn process(&self, parent: &FieldName, value: Value) -> ProcessResult {
        match self {
            Processor::Field(p) => p.process(parent, value),
            Processor::FieldSet(p) => p.process(parent, value),
            Processor::Collection(p) => p.process(parent, value),
            Processor::BeforeSet(p) => p.process(parent, value),
            Processor::AfterSet(p) => p.process(parent, value),
            Processor::AllOf(p) => p.process(parent, value),
            Processor::AnyOf(p) => p.process(parent, value),
            Processor::OneOf(p) => p.process(parent, value),
            Processor::Discriminator(p) => p.process(parent, value),
            Processor::Not(p) => p.process(parent, value),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Processor {
                fn from(processor: $variant) -> Self {
                    Processor::$variant(processor)
                }
            }
        )*
    };
}

impl_from_variant!(
    Field,
    FieldSet,
    Collection,
    BeforeSet,
    AfterSet,
    AllOf,
    AnyOf,
    OneOf,
    Discriminator,
    Not,
);

// ============================================================================
// Composition helpers
// ============================================================================

/// Run every operand against its own copy of the same input
pub(crate) fn run_operands(
    operands: &[Processor],
    parent: &FieldName,
    value: &Value,
) -> Vec<ProcessResult> {
    operands
        .iter()
        .map(|operand| operand.process(parent, value.clone()))
        .collect()
}

/// Fold operand outputs into one value, keeping every operand's edits
///
/// An output only overrides the accumulated value where it differs from
/// `original`. Objects are compared key by key and lists element by element
/// when their lengths agree, so edits made by different operands to
/// different keys all survive; on overlap the later operand wins.
pub(crate) fn merge_edits<'a>(
    original: &Value,
    outputs: impl IntoIterator<Item = &'a Value>,
) -> Value {
    outputs
        .into_iter()
        .fold(original.clone(), |merged, output| overlay(original, merged, output))
}

fn overlay(original: &Value, merged: Value, output: &Value) -> Value {
    if output == original {
        return merged;
    }

    match (original, merged, output) {
        (Value::Object(_), Value::Object(mut merged), Value::Object(edited)) => {
            for (key, edited_value) in edited {
                let original_value = original.get(key);
                if original_value == Some(edited_value) {
                    continue;
                }
                match merged.iter_mut().find(|(k, _)| k == key) {
                    Some(slot) => {
                        let current = std::mem::take(&mut slot.1);
                        slot.1 = match original_value {
                            Some(original_value) => overlay(original_value, current, edited_value),
                            None => edited_value.clone(),
                        };
                    }
                    None => merged.push((key.clone(), edited_value.clone())),
                }
            }
            Value::Object(merged)
        }
        (Value::List(items), Value::List(merged), Value::List(edited))
            if items.len() == merged.len() && items.len() == edited.len() =>
        {
            Value::List(
                items
                    .iter()
                    .zip(merged)
                    .zip(edited)
                    .map(|((item, current), edited_item)| overlay(item, current, edited_item))
                    .collect(),
            )
        }
        _ => output.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Step;
    use crate::validators::IsInt;

    fn object(fields: Vec<(&str, Value)>) -> Value {
        Value::Object(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_processes_dispatch() {
        let field: Processor = Field::new("id", vec![Step::validator(IsInt)]).into();
        assert_eq!(field.processes(), "id");

        let hook: Processor = BeforeSet::new(vec![]).into();
        assert_eq!(hook.processes(), "");

        let not: Processor = Not::new(field.clone()).into();
        assert_eq!(not.processes(), "id");
    }

    #[test]
    fn test_merge_edits_keeps_disjoint_edits() {
        let original = object(vec![("a", Value::from("1")), ("b", Value::from("2"))]);
        let first = object(vec![("a", Value::Int(1)), ("b", Value::from("2"))]);
        let second = object(vec![("a", Value::from("1")), ("b", Value::Int(2))]);

        assert_eq!(
            merge_edits(&original, [&first, &second]),
            object(vec![("a", Value::Int(1)), ("b", Value::Int(2))])
        );
    }

    #[test]
    fn test_merge_edits_later_wins_on_overlap() {
        let original = Value::from("5");
        assert_eq!(
            merge_edits(&original, [&Value::Int(5), &Value::Float(5.0)]),
            Value::Float(5.0)
        );
        assert_eq!(merge_edits(&original, [&Value::Int(5), &original]), Value::Int(5));
    }

    #[test]
    fn test_merge_edits_nested_and_lists() {
        let original = object(vec![(
            "tags",
            Value::List(vec![Value::from("1"), Value::from("2")]),
        )]);
        let first = object(vec![("tags", Value::List(vec![Value::Int(1), Value::from("2")]))]);
        let second = object(vec![("tags", Value::List(vec![Value::from("1"), Value::Int(2)]))]);

        assert_eq!(
            merge_edits(&original, [&first, &second]),
            object(vec![("tags", Value::List(vec![Value::Int(1), Value::Int(2)]))])
        );
    }

    #[test]
    fn test_merge_edits_adds_new_keys() {
        let original = object(vec![]);
        let output = object(vec![("limit", Value::Int(10))]);
        assert_eq!(merge_edits(&original, [&output]), output);
    }
}
