//! `type: array`

use super::{enum_step, Compiler};
use crate::errors::CompileError;
use crate::primitives::Step;
use crate::processor::{BeforeSet, Collection, Processor};
use crate::schema::Schema;
use crate::validators::{Count, IsList, Unique};

/// Whole-list checks in a BeforeSet, then `items` applied per element
///
/// Items are compiled without a name of their own: the element index the
/// collection pushes is their location.
pub(super) fn build(
    compiler: &Compiler,
    schema: &Schema,
    name: &str,
) -> Result<Processor, CompileError> {
    let mut chain = vec![Step::validator(IsList)];
    chain.extend(enum_step(schema));

    if schema.min_items.is_some() || schema.max_items.is_some() {
        chain.push(Step::validator(Count::new(schema.min_items, schema.max_items)));
    }
    if schema.unique_items {
        chain.push(Step::validator(Unique));
    }

    let mut processors = vec![Processor::from(BeforeSet::new(chain))];
    if let Some(items) = &schema.items {
        processors.push(compiler.compile(items, "")?);
    }

    Ok(Collection::new(name, processors)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_name::FieldName;
    use crate::result::Validity;
    use crate::types::Value;

    #[test]
    fn test_without_items_only_checks_the_list() {
        let schema = Schema::with_type("array").count(None, Some(1));
        let processor = build(&Compiler::default(), &schema, "tags").unwrap();
        let Processor::Collection(collection) = processor else {
            panic!("expected a collection");
        };
        assert!(collection.item().is_none());

        let result = collection.process(&FieldName::root(), Value::List(vec![Value::Int(1)]));
        assert_eq!(result.validity(), Validity::Valid);

        let input = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let result = collection.process(&FieldName::root(), input);
        assert_eq!(result.validity(), Validity::Invalid);
    }

    #[test]
    fn test_element_errors_are_located_by_index() {
        let schema = Schema::with_type("array").items(Schema::with_type("string"));
        let processor = build(&Compiler::default(), &schema, "tags").unwrap();

        let result = processor.process(
            &FieldName::new("body"),
            Value::List(vec![Value::from("a"), Value::Int(2)]),
        );
        assert_eq!(result.validity(), Validity::Invalid);
        assert_eq!(
            result.message_sets()[0].field_name().map(FieldName::rendered).as_deref(),
            Some("body->tags->1")
        );
    }

    #[test]
    fn test_unique_items() {
        let schema = Schema::with_type("array").unique_items(true);
        let processor = build(&Compiler::default(), &schema, "ids").unwrap();

        let input = Value::List(vec![Value::Int(1), Value::Int(1)]);
        let result = processor.process(&FieldName::root(), input);
        assert_eq!(
            result.message_sets()[0].messages()[0].rendered(),
            "List is expected to contain only unique values"
        );
    }
}
