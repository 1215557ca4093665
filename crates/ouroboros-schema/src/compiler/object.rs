//! `type: object`

use super::{enum_step, Compiler};
use crate::errors::CompileError;
use crate::primitives::Step;
use crate::processor::{BeforeSet, FieldSet, Processor};
use crate::schema::Schema;
use crate::validators::{IsObject, RequiredFields};

/// Whole-object checks in a BeforeSet, then one child per property
///
/// Children run in declaration order. With `apply_defaults`, a property's
/// `default` is inserted when the key is absent.
pub(super) fn build(
    compiler: &Compiler,
    schema: &Schema,
    name: &str,
) -> Result<Processor, CompileError> {
    let mut chain = vec![Step::validator(IsObject)];
    chain.extend(enum_step(schema));

    if !schema.required.is_empty() {
        chain.push(Step::validator(RequiredFields::new(schema.required.clone())));
    }

    let mut processors = vec![Processor::from(BeforeSet::new(chain))];
    for (key, property) in &schema.properties {
        processors.push(compiler.compile(property, key)?);
    }

    let mut field_set = FieldSet::new(name, processors)?;
    if compiler.config().apply_defaults {
        for (key, property) in &schema.properties {
            if let Some(default) = &property.default {
                field_set = field_set.with_default(key.as_str(), default.clone());
            }
        }
    }

    Ok(field_set.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::field_name::FieldName;
    use crate::result::Validity;
    use crate::types::Value;

    fn object(fields: Vec<(&str, Value)>) -> Value {
        Value::Object(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    fn paging() -> Schema {
        Schema::with_type("object")
            .property("limit", Schema::with_type("integer").default_value(20i64))
            .property("cursor", Schema::with_type("string"))
    }

    #[test]
    fn test_children_follow_declaration_order() {
        let processor = build(&Compiler::default(), &paging(), "").unwrap();
        let Processor::FieldSet(field_set) = processor else {
            panic!("expected a field set");
        };
        let keys: Vec<_> = field_set.children().iter().map(Processor::processes).collect();
        assert_eq!(keys, vec!["limit", "cursor"]);
    }

    #[test]
    fn test_defaults_are_applied() {
        let processor = build(&Compiler::default(), &paging(), "").unwrap();
        let result = processor.process(&FieldName::root(), object(vec![]));

        assert_eq!(result.validity(), Validity::Valid);
        assert_eq!(result.value(), &object(vec![("limit", Value::Int(20))]));
    }

    #[test]
    fn test_defaults_can_be_disabled() {
        let compiler = Compiler::new(CompileConfig::new().apply_defaults(false));
        let processor = build(&compiler, &paging(), "").unwrap();

        let result = processor.process(&FieldName::root(), object(vec![]));
        assert_eq!(result.value(), &object(vec![]));
    }

    #[test]
    fn test_required_fields_reported_at_object() {
        let schema = paging().required(["cursor"]);
        let processor = build(&Compiler::default(), &schema, "page").unwrap();

        let result = processor.process(&FieldName::root(), object(vec![("limit", Value::Int(5))]));
        assert_eq!(result.validity(), Validity::Invalid);

        let set = &result.message_sets()[0];
        assert_eq!(set.field_name().map(FieldName::rendered).as_deref(), Some("page"));
        assert_eq!(set.messages()[0].rendered(), "cursor is a required field");
    }
}
