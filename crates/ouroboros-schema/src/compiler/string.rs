//! `type: string`

use super::{enum_step, Compiler};
use crate::errors::CompileError;
use crate::formats::StringFormat;
use crate::primitives::Step;
use crate::processor::{Field, Processor};
use crate::schema::Schema;
use crate::validators::{DateString, Format, IsString, Length, Regex};

/// Type check, then enum, format, length and pattern
pub(super) fn build(
    compiler: &Compiler,
    schema: &Schema,
    name: &str,
) -> Result<Processor, CompileError> {
    let mut chain = vec![Step::validator(IsString)];
    chain.extend(enum_step(schema));

    if compiler.config().validate_formats {
        match schema.format.as_deref().and_then(StringFormat::from_keyword) {
            Some(StringFormat::Date) => chain.push(Step::validator(DateString::date())),
            Some(StringFormat::DateTime) => chain.push(Step::validator(DateString::date_time())),
            Some(format) => chain.push(Step::validator(Format::new(format))),
            None => {}
        }
    }

    if schema.min_length.is_some() || schema.max_length.is_some() {
        chain.push(Step::validator(Length::new(schema.min_length, schema.max_length)));
    }

    if let Some(pattern) = &schema.pattern {
        let regex = Regex::new(pattern).map_err(|source| CompileError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        chain.push(Step::validator(regex));
    }

    Ok(Field::new(name, chain).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::field_name::FieldName;
    use crate::result::Validity;
    use crate::types::Value;

    #[test]
    fn test_chain_order() {
        let schema = Schema::with_type("string")
            .enum_values(vec!["2024-01-01".into(), "x".into()])
            .format("date")
            .length(Some(3), None);

        let Processor::Field(field) = build(&Compiler::default(), &schema, "day").unwrap() else {
            panic!("expected a field");
        };
        assert_eq!(field.chain().len(), 4);

        let result = field.process(&FieldName::root(), Value::from("x"));
        assert_eq!(result.validity(), Validity::Invalid);
        assert_eq!(
            result.message_sets()[0].messages()[0].rendered(),
            "String does not match the required format date"
        );
    }

    #[test]
    fn test_formats_can_be_disabled() {
        let schema = Schema::with_type("string").format("email");
        let compiler = Compiler::new(CompileConfig::new().validate_formats(false));

        let processor = build(&compiler, &schema, "email").unwrap();
        let result = processor.process(&FieldName::root(), Value::from("nope"));
        assert_eq!(result.validity(), Validity::Valid);
    }

    #[test]
    fn test_invalid_pattern_fails_compilation() {
        let schema = Schema::with_type("string").pattern("[a-");
        let error = build(&Compiler::default(), &schema, "code").unwrap_err();
        assert!(matches!(
            error,
            CompileError::InvalidPattern { ref pattern, .. } if pattern == "[a-"
        ));
    }
}
