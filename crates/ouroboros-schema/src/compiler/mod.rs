//! Schema compiler
//!
//! Turns a [`Schema`] node into a [`Processor`] tree. Compositions
//! (`allOf`, `anyOf`, `oneOf`) are handled first; otherwise the declared
//! `type` selects one of the per-type builders. A nullable schema is finally
//! wrapped so that `null` is always an acceptable alternative.
//!
//! ```rust
//! use ouroboros_schema::{compile, FieldName, Schema, Value};
//!
//! let schema = Schema::with_type("array").items(Schema::with_type("integer"));
//! let processor = compile(&schema, true).unwrap();
//!
//! let result = processor.process(
//!     &FieldName::root(),
//!     Value::List(vec![Value::from("1"), Value::from("2")]),
//! );
//! assert_eq!(result.value(), &Value::List(vec![Value::Int(1), Value::Int(2)]));
//! ```

mod array;
mod boolean;
mod numeric;
mod object;
mod string;

use indexmap::IndexMap;

use crate::config::CompileConfig;
use crate::errors::{CompileError, ProcessorError};
use crate::primitives::Step;
use crate::processor::{AllOf, AnyOf, Discriminator, Field, OneOf, Processor};
use crate::schema::Schema;
use crate::validators::{Contained, IsNull};

/// Field name request bodies are compiled under
pub const REQUEST_BODY: &str = "requestBody";

// ============================================================================
// Schema Kind
// ============================================================================

/// Shape selected by the `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    /// No (or an unknown) type: anything goes
    Any,
}

impl SchemaKind {
    fn from_name(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            "null" => Self::Null,
            _ => Self::Any,
        }
    }

    /// Resolve the kind of `schema` and whether `null` is also allowed
    ///
    /// A type list may name `"null"` next to one other type; naming two
    /// non-null types is rejected.
    pub fn resolve(schema: &Schema) -> Result<(Self, bool), CompileError> {
        let names = match &schema.schema_type {
            None => return Ok((Self::Any, schema.nullable)),
            Some(declaration) => declaration.names(),
        };

        let null_listed = names.contains(&"null");
        let others: Vec<&str> = names.into_iter().filter(|name| *name != "null").collect();
        let nullable = schema.nullable || null_listed;

        match others.as_slice() {
            [] if null_listed => Ok((Self::Null, nullable)),
            [] => Ok((Self::Any, nullable)),
            [name] => Ok((Self::from_name(name), nullable)),
            _ => Err(CompileError::MismatchedType {
                types: others.iter().map(|name| name.to_string()).collect(),
            }),
        }
    }
}

// ============================================================================
// Compiler
// ============================================================================

/// Builds processor trees from schema nodes
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompileConfig,
}

impl Compiler {
    pub fn new(config: CompileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Compile `schema` into a processor handling the field `name`
    pub fn compile(&self, schema: &Schema, name: &str) -> Result<Processor, CompileError> {
        if schema.not.is_some() {
            tracing::debug!("Rejecting schema for field '{}': 'not' is not supported", name);
            return Err(CompileError::UnsupportedKeyword { keyword: "not" });
        }

        let (kind, nullable) = SchemaKind::resolve(schema)?;

        let processor = if let Some(branches) = &schema.all_of {
            let operands = self.compile_branches("allOf", branches, name, None)?;
            compose(operands, |operands| AllOf::new(name, operands).map(Processor::from))?
        } else if let Some(branches) = &schema.any_of {
            let operands = self.compile_branches("anyOf", branches, name, tag_property(schema))?;
            compose(operands, |operands| AnyOf::new(name, operands).map(Processor::from))?
        } else if let Some(branches) = &schema.one_of {
            let operands = self.compile_branches("oneOf", branches, name, tag_property(schema))?;
            compose(operands, |operands| OneOf::new(name, operands).map(Processor::from))?
        } else {
            tracing::debug!("Compiling {:?} schema for field '{}'", kind, name);
            self.compile_kind(kind, schema, name)?
        };

        if nullable && kind != SchemaKind::Null {
            tracing::debug!("Wrapping field '{}' as nullable", name);
            let null = Field::new(name, vec![Step::validator(IsNull)]);
            return Ok(AnyOf::new(name, vec![null.into(), processor])?.into());
        }

        Ok(processor)
    }

    /// Compile the JSON schema of a request body's `content` map
    ///
    /// `application/json` is preferred, then any `+json` media type, then
    /// `*/*`.
    pub fn compile_content(
        &self,
        content: &IndexMap<String, Schema>,
    ) -> Result<Processor, CompileError> {
        let schema = content
            .iter()
            .filter_map(|(media_type, schema)| json_rank(media_type).map(|rank| (rank, schema)))
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, schema)| schema);

        match schema {
            Some(schema) => self.compile(schema, REQUEST_BODY),
            None => {
                let media_types: Vec<String> = content.keys().cloned().collect();
                tracing::debug!("No JSON media type among {:?}", media_types);
                Err(CompileError::UnsupportedMediaType { media_types })
            }
        }
    }

    fn compile_kind(
        &self,
        kind: SchemaKind,
        schema: &Schema,
        name: &str,
    ) -> Result<Processor, CompileError> {
        match kind {
            SchemaKind::String => string::build(self, schema, name),
            SchemaKind::Integer => numeric::build(self, schema, name, true),
            SchemaKind::Number => numeric::build(self, schema, name, false),
            SchemaKind::Boolean => Ok(boolean::build(self, schema, name)),
            SchemaKind::Array => array::build(self, schema, name),
            SchemaKind::Object => object::build(self, schema, name),
            SchemaKind::Null => Ok(Field::new(name, vec![Step::validator(IsNull)]).into()),
            SchemaKind::Any => Ok(Field::new(name, enum_step(schema).into_iter().collect()).into()),
        }
    }

    fn compile_branches(
        &self,
        keyword: &'static str,
        branches: &[Schema],
        name: &str,
        tag: Option<&str>,
    ) -> Result<Vec<Processor>, CompileError> {
        if branches.is_empty() {
            tracing::debug!("Rejecting schema for field '{}': empty '{}'", name, keyword);
            return Err(CompileError::RedundantComposition { keyword });
        }

        tracing::debug!(
            "Compiling {} with {} branch(es) for field '{}'",
            keyword,
            branches.len(),
            name
        );

        branches
            .iter()
            .map(|branch| {
                let processor = self.compile(branch, name)?;
                let tagged =
                    tag.and_then(|property| Some((property, tagged_value(branch, property)?)));
                Ok(match tagged {
                    Some((property, value)) => {
                        Discriminator::new(property, value, processor).into()
                    }
                    None => processor,
                })
            })
            .collect()
    }
}

/// Compile `schema` as the root value
///
/// Numeric and boolean strings are coerced when `coerce_from_string` is set;
/// every other option keeps its default.
pub fn compile(schema: &Schema, coerce_from_string: bool) -> Result<Processor, CompileError> {
    Compiler::new(CompileConfig::default().coerce_from_string(coerce_from_string))
        .compile(schema, "")
}

// ============================================================================
// Helpers
// ============================================================================

/// A single branch stands alone; several are combined by `wrap`
fn compose<F>(mut operands: Vec<Processor>, wrap: F) -> Result<Processor, CompileError>
where
    F: FnOnce(Vec<Processor>) -> Result<Processor, ProcessorError>,
{
    if operands.len() == 1 {
        if let Some(operand) = operands.pop() {
            return Ok(operand);
        }
    }
    Ok(wrap(operands)?)
}

/// `enum` containment step, if the keyword is present
pub(crate) fn enum_step(schema: &Schema) -> Option<Step> {
    schema
        .enum_values
        .as_ref()
        .map(|allowed| Step::validator(Contained::new(allowed.clone())))
}

fn tag_property(schema: &Schema) -> Option<&str> {
    schema
        .discriminator
        .as_ref()
        .map(|discriminator| discriminator.property_name.as_str())
}

/// The value a branch pins the tag property to, looking through `allOf`
fn tagged_value<'a>(branch: &'a Schema, property: &str) -> Option<&'a str> {
    branch
        .properties
        .get(property)
        .and_then(Schema::constant_string)
        .or_else(|| {
            branch
                .all_of
                .iter()
                .flatten()
                .find_map(|part| tagged_value(part, property))
        })
}

/// Preference of a media type for JSON bodies, lower is better
fn json_rank(media_type: &str) -> Option<u8> {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "application/json" => Some(0),
        other if other.ends_with("+json") => Some(1),
        "*/*" => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeDeclaration;

    #[test]
    fn test_resolve_kind() {
        let resolve = |schema: Schema| SchemaKind::resolve(&schema).unwrap();

        assert_eq!(resolve(Schema::with_type("string")), (SchemaKind::String, false));
        assert_eq!(resolve(Schema::with_type("string").nullable(true)), (SchemaKind::String, true));
        assert_eq!(resolve(Schema::new()), (SchemaKind::Any, false));
        assert_eq!(resolve(Schema::with_type("null")), (SchemaKind::Null, false));
        assert_eq!(resolve(Schema::with_type("file")), (SchemaKind::Any, false));

        let listed = Schema {
            schema_type: Some(TypeDeclaration::Multiple(vec!["integer".into(), "null".into()])),
            ..Schema::default()
        };
        assert_eq!(resolve(listed), (SchemaKind::Integer, true));
    }

    #[test]
    fn test_conflicting_types() {
        let schema = Schema {
            schema_type: Some(TypeDeclaration::Multiple(vec!["integer".into(), "string".into()])),
            ..Schema::default()
        };
        assert!(matches!(
            SchemaKind::resolve(&schema),
            Err(CompileError::MismatchedType { types }) if types == vec!["integer", "string"]
        ));
    }

    #[test]
    fn test_json_rank() {
        assert_eq!(json_rank("application/json; charset=utf-8"), Some(0));
        assert_eq!(json_rank("application/problem+json"), Some(1));
        assert_eq!(json_rank("*/*"), Some(2));
        assert_eq!(json_rank("text/plain"), None);
    }

    #[test]
    fn test_single_branch_is_not_wrapped() {
        let schema = Schema::new().all_of(vec![Schema::with_type("integer")]);
        let processor = Compiler::default().compile(&schema, "n").unwrap();
        assert!(matches!(processor, Processor::Field(_)));
    }

    #[test]
    fn test_compose_reports_processor_errors() {
        let error = compose(vec![], |operands| AllOf::new("n", operands).map(Processor::from))
            .unwrap_err();
        assert!(matches!(
            error,
            CompileError::Processor(ProcessorError::TooFewOperands { given: 0, .. })
        ));
    }

    #[test]
    fn test_tagged_value_through_all_of() {
        let tag = Schema::with_type("string").enum_values(vec!["cat".into()]);
        let branch = Schema::new().all_of(vec![
            Schema::with_type("object"),
            Schema::with_type("object").property("kind", tag),
        ]);
        assert_eq!(tagged_value(&branch, "kind"), Some("cat"));
        assert_eq!(tagged_value(&branch, "type"), None);
    }
}
