//! `type: integer` and `type: number`

use super::{enum_step, Compiler};
use crate::errors::CompileError;
use crate::filters::{ToInt, ToNumber};
use crate::primitives::Step;
use crate::processor::{Field, Processor};
use crate::schema::Schema;
use crate::validators::{IsInt, IsNumber, Maximum, Minimum, MultipleOf};

/// Optional coercion, type check, then enum, bounds and divisibility
pub(super) fn build(
    compiler: &Compiler,
    schema: &Schema,
    name: &str,
    integer: bool,
) -> Result<Processor, CompileError> {
    let mut chain = Vec::new();

    match (integer, compiler.config().coerce_from_string) {
        (true, true) => chain.extend([Step::filter(ToInt), Step::validator(IsInt)]),
        (true, false) => chain.push(Step::validator(IsInt)),
        (false, true) => chain.extend([Step::filter(ToNumber), Step::validator(IsNumber)]),
        (false, false) => chain.push(Step::validator(IsNumber)),
    }

    chain.extend(enum_step(schema));

    if let Some((bound, exclusive)) = schema.upper_bound() {
        chain.push(Step::validator(Maximum::new(bound, exclusive)));
    }
    if let Some((bound, exclusive)) = schema.lower_bound() {
        chain.push(Step::validator(Minimum::new(bound, exclusive)));
    }
    if let Some(multiple) = schema.multiple_of {
        chain.push(Step::validator(MultipleOf::new(multiple)));
    }

    Ok(Field::new(name, chain).into())
}
