//! `type: boolean`

use super::{enum_step, Compiler};
use crate::filters::ToBool;
use crate::primitives::Step;
use crate::processor::{Field, Processor};
use crate::schema::Schema;
use crate::validators::IsBool;

pub(super) fn build(compiler: &Compiler, schema: &Schema, name: &str) -> Processor {
    let mut chain = Vec::new();
    if compiler.config().coerce_from_string {
        chain.push(Step::filter(ToBool));
    }
    chain.push(Step::validator(IsBool));
    chain.extend(enum_step(schema));

    Field::new(name, chain).into()
}
