//! Leaf processor running a chain of primitives against one value

use crate::field_name::FieldName;
use crate::primitives::Step;
use crate::result::ProcessResult;
use crate::types::Value;

/// Processes a single named value through an ordered chain
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    chain: Vec<Step>,
}

impl Field {
    /// Create a field processor
    pub fn new(name: impl Into<String>, chain: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            chain,
        }
    }

    /// Name of the field this processor handles
    pub fn processes(&self) -> &str {
        &self.name
    }

    /// The primitives run by this field, in order
    pub fn chain(&self) -> &[Step] {
        &self.chain
    }

    /// Run the chain, locating messages at `parent->name`
    pub fn process(&self, parent: &FieldName, value: Value) -> ProcessResult {
        run_chain(&self.chain, &parent.push(self.name.as_str()), value)
    }
}

/// Thread `value` through `chain`, stopping at the first invalid step
///
/// The running result starts as `NoResult`; each step receives the value
/// produced by the previous one. Steps after a rejection never run, so a
/// filter placed after a failing validator leaves the value untouched.
pub(crate) fn run_chain(chain: &[Step], field_name: &FieldName, value: Value) -> ProcessResult {
    let mut result = ProcessResult::no_result(value);

    for step in chain {
        let input = result.take_value();
        result = result.merge(step.apply(input).located_at(field_name));
        if !result.is_valid() {
            break;
        }
    }

    result
}
