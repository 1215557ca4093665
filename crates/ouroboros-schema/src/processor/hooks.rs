//! Whole-container hooks run before and after a container's children
//!
//! Both share the chain semantics of [`Field`](super::Field) but see the
//! container's entire raw value and report at the container's own path
//! instead of adding a segment.

use super::field::run_chain;
use crate::field_name::FieldName;
use crate::primitives::Step;
use crate::result::ProcessResult;
use crate::types::Value;

/// Chain applied to a container before its children
///
/// Type, enum, size and required-key checks live here; when it rejects the
/// value the container skips its children entirely.
#[derive(Debug, Clone)]
pub struct BeforeSet {
    chain: Vec<Step>,
}

impl BeforeSet {
    pub fn new(chain: Vec<Step>) -> Self {
        Self { chain }
    }

    /// Hooks do not name a field of their own
    pub fn processes(&self) -> &str {
        ""
    }

    pub fn chain(&self) -> &[Step] {
        &self.chain
    }

    pub fn process(&self, field_name: &FieldName, value: Value) -> ProcessResult {
        run_chain(&self.chain, field_name, value)
    }
}

/// Chain applied to a container after its children, on the merged value
#[derive(Debug, Clone)]
pub struct AfterSet {
    chain: Vec<Step>,
}

impl AfterSet {
    pub fn new(chain: Vec<Step>) -> Self {
        Self { chain }
    }

    pub fn processes(&self) -> &str {
        ""
    }

    pub fn chain(&self) -> &[Step] {
        &self.chain
    }

    pub fn process(&self, field_name: &FieldName, value: Value) -> ProcessResult {
        run_chain(&self.chain, field_name, value)
    }
}
