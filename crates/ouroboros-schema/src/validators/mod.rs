//! Built-in validators
//!
//! Each validator checks one property of a value and returns it unchanged.
//! Constraint validators (length, bounds, counts) only look at values of the
//! type they constrain and report `NoResult` for anything else; the type
//! checks in [`types`] are what reject the wrong type.

mod collection;
mod numeric;
mod string;
mod types;

pub use collection::{Count, RequiredFields, Unique};
pub use numeric::{Maximum, Minimum, MultipleOf};
pub use string::{DateString, Format, Length, Regex};
pub use types::{IsBool, IsFloat, IsInt, IsList, IsNull, IsNumber, IsObject, IsString};

use crate::primitives::{reject, Validator};
use crate::result::ProcessResult;
use crate::types::Value;

/// Enum containment
///
/// Numbers compare by value, so `1` matches an allowed `1.0`.
#[derive(Debug, Clone)]
pub struct Contained {
    allowed: Vec<Value>,
}

impl Contained {
    pub fn new(allowed: Vec<Value>) -> Self {
        Self { allowed }
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validator for Contained {
    fn validate(&self, value: Value) -> ProcessResult {
        if self.allowed.iter().any(|allowed| allowed.loosely_equals(&value)) {
            ProcessResult::valid(value)
        } else {
            let arg = value.clone();
            reject(value, "%s is not one of the allowed values", vec![arg])
        }
    }
}
