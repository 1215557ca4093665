//! Leaf primitives: filters and validators
//!
//! Filters transform a value, validators check it. Both hand back a
//! [`ProcessResult`] so a chain can thread the value through each step and
//! stop at the first rejection. Primitives never know where the value lives;
//! they report unlocated message sets and the chain owner locates them.
//!
//! The built-in library lives in [`filters`](crate::filters) and
//! [`validators`](crate::validators). Custom primitives implement the traits
//! directly or wrap a closure:
//!
//! ```rust
//! use ouroboros_schema::primitives::{FnValidator, Step};
//! use ouroboros_schema::{Field, FieldName, ProcessResult, Value};
//! use ouroboros_schema::primitives::reject;
//!
//! let even = FnValidator::new("IsEven", |value: Value| {
//!     if matches!(value, Value::Int(n) if n % 2 == 0) {
//!         ProcessResult::valid(value)
//!     } else {
//!         reject(value, "value must be even", vec![])
//!     }
//! });
//! let field = Field::new("count", vec![Step::validator(even)]);
//!
//! assert!(field.process(&FieldName::root(), Value::Int(4)).is_valid());
//! assert!(!field.process(&FieldName::root(), Value::Int(3)).is_valid());
//! ```

use crate::message::{Message, MessageSet};
use crate::result::ProcessResult;
use crate::types::Value;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Traits
// ============================================================================

/// A pure transformation of a value
pub trait Filter: fmt::Debug + Send + Sync {
    /// Transform `value`, or reject it if it cannot be transformed
    fn filter(&self, value: Value) -> ProcessResult;
}

/// A pure check of a value
pub trait Validator: fmt::Debug + Send + Sync {
    /// Check `value`, returning it unchanged inside the result
    fn validate(&self, value: Value) -> ProcessResult;
}

/// Type alias for a shared filter
pub type BoxedFilter = Arc<dyn Filter>;

/// Type alias for a shared validator
pub type BoxedValidator = Arc<dyn Validator>;

// ============================================================================
// Chain Steps
// ============================================================================

/// One element of a processing chain
#[derive(Debug, Clone)]
pub enum Step {
    Filter(BoxedFilter),
    Validator(BoxedValidator),
}

impl Step {
    /// Wrap a filter
    pub fn filter(filter: impl Filter + 'static) -> Self {
        Step::Filter(Arc::new(filter))
    }

    /// Wrap a validator
    pub fn validator(validator: impl Validator + 'static) -> Self {
        Step::Validator(Arc::new(validator))
    }

    /// Run the step against `value`
    pub fn apply(&self, value: Value) -> ProcessResult {
        match self {
            Step::Filter(filter) => filter.filter(value),
            Step::Validator(validator) => validator.validate(value),
        }
    }
}

/// Build an invalid result carrying a single unlocated message
pub fn reject(value: Value, template: &str, args: Vec<Value>) -> ProcessResult {
    ProcessResult::invalid(
        value,
        [MessageSet::unlocated(vec![Message::new(template, args)])],
    )
}

// ============================================================================
// Function-based Primitives (for ergonomic API)
// ============================================================================

/// Create a filter from a function
pub struct FnFilter<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    name: &'static str,
    func: F,
}

impl<F> FnFilter<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    /// Create a new function-based filter
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    fn filter(&self, value: Value) -> ProcessResult {
        (self.func)(value)
    }
}

impl<F> fmt::Debug for FnFilter<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").field("name", &self.name).finish()
    }
}

/// Create a validator from a function
pub struct FnValidator<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    name: &'static str,
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    /// Create a new function-based validator
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    fn validate(&self, value: Value) -> ProcessResult {
        (self.func)(value)
    }
}

impl<F> fmt::Debug for FnValidator<F>
where
    F: Fn(Value) -> ProcessResult + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").field("name", &self.name).finish()
    }
}
