//! Tagged dispatch for discriminated unions
//!
//! Instead of trying every branch blindly, a branch wrapped in a
//! [`Discriminator`] first checks the tag property and only runs its inner
//! processor when the tag names it.

use super::Processor;
use crate::field_name::FieldName;
use crate::message::{Message, MessageSet};
use crate::result::ProcessResult;
use crate::types::Value;

/// Reported when the tag property is missing or names another branch
pub const DISCRIMINATOR_MESSAGE: &str = "value does not have matching %s: %s";

/// Runs the inner processor only for values tagged with the expected value
#[derive(Debug, Clone)]
pub struct Discriminator {
    property_name: String,
    property_value: String,
    processor: Box<Processor>,
}

impl Discriminator {
    /// Create a new discriminator
    pub fn new(
        property_name: impl Into<String>,
        property_value: impl Into<String>,
        processor: Processor,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            property_value: property_value.into(),
            processor: Box::new(processor),
        }
    }

    /// Tag property inspected on the value
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Tag value selecting this branch
    pub fn property_value(&self) -> &str {
        &self.property_value
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    pub fn processes(&self) -> &str {
        self.processor.processes()
    }

    /// True if `value` is an object whose tag property is exactly the
    /// expected string
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            value.get(&self.property_name),
            Some(Value::String(tag)) if *tag == self.property_value
        )
    }

    pub fn process(&self, parent: &FieldName, value: Value) -> ProcessResult {
        if self.matches(&value) {
            return self.processor.process(parent, value);
        }

        tracing::trace!(
            "Discriminator skipped '{}': {} is not '{}'",
            parent.push(self.processes()),
            self.property_name,
            self.property_value
        );

        ProcessResult::invalid(
            value,
            [MessageSet::at(
                parent.push(self.processes()),
                vec![Message::new(
                    DISCRIMINATOR_MESSAGE,
                    vec![
                        Value::from(self.property_name.as_str()),
                        Value::from(self.property_value.as_str()),
                    ],
                )],
            )],
        )
    }
}
