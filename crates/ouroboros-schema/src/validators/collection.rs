//! List and object constraints

use crate::message::{Message, MessageSet};
use crate::primitives::{reject, Validator};
use crate::result::ProcessResult;
use crate::types::Value;

/// Bounds on the number of list items
#[derive(Debug, Clone, Copy, Default)]
pub struct Count {
    min: Option<usize>,
    max: Option<usize>,
}

impl Count {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validator for Count {
    fn validate(&self, value: Value) -> ProcessResult {
        let len = match &value {
            Value::List(items) => items.len(),
            _ => return ProcessResult::no_result(value),
        };

        if let Some(min) = self.min.filter(|min| len < *min) {
            return reject(
                value,
                "List is expected to have a minimum of %d values",
                vec![Value::from(min)],
            );
        }
        if let Some(max) = self.max.filter(|max| len > *max) {
            return reject(
                value,
                "List is expected to have a maximum of %d values",
                vec![Value::from(max)],
            );
        }
        ProcessResult::valid(value)
    }
}

/// Rejects lists holding the same value twice
#[derive(Debug, Clone, Copy, Default)]
pub struct Unique;

impl Validator for Unique {
    fn validate(&self, value: Value) -> ProcessResult {
        let Value::List(items) = &value else {
            return ProcessResult::no_result(value);
        };

        // Values are neither Hash nor Ord (floats), so compare pairwise
        let duplicated = items
            .iter()
            .enumerate()
            .any(|(i, item)| items[i + 1..].iter().any(|other| other == item));

        if duplicated {
            reject(value, "List is expected to contain only unique values", vec![])
        } else {
            ProcessResult::valid(value)
        }
    }
}

/// Keys an object must carry
///
/// Every missing key gets its own message, all in one message set.
#[derive(Debug, Clone, Default)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Validator for RequiredFields {
    fn validate(&self, value: Value) -> ProcessResult {
        let Value::Object(entries) = &value else {
            return ProcessResult::no_result(value);
        };

        let missing: Vec<Message> = self
            .fields
            .iter()
            .filter(|field| !entries.iter().any(|(key, _)| key == *field))
            .map(|field| Message::new("%s is a required field", vec![Value::from(field.as_str())]))
            .collect();

        if missing.is_empty() {
            ProcessResult::valid(value)
        } else {
            ProcessResult::invalid(value, [MessageSet::unlocated(missing)])
        }
    }
}
