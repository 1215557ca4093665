//! Map container processor

use super::{AfterSet, BeforeSet, Processor};
use crate::errors::ProcessorError;
use crate::field_name::FieldName;
use crate::result::ProcessResult;
use crate::types::Value;

/// Processes an object: hook, then one child per declared key, then hook
///
/// Children are keyed by the name they process. Keys missing from the input
/// are skipped unless a default is registered for them, in which case the
/// default is inserted and processed like supplied input.
#[derive(Debug, Clone)]
pub struct FieldSet {
    name: String,
    before: Option<BeforeSet>,
    children: Vec<Processor>,
    after: Option<AfterSet>,
    defaults: Vec<(String, Value)>,
}

impl FieldSet {
    /// Assemble a field set from its parts
    ///
    /// `BeforeSet` and `AfterSet` processors become the hooks; every other
    /// processor becomes a child handling the key it `processes()`.
    pub fn new(
        name: impl Into<String>,
        processors: impl IntoIterator<Item = Processor>,
    ) -> Result<Self, ProcessorError> {
        let name = name.into();
        let mut before = None;
        let mut after = None;
        let mut children: Vec<Processor> = Vec::new();

        for processor in processors {
            match processor {
                Processor::BeforeSet(hook) => {
                    if before.replace(hook).is_some() {
                        return Err(ProcessorError::MultipleBeforeSets { name });
                    }
                }
                Processor::AfterSet(hook) => {
                    if after.replace(hook).is_some() {
                        return Err(ProcessorError::MultipleAfterSets { name });
                    }
                }
                child => {
                    if children.iter().any(|c| c.processes() == child.processes()) {
                        return Err(ProcessorError::DuplicateField {
                            name: child.processes().to_string(),
                        });
                    }
                    children.push(child);
                }
            }
        }

        Ok(Self {
            name,
            before,
            children,
            after,
            defaults: Vec::new(),
        })
    }

    /// Insert `value` for `key` when the input lacks it
    pub fn with_default(mut self, key: impl Into<String>, value: Value) -> Self {
        self.defaults.push((key.into(), value));
        self
    }

    pub fn processes(&self) -> &str {
        &self.name
    }

    /// Child processors in processing order
    pub fn children(&self) -> &[Processor] {
        &self.children
    }

    pub fn process(&self, parent: &FieldName, value: Value) -> ProcessResult {
        let field_name = parent.push(self.name.as_str());

        let mut result = match &self.before {
            Some(before) => before.process(&field_name, value),
            None => ProcessResult::no_result(value),
        };
        if !result.is_valid() {
            return result;
        }

        let mut fields = match result.take_value() {
            Value::Object(fields) => fields,
            other => {
                result.set_value(other);
                return result;
            }
        };

        for (key, default) in &self.defaults {
            if !fields.iter().any(|(k, _)| k == key) {
                fields.push((key.clone(), default.clone()));
            }
        }

        for child in &self.children {
            let Some(slot) = fields.iter_mut().find(|(k, _)| k == child.processes()) else {
                continue;
            };
            let input = std::mem::take(&mut slot.1);
            slot.1 = result.absorb(child.process(&field_name, input));
        }

        result.set_value(Value::Object(fields));

        if let Some(after) = &self.after {
            let value = result.take_value();
            result = result.merge(after.process(&field_name, value));
        }

        result
    }
}
