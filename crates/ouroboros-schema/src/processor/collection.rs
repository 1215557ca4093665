//! List container processor

use super::{AfterSet, BeforeSet, Processor};
use crate::errors::ProcessorError;
use crate::field_name::FieldName;
use crate::result::ProcessResult;
use crate::types::Value;

/// Processes a list: hook, then the item processor per element, then hook
///
/// Elements are located by their index and replaced in place by their
/// processed value. A failing element never stops the others.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    before: Option<BeforeSet>,
    item: Option<Box<Processor>>,
    after: Option<AfterSet>,
}

impl Collection {
    /// Assemble a collection from its parts
    ///
    /// At most one processor other than the hooks is accepted: a collection
    /// has a single element shape.
    pub fn new(
        name: impl Into<String>,
        processors: impl IntoIterator<Item = Processor>,
    ) -> Result<Self, ProcessorError> {
        let name = name.into();
        let mut before = None;
        let mut after = None;
        let mut item = None;

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
                processor => {
                    if item.replace(Box::new(processor)).is_some() {
                        return Err(ProcessorError::MultipleItemProcessors { name });
                    }
                }
            }
        }

        Ok(Self {
            name,
            before,
            item,
            after,
        })
    }

    pub fn processes(&self) -> &str {
        &self.name
    }

    /// Processor applied to every element, if any
    pub fn item(&self) -> Option<&Processor> {
        self.item.as_deref()
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

        let items = match result.take_value() {
            Value::List(items) => items,
            other => {
                result.set_value(other);
                return result;
            }
        };

        let items = match &self.item {
            Some(item) => items
                .into_iter()
                .enumerate()
                .map(|(index, element)| {
                    result.absorb(item.process(&field_name.push(index.to_string()), element))
                })
                .collect(),
            None => items,
        };

        result.set_value(Value::List(items));

        if let Some(after) = &self.after {
            let value = result.take_value();
            result = result.merge(after.process(&field_name, value));
        }

        result
    }
}
