//! Error messages and their locations
//!
//! A [`Message`] is a template plus positional arguments; rendering is a
//! plain substitution of `%s` / `%d` placeholders left to right. A
//! [`MessageSet`] groups messages produced for a single location.

use crate::field_name::FieldName;
use crate::types::Value;

// ============================================================================
// Message
// ============================================================================

/// Error template with positional arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    template: String,
    args: Vec<Value>,
}

impl Message {
    /// Create a new message
    pub fn new(template: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// The raw template, e.g. `"%s is a required field"`
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Interpolation arguments in order
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Substitute arguments into the template
    ///
    /// Placeholders without a matching argument are left as written and
    /// `%%` renders a literal percent sign.
    pub fn rendered(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut args = self.args.iter();
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some(&(kind @ ('s' | 'd'))) => {
                    chars.next();
                    match args.next() {
                        Some(arg) => out.push_str(&arg.to_string()),
                        None => {
                            out.push('%');
                            out.push(kind);
                        }
                    }
                }
                _ => out.push('%'),
            }
        }

        out
    }
}

// ============================================================================
// Message Set
// ============================================================================

/// Messages sharing one location
///
/// A set without a field name is unlocated: leaf primitives produce those and
/// the processor running them assigns the location.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSet {
    field_name: Option<FieldName>,
    messages: Vec<Message>,
}

impl MessageSet {
    /// Create a message set at an optional location
    pub fn new(field_name: Option<FieldName>, messages: Vec<Message>) -> Self {
        Self {
            field_name,
            messages,
        }
    }

    /// Create a message set located at `field_name`
    pub fn at(field_name: FieldName, messages: Vec<Message>) -> Self {
        Self::new(Some(field_name), messages)
    }

    /// Create an unlocated message set
    pub fn unlocated(messages: Vec<Message>) -> Self {
        Self::new(None, messages)
    }

    /// Location of the messages, if assigned
    pub fn field_name(&self) -> Option<&FieldName> {
        self.field_name.as_ref()
    }

    /// Messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True when the set carries no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether two sets refer to the same location
    ///
    /// An unlocated set can merge with anything.
    pub fn is_mergeable(&self, other: &MessageSet) -> bool {
        match (&self.field_name, &other.field_name) {
            (Some(a), Some(b)) => a.is_mergeable(b),
            _ => true,
        }
    }

    /// Concatenate two sets for the same location
    ///
    /// # Panics
    ///
    /// Panics if the locations differ; callers must check
    /// [`MessageSet::is_mergeable`] first.
    pub fn merge(self, other: MessageSet) -> MessageSet {
        assert!(
            self.is_mergeable(&other),
            "cannot merge message sets for '{}' and '{}'",
            self.field_name.as_ref().map(FieldName::rendered).unwrap_or_default(),
            other.field_name.as_ref().map(FieldName::rendered).unwrap_or_default(),
        );

        let mut messages = self.messages;
        messages.extend(other.messages);
        MessageSet {
            field_name: self.field_name.or(other.field_name),
            messages,
        }
    }

    /// Assign `field_name` if the set is still unlocated
    pub fn located_at(self, field_name: &FieldName) -> MessageSet {
        match self.field_name {
            Some(_) => self,
            None => MessageSet {
                field_name: Some(field_name.clone()),
                messages: self.messages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_rendering() {
        let message = Message::new("%s is a required field", vec![Value::from("name")]);
        assert_eq!(message.rendered(), "name is a required field");

        let message = Message::new(
            "Number is expected to be a minimum of %d, %s given",
            vec![Value::Int(3), Value::Float(1.5)],
        );
        assert_eq!(
            message.rendered(),
            "Number is expected to be a minimum of 3, 1.5 given"
        );
    }

    #[test]
    fn test_message_rendering_edge_cases() {
        assert_eq!(Message::new("100%% sure", vec![]).rendered(), "100% sure");
        assert_eq!(Message::new("missing %s", vec![]).rendered(), "missing %s");
        assert_eq!(Message::new("50% off", vec![]).rendered(), "50% off");
    }

    #[test]
    fn test_message_set_merge() {
        let located = MessageSet::at(
            FieldName::new("id"),
            vec![Message::new("first", vec![])],
        );
        let unlocated = MessageSet::unlocated(vec![Message::new("second", vec![])]);

        let merged = unlocated.merge(located);
        assert_eq!(merged.field_name().map(FieldName::rendered).as_deref(), Some("id"));
        assert_eq!(merged.messages().len(), 2);
        assert_eq!(merged.messages()[0].template(), "second");
    }

    #[test]
    #[should_panic(expected = "cannot merge message sets")]
    fn test_message_set_merge_different_locations_panics() {
        let a = MessageSet::at(FieldName::new("a"), vec![]);
        let b = MessageSet::at(FieldName::new("b"), vec![]);
        let _ = a.merge(b);
    }

    #[test]
    fn test_is_empty_and_located_at() {
        let set = MessageSet::unlocated(vec![]);
        assert!(set.is_empty());

        let located = set.located_at(&FieldName::new("pet"));
        assert_eq!(located.field_name(), Some(&FieldName::new("pet")));

        let kept = located.located_at(&FieldName::new("other"));
        assert_eq!(kept.field_name(), Some(&FieldName::new("pet")));
    }
}
