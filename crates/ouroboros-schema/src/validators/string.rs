//! String constraints
//!
//! These validators expect a string and pass any other value through with
//! `NoResult`; the type check in front of them owns that verdict.

use crate::formats::StringFormat;
use crate::primitives::{reject, Validator};
use crate::result::ProcessResult;
use crate::types::Value;

/// Bounds on the number of characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validator for Length {
    fn validate(&self, value: Value) -> ProcessResult {
        let Some(len) = value.as_str().map(|s| s.chars().count()) else {
            return ProcessResult::no_result(value);
        };

        if let Some(min) = self.min.filter(|min| len < *min) {
            return reject(
                value,
                "String is expected to be a minimum of %d characters",
                vec![Value::from(min)],
            );
        }
        if let Some(max) = self.max.filter(|max| len > *max) {
            return reject(
                value,
                "String is expected to be a maximum of %d characters",
                vec![Value::from(max)],
            );
        }
        ProcessResult::valid(value)
    }
}

/// Match against the `pattern` keyword
///
/// Like JSON Schema, the pattern is not anchored implicitly.
#[derive(Debug, Clone)]
pub struct Regex {
    regex: regex::Regex,
}

impl Regex {
    /// Compile `pattern`
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: regex::Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validator for Regex {
    fn validate(&self, value: Value) -> ProcessResult {
        match value.as_str() {
            None => ProcessResult::no_result(value),
            Some(s) if self.regex.is_match(s) => ProcessResult::valid(value),
            Some(_) => reject(
                value,
                "String does not match the required pattern %s",
                vec![Value::from(self.pattern())],
            ),
        }
    }
}

/// Calendar check for the `date` and `date-time` formats
#[derive(Debug, Clone, Copy)]
pub struct DateString {
    format: StringFormat,
}

impl DateString {
    /// Full date, `YYYY-MM-DD`
    pub fn date() -> Self {
        Self {
            format: StringFormat::Date,
        }
    }

    /// RFC 3339 timestamp
    pub fn date_time() -> Self {
        Self {
            format: StringFormat::DateTime,
        }
    }
}

impl Validator for DateString {
    fn validate(&self, value: Value) -> ProcessResult {
        match value.as_str() {
            None => ProcessResult::no_result(value),
            Some(s) if self.format.is_valid(s) => ProcessResult::valid(value),
            Some(_) => reject(
                value,
                "String does not match the required format %s",
                vec![Value::from(self.format.keyword())],
            ),
        }
    }
}

/// Shape check for the non-temporal formats (email, uuid, uri)
#[derive(Debug, Clone, Copy)]
pub struct Format {
    format: StringFormat,
}

impl Format {
    pub fn new(format: StringFormat) -> Self {
        Self { format }
    }
}

impl Validator for Format {
    fn validate(&self, value: Value) -> ProcessResult {
        match value.as_str() {
            None => ProcessResult::no_result(value),
            Some(s) if self.format.is_valid(s) => ProcessResult::valid(value),
            Some(_) => reject(
                value,
                "String is not a valid %s",
                vec![Value::from(self.format.keyword())],
            ),
        }
    }
}
