//! Error types
//!
//! Two channels exist. Building a processor tree can fail with a
//! [`CompileError`] (or a [`ProcessorError`] when processors are assembled
//! by hand). Running a tree never fails; invalid input is reported through
//! [`ProcessResult`](crate::ProcessResult), which flattens into
//! [`ValidationErrors`] for presentation.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Compile Errors
// ============================================================================

/// A schema that cannot be turned into a processor tree
#[derive(Debug, Error)]
pub enum CompileError {
    /// The schema uses a keyword the compiler does not handle
    #[error("Keyword '{keyword}' is not supported")]
    UnsupportedKeyword { keyword: &'static str },

    /// The declared types cannot be satisfied by a single processor
    #[error("Schema declares conflicting types: {types:?}")]
    MismatchedType { types: Vec<String> },

    /// A composition keyword without any branches
    #[error("'{keyword}' must contain at least one schema")]
    RedundantComposition { keyword: &'static str },

    /// Request content offers no media type the engine can process
    #[error("Unsupported media types: {media_types:?}, expected a JSON media type")]
    UnsupportedMediaType { media_types: Vec<String> },

    /// The `pattern` keyword is not a valid regular expression
    #[error("Invalid regex pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Processor(#[from] ProcessorError),
}

// ============================================================================
// Processor Construction Errors
// ============================================================================

/// Processors assembled with arguments they cannot work with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessorError {
    /// Compositions need something to compose
    #[error("{processor} requires at least 2 processors, {given} given")]
    TooFewOperands {
        processor: &'static str,
        given: usize,
    },

    /// A collection has exactly one element shape
    #[error("Collection '{name}' accepts at most one item processor")]
    MultipleItemProcessors { name: String },

    #[error("'{name}' accepts at most one BeforeSet")]
    MultipleBeforeSets { name: String },

    #[error("'{name}' accepts at most one AfterSet")]
    MultipleAfterSets { name: String },

    /// Two children of a field set process the same key
    #[error("Field '{name}' is processed more than once")]
    DuplicateField { name: String },
}

// ============================================================================
// Validation Errors Collection
// ============================================================================

/// Collection of validation errors
///
/// The presentation view of an invalid result: one entry per message, in the
/// order the processors reported them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    /// List of individual validation errors
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get errors as a slice
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Single Validation Error
// ============================================================================

/// A single rendered message and where it applies
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Rendered field path (e.g. "pet->tags->1"), empty for the root
    pub field: String,

    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: String, message: String) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_validation_errors_add() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new(
            "age".to_string(),
            "IsInt validator expects integer value, string passed instead".to_string(),
        ));
        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "1 validation error(s)");
    }

    #[test]
    fn test_validation_error_display() {
        let located = ValidationError::new("pet->name".to_string(), "too short".to_string());
        assert_eq!(located.to_string(), "pet->name: too short");

        let root = ValidationError::new(String::new(), "id is a required field".to_string());
        assert_eq!(root.to_string(), "id is a required field");
    }

    #[test]
    fn test_compile_error_display() {
        let error = CompileError::UnsupportedKeyword { keyword: "not" };
        assert_eq!(error.to_string(), "Keyword 'not' is not supported");

        let error: CompileError = ProcessorError::TooFewOperands {
            processor: "AllOf",
            given: 1,
        }
        .into();
        assert_eq!(error.to_string(), "AllOf requires at least 2 processors, 1 given");
    }
}
