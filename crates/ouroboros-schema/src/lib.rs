//! Ouroboros Schema
//!
//! OpenAPI schema compiler and processor engine for the Ouroboros framework.
//!
//! A schema node is compiled once into a tree of processors; the tree is
//! then run against decoded request or response data. Running a tree
//! yields a [`ProcessResult`]: the (possibly coerced) value plus, when the
//! input is invalid, messages located by the path of the offending field.
//!
//! # Architecture
//!
//! ```text
//! Schema ──compile──▶ Processor tree ──process(FieldName, Value)──▶ ProcessResult
//!                      ├─ Field            chain of filters / validators
//!                      ├─ FieldSet         object: BeforeSet, children, AfterSet
//!                      ├─ Collection       array: BeforeSet, item, AfterSet
//!                      └─ AllOf / AnyOf / OneOf / Discriminator / Not
//! ```
//!
//! # Features
//!
//! - **Default**: `serde`, deserialising schema nodes and converting
//!   `serde_json::Value`
//!
//! # Example
//!
//! ```rust
//! use ouroboros_schema::{compile, FieldName, Schema, Value};
//!
//! let schema = Schema::with_type("object")
//!     .property("id", Schema::with_type("integer"))
//!     .property("name", Schema::with_type("string"))
//!     .required(["id", "name"]);
//! let processor = compile(&schema, false).unwrap();
//!
//! let input = Value::Object(vec![("id".to_string(), Value::Int(5))]);
//! let errors = processor
//!     .process(&FieldName::root(), input)
//!     .into_outcome()
//!     .unwrap_err();
//!
//! assert_eq!(errors.as_slice()[0].message, "name is a required field");
//! ```

// Public modules
pub mod compiler;
pub mod config;
pub mod errors;
pub mod field_name;
pub mod filters;
pub mod formats;
pub mod message;
pub mod primitives;
pub mod processor;
pub mod result;
pub mod schema;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use compiler::{compile, Compiler, SchemaKind, REQUEST_BODY};
pub use config::CompileConfig;
pub use errors::{CompileError, ProcessorError, ValidationError, ValidationErrors};
pub use field_name::FieldName;
pub use message::{Message, MessageSet};
pub use primitives::{Filter, FnFilter, FnValidator, Step, Validator};
pub use processor::{
    AfterSet, AllOf, AnyOf, BeforeSet, Collection, Discriminator, Field, FieldSet, Not, OneOf,
    Processor,
};
pub use result::{ProcessResult, Validity};
pub use schema::{ExclusiveBound, Schema, TypeDeclaration};
pub use types::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_processors_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Processor>();
        assert_send_sync::<ProcessResult>();
    }
}
