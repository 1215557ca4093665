//! Request Validation Example
//!
//! Compiles an OpenAPI request body and query parameters, then runs them
//! against valid and invalid input.
//!
//! Run with:
//! ```bash
//! cargo run -p ouroboros-schema --example validate_request
//! ```

use indexmap::IndexMap;
use ouroboros_schema::{CompileConfig, Compiler, FieldName, Schema, Value};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Request Validation Example");
    println!("==========================\n");

    let pet = Schema::from_json(json!({
        "type": "object",
        "required": ["name", "kind"],
        "properties": {
            "name": {"type": "string", "minLength": 1},
            "kind": {"type": "string", "enum": ["cat", "dog"]},
            "birthday": {"type": "string", "format": "date"},
            "tags": {"type": "array", "items": {"type": "string"}, "uniqueItems": true},
            "owner": {"type": ["integer", "null"]}
        }
    }))?;

    let mut content = IndexMap::new();
    content.insert("application/json".to_string(), pet);

    let body = Compiler::new(CompileConfig::strict()).compile_content(&content)?;

    println!("1. Request body");
    println!("---------------");
    for input in [
        json!({"name": "Rex", "kind": "dog", "tags": ["good"], "owner": null}),
        json!({"name": "", "kind": "fish", "birthday": "2024-02-30", "tags": ["a", "a"]}),
    ] {
        report(&input, body.process(&FieldName::root(), Value::from(input.clone())));
    }

    let query = Schema::from_json(json!({
        "type": "object",
        "properties": {
            "limit": {"type": "integer", "minimum": 1, "maximum": 100, "default": 20},
            "verbose": {"type": "boolean"}
        }
    }))?;
    let query = Compiler::new(CompileConfig::coercive()).compile(&query, "query")?;

    println!("2. Query parameters (coerced from strings)");
    println!("------------------------------------------");
    for input in [json!({"verbose": "true"}), json!({"limit": "500"})] {
        report(&input, query.process(&FieldName::root(), Value::from(input.clone())));
    }

    Ok(())
}

fn report(input: &serde_json::Value, result: ouroboros_schema::ProcessResult) {
    println!("  Input: {}", input);
    match result.into_outcome() {
        Ok(value) => println!("  Valid: {}\n", serde_json::Value::from(value)),
        Err(errors) => {
            println!("  {}:", errors);
            for error in errors.as_slice() {
                println!("    - {}", error);
            }
            println!();
        }
    }
}
