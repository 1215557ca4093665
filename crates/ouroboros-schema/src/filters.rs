//! Coercion filters
//!
//! Parameters arriving through a query string or a header are always
//! strings. In coercive mode the compiler puts one of these filters ahead of
//! the type check so `"5"` can satisfy an integer schema. Values that are
//! not strings pass through untouched with `NoResult`, leaving the verdict
//! to the type check that follows.

use crate::primitives::{reject, Filter};
use crate::result::ProcessResult;
use crate::types::Value;

/// Parses numeric strings into integers
#[derive(Debug, Clone, Copy, Default)]
pub struct ToInt;

impl Filter for ToInt {
    fn filter(&self, value: Value) -> ProcessResult {
        let Value::String(s) = &value else {
            return ProcessResult::no_result(value);
        };

        match s.trim().parse::<i64>() {
            Ok(n) => ProcessResult::valid(Value::Int(n)),
            Err(_) => {
                let arg = value.clone();
                reject(value, "ToInt filter expects a numeric string, %s given", vec![arg])
            }
        }
    }
}

/// Parses numeric strings into integers or floats
///
/// Integral strings become `Int`, everything else that parses as a finite
/// float becomes `Float`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToNumber;

impl Filter for ToNumber {
    fn filter(&self, value: Value) -> ProcessResult {
        let Value::String(s) = &value else {
            return ProcessResult::no_result(value);
        };

        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return ProcessResult::valid(Value::Int(n));
        }
        match s.parse::<f64>() {
            Ok(x) if x.is_finite() => ProcessResult::valid(Value::Float(x)),
            _ => {
                let arg = value.clone();
                reject(value, "ToNumber filter expects a numeric string, %s given", vec![arg])
            }
        }
    }
}

/// Parses `"true"` / `"false"` (any case) into booleans
#[derive(Debug, Clone, Copy, Default)]
pub struct ToBool;

impl Filter for ToBool {
    fn filter(&self, value: Value) -> ProcessResult {
        let Value::String(s) = &value else {
            return ProcessResult::no_result(value);
        };

        if s.eq_ignore_ascii_case("true") {
            ProcessResult::valid(Value::Bool(true))
        } else if s.eq_ignore_ascii_case("false") {
            ProcessResult::valid(Value::Bool(false))
        } else {
            let arg = value.clone();
            reject(value, "ToBool filter expects a boolean string, %s given", vec![arg])
        }
    }
}
