//! Numeric constraints
//!
//! Bounds are stored as `f64` so one validator serves `integer` and
//! `number` schemas. Non-numeric values pass through with `NoResult`.

use crate::primitives::{reject, Validator};
use crate::result::ProcessResult;
use crate::types::Value;

/// Render a bound as an integer when it has no fractional part
fn bound_arg(bound: f64) -> Value {
    if bound.fract() == 0.0 && bound.abs() < i64::MAX as f64 {
        Value::Int(bound as i64)
    } else {
        Value::Float(bound)
    }
}

/// Lower bound, inclusive unless `exclusive`
#[derive(Debug, Clone, Copy)]
pub struct Minimum {
    bound: f64,
    exclusive: bool,
}

impl Minimum {
    pub fn new(bound: f64, exclusive: bool) -> Self {
        Self { bound, exclusive }
    }
}

impl Validator for Minimum {
    fn validate(&self, value: Value) -> ProcessResult {
        let Some(n) = value.as_f64() else {
            return ProcessResult::no_result(value);
        };

        match (self.exclusive, n) {
            (false, n) if n < self.bound => reject(
                value,
                "Number is expected to be a minimum of %d",
                vec![bound_arg(self.bound)],
            ),
            (true, n) if n <= self.bound => reject(
                value,
                "Number is expected to be greater than %d",
                vec![bound_arg(self.bound)],
            ),
            _ => ProcessResult::valid(value),
        }
    }
}

/// Upper bound, inclusive unless `exclusive`
#[derive(Debug, Clone, Copy)]
pub struct Maximum {
    bound: f64,
    exclusive: bool,
}

impl Maximum {
    pub fn new(bound: f64, exclusive: bool) -> Self {
        Self { bound, exclusive }
    }
}

impl Validator for Maximum {
    fn validate(&self, value: Value) -> ProcessResult {
        let Some(n) = value.as_f64() else {
            return ProcessResult::no_result(value);
        };

        match (self.exclusive, n) {
            (false, n) if n > self.bound => reject(
                value,
                "Number is expected to be a maximum of %d",
                vec![bound_arg(self.bound)],
            ),
            (true, n) if n >= self.bound => reject(
                value,
                "Number is expected to be less than %d",
                vec![bound_arg(self.bound)],
            ),
            _ => ProcessResult::valid(value),
        }
    }
}

/// Divisibility check
///
/// Integer inputs against an integral divisor are checked exactly; anything
/// else allows a remainder within 0.01% of the divisor to absorb float
/// rounding (`0.3` is a multiple of `0.1`).
#[derive(Debug, Clone, Copy)]
pub struct MultipleOf {
    multiple: f64,
}

impl MultipleOf {
    pub fn new(multiple: f64) -> Self {
        Self { multiple }
    }

    fn is_multiple(&self, value: &Value) -> bool {
        if self.multiple == 0.0 {
            return true;
        }

        if let (Value::Int(n), Value::Int(multiple)) = (value, bound_arg(self.multiple)) {
            return n.checked_rem(multiple).map_or(true, |r| r == 0);
        }

        let Some(num) = value.as_f64() else {
            return true;
        };
        let multiple = self.multiple.abs();
        let remainder = (num % multiple).abs();
        let tolerance = multiple * 0.0001;
        remainder <= tolerance || (multiple - remainder).abs() <= tolerance
    }
}

impl Validator for MultipleOf {
    fn validate(&self, value: Value) -> ProcessResult {
        if value.as_f64().is_none() {
            return ProcessResult::no_result(value);
        }

        if self.is_multiple(&value) {
            ProcessResult::valid(value)
        } else {
            reject(
                value,
                "Number is expected to be a multiple of %d",
                vec![bound_arg(self.multiple)],
            )
        }
    }
}
