//! Type checks

use crate::primitives::{reject, Validator};
use crate::result::ProcessResult;
use crate::types::Value;

macro_rules! type_check {
    ($(#[$doc:meta])* $name:ident, $expected:literal, $pattern:pat) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Validator for $name {
            fn validate(&self, value: Value) -> ProcessResult {
                if matches!(value, $pattern) {
                    return ProcessResult::valid(value);
                }
                let passed = Value::from(value.type_name());
                reject(
                    value,
                    concat!(
                        stringify!($name),
                        " validator expects ",
                        $expected,
                        " value, %s passed instead"
                    ),
                    vec![passed],
                )
            }
        }
    };
}

type_check!(
    /// Accepts strings
    IsString, "string", Value::String(_)
);
type_check!(
    /// Accepts integers only
    IsInt, "integer", Value::Int(_)
);
type_check!(
    /// Accepts integers and floats
    IsNumber, "number", Value::Int(_) | Value::Float(_)
);
type_check!(
    /// Accepts floats only
    IsFloat, "float", Value::Float(_)
);
type_check!(IsBool, "boolean", Value::Bool(_));
type_check!(IsNull, "null", Value::Null);
type_check!(IsList, "array", Value::List(_));
type_check!(IsObject, "object", Value::Object(_));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Validity;

    #[test]
    fn test_accepts_matching_type() {
        assert_eq!(IsString.validate(Value::from("a")).validity(), Validity::Valid);
        assert_eq!(IsInt.validate(Value::Int(1)).validity(), Validity::Valid);
        assert_eq!(IsNumber.validate(Value::Int(1)).validity(), Validity::Valid);
        assert_eq!(IsNumber.validate(Value::Float(1.5)).validity(), Validity::Valid);
        assert_eq!(IsFloat.validate(Value::Float(1.5)).validity(), Validity::Valid);
        assert_eq!(IsBool.validate(Value::Bool(false)).validity(), Validity::Valid);
        assert_eq!(IsNull.validate(Value::Null).validity(), Validity::Valid);
        assert_eq!(IsList.validate(Value::List(vec![])).validity(), Validity::Valid);
        assert_eq!(IsObject.validate(Value::Object(vec![])).validity(), Validity::Valid);
    }

    #[test]
    fn test_rejection_names_passed_type() {
        let result = IsString.validate(Value::Int(5));
        assert_eq!(result.validity(), Validity::Invalid);
        assert_eq!(result.value(), &Value::Int(5));
        assert_eq!(
            result.message_sets()[0].messages()[0].rendered(),
            "IsString validator expects string value, integer passed instead"
        );

        assert_eq!(IsFloat.validate(Value::Int(1)).validity(), Validity::Invalid);
        assert_eq!(IsInt.validate(Value::Float(1.0)).validity(), Validity::Invalid);
        assert_eq!(IsInt.validate(Value::from("5")).validity(), Validity::Invalid);
    }
}
