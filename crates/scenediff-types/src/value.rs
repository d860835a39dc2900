use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// The declared type tag carried by every attribute.
///
/// Two attributes with different declared types always differ, regardless of
/// their authored values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Bool,
    Int,
    Float,
    String,
    Token,
    Vec3,
    IntArray,
    FloatArray,
    StringArray,
    Vec3Array,
}

impl ValueType {
    /// Stable display name for host-facing output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Token => "token",
            Self::Vec3 => "vec3",
            Self::IntArray => "int[]",
            Self::FloatArray => "float[]",
            Self::StringArray => "string[]",
            Self::Vec3Array => "vec3[]",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed attribute value.
///
/// A tagged union over the supported scalar and array kinds, with structural
/// equality defined per kind. Values of different kinds are never equal, so
/// comparing mismatched kinds classifies as a difference rather than an
/// error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Token(Token),
    Vec3([f64; 3]),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    StringArray(Vec<String>),
    Vec3Array(Vec<[f64; 3]>),
}

impl Value {
    /// The type tag of this value's kind.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::Token(_) => ValueType::Token,
            Self::Vec3(_) => ValueType::Vec3,
            Self::IntArray(_) => ValueType::IntArray,
            Self::FloatArray(_) => ValueType::FloatArray,
            Self::StringArray(_) => ValueType::StringArray,
            Self::Vec3Array(_) => ValueType::Vec3Array,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<[f64; 3]> for Value {
    fn from(v: [f64; 3]) -> Self {
        Self::Vec3(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_matches_kind() {
        assert_eq!(Value::Bool(true).value_type(), ValueType::Bool);
        assert_eq!(Value::Int(5).value_type(), ValueType::Int);
        assert_eq!(Value::Vec3([0.0; 3]).value_type(), ValueType::Vec3);
        assert_eq!(
            Value::FloatArray(vec![1.0, 2.0]).value_type(),
            ValueType::FloatArray
        );
    }

    #[test]
    fn same_kind_structural_equality() {
        assert_eq!(Value::Int(5), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Int(6));
        assert_eq!(
            Value::StringArray(vec!["a".into(), "b".into()]),
            Value::StringArray(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn cross_kind_never_equal() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::IntArray(vec![1]), Value::Int(1));
    }

    #[test]
    fn array_order_matters() {
        assert_ne!(
            Value::IntArray(vec![1, 2]),
            Value::IntArray(vec![2, 1])
        );
    }

    #[test]
    fn type_names_are_stable() {
        assert_eq!(ValueType::Vec3Array.name(), "vec3[]");
        assert_eq!(format!("{}", ValueType::Float), "float");
    }

    #[test]
    fn serde_roundtrip() {
        let value = Value::Vec3Array(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let json = serde_json::to_string(&value).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }
}
