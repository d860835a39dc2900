use serde::{Deserialize, Serialize};

use scenediff_types::{Token, Value, ValueType};

/// A named, typed value authored on a prim.
///
/// An attribute always carries a declared type, but its authored value is
/// optional: a schema may declare an attribute whose value falls back to a
/// schema-provided default. The differencing engine treats "authored on one
/// side only" as a difference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    name: Token,
    value_type: ValueType,
    value: Option<Value>,
}

impl Attribute {
    /// An attribute with an authored value; the declared type is the value's.
    pub fn with_value(name: Token, value: Value) -> Self {
        Self {
            name,
            value_type: value.value_type(),
            value: Some(value),
        }
    }

    /// A declared attribute with no authored value (schema fallback applies).
    pub fn unauthored(name: Token, value_type: ValueType) -> Self {
        Self {
            name,
            value_type,
            value: None,
        }
    }

    /// The attribute's name.
    pub fn name(&self) -> &Token {
        &self.name
    }

    /// The declared type tag.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The authored value, if any.
    pub fn authored_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns `true` if a value was explicitly authored.
    pub fn has_authored_value(&self) -> bool {
        self.value.is_some()
    }
}
