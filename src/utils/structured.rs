//! Conversion between loose JSON values and structured records.
//!
//! The shape of each value is decided once, from its JSON type: objects
//! become records, arrays stay sequences, everything else is a scalar.
//! Sequences pass through unconverted, including any objects inside them.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Structured {
    Scalar(Value),
    Sequence(Vec<Value>),
    /// Named fields in their original order.
    Record(Vec<(String, Structured)>),
}

impl Structured {
    /// Field of a record; `None` for sequences and scalars.
    pub fn field(&self, name: &str) -> Option<&Structured> {
        match self {
            Structured::Record(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Structured::Record(_))
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Structured::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

pub fn to_structured(value: Value) -> Structured {
    match value {
        Value::Object(map) => Structured::Record(
            map.into_iter()
                .map(|(key, value)| (key, to_structured(value)))
                .collect(),
        ),
        Value::Array(items) => Structured::Sequence(items),
        scalar => Structured::Scalar(scalar),
    }
}

pub fn from_structured(structured: Structured) -> Value {
    match structured {
        Structured::Record(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key, from_structured(value)))
                .collect::<Map<String, Value>>(),
        ),
        Structured::Sequence(items) => Value::Array(items),
        Structured::Scalar(value) => value,
    }
}

impl From<Value> for Structured {
    fn from(value: Value) -> Self {
        to_structured(value)
    }
}

impl From<Structured> for Value {
    fn from(structured: Structured) -> Self {
        from_structured(structured)
    }
}
