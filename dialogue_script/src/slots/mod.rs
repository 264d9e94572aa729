//! Slot values - named pieces of state accumulated over a conversation.
//!
//! A slot's shape is decided at runtime by whichever operation writes it
//! first: `assign` stores whatever it is given, while `append` always
//! produces a list, coercing a pre-existing scalar into a one-element list
//! before extending it. This tolerates scenarios that assign a slot and
//! later append to the same slot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single scalar slot value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int(value.into())
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<ScalarValue> for serde_json::Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Bool(b) => serde_json::Value::from(b),
            ScalarValue::Int(i) => serde_json::Value::from(i),
            ScalarValue::Float(f) => serde_json::Value::from(f),
            ScalarValue::Text(s) => serde_json::Value::from(s),
        }
    }
}

/// A slot value: a scalar, or an ordered list of scalars used for
/// accumulation (e.g. repeated food orders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotValue {
    Scalar(ScalarValue),
    List(Vec<ScalarValue>),
}

impl SlotValue {
    /// View the value as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            SlotValue::Scalar(value) => Some(value),
            SlotValue::List(_) => None,
        }
    }

    /// View the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[ScalarValue]> {
        match self {
            SlotValue::Scalar(_) => None,
            SlotValue::List(values) => Some(values),
        }
    }
}

impl From<ScalarValue> for SlotValue {
    fn from(value: ScalarValue) -> Self {
        SlotValue::Scalar(value)
    }
}

impl From<bool> for SlotValue {
    fn from(value: bool) -> Self {
        SlotValue::Scalar(value.into())
    }
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        SlotValue::Scalar(value.into())
    }
}

impl From<i32> for SlotValue {
    fn from(value: i32) -> Self {
        SlotValue::Scalar(value.into())
    }
}

impl From<f64> for SlotValue {
    fn from(value: f64) -> Self {
        SlotValue::Scalar(value.into())
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        SlotValue::Scalar(value.into())
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        SlotValue::Scalar(value.into())
    }
}

impl From<Vec<ScalarValue>> for SlotValue {
    fn from(values: Vec<ScalarValue>) -> Self {
        SlotValue::List(values)
    }
}

impl From<SlotValue> for serde_json::Value {
    fn from(value: SlotValue) -> Self {
        match value {
            SlotValue::Scalar(scalar) => scalar.into(),
            SlotValue::List(values) => {
                serde_json::Value::Array(values.into_iter().map(Into::into).collect())
            }
        }
    }
}

/// The accumulated slot map for one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Slots {
    values: HashMap<String, SlotValue>,
}

impl Slots {
    /// Create an empty slot map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a slot value.
    pub fn get(&self, key: &str) -> Option<&SlotValue> {
        self.values.get(key)
    }

    /// Check if a slot is populated.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Replace a slot value unconditionally, whatever shape it had before.
    pub fn assign(&mut self, key: impl Into<String>, value: impl Into<SlotValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Append a scalar to a slot, forcing the slot into list shape.
    ///
    /// An absent slot becomes a one-element list. A scalar slot is coerced
    /// into a list holding the old scalar before the new value is pushed.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<ScalarValue>) {
        let key = key.into();
        let value = value.into();
        let next = match self.values.remove(&key) {
            None => SlotValue::List(vec![value]),
            Some(SlotValue::Scalar(existing)) => SlotValue::List(vec![existing, value]),
            Some(SlotValue::List(mut values)) => {
                values.push(value);
                SlotValue::List(values)
            }
        };
        self.values.insert(key, next);
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no slots are populated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all populated slots.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Snapshot the slot map as JSON for downstream display (receipts,
    /// summaries). Read-only: the snapshot is detached from the live map.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(key, value)| (key.clone(), value.clone().into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_overwrites() {
        let mut slots = Slots::new();
        slots.assign("n", 2);
        assert_eq!(slots.get("n"), Some(&SlotValue::Scalar(ScalarValue::Int(2))));

        slots.assign("n", 3);
        assert_eq!(slots.get("n"), Some(&SlotValue::Scalar(ScalarValue::Int(3))));
    }

    #[test]
    fn test_append_accumulates() {
        let mut slots = Slots::new();
        slots.append("food", "negima");
        slots.append("food", "sashimori");

        assert_eq!(
            slots.get("food").and_then(|v| v.as_list()),
            Some(&[ScalarValue::from("negima"), ScalarValue::from("sashimori")][..])
        );
    }

    #[test]
    fn test_append_coerces_scalar_to_list() {
        let mut slots = Slots::new();
        slots.assign("drink", "lemon");
        slots.append("drink", "sake");

        assert_eq!(
            slots.get("drink").and_then(|v| v.as_list()),
            Some(&[ScalarValue::from("lemon"), ScalarValue::from("sake")][..])
        );
    }

    #[test]
    fn test_assign_replaces_list() {
        let mut slots = Slots::new();
        slots.append("food", "eihire");
        slots.assign("food", "motsunikomi");

        assert_eq!(
            slots.get("food").and_then(|v| v.as_scalar()),
            Some(&ScalarValue::from("motsunikomi"))
        );
    }

    #[test]
    fn test_append_starts_one_element_list() {
        let mut slots = Slots::new();
        slots.append("food", "sashimori");

        assert_eq!(
            slots.get("food").and_then(|v| v.as_list()),
            Some(&[ScalarValue::from("sashimori")][..])
        );
    }

    #[test]
    fn test_to_json_snapshot() {
        let mut slots = Slots::new();
        slots.assign("n", 2);
        slots.assign("pay", "cash");
        slots.append("food", "negima");

        let json = slots.to_json();
        assert_eq!(json["n"], serde_json::json!(2));
        assert_eq!(json["pay"], serde_json::json!("cash"));
        assert_eq!(json["food"], serde_json::json!(["negima"]));
    }
}
