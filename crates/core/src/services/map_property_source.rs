//! In-memory property bag
//!
//! Backs hosts whose properties come from a file or are assembled in code.

use crate::error::PropertyError;
use crate::interfaces::{PropertySource, PropertyValue};
use std::collections::BTreeMap;

/// PropertySource over an ordered map of values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapPropertySource {
    values: BTreeMap<String, PropertyValue>,
}

impl MapPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

impl PropertySource for MapPropertySource {
    fn property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| PropertyError::Missing(name.to_string()))
    }
}

impl From<&serde_json::Value> for PropertyValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Bool(*b),
            Value::String(s) => PropertyValue::String(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PropertyValue::Integer(i),
                None => PropertyValue::Unsupported("number"),
            },
            Value::Array(_) => PropertyValue::Unsupported("array"),
            Value::Object(_) => PropertyValue::Unsupported("object"),
        }
    }
}

impl From<&serde_json::Map<String, serde_json::Value>> for MapPropertySource {
    fn from(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let values = map
            .iter()
            .map(|(k, v)| (k.clone(), PropertyValue::from(v)))
            .collect();
        Self { values }
    }
}
