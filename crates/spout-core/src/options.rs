use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Generic option map handed to the connector config builders.
///
/// Values are untyped (strings or numbers, as read from a config file).
/// The typed accessors fall back to a default when a key is absent or holds
/// a value of the wrong type; no coercion between types is attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(HashMap<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Resolve a string option, falling back to `default` when the key is
    /// absent or the value is not a string.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Resolve an unsigned integer option, falling back to `default` when
    /// the key is absent or the value is not an unsigned integer.
    pub fn u64_or(&self, key: &str, default: u64) -> u64 {
        match self.0.get(key) {
            Some(value) => value.as_u64().unwrap_or(default),
            None => default,
        }
    }
}

impl From<HashMap<String, Value>> for Options {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
