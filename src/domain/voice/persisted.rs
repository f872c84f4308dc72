use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

pub const TEXT_KEY: &str = "text";
pub const TEXT_TYPE_KEY: &str = "textType";
pub const VOICE_ID_KEY: &str = "voiceId";
pub const OUTPUT_FORMAT_KEY: &str = "outputFormat";

/// Key/value form of a set of request options, suitable for storage or for
/// handing to another process.
///
/// Values are untyped; readers coerce each key explicitly and treat a value
/// of the wrong type the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedOptions(Map<String, JsonValue>);

impl PersistedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// String value stored under `key`, or `None` if absent or not a string
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(JsonValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> Map<String, JsonValue> {
        self.0
    }
}

impl From<Map<String, JsonValue>> for PersistedOptions {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}
