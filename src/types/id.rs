//! Opaque server-assigned record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, server-assigned record identifier.
///
/// json-server style backends assign identifiers themselves and are free to
/// use numbers or strings; the SDK never interprets them beyond equality.
///
/// ## Example
///
/// ```rust
/// use rosterly::ResourceId;
///
/// let numeric = ResourceId::from(7);
/// let textual = ResourceId::from("a1b2");
/// assert_ne!(numeric, textual);
/// assert_eq!(numeric.to_string(), "7");
/// assert_eq!(textual.to_string(), "a1b2");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(serde_json::Value);

impl ResourceId {
    /// Creates an identifier from a raw JSON value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the raw JSON value of the identifier.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Strings render without JSON quoting so they can be used in URL paths.
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::from(value))
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(serde_json::Value::from(value))
    }
}
