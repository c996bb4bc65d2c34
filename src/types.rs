//! Common types used throughout the adapter
//!
//! Shared type aliases and small utility traits.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and JSON values
pub type ValueMap = HashMap<String, JsonValue>;

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

/// Returns None for JSON values that carry no data (null, `{}`, `[]`)
pub fn null_if_empty(value: Option<JsonValue>) -> Option<JsonValue> {
    value.filter(|v| match v {
        JsonValue::Null => false,
        JsonValue::Object(map) => !map.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        _ => true,
    })
}
