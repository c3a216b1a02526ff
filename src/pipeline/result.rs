//! Task Result Normalization
//!
//! A task execution yields a value whose shape is not fixed in advance:
//! an output-bearing record, a key/value mapping, an arbitrary structured
//! value, or plain text. `TaskResult` models those shapes as a tagged
//! union with exactly one extraction function, so every consumption site
//! applies the same precedence and exhaustiveness is checked at compile
//! time.

use serde_json::{Map, Value};

/// Result of one agent task execution
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    /// Record exposing a named output field
    Report { output: String },
    /// Key/value mapping, possibly carrying `output` or `result`
    Mapping(Map<String, Value>),
    /// Arbitrary structured value with a JSON serialization
    Structured(Value),
    /// Plain text
    Text(String),
}

impl TaskResult {
    /// Build a result from a decoded JSON value, picking the most
    /// specific shape the value supports.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(output)) = map.get("output") {
                    TaskResult::Report {
                        output: output.clone(),
                    }
                } else {
                    TaskResult::Mapping(map)
                }
            }
            Value::String(text) => TaskResult::Text(text),
            other => TaskResult::Structured(other),
        }
    }
}

/// Extract the single canonical text payload from a task result.
///
/// Precedence, first match wins: named output field; mapping value under
/// `output` or `result` (falling back to the full mapping serialization);
/// structured serialization; plain text.
pub fn normalize(result: &TaskResult) -> String {
    match result {
        TaskResult::Report { output } => output.clone(),
        TaskResult::Mapping(map) => match map.get("output").or_else(|| map.get("result")) {
            Some(Value::String(text)) => text.clone(),
            Some(value) => value.to_string(),
            None => Value::Object(map.clone()).to_string(),
        },
        TaskResult::Structured(value) => value.to_string(),
        TaskResult::Text(text) => text.clone(),
    }
}
