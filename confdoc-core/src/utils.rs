//! Shared string helpers.

use serde_yaml::Value;

/// Trim a string, mapping blank strings to `None`.
pub fn trimmed(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Convert a YAML value to its display form.
///
/// Scalars print bare; sequences and mappings print as compact JSON, which
/// is also valid YAML flow syntax.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
