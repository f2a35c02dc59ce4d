use serde_yaml::Value;

/// Format a default value in configuration file syntax.
///
/// Strings are double-quoted, sequences become `[a, b]` and mappings
/// become `{key: value}`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Sequence(items) => {
            let items: Vec<_> = items.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", key(k), format_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format_value(&tagged.value),
    }
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Keys stay bare unless they need quoting.
fn key(k: &Value) -> String {
    match k {
        Value::String(s)
            if !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.') =>
        {
            s.clone()
        }
        Value::String(s) => quote(s),
        other => format_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(format_value(&yaml("4222")), "4222");
        assert_eq!(format_value(&yaml("true")), "true");
        assert_eq!(format_value(&yaml("1.5")), "1.5");
        assert_eq!(format_value(&yaml("0.0.0.0")), "\"0.0.0.0\"");
        assert_eq!(format_value(&yaml("'say \"hi\"'")), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_collections() {
        assert_eq!(format_value(&yaml("[a, 1, true]")), "[\"a\", 1, true]");
        assert_eq!(
            format_value(&yaml("{region: eu, 'with space': 2}")),
            "{region: \"eu\", \"with space\": 2}"
        );
        assert_eq!(format_value(&yaml("[]")), "[]");
    }
}
