//! Leaf-string collection from parsed trees.
//!
//! Walks an already-parsed document tree and gathers every trimmed, non-empty
//! string leaf in source order: sequence elements in order, mapping values in
//! insertion order (keys themselves are ignored). Null, boolean, number, and
//! datetime scalars contribute nothing.
//!
//! The traversal uses an explicit work-list instead of call recursion so that
//! pathologically deep documents cannot exhaust the stack.
use serde_json::Value;

/// Collect trimmed, non-empty string leaves from a JSON-like tree.
///
/// JSON, YAML, and INI documents are all parsed into [`serde_json::Value`]
/// before collection; the `preserve_order` feature keeps mapping iteration in
/// insertion order.
pub fn collect_strings(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![value];

    while let Some(node) = stack.pop() {
        match node {
            Value::String(s) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            // Children are pushed in reverse so they pop in source order.
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Object(map) => stack.extend(map.values().rev()),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    out
}

/// Collect trimmed, non-empty string leaves from a TOML tree.
///
/// Same traversal contract as [`collect_strings`]; TOML keeps its own value
/// type because its scalars (datetime, float, integer) do not map cleanly
/// onto JSON values.
pub fn collect_toml_strings(value: &toml::Value) -> Vec<String> {
    use toml::Value;

    let mut out = Vec::new();
    let mut stack = vec![value];

    while let Some(node) = stack.pop() {
        match node {
            Value::String(s) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Table(table) => stack.extend(table.values().rev()),
            Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_) => {}
        }
    }

    out
}
