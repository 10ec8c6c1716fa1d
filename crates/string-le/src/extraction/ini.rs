//! INI extraction.
//!
//! Line-oriented INI parser that builds a nested mapping and feeds it to the
//! shared collector. Section headers nest on dots: `[a.b]` places following
//! keys under `a` then `b`. Comments start with `;` or `#`. A key without a
//! value (`flag` on its own line) becomes a boolean and therefore contributes
//! no string. The grammar is permissive; parsing never fails.
use crate::error::Result;
use crate::extraction::collect::collect_strings;
use serde_json::{Map, Value};

/// Extract leaf strings from an INI document.
pub fn extract_ini(text: &str) -> Result<Vec<String>> {
    let tree = parse_ini(text);
    Ok(collect_strings(&tree))
}

/// Parse INI text into a nested JSON-like mapping.
fn parse_ini(text: &str) -> Value {
    let mut root = Map::new();
    let mut section_path: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            let name = line[1..line.len() - 1].trim();
            section_path = if name.is_empty() {
                Vec::new()
            } else {
                name.split('.').map(|part| part.trim().to_string()).collect()
            };
            // Materialize the section so empty sections still exist.
            section_mut(&mut root, &section_path);
            continue;
        }

        let section = section_mut(&mut root, &section_path);
        match line.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let value = unquote(value.trim());
                section.insert(key.to_string(), Value::String(value.to_string()));
            }
            // Bare keys behave as boolean flags.
            None => {
                section.insert(line.to_string(), Value::Bool(true));
            }
        }
    }

    Value::Object(root)
}

/// Descend to (creating as needed) the mapping for a dotted section path.
fn section_mut<'a>(root: &'a mut Map<String, Value>, path: &[String]) -> &'a mut Map<String, Value> {
    let mut current = root;
    for part in path {
        let entry = current
            .entry(part.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            // A scalar already sits at this path; the section wins.
            *entry = Value::Object(Map::new());
        }
        current = entry
            .as_object_mut()
            .unwrap_or_else(|| unreachable!("section entry was just made an object"));
    }
    current
}

/// Strip exactly one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
