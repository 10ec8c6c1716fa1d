//! dotenv (.env) extraction.
//!
//! Line-oriented, never tree-based: comments and lines without `=` are
//! skipped, a leading `export ` is stripped, and values lose exactly one
//! layer of matching quotes. Multi-line values are out of scope. Parsing
//! never fails.
use crate::error::Result;

/// Extract the values of a dotenv document.
pub fn extract_dotenv(text: &str) -> Result<Vec<String>> {
    let mut strings = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let content = match line.strip_prefix("export ") {
            Some(rest) => rest.trim(),
            None => line,
        };
        let Some((_, value)) = content.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let unquoted = strip_matching_quotes(value);
        let trimmed = unquoted.trim();
        if !trimmed.is_empty() {
            strings.push(trimmed.to_string());
        }
    }

    Ok(strings)
}

fn strip_matching_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
