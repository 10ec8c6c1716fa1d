//! JSON extraction.
use crate::error::{Result, StringLeError};
use crate::extraction::collect::collect_strings;
use crate::types::Format;

/// Extract leaf strings from a JSON document.
///
/// Malformed input yields [`StringLeError::Parse`] with the `serde_json`
/// diagnostic; the message renders as `Invalid JSON: ...`.
pub fn extract_json(text: &str) -> Result<Vec<String>> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| StringLeError::parse(Format::Json, e.to_string()))?;
    Ok(collect_strings(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_traversal_order() {
        let strings = extract_json(r#"{"a":"x","b":[{"c":"y"}]}"#).unwrap();
        assert_eq!(strings, vec!["x", "y"]);
    }

    #[test]
    fn test_extract_json_top_level_array() {
        let strings = extract_json(r#"["one", " two ", 3, null]"#).unwrap();
        assert_eq!(strings, vec!["one", "two"]);
    }

    #[test]
    fn test_extract_json_invalid() {
        let err = extract_json("{invalid").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }

    #[test]
    fn test_extract_json_scalar_document() {
        assert_eq!(extract_json(r#""hello""#).unwrap(), vec!["hello"]);
        assert!(extract_json("42").unwrap().is_empty());
    }
}
