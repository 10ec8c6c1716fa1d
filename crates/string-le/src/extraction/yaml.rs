//! YAML extraction.
//!
//! A single YAML document is parsed straight into a [`serde_json::Value`] so
//! the same collector serves both JSON and YAML. Both the `yaml` and `yml`
//! hints route here.
use crate::error::{Result, StringLeError};
use crate::extraction::collect::collect_strings;
use crate::types::Format;

/// Extract leaf strings from a YAML document.
pub fn extract_yaml(text: &str) -> Result<Vec<String>> {
    let value: serde_json::Value =
        serde_yaml_ng::from_str(text).map_err(|e| StringLeError::parse(Format::Yaml, e.to_string()))?;
    Ok(collect_strings(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_yaml_nested() {
        let strings = extract_yaml("user:\n  name: Alice\n  tags:\n    - one\n    - two\n").unwrap();
        assert_eq!(strings, vec!["Alice", "one", "two"]);
    }

    #[test]
    fn test_extract_yaml_non_string_scalars_dropped() {
        let strings = extract_yaml("count: 3\nenabled: true\nlabel: ok\n").unwrap();
        assert_eq!(strings, vec!["ok"]);
    }

    #[test]
    fn test_extract_yaml_invalid() {
        let err = extract_yaml("invalid: [unclosed").unwrap_err();
        assert!(err.to_string().starts_with("Invalid YAML:"));
    }
}
