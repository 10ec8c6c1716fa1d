//! TOML extraction.
use crate::error::{Result, StringLeError};
use crate::extraction::collect::collect_toml_strings;
use crate::types::Format;

/// Extract leaf strings from a TOML document.
pub fn extract_toml(text: &str) -> Result<Vec<String>> {
    let value: toml::Value =
        toml::from_str(text).map_err(|e| StringLeError::parse(Format::Toml, e.to_string()))?;
    Ok(collect_toml_strings(&value))
}
