//! Extraction entry points and per-format parsers.
//!
//! [`extract`] is the total front door: it trims the document, resolves the
//! file-type hint to a [`Format`], runs the matching parser, and converts any
//! parse failure into an empty result plus one `tracing::warn!` event. It
//! never fails the caller. [`try_extract`] exposes the structured diagnostic
//! to callers that want to report it themselves.
pub mod collect;
pub mod csv;
pub mod dotenv;
pub mod fallback;
pub mod ini;
pub mod json;
pub mod toml;
pub mod yaml;

use crate::error::Result;
use crate::types::{ExtractionOptions, Format};

pub use csv::{CsvRows, CsvStream, extract_csv, split_csv_line, stream_csv};

/// Extract leaf strings from `text`, routing on a raw file-type hint.
///
/// Total: malformed input produces an empty sequence and a single warning
/// event carrying the `Invalid <FORMAT>: ...` diagnostic. A whitespace-only
/// document short-circuits to empty without touching a parser.
pub fn extract(text: &str, format_hint: &str, options: &ExtractionOptions) -> Vec<String> {
    let format = Format::from_hint(format_hint);
    match try_extract(text, format, options) {
        Ok(strings) => strings,
        Err(err) => {
            tracing::warn!(%format, error = %err, "extraction failed, returning empty result");
            Vec::new()
        }
    }
}

/// Extract leaf strings, surfacing parse failures to the caller.
///
/// The error is always [`crate::StringLeError::Parse`] and each invocation
/// produces at most one. CSV, dotenv, and fallback parsing are relaxed and
/// cannot fail.
pub fn try_extract(text: &str, format: Format, options: &ExtractionOptions) -> Result<Vec<String>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match format {
        Format::Json => json::extract_json(trimmed),
        Format::Yaml => yaml::extract_yaml(trimmed),
        Format::Toml => toml::extract_toml(trimmed),
        Format::Ini => ini::extract_ini(trimmed),
        Format::Env => dotenv::extract_dotenv(trimmed),
        Format::Csv => csv::extract_csv(trimmed, options),
        Format::Fallback => fallback::extract_fallback(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ExtractionOptions {
        ExtractionOptions::default()
    }

    #[test]
    fn test_extract_routes_by_hint() {
        assert_eq!(
            extract(r#"{"a":"x"}"#, "json", &opts()),
            vec!["x".to_string()]
        );
        assert_eq!(extract("a: x", "yaml", &opts()), vec!["x".to_string()]);
        assert_eq!(extract("a: x", "yml", &opts()), vec!["x".to_string()]);
        assert_eq!(
            extract("a = \"x\"", "toml", &opts()),
            vec!["x".to_string()]
        );
        assert_eq!(extract("a = x", "ini", &opts()), vec!["x".to_string()]);
        assert_eq!(extract("A=x", "env", &opts()), vec!["x".to_string()]);
        assert_eq!(extract("x,y", "csv", &opts()), vec!["x", "y"]);
    }

    #[test]
    fn test_extract_unknown_hint_uses_fallback() {
        assert_eq!(
            extract(r#"key: "quoted""#, "definitely-not-a-format", &opts()),
            vec!["quoted".to_string()]
        );
    }

    #[test]
    fn test_extract_empty_input_short_circuits() {
        for hint in ["json", "yaml", "csv", "toml", "ini", "env", "nope"] {
            assert!(extract("", hint, &opts()).is_empty());
            assert!(extract("   \n  ", hint, &opts()).is_empty());
        }
    }

    #[test]
    fn test_extract_total_on_malformed_input() {
        assert!(extract("{invalid", "json", &opts()).is_empty());
        assert!(extract("invalid: [unclosed", "yaml", &opts()).is_empty());
    }

    #[test]
    fn test_try_extract_surfaces_diagnostic() {
        let err = try_extract("{invalid", Format::Json, &opts()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }
}
