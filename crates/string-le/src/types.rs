//! Shared types: format tags, extraction options, and sort modes.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of input formats the extraction router understands.
///
/// `Fallback` is the catch-all: any unrecognized hint resolves to it, so
/// routing is total. Resolution happens once, at the routing boundary, via
/// [`Format::from_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Yaml,
    Csv,
    Toml,
    Ini,
    Env,
    Fallback,
}

impl Format {
    /// Resolve a raw file-type hint to a format.
    ///
    /// The hint is trimmed and lowercased first. Both `yaml` and `yml` map to
    /// YAML. Anything unrecognized (including the empty string) maps to
    /// `Fallback`; this function never fails.
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "csv" => Self::Csv,
            "toml" => Self::Toml,
            "ini" => Self::Ini,
            "env" => Self::Env,
            _ => Self::Fallback,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Csv => "CSV",
            Self::Toml => "TOML",
            Self::Ini => "INI",
            Self::Env => "env",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Options recognized by the extraction entry points.
///
/// Only the CSV engine consumes these today; the tree formats ignore them.
/// Unknown fields in a deserialized options document are ignored, not
/// rejected. A column index past the last column of a row selects nothing
/// from that row (the cell is treated as absent), never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionOptions {
    /// Treat the first CSV row as a header and skip it.
    pub csv_has_header: bool,

    /// Select a single CSV column by zero-based index.
    pub csv_column_index: Option<usize>,

    /// Select several CSV columns (fan-out composition, one output per index).
    pub csv_column_indexes: Option<Vec<usize>>,

    /// Fan out over every column of the document.
    pub select_all_columns: bool,
}

impl ExtractionOptions {
    /// Options for a single-column selection.
    pub fn column(index: usize) -> Self {
        Self {
            csv_column_index: Some(index),
            ..Self::default()
        }
    }

    /// Options with the header flag set.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.csv_has_header = has_header;
        self
    }
}

/// Deterministic sort modes for the post-processing stage.
///
/// The alpha modes compare with base sensitivity (case and diacritics
/// ignored). The length modes compare UTF-16 code-unit length first and break
/// ties with an ascending case- and accent-sensitive comparison, regardless
/// of the primary direction. That asymmetry is observable behavior and is
/// kept as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Off,
    AlphaAsc,
    AlphaDesc,
    LengthAsc,
    LengthDesc,
}

impl FromStr for SortMode {
    type Err = crate::StringLeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "alpha-asc" => Ok(Self::AlphaAsc),
            "alpha-desc" => Ok(Self::AlphaDesc),
            "length-asc" => Ok(Self::LengthAsc),
            "length-desc" => Ok(Self::LengthDesc),
            other => Err(crate::StringLeError::validation(format!(
                "unknown sort mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::AlphaAsc => "alpha-asc",
            Self::AlphaDesc => "alpha-desc",
            Self::LengthAsc => "length-asc",
            Self::LengthDesc => "length-desc",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_hint_known() {
        assert_eq!(Format::from_hint("json"), Format::Json);
        assert_eq!(Format::from_hint("yaml"), Format::Yaml);
        assert_eq!(Format::from_hint("yml"), Format::Yaml);
        assert_eq!(Format::from_hint("csv"), Format::Csv);
        assert_eq!(Format::from_hint("toml"), Format::Toml);
        assert_eq!(Format::from_hint("ini"), Format::Ini);
        assert_eq!(Format::from_hint("env"), Format::Env);
    }

    #[test]
    fn test_format_from_hint_normalizes() {
        assert_eq!(Format::from_hint("  JSON "), Format::Json);
        assert_eq!(Format::from_hint("Yml"), Format::Yaml);
    }

    #[test]
    fn test_format_from_hint_unknown_is_fallback() {
        assert_eq!(Format::from_hint(""), Format::Fallback);
        assert_eq!(Format::from_hint("xml"), Format::Fallback);
        assert_eq!(Format::from_hint("fallback"), Format::Fallback);
    }

    #[test]
    fn test_sort_mode_round_trip() {
        for mode in [
            SortMode::Off,
            SortMode::AlphaAsc,
            SortMode::AlphaDesc,
            SortMode::LengthAsc,
            SortMode::LengthDesc,
        ] {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_sort_mode_invalid() {
        assert!("reverse".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_options_ignore_unknown_fields() {
        let opts: ExtractionOptions =
            serde_json::from_str(r#"{"csvHasHeader": true, "someFutureFlag": 1}"#).unwrap();
        assert!(opts.csv_has_header);
        assert_eq!(opts.csv_column_index, None);
    }

    #[test]
    fn test_options_builders() {
        let opts = ExtractionOptions::column(2).with_header(true);
        assert_eq!(opts.csv_column_index, Some(2));
        assert!(opts.csv_has_header);
    }
}
