//! Configuration loading and management.
//!
//! All behavior toggles live in [`StringLeConfig`], an explicit value passed
//! into every pipeline call. The core never reads ambient state; hosts load
//! or construct a config once and hand it down. Configs can be deserialized
//! from TOML files or built programmatically.
use crate::error::{Result, StringLeError};
use crate::types::SortMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main pipeline configuration.
///
/// # Example
///
/// ```rust
/// use string_le::StringLeConfig;
///
/// let config = StringLeConfig::default();
/// assert!(!config.dedupe_enabled);
/// assert!(config.safety.enabled);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StringLeConfig {
    /// Drop duplicate values (first occurrence wins) after extraction.
    pub dedupe_enabled: bool,

    /// Sort the final values.
    pub sort_enabled: bool,

    /// Sort mode applied when `sort_enabled` is set. An unrecognized mode in
    /// a config file degrades to `off` instead of failing the whole load.
    #[serde(deserialize_with = "lenient_sort_mode")]
    pub sort_mode: SortMode,

    /// Surface recovered parse diagnostics to the host.
    pub show_parse_errors: bool,

    /// Use streaming delivery for CSV extraction.
    pub csv_streaming_enabled: bool,

    /// Safety thresholds for large outputs.
    pub safety: SafetyConfig,

    /// Flush thresholds for streaming delivery.
    pub batch: BatchConfig,
}

impl StringLeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| StringLeError::validation(format!("invalid configuration: {e}")))
    }
}

fn lenient_sort_mode<'de, D>(deserializer: D) -> std::result::Result<SortMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|_| {
        tracing::warn!(mode = %raw, "unknown sort mode in configuration, using off");
        SortMode::Off
    }))
}

/// Thresholds for the safety gate.
///
/// These gate *whether to ask*, not what happens next; obtaining the actual
/// confirmation belongs to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Master switch; disabling skips every prompt and warning.
    pub enabled: bool,

    /// Warn before extracting from documents larger than this many bytes.
    pub file_size_warn_bytes: u64,

    /// Prompt before producing more result lines than this.
    pub large_output_lines_threshold: usize,

    /// Prompt before fanning out into this many output documents or more.
    pub many_documents_threshold: usize,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file_size_warn_bytes: 1_000_000,
            large_output_lines_threshold: 50_000,
            many_documents_threshold: 8,
        }
    }
}

/// Flush thresholds for batched streaming delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Flush once this many values are buffered.
    pub max_items: usize,

    /// Flush once this many milliseconds have passed since the last flush.
    pub max_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_items: 500,
            max_delay_ms: 100,
        }
    }
}

impl BatchConfig {
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

impl From<&BatchConfig> for crate::stream::BatchPolicy {
    fn from(config: &BatchConfig) -> Self {
        Self {
            max_items: config.max_items,
            max_delay: config.max_delay(),
        }
    }
}
