//! Per-line whitespace trimming.
use serde::{Deserialize, Serialize};

/// Which side of each line to trim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimMode {
    #[default]
    Both,
    Leading,
    Trailing,
}

/// Trim one line according to `mode`.
pub fn apply_trim_mode(line: &str, mode: TrimMode) -> &str {
    match mode {
        TrimMode::Leading => line.trim_start(),
        TrimMode::Trailing => line.trim_end(),
        TrimMode::Both => line.trim(),
    }
}

/// Trim every line of a document, preserving line structure.
pub fn trim_lines(text: &str, mode: TrimMode) -> String {
    text.split('\n')
        .map(|line| apply_trim_mode(line, mode))
        .collect::<Vec<_>>()
        .join("\n")
}
