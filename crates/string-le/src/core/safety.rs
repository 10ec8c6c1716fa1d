//! Safety gate: pure decision logic for large outputs.
//!
//! These functions decide whether the host should ask for confirmation
//! before producing very large or very numerous outputs. They compare counts
//! against configured thresholds and nothing else; how the confirmation is
//! obtained (modal dialog, terminal prompt) is the host's concern.
use crate::core::config::SafetyConfig;

/// Choices for a single large output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LargeOutputAction {
    /// Produce and present the full result.
    Open,
    /// Hand the result to the host's copy sink without presenting it.
    CopyOnly,
    /// Abandon the extraction.
    Cancel,
}

/// Choices for a multi-document fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanOutAction {
    Proceed,
    Cancel,
}

/// Should the host confirm before presenting `item_count` result lines?
pub fn large_output_needs_prompt(item_count: usize, config: &SafetyConfig) -> bool {
    config.enabled && item_count > config.large_output_lines_threshold
}

/// Should the host confirm before opening `document_count` fan-out outputs
/// with roughly `estimated_total_lines` lines across them?
pub fn fan_out_needs_prompt(
    document_count: usize,
    estimated_total_lines: usize,
    config: &SafetyConfig,
) -> bool {
    config.enabled
        && (document_count >= config.many_documents_threshold
            || estimated_total_lines > config.large_output_lines_threshold)
}

/// Should the host warn before extracting from a document of `size_bytes`?
pub fn file_size_needs_warning(size_bytes: u64, config: &SafetyConfig) -> bool {
    config.enabled && size_bytes > config.file_size_warn_bytes
}
