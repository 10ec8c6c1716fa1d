//! string-le - leaf-string extraction from structured text.
//!
//! string-le reduces a structured text document (JSON, YAML, TOML, INI,
//! dotenv, CSV, or arbitrary quoted text) to the ordered sequence of its
//! trimmed, non-empty string leaves, then optionally deduplicates and sorts
//! the result. It is built to sit inside a host application (an editor, a
//! CLI) that supplies the document and presents the output.
//!
//! # Quick Start
//!
//! ```rust
//! use string_le::{ExtractionOptions, extract};
//!
//! let strings = extract(
//!     r#"{"name": "app", "tags": ["fast", "small"]}"#,
//!     "json",
//!     &ExtractionOptions::default(),
//! );
//! assert_eq!(strings, vec!["app", "fast", "small"]);
//! ```
//!
//! # Architecture
//!
//! - **Extraction** (`extraction`): format router plus one parser per format,
//!   all funneling into a shared leaf-string collector
//! - **CSV engine** (`extraction::csv`): pull-based row parser with bulk and
//!   streaming modes, column selection, and cooperative cancellation
//! - **Post-processing** (`text`): order-preserving dedupe and four-mode
//!   deterministic sort with locale-style collation
//! - **Pipeline** (`core`): orchestration, explicit configuration, and the
//!   pure safety-gate decisions for large outputs
//! - **Streaming delivery** (`stream`): batched flushing of streaming output
//!   into host-provided sinks
//!
//! # Error handling
//!
//! The [`extract`] entry point is total: malformed input produces an empty
//! result and a single `tracing::warn!` event. [`try_extract`] returns the
//! structured diagnostic ([`StringLeError::Parse`]) for hosts that surface
//! parse errors themselves.

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extraction;
pub mod stream;
pub mod text;
pub mod types;

pub use error::{Result, StringLeError};
pub use types::{ExtractionOptions, Format, SortMode};

pub use extraction::{CsvRows, CsvStream, extract, extract_csv, split_csv_line, stream_csv, try_extract};

pub use core::config::{BatchConfig, SafetyConfig, StringLeConfig};
pub use core::pipeline::{
    ColumnExtraction, estimate_fan_out_lines, fan_out_columns, fan_out_targets, post_process,
    run_extraction,
};
pub use core::safety::{
    FanOutAction, LargeOutputAction, fan_out_needs_prompt, file_size_needs_warning,
    large_output_needs_prompt,
};

pub use stream::{BatchPolicy, BatchSink, CancellationToken, FnSink, VecSink, drain_csv_to_sink};
#[cfg(feature = "tokio-runtime")]
pub use stream::drain_csv_to_sink_sync;

pub use text::{count_multiline, dedupe, sort_strings};
pub use text::collate::{compare_base, compare_sensitive};
pub use text::trim::{TrimMode, apply_trim_mode, trim_lines};
