//! Pipeline orchestration: extraction, post-processing, and CSV fan-out.
//!
//! The pipeline composes the leaf components in a fixed order: extract, then
//! dedupe (if enabled), then sort (if enabled). Fan-out runs that same
//! pipeline once per target column, producing one independent output per
//! column; the engine itself only ever selects zero, one, or all columns in
//! a single pass.
use crate::core::config::StringLeConfig;
use crate::extraction::{extract, split_csv_line};
use crate::text::{dedupe, sort_strings};
use crate::types::ExtractionOptions;

/// Apply the configured post-processing stages to extracted values.
///
/// Dedupe runs before sort, so sorting never reorders duplicate-elimination.
pub fn post_process(strings: Vec<String>, config: &StringLeConfig) -> Vec<String> {
    let strings = if config.dedupe_enabled {
        dedupe(&strings)
    } else {
        strings
    };
    if config.sort_enabled {
        sort_strings(&strings, config.sort_mode)
    } else {
        strings
    }
}

/// Extract and post-process in one call.
pub fn run_extraction(
    text: &str,
    format_hint: &str,
    options: &ExtractionOptions,
    config: &StringLeConfig,
) -> Vec<String> {
    let strings = extract(text, format_hint, options);
    tracing::debug!(count = strings.len(), format_hint, "extraction complete");
    post_process(strings, config)
}

/// One column's output from a fan-out extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnExtraction {
    pub column: usize,
    pub strings: Vec<String>,
}

/// Resolve the target column indexes for a CSV fan-out request.
///
/// An explicit index list is used as given. With `select_all_columns` the
/// column count comes from the first non-empty line of the document. Returns
/// an empty list when the request is not a fan-out (zero or one target).
pub fn fan_out_targets(text: &str, options: &ExtractionOptions) -> Vec<usize> {
    if options.select_all_columns {
        let first_line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        let column_count = split_csv_line(first_line).len();
        return (0..column_count).collect();
    }
    match &options.csv_column_indexes {
        Some(indexes) if indexes.len() > 1 => indexes.clone(),
        _ => Vec::new(),
    }
}

/// Estimate the total output lines a fan-out would produce.
///
/// Upper bound based on the document's physical line count; quoted multi-line
/// cells make it an overestimate, which is the safe direction for a prompt
/// threshold.
pub fn estimate_fan_out_lines(text: &str, has_header: bool, target_count: usize) -> usize {
    let total_lines = text.lines().count();
    let rows = total_lines.saturating_sub(usize::from(has_header));
    rows * target_count
}

/// Run a bulk fan-out: one post-processed output per target column.
///
/// Columns that produce no values still appear in the result so callers can
/// keep column association; hosts typically skip presenting empty ones.
pub fn fan_out_columns(
    text: &str,
    options: &ExtractionOptions,
    config: &StringLeConfig,
) -> Vec<ColumnExtraction> {
    fan_out_targets(text, options)
        .into_iter()
        .map(|column| {
            let per_column = ExtractionOptions {
                csv_column_index: Some(column),
                csv_has_header: options.csv_has_header,
                csv_column_indexes: None,
                select_all_columns: false,
            };
            let strings = extract(text, "csv", &per_column);
            ColumnExtraction {
                column,
                strings: post_process(strings, config),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortMode;

    fn config(dedupe: bool, sort: Option<SortMode>) -> StringLeConfig {
        StringLeConfig {
            dedupe_enabled: dedupe,
            sort_enabled: sort.is_some(),
            sort_mode: sort.unwrap_or(SortMode::Off),
            ..StringLeConfig::default()
        }
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_post_process_dedupe_then_sort() {
        let out = post_process(
            owned(&["b", "a", "b", "aa"]),
            &config(true, Some(SortMode::AlphaAsc)),
        );
        assert_eq!(out, owned(&["a", "aa", "b"]));
    }

    #[test]
    fn test_post_process_passthrough() {
        let out = post_process(owned(&["b", "a", "b"]), &config(false, None));
        assert_eq!(out, owned(&["b", "a", "b"]));
    }

    #[test]
    fn test_run_extraction_end_to_end() {
        let out = run_extraction(
            r#"{"a":"z","b":"y","c":"z"}"#,
            "json",
            &ExtractionOptions::default(),
            &config(true, Some(SortMode::AlphaAsc)),
        );
        assert_eq!(out, owned(&["y", "z"]));
    }

    #[test]
    fn test_fan_out_targets_all_columns() {
        let options = ExtractionOptions {
            select_all_columns: true,
            ..ExtractionOptions::default()
        };
        assert_eq!(fan_out_targets("a,b,c\n1,2,3\n", &options), vec![0, 1, 2]);
    }

    #[test]
    fn test_fan_out_targets_skips_leading_blank_lines() {
        let options = ExtractionOptions {
            select_all_columns: true,
            ..ExtractionOptions::default()
        };
        assert_eq!(fan_out_targets("\n\na,b\n", &options), vec![0, 1]);
    }

    #[test]
    fn test_fan_out_targets_explicit_indexes() {
        let options = ExtractionOptions {
            csv_column_indexes: Some(vec![2, 0]),
            ..ExtractionOptions::default()
        };
        assert_eq!(fan_out_targets("a,b,c\n", &options), vec![2, 0]);
    }

    #[test]
    fn test_fan_out_targets_single_index_is_not_fan_out() {
        let options = ExtractionOptions {
            csv_column_indexes: Some(vec![1]),
            ..ExtractionOptions::default()
        };
        assert!(fan_out_targets("a,b\n", &options).is_empty());
        assert!(fan_out_targets("a,b\n", &ExtractionOptions::default()).is_empty());
    }

    #[test]
    fn test_estimate_fan_out_lines() {
        assert_eq!(estimate_fan_out_lines("h\na\nb\n", true, 2), 4);
        assert_eq!(estimate_fan_out_lines("h\na\nb\n", false, 2), 6);
        assert_eq!(estimate_fan_out_lines("", true, 3), 0);
    }

    #[test]
    fn test_fan_out_columns_independent_outputs() {
        let options = ExtractionOptions {
            select_all_columns: true,
            csv_has_header: true,
            ..ExtractionOptions::default()
        };
        let text = "name,age\nalice,30\nbob,40\n";
        let columns = fan_out_columns(text, &options, &config(false, None));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].column, 0);
        assert_eq!(columns[0].strings, owned(&["alice", "bob"]));
        assert_eq!(columns[1].strings, owned(&["30", "40"]));
    }

    #[test]
    fn test_fan_out_columns_keeps_empty_columns() {
        let options = ExtractionOptions {
            csv_column_indexes: Some(vec![0, 5]),
            ..ExtractionOptions::default()
        };
        let columns = fan_out_columns("a,b\nc,d\n", &options, &config(false, None));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].column, 5);
        assert!(columns[1].strings.is_empty());
    }
}
