//! Fallback extraction for unrecognized formats.
//!
//! Scans raw text for quoted substrings: a `"` or `'` opens a run that ends
//! at the next unescaped quote of the same kind. The surrounding quotes are
//! stripped and the remainder is trimmed. Never fails.
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#)
        .expect("quoted-string regex pattern is valid and should compile")
});

/// Extract quoted substrings from arbitrary text.
pub fn extract_fallback(text: &str) -> Result<Vec<String>> {
    let strings = QUOTED
        .find_iter(text)
        .filter_map(|m| {
            let s = m.as_str();
            // Quote delimiters are single-byte; strip one from each end.
            let inner = s[1..s.len() - 1].trim();
            (!inner.is_empty()).then(|| inner.to_string())
        })
        .collect();
    Ok(strings)
}
