//! Post-processing: order-preserving dedupe and deterministic sort.
//!
//! Both operations are pure: the input slice is never mutated and the result
//! is an independent vector.
pub mod collate;
pub mod trim;

use crate::types::SortMode;
use ahash::AHashSet;
use collate::{compare_base, compare_sensitive, utf16_len};

/// Remove duplicates while preserving first-seen order.
pub fn dedupe<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    let mut seen = AHashSet::with_capacity(strings.len());
    strings
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| seen.insert(s.to_string()))
        .map(str::to_string)
        .collect()
}

/// Sort strings deterministically per mode.
///
/// `Off` returns an order-preserving copy. The alpha modes use
/// base-sensitivity comparison (case and diacritics ignored); the length
/// modes compare UTF-16 code-unit length first and break ties with an
/// ascending full-strength comparison regardless of the primary direction.
/// The sort is stable, so values that compare equal keep their input order.
pub fn sort_strings<S: AsRef<str>>(strings: &[S], mode: SortMode) -> Vec<String> {
    let mut copy: Vec<String> = strings.iter().map(|s| s.as_ref().to_string()).collect();
    match mode {
        SortMode::Off => {}
        SortMode::AlphaAsc => copy.sort_by(|a, b| compare_base(a, b)),
        SortMode::AlphaDesc => copy.sort_by(|a, b| compare_base(b, a)),
        SortMode::LengthAsc => copy.sort_by(|a, b| {
            utf16_len(a)
                .cmp(&utf16_len(b))
                .then_with(|| compare_sensitive(a, b))
        }),
        SortMode::LengthDesc => copy.sort_by(|a, b| {
            utf16_len(b)
                .cmp(&utf16_len(a))
                .then_with(|| compare_sensitive(a, b))
        }),
    }
    copy
}

/// Count values that span more than one line.
///
/// Multi-line values render differently across hosts (a newline-joined sink
/// cannot round-trip them), so the pipeline surfaces the count for hosts
/// that want to warn.
pub fn count_multiline<S: AsRef<str>>(strings: &[S]) -> usize {
    strings
        .iter()
        .filter(|s| {
            let s = s.as_ref();
            s.contains('\n') || s.contains('\r')
        })
        .count()
}
