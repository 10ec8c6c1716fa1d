//! Locale-style string collation.
//!
//! Two comparison strengths are provided, matching the two places the sort
//! stage needs them:
//!
//! - [`compare_base`]: base sensitivity. Case and diacritic differences are
//!   ignored; only base-letter identity matters. Strings that differ only in
//!   case or accents compare equal, and the stable sort keeps their input
//!   order.
//! - [`compare_sensitive`]: full strength. Base letters decide first, then
//!   diacritics (unaccented before accented), then case (lowercase before
//!   uppercase), so `"a" < "A" < "b"` and `"e" < "é"`.
//!
//! Keys are built by NFD-decomposing, dropping combining marks, and
//! lowercasing, which approximates an English-locale collator without
//! carrying full collation tables.
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case- and accent-folded comparison key.
pub fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Base-sensitivity comparison: case and diacritics do not affect order.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b))
}

/// Full-strength comparison: base letters, then accents, then case.
pub fn compare_sensitive(a: &str, b: &str) -> Ordering {
    compare_base(a, b)
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_order(a, b))
}

/// Lowercased NFD form: keeps combining marks so accented forms sort after
/// their bare base letter (the bare form is a prefix of the accented one).
fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Tie-break for strings equal up to case: lowercase sorts first.
fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        return match (ca.is_uppercase(), cb.is_uppercase()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => ca.cmp(&cb),
        };
    }
    a.len().cmp(&b.len())
}

/// Length in UTF-16 code units, the unit the length sort modes compare by.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
