//! Split, canonicalize, dedup-sort and join.
//!
//! # Invariants
//! - `normalize(normalize(s)) == normalize(s)` for every `s`.
//! - Dedup is exact string equality; order is ordinal (byte) order, so
//!   `"JOHN"` sorts before `"John"`.
//! - Lines are split on `\n` only; a trailing `\r` is whitespace and trimmed.

use crate::model::name_list::{is_name_whitespace, NameList, LINE_SEPARATOR};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// Whitespace class spelled out to match `is_name_whitespace`.
static FORBIDDEN_CHARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^a-zA-Z'\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
    )
    .expect("valid sanitize regex")
});

/// Normalizes raw multi-line text into canonical name-list text.
///
/// `""` yields `""` (one empty line joined to itself).
pub fn normalize(raw: &str) -> String {
    normalize_lines(raw).to_text()
}

/// Normalizes raw text and returns the structured list.
pub fn normalize_lines(raw: &str) -> NameList {
    let unique: BTreeSet<String> = raw.split(LINE_SEPARATOR).map(canonicalize_line).collect();
    NameList::from_canonical(unique.into_iter().collect())
}

/// Sanitizes, trims and capitalizes one line.
///
/// Only the first character is touched by capitalization; `"mcDonald"`
/// becomes `"McDonald"`.
pub fn canonicalize_line(line: &str) -> String {
    let sanitized = sanitize_line(line);
    capitalize_first(sanitized.trim_matches(is_name_whitespace))
}

/// Drops every character that is not an ASCII letter, whitespace or `'`.
pub fn sanitize_line(line: &str) -> String {
    FORBIDDEN_CHARS_RE.replace_all(line, "").into_owned()
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
