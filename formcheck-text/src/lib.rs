//! Text primitives for formcheck
//!
//! Small, allocation-light helpers the format validators build on:
//! whitespace stripping, digit extraction and substring counting.
//!
//! # Examples
//!
//! ```
//! use formcheck_text::{count_occurrences, numbers_from_string, remove_whitespace};
//!
//! assert_eq!(remove_whitespace(" a b\tc\n"), "abc");
//! assert_eq!(numbers_from_string("(555) 010-9999"), "5550109999");
//! assert_eq!(count_occurrences("a@b@c", "@"), 2);
//! ```

/// Remove every whitespace character from a string.
///
/// Covers spaces, tabs, line feeds and carriage returns as well as the
/// other Unicode whitespace code points.
pub fn remove_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Extract the ASCII decimal digits of a string, in their original order.
pub fn numbers_from_string(source: &str) -> String {
    source.chars().filter(char::is_ascii_digit).collect()
}

/// Count the ASCII decimal digits of a string without allocating.
pub fn digit_count(source: &str) -> usize {
    source.bytes().filter(u8::is_ascii_digit).count()
}

/// Count non-overlapping occurrences of `search` in `source`.
///
/// Returns `0` for an empty `search`.
pub fn count_occurrences(source: &str, search: &str) -> usize {
    if search.is_empty() {
        return 0;
    }
    source.matches(search).count()
}
