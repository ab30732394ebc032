//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::MatchConfig;

/// Fold text for matching: lowercase unless the config is case sensitive, and
/// strip diacritics when asked to.
///
/// Unlike a search-index normalizer this never collapses whitespace, so match
/// offsets stay aligned with word boundaries in the original text.
///
/// - "Café" → "café" (default)
/// - "Café" → "cafe" (with `ignore_diacritics`)
pub fn fold(value: &str, config: &MatchConfig) -> String {
    let stripped = strip_diacritics(value, config.ignore_diacritics);
    if config.case_sensitive {
        stripped
    } else {
        stripped.to_lowercase()
    }
}

/// NFD normalize and drop combining marks.
#[cfg(feature = "unicode-normalization")]
fn strip_diacritics(value: &str, enabled: bool) -> String {
    if !enabled {
        return value.to_string();
    }
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without `unicode-normalization` (lean WASM builds) text passes through.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritics(value: &str, _enabled: bool) -> String {
    value.to_string()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Drop the last `n` chars of `value`. Shorter strings become empty.
pub fn strip_suffix_chars(value: &str, n: usize) -> &str {
    if n == 0 {
        return value;
    }
    match value.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &value[..idx],
        None => "",
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
