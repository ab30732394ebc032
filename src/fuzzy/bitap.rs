// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitap approximate matching with location-aware scoring.
//!
//! The pattern is compiled once into an alphabet of bitmasks (bit `len - i - 1`
//! set for every position `i` a char occurs at). Each pass `k` of the search
//! extends the previous pass's state to allow `k` errors, scanning the text
//! right to left so that a set high bit marks where a match *starts*.
//!
//! # Scoring
//!
//! ```text
//! score(errors, loc) = errors / pattern_len + |loc - expected| / distance
//! ```
//!
//! 0.0 is an exact hit at the expected location; anything above the threshold
//! is rejected. A binary search per pass bounds how far from `expected` a match
//! with `k` errors can still land under the threshold, which keeps each pass
//! to the window that can actually improve the best score.
//!
//! Positions and indices are in chars, not bytes.

use crate::config::MatchConfig;
use std::collections::HashMap;

/// Reported in place of 0.0 for a perfect bitap hit, so weighting never
/// multiplies a field down to nothing.
pub const MIN_SCORE: f64 = 0.001;

/// Score given to a substring hit when the pattern is too long for bitap.
pub const LONG_PATTERN_SCORE: f64 = 0.5;

/// Outcome of matching one pattern against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    /// 0.0 = exact, 1.0 = no match.
    pub score: f64,
    /// Inclusive char ranges of matched runs.
    pub indices: Vec<(usize, usize)>,
}

impl BitapMatch {
    fn miss() -> Self {
        Self {
            is_match: false,
            score: 1.0,
            indices: Vec::new(),
        }
    }
}

/// A compiled search pattern.
#[derive(Debug, Clone)]
pub struct Bitap {
    pattern: Vec<char>,
    alphabet: HashMap<char, u64>,
}

impl Bitap {
    /// Compile a pattern. The caller folds case beforehand.
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let len = pattern.len();
        let mut alphabet: HashMap<char, u64> = HashMap::new();
        // Patterns past 64 chars never reach the bit-parallel path
        if len <= 64 {
            for (i, &c) in pattern.iter().enumerate() {
                *alphabet.entry(c).or_insert(0) |= 1u64 << (len - i - 1);
            }
        }
        Self { pattern, alphabet }
    }

    /// Match this pattern against `text`.
    pub fn search(&self, text: &str, config: &MatchConfig) -> BitapMatch {
        if self.pattern.is_empty() {
            return BitapMatch::miss();
        }

        let text: Vec<char> = text.chars().collect();

        if self.pattern == text {
            return BitapMatch {
                is_match: true,
                score: 0.0,
                indices: vec![(0, text.len() - 1)],
            };
        }

        if self.pattern.len() > config.max_pattern_length.min(64) {
            return self.search_long(&text);
        }

        self.search_bitap(&text, config)
    }

    fn search_bitap(&self, text: &[char], config: &MatchConfig) -> BitapMatch {
        let pattern = &self.pattern;
        let pattern_len = pattern.len();
        let text_len = text.len();
        let expected = config.location;
        let distance = config.distance;
        let score = |errors: usize, location: usize| {
            bitap_score(errors, pattern_len, location, expected, distance)
        };

        let mut threshold = config.threshold;
        let mut match_mask = vec![false; text_len];

        // Exact occurrences tighten the threshold before any fuzzy pass
        if let Some(loc) = find_from(text, pattern, expected) {
            threshold = threshold.min(score(0, loc));
            if let Some(loc) = rfind_upto(text, pattern, expected.saturating_add(pattern_len)) {
                threshold = threshold.min(score(0, loc));
            }
        }

        let mut best_location: Option<usize> = None;
        let mut best_score = 1.0;
        let mut last_bits: Vec<u64> = Vec::new();
        let mut bin_max = pattern_len + text_len;
        let mask = 1u64 << (pattern_len - 1);

        for errors in 0..pattern_len {
            // How far from `expected` can a match with this many errors land?
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if score(errors, expected.saturating_add(bin_mid)) <= threshold {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            bin_max = bin_mid;

            let mut start = expected.saturating_add(1).saturating_sub(bin_mid).max(1);
            let finish = expected.saturating_add(bin_mid).min(text_len) + pattern_len;

            let mut bits = vec![0u64; finish + 2];
            bits[finish + 1] = (1u64 << errors) - 1;

            let prev = |k: usize| last_bits.get(k).copied().unwrap_or(0);

            let mut j = finish;
            while j >= start {
                let current = j - 1;
                let char_match = text
                    .get(current)
                    .and_then(|c| self.alphabet.get(c))
                    .copied()
                    .unwrap_or(0);
                if char_match != 0 {
                    match_mask[current] = true;
                }

                bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
                if errors != 0 {
                    bits[j] |= (((prev(j + 1) | prev(j)) << 1) | 1) | prev(j + 1);
                }

                if bits[j] & mask != 0 {
                    let candidate = score(errors, current);
                    if candidate <= threshold {
                        threshold = candidate;
                        best_location = Some(current);
                        best_score = candidate;
                        if current <= expected {
                            break;
                        }
                        // Past the expected location: only a closer match can win now
                        start = expected.saturating_mul(2).saturating_sub(current).max(1);
                    }
                }
                j -= 1;
            }

            // One more error can't beat what we have
            if score(errors + 1, expected) > threshold {
                break;
            }
            last_bits = bits;
        }

        if best_location.is_none() {
            return BitapMatch::miss();
        }

        BitapMatch {
            is_match: true,
            score: if best_score == 0.0 { MIN_SCORE } else { best_score },
            indices: matched_indices(&match_mask, config.min_match_char_length),
        }
    }

    /// Substring search for patterns too long for the state word.
    ///
    /// Each space-separated word of the pattern is an alternative; the
    /// leftmost hit wins.
    fn search_long(&self, text: &[char]) -> BitapMatch {
        let pattern: String = self.pattern.iter().collect();
        let mut best: Option<(usize, usize)> = None;
        for word in pattern.split(' ').filter(|w| !w.is_empty()) {
            let word: Vec<char> = word.chars().collect();
            if let Some(at) = find_from(text, &word, 0) {
                if best.map_or(true, |(start, _)| at < start) {
                    best = Some((at, at + word.len() - 1));
                }
            }
        }
        match best {
            Some(range) => BitapMatch {
                is_match: true,
                score: LONG_PATTERN_SCORE,
                indices: vec![range],
            },
            None => BitapMatch::miss(),
        }
    }
}

/// Accuracy plus proximity penalty. With zero distance, any drift is fatal.
pub fn bitap_score(
    errors: usize,
    pattern_len: usize,
    location: usize,
    expected: usize,
    distance: usize,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = location.abs_diff(expected);
    if distance == 0 {
        return if proximity == 0 { accuracy } else { 1.0 };
    }
    accuracy + proximity as f64 / distance as f64
}

/// Collapse a per-char match mask into runs of at least `min_len`.
pub fn matched_indices(mask: &[bool], min_len: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, &hit) in mask.iter().enumerate() {
        match (hit, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_len {
                    runs.push((s, i - 1));
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        if mask.len() - s >= min_len {
            runs.push((s, mask.len() - 1));
        }
    }
    runs
}

/// First occurrence of `needle` at or after `from`.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    (from..=last_start).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Last occurrence of `needle` starting at or before `upto`.
fn rfind_upto(haystack: &[char], needle: &[char], upto: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = (haystack.len() - needle.len()).min(upto);
    (0..=last_start)
        .rev()
        .find(|&i| haystack[i..i + needle.len()] == *needle)
}
