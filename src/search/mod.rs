// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked fuzzy search over index entries.
//!
//! The widget only sees the [`Matcher`] trait: a query, a slice of entries and
//! a config in, a ranked list of borrowed results out. [`FuzzyMatcher`] is the
//! stock engine, built on the Bitap scorer.
//!
//! # Per-field scoring
//!
//! For each configured field, the folded query is scored against the folded
//! field text. With `tokenize`, every space-separated query token is also
//! scored against every whitespace-separated word of the field, a miss
//! counting as 1.0. The field score averages the two:
//!
//! ```text
//! field = (full + mean(token × word scores)) / 2
//! ```
//!
//! A field matches if the full query or any single token matched.
//!
//! # Combining fields
//!
//! Weights are normalized to sum to one and applied as exponents over the
//! matched fields only:
//!
//! ```text
//! score = Π max(field_score, 0.001) ^ (weight / Σ weights)
//! ```
//!
//! Scores sit in (0, 1], so a larger exponent pulls a field's contribution
//! further down. The heaviest field dominates, and hitting several fields
//! beats hitting one.

use crate::config::MatchConfig;
use crate::fuzzy::{Bitap, BitapMatch, MIN_SCORE};
use crate::types::{FieldMatch, MatchResult, SearchEntry};
use crate::utils::fold;

/// A ranking engine the widget can delegate to.
pub trait Matcher {
    /// Rank `entries` against `query`, best first when `config.should_sort`.
    fn search<'a>(
        &self,
        query: &str,
        entries: &'a [SearchEntry],
        config: &MatchConfig,
    ) -> Vec<MatchResult<'a>>;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn search<'a>(
        &self,
        query: &str,
        entries: &'a [SearchEntry],
        config: &MatchConfig,
    ) -> Vec<MatchResult<'a>> {
        (**self).search(query, entries, config)
    }
}

/// Bitap-backed matcher with weighted fields and tokenized scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

/// Query compiled once per search.
struct Searchers {
    full: Bitap,
    tokens: Vec<Bitap>,
}

impl Searchers {
    fn new(pattern: &str, tokenize: bool) -> Self {
        let tokens = if tokenize {
            pattern
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(Bitap::new)
                .collect()
        } else {
            Vec::new()
        };
        Self {
            full: Bitap::new(pattern),
            tokens,
        }
    }

    /// Score one field's folded text. `None` when nothing matched.
    fn analyze(&self, text: &str, config: &MatchConfig) -> Option<BitapMatch> {
        let main = self.full.search(text, config);

        let mut token_hit = false;
        let mut average: Option<f64> = None;
        if !self.tokens.is_empty() {
            let words: Vec<&str> = text.split_whitespace().collect();
            let mut sum = 0.0;
            let mut count = 0usize;
            for token in &self.tokens {
                for word in &words {
                    let m = token.search(word, config);
                    if m.is_match {
                        token_hit = true;
                        sum += m.score;
                    } else {
                        sum += 1.0;
                    }
                    count += 1;
                }
            }
            if count > 0 {
                average = Some(sum / count as f64);
            }
        }

        if !(main.is_match || token_hit) {
            return None;
        }

        let score = match average {
            Some(avg) => (main.score + avg) / 2.0,
            None => main.score,
        };
        Some(BitapMatch {
            is_match: true,
            score,
            indices: main.indices,
        })
    }
}

impl Matcher for FuzzyMatcher {
    fn search<'a>(
        &self,
        query: &str,
        entries: &'a [SearchEntry],
        config: &MatchConfig,
    ) -> Vec<MatchResult<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let pattern = fold(query, config);
        let searchers = Searchers::new(&pattern, config.tokenize);
        let total_weight = config.total_weight();

        let mut results: Vec<MatchResult<'a>> = Vec::new();
        for (position, entry) in entries.iter().enumerate() {
            let mut matches = Vec::new();
            let mut score = 1.0;

            for fw in &config.fields {
                let text = fold(entry.field(fw.field), config);
                let Some(m) = searchers.analyze(&text, config) else {
                    continue;
                };
                score *= m.score.max(MIN_SCORE).powf(fw.weight / total_weight);
                matches.push(FieldMatch {
                    field: fw.field,
                    score: m.score,
                    indices: if config.include_matches {
                        m.indices
                    } else {
                        Vec::new()
                    },
                });
            }

            if matches.is_empty() {
                continue;
            }
            results.push(MatchResult {
                entry,
                position,
                score,
                matches,
            });
        }

        if config.should_sort {
            // Stable: equal scores keep index order
            results.sort_by(|a, b| a.score.total_cmp(&b.score));
        }

        tracing::debug!(
            query,
            candidates = entries.len(),
            hits = results.len(),
            "fuzzy search complete"
        );
        results
    }
}
