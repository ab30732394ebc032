//! Ranking tests: field weights, stability, typo tolerance.

use super::common::{sample_index, uniform_index};
use docsift::testing::make_index;
use docsift::{FuzzyMatcher, MatchConfig, MatchResult, Matcher};

// ============================================================================
// FIELD WEIGHTING
// ============================================================================

#[test]
fn test_body_hit_outranks_url_hit() {
    let index = make_index(&[
        ("a/ledger.md", "nothing relevant here"),
        ("b/other.md", "ledger"),
    ]);
    let results = FuzzyMatcher.search("ledger", index.entries(), &MatchConfig::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.url, "b/other.md");
    assert_eq!(results[1].entry.url, "a/ledger.md");
}

#[test]
fn test_hit_in_both_fields_beats_body_only() {
    let index = make_index(&[("/p/q001.md", "ledger"), ("/p/ledger.md", "ledger")]);
    let results = FuzzyMatcher.search("ledger", index.entries(), &MatchConfig::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].position, 1, "url + body hit should rank first");
    assert_eq!(results[0].matches.len(), 2);
    assert_eq!(results[1].matches.len(), 1);
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_equal_scores_keep_index_order() {
    let index = uniform_index(12, "ledger");
    let results = FuzzyMatcher.search("ledger", index.entries(), &MatchConfig::default());

    let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
    assert_eq!(positions, (0..12).collect::<Vec<_>>());
    assert!(results.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn test_scores_ascending() {
    let index = sample_index();
    for query in ["keys", "transactions", "asset", "error code", "blok"] {
        let results = FuzzyMatcher.search(query, index.entries(), &MatchConfig::default());
        for pair in results.windows(2) {
            assert!(
                pair[0].score <= pair[1].score,
                "'{}' not sorted: {} > {}",
                query,
                pair[0].score,
                pair[1].score
            );
        }
    }
}

#[test]
fn test_scores_within_threshold_range() {
    let index = sample_index();
    let config = MatchConfig::default();
    for result in FuzzyMatcher.search("accounts", index.entries(), &config) {
        assert!(result.score > 0.0 && result.score <= 1.0);
        for m in &result.matches {
            assert!(m.score <= 1.0);
        }
    }
}

// ============================================================================
// FUZZINESS
// ============================================================================

#[test]
fn test_typo_still_finds_page() {
    let index = sample_index();
    let results = FuzzyMatcher.search("transacton", index.entries(), &MatchConfig::default());
    assert!(results
        .iter()
        .any(|r| r.entry.url == "/docs/1.1/core/transactions.md"));
}

#[test]
fn test_distinct_term_ranks_its_page_first() {
    let index = sample_index();
    let results = FuzzyMatcher.search("consensus", index.entries(), &MatchConfig::default());
    assert_eq!(
        results[0].entry.url,
        "/docs/1.1/learn-more/blockchain-operators.md"
    );
}

#[test]
fn test_zero_threshold_is_exact_only() {
    let index = uniform_index(3, "ledger");
    let config = MatchConfig {
        threshold: 0.0,
        ..MatchConfig::default()
    };
    assert_eq!(FuzzyMatcher.search("ledger", index.entries(), &config).len(), 3);
    assert!(FuzzyMatcher.search("ledgr", index.entries(), &config).is_empty());
}

#[test]
fn test_case_folding() {
    let index = sample_index();
    let config = MatchConfig::default();
    let lower = FuzzyMatcher.search("keys", index.entries(), &config);
    let upper = FuzzyMatcher.search("KEYS", index.entries(), &config);

    fn key(r: &MatchResult<'_>) -> (usize, f64) {
        (r.position, r.score)
    }
    assert_eq!(
        lower.iter().map(key).collect::<Vec<_>>(),
        upper.iter().map(key).collect::<Vec<_>>()
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ignore_diacritics() {
    let index = make_index(&[("/p/q000.md", "café menu")]);
    let strict = MatchConfig {
        threshold: 0.0,
        ..MatchConfig::default()
    };
    assert!(FuzzyMatcher.search("cafe", index.entries(), &strict).is_empty());

    let folded = MatchConfig {
        ignore_diacritics: true,
        ..strict
    };
    assert_eq!(FuzzyMatcher.search("cafe", index.entries(), &folded).len(), 1);
}
