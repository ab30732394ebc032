//! Edge cases: empty and oversized queries, unicode, markup in queries.

use super::common::{hrefs, render_list, sample_index};
use docsift::fuzzy::Bitap;
use docsift::testing::make_index;
use docsift::{FuzzyMatcher, HtmlSink, MatchConfig, Matcher, SearchIndex, SearchWidget};

// ============================================================================
// EMPTY INPUTS
// ============================================================================

#[test]
fn test_empty_query_renders_header_only() {
    let list = render_list(&sample_index(), "");
    assert_eq!(list.query.as_deref(), Some(""));
    assert!(list.is_empty());
}

#[test]
fn test_whitespace_query_matches_nothing() {
    let index = sample_index();
    let config = MatchConfig::default();
    assert!(FuzzyMatcher.search("   ", index.entries(), &config).is_empty());
    assert!(render_list(&index, "%20%20").is_empty());
}

#[test]
fn test_empty_index() {
    let index = SearchIndex::default();
    let list = render_list(&index, "keys");
    assert_eq!(list.header_text().as_deref(), Some("Search results for keys"));
    assert!(list.is_empty());
}

#[test]
fn test_empty_body_entry_can_match_on_url() {
    let index = make_index(&[("/docs/1.1/core/keys.md", "")]);
    let list = render_list(&index, "keys");
    assert_eq!(hrefs(&list), vec!["/docs/1.1/core/keys"]);
}

// ============================================================================
// LONG PATTERNS
// ============================================================================

#[test]
fn test_query_past_max_pattern_length() {
    let index = sample_index();
    let query = "install the server create an access token and issue assets";
    assert!(query.chars().count() > 32);

    let results = FuzzyMatcher.search(query, index.entries(), &MatchConfig::default());
    assert!(results
        .iter()
        .any(|r| r.entry.url == "/docs/1.1/core/getting-started.md"));
}

#[test]
fn test_query_past_state_word() {
    let index = make_index(&[("/p/q000.md", "short body")]);
    let query = "x".repeat(100);
    let results = FuzzyMatcher.search(&query, index.entries(), &MatchConfig::default());
    assert!(results.is_empty());
}

#[test]
fn test_full_width_pattern() {
    let config = MatchConfig {
        max_pattern_length: 64,
        ..MatchConfig::default()
    };
    let pattern = "a".repeat(64);
    let text = "a".repeat(70);
    let m = Bitap::new(&pattern).search(&text, &config);
    assert!(m.is_match);
}

// ============================================================================
// UNICODE AND MARKUP
// ============================================================================

#[test]
fn test_multibyte_text() {
    let index = make_index(&[
        ("/docs/1.1/intl/tōkyō.md", "naïve résumé parsing for తెలుగు text"),
        ("/docs/1.1/intl/plain.md", "ascii only"),
    ]);
    let list = render_list(&index, "r%C3%A9sum%C3%A9");
    assert_eq!(list.query.as_deref(), Some("résumé"));
    assert_eq!(list.links[0].href, "/docs/1.1/intl/tōkyō");
    assert_eq!(list.links[0].title, "tōkyō");
}

#[test]
fn test_markup_in_query_is_escaped() {
    let index = sample_index();
    let widget = SearchWidget::new(&index);
    let mut sink = HtmlSink::new();
    widget.render("%3Cscript%3Ealert(1)%3C%2Fscript%3E", &mut sink);

    assert!(!sink.as_str().contains("<script>"));
    assert!(sink.as_str().contains("&lt;script&gt;"));
}

#[test]
fn test_plus_is_literal() {
    let list = render_list(&sample_index(), "c++");
    assert_eq!(list.query.as_deref(), Some("c++"));
}
