//! Plugging a different ranking engine into the widget.

use super::common::{hrefs, sample_index};
use docsift::{MatchConfig, MatchResult, Matcher, ResultList, SearchEntry, SearchWidget};

/// Exact substring matcher: earlier hit in the body ranks first.
struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn search<'a>(
        &self,
        query: &str,
        entries: &'a [SearchEntry],
        _config: &MatchConfig,
    ) -> Vec<MatchResult<'a>> {
        let needle = query.to_lowercase();
        let mut results: Vec<MatchResult<'a>> = entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let at = entry.body.to_lowercase().find(&needle)?;
                Some(MatchResult {
                    entry,
                    position,
                    score: at as f64 / (entry.body.len() as f64 + 1.0),
                    matches: Vec::new(),
                })
            })
            .collect();
        results.sort_by(|a, b| a.score.total_cmp(&b.score));
        results
    }
}

#[test]
fn test_widget_uses_injected_matcher() {
    let index = sample_index();
    let widget = SearchWidget::with_matcher(&index, SubstringMatcher);
    let mut list = ResultList::default();
    widget.render("unspent", &mut list);

    assert_eq!(
        hrefs(&list),
        vec![
            "/docs/1.1/core/unspent-outputs",
            "/docs/1.1/reference/api-objects"
        ]
    );
}

#[test]
fn test_matcher_by_reference() {
    let index = sample_index();
    let matcher = SubstringMatcher;
    let widget = SearchWidget::with_matcher(&index, &matcher);
    assert!(widget.links("zzz").is_empty());
    assert_eq!(widget.links("block").len(), 1);
}
