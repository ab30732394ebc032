//! End-to-end widget runs against the sample docs site.

use super::common::{
    hrefs, make_entry, render_list, repeated_index, sample_index, uniform_index,
};
use docsift::query::from_location;
use docsift::{HtmlSink, ResultList, SearchIndex, SearchWidget, Settings, WidgetConfig};

#[test]
fn test_location_to_markup() {
    let index = sample_index();
    let widget = SearchWidget::new(&index);
    let mut sink = HtmlSink::new();
    let count = widget.render(
        from_location("https://docs.example.com/docs/1.1/search?consensus"),
        &mut sink,
    );

    assert!(count >= 1);
    let html = sink.container("search-results");
    assert!(html.starts_with(concat!(
        r#"<div id="search-results">"#,
        r#"<div class="search-result">Search results for <b>consensus</b></div>"#
    )));
    assert!(html.contains(
        r#"<a href="/docs/1.1/learn-more/blockchain-operators" target="_blank" rel="noopener">blockchain operators</a>"#
    ));
    assert!(html.ends_with("</div>"));
}

#[test]
fn test_at_most_ten_links() {
    let index = repeated_index(25, "ledger entries");
    let list = render_list(&index, "ledger");
    assert_eq!(list.len(), 10);
}

#[test]
fn test_fewer_matches_than_limit() {
    let index = uniform_index(3, "ledger");
    let list = render_list(&index, "ledger");
    assert_eq!(
        hrefs(&list),
        vec!["/p/q000", "/p/q001", "/p/q002"],
        "all matches render, in index order on ties"
    );
}

#[test]
fn test_unmatched_query_renders_header_only() {
    let list = render_list(&sample_index(), "qqqqqqqq");
    assert_eq!(list.query.as_deref(), Some("qqqqqqqq"));
    assert!(list.links.is_empty(), "no page resembles the query");
}

#[test]
fn test_titles_from_last_segment() {
    let index = sample_index();
    let list = render_list(&index, "unspent%20outputs");
    let link = list
        .links
        .iter()
        .find(|l| l.href == "/docs/1.1/core/unspent-outputs")
        .expect("unspent outputs page renders");
    assert_eq!(link.title, "unspent outputs");
}

#[test]
fn test_links_follow_ranking() {
    let index = sample_index();
    let widget = SearchWidget::new(&index);
    let results = widget.results("transactions");

    let mut list = ResultList::default();
    widget.render("transactions", &mut list);

    let expected: Vec<String> = results
        .iter()
        .take(10)
        .map(|r| r.entry.url.trim_end_matches(".md").to_string())
        .collect();
    let got: Vec<String> = list.links.iter().map(|l| l.href.clone()).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_malformed_query_falls_back_to_empty() {
    let index = sample_index();
    for raw in ["%", "%zz", "abc%4", "%FF%FE"] {
        let list = render_list(&index, raw);
        assert_eq!(list.query.as_deref(), Some(""), "raw query {:?}", raw);
        assert!(list.is_empty());
    }
}

#[test]
fn test_settings_json_drives_widget() {
    let settings = Settings::from_json(
        r#"{"match": {"threshold": 0.3}, "widget": {"resultLimit": 2, "containerId": "hits"}}"#,
    )
    .unwrap();
    assert_eq!(settings.widget.result_limit, 2);

    let index = repeated_index(5, "ledger");
    let widget = SearchWidget::new(&index)
        .match_config(settings.matching.clone())
        .widget_config(settings.widget.clone());
    let mut sink = HtmlSink::new();
    assert_eq!(widget.render("ledger", &mut sink), 2);
    assert!(sink
        .container(&settings.widget.container_id)
        .starts_with(r#"<div id="hits">"#));
}

#[test]
fn test_custom_suffix_length() {
    let index = SearchIndex::new(vec![make_entry("core", "keys", "keys")]);
    let widget = SearchWidget::new(&index).widget_config(WidgetConfig {
        suffix_len: 0,
        ..WidgetConfig::default()
    });
    let mut list = ResultList::default();
    widget.render("keys", &mut list);
    assert_eq!(list.links[0].href, "/docs/1.1/core/keys.md");
    assert_eq!(list.links[0].title, "keys.md");
}
