//! Shared fixtures for integration tests.

#![allow(dead_code)]

use docsift::testing::make_index;
use docsift::{ResultList, SearchIndex, SearchWidget};
use std::io::Write;
use tempfile::NamedTempFile;

pub use docsift::testing::{make_entry, repeated_index, sample_index};

/// Render `raw_query` with default settings and return what the widget emitted.
pub fn render_list(index: &SearchIndex, raw_query: &str) -> ResultList {
    let mut list = ResultList::default();
    SearchWidget::new(index).render(raw_query, &mut list);
    list
}

/// Hrefs of a rendered list, in order.
pub fn hrefs(list: &ResultList) -> Vec<&str> {
    list.links.iter().map(|l| l.href.as_str()).collect()
}

/// Entries whose URLs share one shape and differ only in digits, which no
/// test query contains. Every entry scores the same for such queries.
pub fn uniform_index(count: usize, body: &str) -> SearchIndex {
    let urls: Vec<String> = (0..count).map(|i| format!("/p/q{:03}.md", i)).collect();
    let pairs: Vec<(&str, &str)> = urls.iter().map(|u| (u.as_str(), body)).collect();
    make_index(&pairs)
}

/// Index source in the generator's script format, trailing comma included.
pub fn generator_script(index: &SearchIndex) -> String {
    let mut script = String::from("window.searchIndex = [");
    for entry in index.entries() {
        let json = serde_json::to_string(entry).expect("entry serializes");
        script.push_str(&json);
        script.push(',');
    }
    script.push(']');
    script
}

/// Write `contents` to a temp file with the given suffix.
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
