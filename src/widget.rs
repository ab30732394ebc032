// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search results widget.
//!
//! One run: decode the location query, rank the index with the configured
//! matcher, then replace the sink's content with a header and at most
//! `result_limit` links. The index is borrowed for the widget's lifetime and
//! never written to; every string the widget emits is freshly derived.
//!
//! ```ignore
//! let index = SearchIndex::load("docs/1.1/searchIndex.js")?;
//! let widget = SearchWidget::new(&index);
//! let mut sink = HtmlSink::new();
//! widget.render(query::from_location(href), &mut sink);
//! ```

use crate::config::{MatchConfig, WidgetConfig};
use crate::query;
use crate::render::{ResultLink, ResultSink};
use crate::search::{FuzzyMatcher, Matcher};
use crate::types::{MatchResult, SearchIndex};

/// Binds an index, a matcher and the widget's configuration.
#[derive(Debug, Clone)]
pub struct SearchWidget<'a, M = FuzzyMatcher> {
    index: &'a SearchIndex,
    matcher: M,
    matching: MatchConfig,
    config: WidgetConfig,
}

impl<'a> SearchWidget<'a, FuzzyMatcher> {
    /// Widget over `index` with the stock matcher and default settings.
    pub fn new(index: &'a SearchIndex) -> Self {
        Self::with_matcher(index, FuzzyMatcher)
    }
}

impl<'a, M: Matcher> SearchWidget<'a, M> {
    /// Widget over `index` with a custom ranking engine.
    pub fn with_matcher(index: &'a SearchIndex, matcher: M) -> Self {
        Self {
            index,
            matcher,
            matching: MatchConfig::default(),
            config: WidgetConfig::default(),
        }
    }

    pub fn match_config(mut self, matching: MatchConfig) -> Self {
        self.matching = matching;
        self
    }

    pub fn widget_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Ranked matches for an already decoded query, unlimited.
    pub fn results(&self, query: &str) -> Vec<MatchResult<'a>> {
        self.matcher
            .search(query, self.index.entries(), &self.matching)
    }

    /// Links the widget would render for a decoded query.
    pub fn links(&self, query: &str) -> Vec<ResultLink> {
        self.results(query)
            .iter()
            .take(self.config.result_limit)
            .map(|m| ResultLink::from_url(&m.entry.url, self.config.suffix_len))
            .collect()
    }

    /// Run the widget for a raw location query (the part after `?`).
    ///
    /// An undecodable query is treated as empty. Returns the number of links
    /// rendered.
    pub fn render<S: ResultSink + ?Sized>(&self, raw_query: &str, sink: &mut S) -> usize {
        let query = query::decode_or_empty(raw_query);
        let links = self.links(&query);

        sink.clear();
        sink.append_header(&query);
        for link in &links {
            tracing::debug!(href = %link.href, "search result");
            sink.append_result(&link.href, &link.title);
        }
        links.len()
    }
}
