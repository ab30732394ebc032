// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output targets for the search widget.
//!
//! The widget never touches a page directly. It drives a [`ResultSink`]:
//! clear, one header, then one call per result link in ranking order. What a
//! sink does with those calls is its own business: build markup, record a
//! list for JSON, print to a terminal, or forward to JS callbacks.

mod html;

pub use html::HtmlSink;

use crate::utils::strip_suffix_chars;
use serde::{Deserialize, Serialize};

/// Text shown before the query in the results header.
pub const HEADER_PREFIX: &str = "Search results for ";

/// Rendering target for one widget run.
pub trait ResultSink {
    /// Drop anything rendered by a previous run.
    fn clear(&mut self);

    /// Show the header for `query` (already decoded, not escaped).
    fn append_header(&mut self, query: &str);

    /// Add one result link. `label` is the visible text.
    fn append_result(&mut self, href: &str, label: &str);
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append_header(&mut self, query: &str) {
        (**self).append_header(query);
    }

    fn append_result(&mut self, href: &str, label: &str) {
        (**self).append_result(href, label);
    }
}

/// A link derived from an entry URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLink {
    pub href: String,
    pub title: String,
}

impl ResultLink {
    /// Strip the `suffix_len`-char source extension to get the href, then
    /// title it after the last path segment with hyphens read as spaces.
    ///
    /// `guides/getting-started.md` → href `guides/getting-started`,
    /// title `getting started`.
    pub fn from_url(url: &str, suffix_len: usize) -> Self {
        let href = strip_suffix_chars(url, suffix_len);
        let last_segment = href.rsplit('/').next().unwrap_or(href);
        Self {
            href: href.to_string(),
            title: last_segment.replace('-', " "),
        }
    }
}

/// A recorded rendering: the header query plus the links, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultList {
    /// Decoded query the header was rendered for.
    pub query: Option<String>,
    pub links: Vec<ResultLink>,
}

impl ResultList {
    /// Full header text, if a header was rendered.
    pub fn header_text(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(|q| format!("{}{}", HEADER_PREFIX, q))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl ResultSink for ResultList {
    fn clear(&mut self) {
        self.query = None;
        self.links.clear();
    }

    fn append_header(&mut self, query: &str) {
        self.query = Some(query.to_string());
    }

    fn append_result(&mut self, href: &str, label: &str) {
        self.links.push(ResultLink {
            href: href.to_string(),
            title: label.to_string(),
        });
    }
}
