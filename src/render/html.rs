// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static HTML rendering of the results container.

use super::{ResultSink, HEADER_PREFIX};
use crate::utils::escape_html;
use std::fmt::Write;

/// Builds the inner markup of the results container.
///
/// Every interpolated string is escaped, so a query like `<script>` shows up
/// as text instead of running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlSink {
    markup: String,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner markup rendered so far.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_inner(self) -> String {
        self.markup
    }

    /// Markup wrapped in the container element, e.g. `<div id="search-results">`.
    pub fn container(&self, container_id: &str) -> String {
        format!(
            r#"<div id="{}">{}</div>"#,
            escape_html(container_id),
            self.markup
        )
    }
}

impl ResultSink for HtmlSink {
    fn clear(&mut self) {
        self.markup.clear();
    }

    fn append_header(&mut self, query: &str) {
        // Writing into a String cannot fail
        let _ = write!(
            self.markup,
            r#"<div class="search-result">{}<b>{}</b></div>"#,
            HEADER_PREFIX,
            escape_html(query)
        );
    }

    fn append_result(&mut self, href: &str, label: &str) {
        let _ = write!(
            self.markup,
            r#"<div class="search-result"><a href="{}" target="_blank" rel="noopener">{}</a></div>"#,
            escape_html(href),
            escape_html(label)
        );
    }
}
