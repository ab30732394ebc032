// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy documentation search for static doc sites.
//!
//! A docs build writes every page's URL and text into a search index. The
//! search page reads that index, takes the query from its own URL
//! (`search.html?<query>`), ranks the pages with a Bitap fuzzy matcher and
//! renders the best ten as links. This crate is that page's logic, with the
//! index, the ranking engine and the output target all injected.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  index.rs   │──▶│  widget.rs  │──▶│  search/     │──▶│  fuzzy/      │
//! │ (load .js / │   │ (decode,    │   │ (Matcher,    │   │ (Bitap,      │
//! │  .json)     │   │  limit, ...)│   │  weighting)  │   │  scoring)    │
//! └─────────────┘   └─────────────┘   └──────────────┘   └──────────────┘
//!                          │
//!                          ▼
//!                   ┌─────────────┐
//!                   │  render/    │  ResultSink: HTML, ResultList,
//!                   │             │  terminal (CLI), JS callbacks (wasm)
//!                   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{HtmlSink, SearchEntry, SearchIndex, SearchWidget};
//!
//! let index = SearchIndex::new(vec![SearchEntry::new(
//!     "guides/getting-started.md",
//!     "install the sdk and create your first key",
//! )]);
//! let widget = SearchWidget::new(&index);
//! let mut sink = HtmlSink::new();
//! widget.render("install", &mut sink);
//! assert!(sink.as_str().contains(r#"href="guides/getting-started""#));
//! assert!(sink.as_str().contains(">getting started</a>"));
//! ```

// Module declarations
pub mod config;
pub mod fuzzy;
mod index;
pub mod query;
pub mod render;
pub mod search;
pub mod testing;
mod types;
mod utils;
mod widget;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{ConfigError, FieldWeight, MatchConfig, Settings, WidgetConfig};
pub use index::{IndexError, IndexStats, SCRIPT_GLOBAL, SOURCE_EXTENSION};
pub use query::QueryError;
pub use render::{HtmlSink, ResultLink, ResultList, ResultSink, HEADER_PREFIX};
pub use search::{FuzzyMatcher, Matcher};
pub use types::{Field, FieldMatch, MatchResult, SearchEntry, SearchIndex};
pub use utils::{escape_html, fold};
pub use widget::SearchWidget;
