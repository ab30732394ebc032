// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a documentation search.
//!
//! An index is an ordered list of entries, each a page URL plus the page text.
//! The index is produced by the docs generator and read wholesale; nothing in
//! this crate mutates it after construction. Matches borrow entries rather than
//! cloning them, so a `MatchResult` can never outlive the index it came from.
//!
//! # Invariants
//!
//! - **SearchIndex**: read-only once built. `entries()` hands out a shared slice.
//! - **MatchResult**: `position < index.len()` and `entry` is `&index.entries()[position]`.
//! - **FieldMatch**: every `(start, end)` pair is inclusive with `start <= end`,
//!   measured in chars of the folded field text.

use serde::{Deserialize, Serialize};

// =============================================================================
// INDEX TYPES
// =============================================================================

/// One searchable page.
///
/// Field names follow the generator's JSON (`{"Url": .., "Body": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Relative path of the page source, e.g. `guides/getting-started.md`.
    #[serde(rename = "Url")]
    pub url: String,
    /// Plain text content of the page.
    #[serde(rename = "Body")]
    pub body: String,
}

impl SearchEntry {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Text of the given field.
    #[inline]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::Body => &self.body,
        }
    }
}

/// The ordered set of entries a search runs against.
///
/// Construct once, then share by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<SearchEntry>> for SearchIndex {
    fn from(entries: Vec<SearchEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<SearchEntry> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = SearchEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// A searchable field of [`SearchEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Url,
    Body,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Url => "Url",
            Field::Body => "Body",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MATCH OUTPUT
// =============================================================================

/// Where a query hit inside one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: Field,
    /// Field score before weighting (0.0 = perfect, 1.0 = no match).
    pub score: f64,
    /// Inclusive char ranges of matched runs in the folded field text.
    pub indices: Vec<(usize, usize)>,
}

/// A ranked hit. Borrows the entry it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub entry: &'a SearchEntry,
    /// Position of `entry` in the index.
    pub position: usize,
    /// Combined weighted score (0.0 = perfect, 1.0 = no match).
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

impl MatchResult<'_> {
    /// Relevance on a 0..=1 scale where higher is better.
    #[inline]
    pub fn relevance(&self) -> f64 {
        1.0 - self.score
    }
}
