// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a search index from disk.
//!
//! Two formats are accepted:
//!
//! - a JSON array of `{"Url": .., "Body": ..}` objects
//! - the script the docs generator writes for the browser:
//!
//! ```text
//! window.searchIndex = [{"Url":"/docs/1.1/a.md","Body":"..."},{"Url":..},]
//! ```
//!
//! The generator appends a comma after every entry, so the script form
//! tolerates one trailing comma before the closing bracket.

use crate::types::SearchIndex;
use crate::utils::strip_suffix_chars;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Global the generator assigns the index to.
pub const SCRIPT_GLOBAL: &str = "window.searchIndex";

/// Extension every generated entry URL carries.
pub const SOURCE_EXTENSION: &str = ".md";

impl SearchIndex {
    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        serde_json::from_str(json).map_err(IndexError::Json)
    }

    /// Parse the generator's `window.searchIndex = [...]` script.
    pub fn from_script(script: &str) -> Result<Self, IndexError> {
        let body = script_array(script)?;
        Self::from_json(&body)
    }

    /// Parse either format, picked from the first non-blank char.
    pub fn parse(source: &str) -> Result<Self, IndexError> {
        if source.trim_start().starts_with('[') {
            Self::from_json(source)
        } else {
            Self::from_script(source)
        }
    }

    /// Read and parse an index file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::parse(&source)?;
        tracing::debug!(path = %path.display(), entries = index.len(), "loaded search index");
        Ok(index)
    }

    /// Summary numbers for `inspect`.
    pub fn stats(&self, suffix_len: usize) -> IndexStats {
        let mut stats = IndexStats {
            entries: self.len(),
            ..IndexStats::default()
        };
        for entry in self.entries() {
            let body_bytes = entry.body.len();
            stats.body_bytes += body_bytes;
            if stats
                .largest
                .as_ref()
                .map_or(true, |(_, size)| body_bytes > *size)
            {
                stats.largest = Some((entry.url.clone(), body_bytes));
            }
            if !entry.url.ends_with(SOURCE_EXTENSION) {
                stats.unexpected_suffix += 1;
            }
            if entry.body.trim().is_empty() {
                stats.empty_bodies += 1;
            }

            let href = strip_suffix_chars(&entry.url, suffix_len);
            let section = href
                .trim_start_matches('/')
                .split('/')
                .next()
                .filter(|s| !s.is_empty() && *s != href.trim_start_matches('/'))
                .unwrap_or("(root)");
            *stats.sections.entry(section.to_string()).or_insert(0) += 1;
        }
        stats
    }
}

/// Pull the JSON array out of an assignment script.
fn script_array(script: &str) -> Result<String, IndexError> {
    let (lhs, rhs) = script
        .split_once('=')
        .ok_or_else(|| IndexError::Script("missing `=` assignment".to_string()))?;

    let target = lhs
        .trim()
        .trim_start_matches("var ")
        .trim_start_matches("let ")
        .trim_start_matches("const ")
        .trim();
    // `window.searchIndex`, or a plain `searchIndex` binding
    let binding = SCRIPT_GLOBAL.rsplit('.').next().unwrap_or(SCRIPT_GLOBAL);
    if target != SCRIPT_GLOBAL && target != binding {
        return Err(IndexError::Script(format!(
            "unexpected assignment target `{}`",
            target
        )));
    }

    let array = rhs.trim().trim_end_matches(';').trim_end();
    let inner = array
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| IndexError::Script("right-hand side is not an array literal".to_string()))?;

    let inner = inner.trim_end();
    let inner = inner.strip_suffix(',').unwrap_or(inner);
    Ok(format!("[{}]", inner))
}

/// Aggregate facts about an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    pub body_bytes: usize,
    /// Url and body size of the largest entry.
    pub largest: Option<(String, usize)>,
    /// Entries whose URL lacks the `.md` source extension.
    pub unexpected_suffix: usize,
    pub empty_bodies: usize,
    /// Entry count per top-level path segment.
    pub sections: BTreeMap<String, usize>,
}

/// Failure to read or parse an index.
#[derive(Debug)]
pub enum IndexError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Script(String),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            IndexError::Json(e) => write!(f, "invalid index JSON: {}", e),
            IndexError::Script(msg) => write!(f, "invalid index script: {}", msg),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Io { source, .. } => Some(source),
            IndexError::Json(e) => Some(e),
            IndexError::Script(_) => None,
        }
    }
}
