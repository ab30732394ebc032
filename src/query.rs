// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query extraction and percent-decoding.
//!
//! The search page is reached as `search.html?<query>`: the whole query
//! component is the search string, not a `key=value` list. Decoding matches
//! `decodeURIComponent`, so `+` stays a literal plus and a stray `%` is an
//! error rather than passing through.

use percent_encoding::percent_decode_str;
use std::fmt;

/// Query component of a location: after the first `?`, before any `#`.
///
/// Returns `""` when there is no `?`.
pub fn from_location(href: &str) -> &str {
    let Some((_, rest)) = href.split_once('?') else {
        return "";
    };
    match rest.split_once('#') {
        Some((query, _)) => query,
        None => rest,
    }
}

/// Percent-decode a raw query string.
pub fn decode(raw: &str) -> Result<String, QueryError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() >= i + 3
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(QueryError::MalformedEscape { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| QueryError::InvalidUtf8)
}

/// Decode, falling back to the empty query when the input is malformed.
pub fn decode_or_empty(raw: &str) -> String {
    match decode(raw) {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!(raw, error = %e, "undecodable search query, using empty query");
            String::new()
        }
    }
}

/// Why a query failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `%` not followed by two hex digits, at this byte offset.
    MalformedEscape { offset: usize },
    /// Escapes decoded to bytes that are not UTF-8.
    InvalidUtf8,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MalformedEscape { offset } => {
                write!(f, "malformed percent escape at byte {}", offset)
            }
            QueryError::InvalidUtf8 => write!(f, "percent escapes decode to invalid UTF-8"),
        }
    }
}

impl std::error::Error for QueryError {}
