// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs for matching and rendering.
//!
//! Defaults are the values the documentation site ships with. Both structs
//! deserialize from partial JSON (missing keys take the default), which is how
//! the CLI `--config` file and the wasm options object are read.

use crate::types::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default relevance cutoff on the 0.0 (exact) .. 1.0 (anything) scale.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Default expected match offset.
pub const DEFAULT_LOCATION: usize = 0;

/// Default distance tolerance. Large enough that position barely matters.
pub const DEFAULT_DISTANCE: usize = 10_000;

/// Default longest pattern run through the bit-parallel scorer.
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 32;

/// Patterns past this length cannot fit the `u64` state words.
pub const MAX_SUPPORTED_PATTERN_LENGTH: usize = 64;

/// Largest accepted `location`. The scorer adds it to text offsets, so it
/// keeps headroom below `usize::MAX` on 32-bit targets too.
pub const MAX_LOCATION: usize = i32::MAX as usize;

/// Default shortest match run reported in match indices.
pub const DEFAULT_MIN_MATCH_CHAR_LENGTH: usize = 3;

/// Default number of rendered results.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Width of the source extension stripped from entry URLs (`.md`).
pub const DEFAULT_SUFFIX_LEN: usize = 3;

/// Identifier of the results container in the host page.
pub const DEFAULT_CONTAINER_ID: &str = "search-results";

/// A field to search and its weight in the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    #[serde(rename = "name")]
    pub field: Field,
    pub weight: f64,
}

impl FieldWeight {
    pub const fn new(field: Field, weight: f64) -> Self {
        Self { field, weight }
    }
}

/// Fuzzy-match configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Sort results best first.
    pub should_sort: bool,
    /// Keep per-field match indices on each result.
    pub include_matches: bool,
    /// Scores above this are rejected.
    pub threshold: f64,
    /// Also score each space-separated query token against each field word.
    pub tokenize: bool,
    /// Where in a field a match is expected to start.
    pub location: usize,
    /// How far from `location` a match may drift before it scores 1.0.
    pub distance: usize,
    /// Longer patterns fall back to plain substring matching.
    pub max_pattern_length: usize,
    /// Runs shorter than this are dropped from match indices.
    pub min_match_char_length: usize,
    pub case_sensitive: bool,
    /// Strip combining marks before matching (needs `unicode-normalization`).
    pub ignore_diacritics: bool,
    #[serde(rename = "keys")]
    pub fields: Vec<FieldWeight>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            should_sort: true,
            include_matches: true,
            threshold: DEFAULT_THRESHOLD,
            tokenize: true,
            location: DEFAULT_LOCATION,
            distance: DEFAULT_DISTANCE,
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            min_match_char_length: DEFAULT_MIN_MATCH_CHAR_LENGTH,
            case_sensitive: false,
            ignore_diacritics: false,
            fields: vec![
                FieldWeight::new(Field::Url, 0.2),
                FieldWeight::new(Field::Body, 0.8),
            ],
        }
    }
}

impl MatchConfig {
    /// Check every knob is inside the range the scorer can handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        if self.max_pattern_length == 0 || self.max_pattern_length > MAX_SUPPORTED_PATTERN_LENGTH {
            return Err(ConfigError::PatternLengthOutOfRange(self.max_pattern_length));
        }
        if self.location > MAX_LOCATION {
            return Err(ConfigError::LocationOutOfRange(self.location));
        }
        if self.min_match_char_length == 0 {
            return Err(ConfigError::ZeroMinMatchLength);
        }
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        for fw in &self.fields {
            if !(fw.weight > 0.0 && fw.weight <= 1.0) {
                return Err(ConfigError::WeightOutOfRange {
                    field: fw.field,
                    weight: fw.weight,
                });
            }
        }
        Ok(())
    }

    /// Sum of field weights, used to normalize them.
    pub fn total_weight(&self) -> f64 {
        self.fields.iter().map(|fw| fw.weight).sum()
    }
}

/// Rendering configuration for the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Most results rendered.
    pub result_limit: usize,
    /// Chars stripped from the end of each entry URL to form the link.
    pub suffix_len: usize,
    /// Results container identifier in the host page.
    pub container_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            suffix_len: DEFAULT_SUFFIX_LEN,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

/// Combined file format for `--config` and wasm options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    #[serde(rename = "match")]
    pub matching: MatchConfig,
    pub widget: WidgetConfig,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.matching.validate()?;
        Ok(settings)
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ThresholdOutOfRange(f64),
    PatternLengthOutOfRange(usize),
    LocationOutOfRange(usize),
    ZeroMinMatchLength,
    NoFields,
    WeightOutOfRange { field: Field, weight: f64 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ThresholdOutOfRange(t) => {
                write!(f, "threshold {} outside 0.0..=1.0", t)
            }
            ConfigError::PatternLengthOutOfRange(n) => {
                write!(
                    f,
                    "max pattern length {} outside 1..={}",
                    n, MAX_SUPPORTED_PATTERN_LENGTH
                )
            }
            ConfigError::LocationOutOfRange(n) => {
                write!(f, "location {} outside 0..={}", n, MAX_LOCATION)
            }
            ConfigError::ZeroMinMatchLength => write!(f, "min match char length must be >= 1"),
            ConfigError::NoFields => write!(f, "at least one searchable field is required"),
            ConfigError::WeightOutOfRange { field, weight } => {
                write!(f, "weight {} for field {} outside (0.0, 1.0]", weight, field)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
