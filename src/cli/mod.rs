// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `search` to run a query the way the search page does,
//! `render` to produce the results container for a full page URL, and
//! `inspect` to summarise an index file. Index files are either the
//! generator's `searchIndex.js` or a plain JSON array.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Fuzzy search over a documentation search index",
    version
)]
pub struct Cli {
    /// Log debug output (per-result hrefs, match counts) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and display the rendered results
    Search {
        /// Path to searchIndex.js or a JSON index
        index: PathBuf,

        /// Raw query, percent-decoded like the search page does
        query: String,

        /// Maximum number of results to render
        #[arg(short, long)]
        limit: Option<usize>,

        /// Match threshold, 0.0 (exact) to 1.0 (anything)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// JSON settings file (`{"match": {...}, "widget": {...}}`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Render the results container for a full search page URL
    Render {
        /// Path to searchIndex.js or a JSON index
        index: PathBuf,

        /// Page URL, e.g. "https://docs.example.com/search?ledger"
        #[arg(short = 'u', long)]
        location: String,

        /// JSON settings file (`{"match": {...}, "widget": {...}}`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarise an index file
    Inspect {
        /// Path to searchIndex.js or a JSON index
        index: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal listing
    Text,
    /// Results container markup
    Html,
    /// `{query, links}` JSON
    Json,
}
