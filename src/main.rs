// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use docsift::{query, HtmlSink, ResultList, SearchIndex, SearchWidget, Settings};

mod cli;
use cli::display::{
    format_size, pad_right, row, section_bot, section_mid, section_top, themed, truncate_path,
    TerminalSink, BOLD, CYAN, GRAY, GREEN, WHITE, YELLOW,
};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for html/json output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            index,
            query,
            limit,
            threshold,
            config,
            format,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            if let Some(limit) = limit {
                settings.widget.result_limit = limit;
            }
            if let Some(threshold) = threshold {
                settings.matching.threshold = threshold;
            }
            settings.matching.validate()?;
            run_search(&index, &query, &settings, format)
        }
        Commands::Render {
            index,
            location,
            config,
        } => {
            let settings = load_settings(config.as_deref())?;
            let index = load_index(&index)?;
            let widget = widget(&index, &settings);
            let mut sink = HtmlSink::new();
            widget.render(query::from_location(&location), &mut sink);
            println!("{}", sink.container(&settings.widget.container_id));
            Ok(())
        }
        Commands::Inspect { index } => {
            let path = index;
            let index = load_index(&path)?;
            print_inspect(&path, &index);
            Ok(())
        }
    }
}

fn load_index(path: &Path) -> Result<SearchIndex> {
    SearchIndex::load(path).with_context(|| format!("loading index {}", path.display()))
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Settings::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
}

fn widget<'a>(index: &'a SearchIndex, settings: &Settings) -> SearchWidget<'a> {
    SearchWidget::new(index)
        .match_config(settings.matching.clone())
        .widget_config(settings.widget.clone())
}

fn run_search(
    index: &Path,
    raw_query: &str,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    let index = load_index(index)?;
    let widget = widget(&index, settings);

    match format {
        OutputFormat::Text => {
            let mut sink = TerminalSink::default();
            let count = widget.render(raw_query, &mut sink);
            if count == 0 {
                println!("{}", themed(GRAY, &[], "  no matching pages"));
            }
        }
        OutputFormat::Html => {
            let mut sink = HtmlSink::new();
            widget.render(raw_query, &mut sink);
            println!("{}", sink.container(&settings.widget.container_id));
        }
        OutputFormat::Json => {
            let mut list = ResultList::default();
            widget.render(raw_query, &mut list);
            let json = serde_json::to_string_pretty(&list).context("serializing results")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn print_inspect(path: &Path, index: &SearchIndex) {
    let settings = Settings::default();
    let stats = index.stats(settings.widget.suffix_len);

    println!();
    section_top("INDEX");
    row(&format!(
        "  {} {}",
        themed(WHITE, &[], "File:    "),
        themed(YELLOW, &[], &truncate_path(&path.display().to_string(), 58))
    ));
    row(&format!(
        "  {} {}",
        themed(WHITE, &[], "Entries: "),
        themed(GREEN, &[BOLD], &stats.entries.to_string())
    ));
    row(&format!(
        "  {} {}",
        themed(WHITE, &[], "Text:    "),
        themed(GREEN, &[], &format_size(stats.body_bytes))
    ));
    if let Some((url, size)) = &stats.largest {
        row(&format!(
            "  {} {} {}",
            themed(WHITE, &[], "Largest: "),
            themed(YELLOW, &[], &truncate_path(url, 44)),
            themed(GRAY, &[], &format!("({})", format_size(*size)))
        ));
    }

    if !stats.sections.is_empty() {
        section_mid("SECTIONS");
        for (section, count) in &stats.sections {
            row(&format!(
                "  {} {}",
                pad_right(&themed(CYAN, &[], section), 40),
                themed(GREEN, &[], &count.to_string())
            ));
        }
    }

    if stats.unexpected_suffix > 0 || stats.empty_bodies > 0 {
        section_mid("WARNINGS");
        if stats.unexpected_suffix > 0 {
            row(&format!(
                "  {} entries without a .md url; their links lose {} trailing chars",
                themed(YELLOW, &[BOLD], &stats.unexpected_suffix.to_string()),
                settings.widget.suffix_len
            ));
        }
        if stats.empty_bodies > 0 {
            row(&format!(
                "  {} entries with an empty body",
                themed(YELLOW, &[BOLD], &stats.empty_bodies.to_string())
            ));
        }
    }
    section_bot();
    println!();
}
