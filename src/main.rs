//! `VerseLink` command line: link, cite and convert scripture references.
//!
//! Usage:
//!   verselink link [--mode plain|markdown|html] [--json] [TEXT]
//!   verselink cite [--snippet] [TEXT]
//!   verselink cite-par [--snippet|--title-only] URL
//!   verselink convert [TEXT]
//!
//! TEXT is read from stdin when not given as an argument.

use std::io::Read;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use verselink::config::Settings;
use verselink::fetch::{self, CiteKind, HttpSource};
use verselink::matcher::find_references;
use verselink::reference::Reference;
use verselink::render::{self, DisplayMode};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verselink=info")),
        )
        .init();

    let settings = Settings::load().context("Failed to load settings")?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(command) = args.first() else {
        bail!("Usage: verselink <link|cite|cite-par|convert> [options] [TEXT]");
    };

    match command.as_str() {
        "link" => link(&args[1..], &settings),
        "cite" => cite(&args[1..], &settings).await,
        "cite-par" => cite_par(&args[1..], &settings).await,
        "convert" => convert(&args[1..]),
        other => bail!("Unknown command: {other}"),
    }
}

/// Rewrite references in the input as deep links and print the result.
fn link(args: &[String], settings: &Settings) -> Result<()> {
    let mode = match flag_value(args, "--mode").unwrap_or("markdown") {
        "plain" => DisplayMode::Plain,
        "markdown" => DisplayMode::Markdown,
        "html" => DisplayMode::Html,
        other => bail!("Unknown display mode: {other}"),
    };
    let input = positional_or_stdin(args)?;

    let rendered = render::link_references(&input, mode, settings);
    for matched in &rendered.invalid {
        tracing::warn!("Invalid scripture: {matched}");
    }

    if has_flag(args, "--json") {
        let report = serde_json::json!({
            "result": rendered.result,
            "changed": rendered.changed,
            "invalid": rendered.invalid,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", rendered.result);
    }
    Ok(())
}

/// Fetch and print citation blocks for every reference in the input.
async fn cite(args: &[String], settings: &Settings) -> Result<()> {
    let kind = if has_flag(args, "--snippet") {
        CiteKind::Snippet
    } else {
        CiteKind::Entire
    };
    let input = positional_or_stdin(args)?;

    let references: Vec<Reference> = find_references(&input, settings.lang)
        .iter()
        .filter_map(|m| Reference::from_match(m, settings.lang))
        .filter(Reference::has_valid_passage)
        .collect();
    if references.is_empty() {
        bail!("No valid scripture references in input");
    }

    let source = HttpSource::new();
    let mut failed = 0;
    for (matched, outcome) in
        fetch::cite_references(&source, &references, settings, kind).await
    {
        match outcome {
            Ok(citation) => println!("{}", citation.rendered),
            Err(e) => {
                failed += 1;
                tracing::error!("Citation for {matched} failed: {e}");
            }
        }
    }
    if failed == references.len() {
        bail!("All citation lookups failed");
    }
    Ok(())
}

/// Fetch and print a publication paragraph citation for a WOL url.
async fn cite_par(args: &[String], settings: &Settings) -> Result<()> {
    let kind = if has_flag(args, "--snippet") {
        CiteKind::Snippet
    } else if has_flag(args, "--title-only") {
        CiteKind::TitleOnly
    } else {
        CiteKind::Entire
    };
    let url = positional(args).context("cite-par needs a WOL url")?;

    let source = HttpSource::new();
    let citation = fetch::cite_paragraph(&source, url, settings, kind)
        .await
        .with_context(|| format!("Citation for {url} failed"))?;
    println!("{}", citation.rendered);
    Ok(())
}

/// Rewrite jw.org and WOL urls in the input as JW Library urls.
fn convert(args: &[String]) -> Result<()> {
    let input = positional_or_stdin(args)?;
    let rendered = render::convert_to_library_urls(&input);
    println!("{}", rendered.result);
    Ok(())
}

/// The value following a `--flag`, when present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Whether a bare `--flag` is present.
fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// The first argument that is not a flag or a flag value.
fn positional(args: &[String]) -> Option<&str> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--mode" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        return Some(arg);
    }
    None
}

/// The positional text argument, or the whole of stdin.
fn positional_or_stdin(args: &[String]) -> Result<String> {
    if let Some(text) = positional(args) {
        return Ok(text.to_string());
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
