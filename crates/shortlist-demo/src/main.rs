//! links - browse a list of named links with filtering and load-more
//! pagination.
//!
//! This is the worked-example front-end for the `shortlist` crate: all list
//! semantics live in the library; this binary only reflects the filter text,
//! enumerates the visible links, and offers the load-more affordance.
//!
//! With no options it starts an interactive session. `--filter`, `--more`,
//! and `--json` switch to one-shot mode: the given events are applied
//! headlessly and the final snapshot is printed once.

mod data;
mod repl;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shortlist::{Dataset, ListSession, DEFAULT_PAGE_SIZE};

/// Browse a list of named links with filtering and load-more pagination.
#[derive(Parser)]
#[command(name = "links")]
#[command(version)]
#[command(about = "Browse a list of named links with filtering and load-more pagination")]
struct Cli {
    /// Load links from a JSON file instead of the built-in list
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Items revealed initially and per load-more
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE, value_name = "N")]
    page_size: usize,

    /// Apply a filter and print one snapshot instead of running interactively
    #[arg(short, long, value_name = "TEXT")]
    filter: Option<String>,

    /// Number of load-more activations to apply (one-shot mode)
    #[arg(short, long, default_value_t = 0, value_name = "N")]
    more: usize,

    /// Print the snapshot as JSON (implies one-shot mode)
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(cli.page_size > 0, "--page-size must be at least 1");

    let links = match &cli.data {
        Some(path) => data::load(path)
            .with_context(|| format!("failed to load links from {}", path.display()))?,
        None => data::default_links().to_vec(),
    };
    let dataset = Dataset::new(links).context("link data is malformed")?;
    let mut session = ListSession::with_page_size(dataset, cli.page_size);

    let one_shot = cli.filter.is_some() || cli.more > 0 || cli.json;
    if let Some(text) = cli.filter {
        session.filter_input(text);
    }
    for _ in 0..cli.more {
        session.load_more();
    }

    if one_shot {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&session.viewport())?);
        } else {
            repl::render(&session.viewport());
        }
        return Ok(());
    }

    repl::run(&mut session)
}
