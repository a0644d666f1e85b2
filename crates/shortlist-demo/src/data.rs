//! Link data sources: the embedded default list and JSON file loading.

use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use shortlist::Link;

static DEFAULT_DATA: &str = include_str!("../data/links.json");

static DEFAULT_LINKS: Lazy<Vec<Link>> =
    Lazy::new(|| serde_json::from_str(DEFAULT_DATA).expect("embedded link data is valid JSON"));

/// Returns the built-in link list, embedded at compile time.
pub fn default_links() -> &'static [Link] {
    &DEFAULT_LINKS
}

/// Loads links from a JSON file: an array of `{ "name", "uri" }` objects.
pub fn load(path: &Path) -> anyhow::Result<Vec<Link>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let links = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(links)
}
