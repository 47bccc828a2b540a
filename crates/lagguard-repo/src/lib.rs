//! Feed adapters: locate feed files and parse them into [`FeedDocument`]s.

#![forbid(unsafe_code)]

mod discover;
mod parse;

pub use discover::discover_feed_files;
pub use parse::{merge_feeds, parse_feed_json};

use anyhow::Context;
use camino::Utf8Path;
use lagguard_types::FeedDocument;

/// Load a feed from a file, or from every `*.json` file below a directory.
///
/// Directory feeds are merged in sorted path order; duplicate repository ids are an error.
pub fn load_feed(path: &Utf8Path) -> anyhow::Result<FeedDocument> {
    let files = discover_feed_files(path)?;

    let mut docs = Vec::with_capacity(files.len());
    for file in &files {
        let text = std::fs::read_to_string(file).with_context(|| format!("read {}", file))?;
        let doc = parse_feed_json(&text).with_context(|| format!("parse {}", file))?;
        tracing::debug!(
            file = %file,
            repos = doc.repos.len(),
            packages = doc.package_count(),
            "loaded feed file"
        );
        docs.push(doc);
    }

    merge_feeds(docs)
}
