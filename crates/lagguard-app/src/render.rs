//! Render and serialization helpers used by the CLI.

use anyhow::Context;
use camino::Utf8Path;
use lagguard_types::{FeedDocument, LagguardReport};

pub fn render_markdown(report: &LagguardReport) -> String {
    lagguard_render::render_markdown(&crate::report::to_renderable(report))
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &LagguardReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

pub fn serialize_feed(feed: &FeedDocument) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(feed).context("serialize feed")?;
    json.push('\n');
    Ok(json)
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("write {}", path))
}
