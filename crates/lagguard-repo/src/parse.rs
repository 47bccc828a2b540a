use anyhow::Context;
use lagguard_types::{FeedDocument, SCHEMA_FEED_V1};
use std::collections::BTreeSet;

/// Parse a single feed document.
pub fn parse_feed_json(text: &str) -> anyhow::Result<FeedDocument> {
    let doc: FeedDocument = serde_json::from_str(text).context("invalid feed JSON")?;
    if let Some(schema) = doc.schema.as_deref() {
        if schema != SCHEMA_FEED_V1 {
            anyhow::bail!("unsupported feed schema: {schema} (expected {SCHEMA_FEED_V1})");
        }
    }
    Ok(doc)
}

/// Concatenate feeds in order. Repository ids must be unique across all of them.
pub fn merge_feeds(docs: Vec<FeedDocument>) -> anyhow::Result<FeedDocument> {
    let mut seen = BTreeSet::new();
    let mut merged = FeedDocument {
        schema: Some(SCHEMA_FEED_V1.to_string()),
        repos: Vec::new(),
    };

    for doc in docs {
        for repo in doc.repos {
            if !seen.insert(repo.id.clone()) {
                anyhow::bail!("duplicate repository id in feed: {}", repo.id);
            }
            merged.repos.push(repo);
        }
    }

    Ok(merged)
}
