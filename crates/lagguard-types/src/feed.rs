use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for feed documents.
pub const SCHEMA_FEED_V1: &str = "lagguard.feed.v1";

/// A candidate package update as published by a repository.
///
/// Timestamps are Unix epoch seconds. `time_file` is when the artifact was
/// published to the repository; `time_build` is when it was built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    pub time_file: i64,
    pub time_build: i64,
}

impl PackageRecord {
    /// `name-version[.arch]`, the way package managers print it.
    pub fn nevra(&self) -> String {
        match &self.arch {
            Some(arch) => format!("{}-{}.{}", self.name, self.version, arch),
            None => format!("{}-{}", self.name, self.version),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepositoryFeed {
    pub id: String,

    /// Disabled repositories are carried through untouched and never filtered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub packages: Vec<PackageRecord>,
}

fn default_enabled() -> bool {
    true
}

/// Top-level feed document (`lagguard.feed.v1`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeedDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub repos: Vec<RepositoryFeed>,
}

impl FeedDocument {
    pub fn enabled_repo_ids(&self) -> Vec<String> {
        self.repos
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn package_count(&self) -> usize {
        self.repos.iter().map(|r| r.packages.len()).sum()
    }
}
