use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_EXCLUDE_NEWER_THAN: i64 = 7;
pub const DEFAULT_CHECK_MODE: &str = "file";

/// `lagguard.toml` schema v1.
///
/// Integers are signed on purpose: a negative period must reach validation and be reported,
/// not fail as a type error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LagguardConfigV1 {
    /// Optional schema string for tooling (`lagguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Global default: days a package must age before it is offered (default 7).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_newer_than: Option<i64>,

    /// `file` (default), `build`, `newest`, or `oldest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_mode: Option<String>,

    /// Map of repository id -> overrides.
    #[serde(default)]
    pub repos: BTreeMap<String, RepoConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RepoConfig {
    /// Set to `false` to never filter this repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_newer_than: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_mode: Option<String>,
}
