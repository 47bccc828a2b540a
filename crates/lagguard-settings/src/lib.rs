//! Config parsing and per-repository policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{DEFAULT_CHECK_MODE, DEFAULT_EXCLUDE_NEWER_THAN, LagguardConfigV1, RepoConfig};
pub use resolve::{Overrides, PeriodSource, ResolvedConfig, ResolvedRepo};

/// Parse `lagguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LagguardConfigV1> {
    let cfg: LagguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve one policy per enabled repository (global default + per-repo + overrides).
pub fn resolve_config(
    cfg: &LagguardConfigV1,
    overrides: &Overrides,
    repo_ids: &[String],
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides, repo_ids)
}
