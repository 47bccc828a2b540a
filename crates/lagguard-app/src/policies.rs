//! The `policies` use case: show which policy each repository would be filtered with.

use anyhow::Context;
use camino::Utf8Path;
use lagguard_settings::{LagguardConfigV1, Overrides, ResolvedConfig};

#[derive(Clone, Debug)]
pub struct PoliciesOutput {
    pub resolved: ResolvedConfig,
    /// Repositories marked disabled in the feed itself.
    pub feed_disabled: Vec<String>,
}

/// Empty text means "no config file"; defaults apply.
pub(crate) fn parse_config(config_text: &str) -> anyhow::Result<LagguardConfigV1> {
    if config_text.trim().is_empty() {
        Ok(LagguardConfigV1::default())
    } else {
        lagguard_settings::parse_config_toml(config_text).context("parse config")
    }
}

pub fn run_policies(
    feed_path: &Utf8Path,
    config_text: &str,
    overrides: &Overrides,
) -> anyhow::Result<PoliciesOutput> {
    let cfg = parse_config(config_text)?;
    let feed = lagguard_repo::load_feed(feed_path)
        .with_context(|| format!("load feed {}", feed_path))?;

    let resolved = lagguard_settings::resolve_config(&cfg, overrides, &feed.enabled_repo_ids())
        .context("resolve config")?;

    let feed_disabled = feed
        .repos
        .iter()
        .filter(|r| !r.enabled)
        .map(|r| r.id.clone())
        .collect();

    Ok(PoliciesOutput {
        resolved,
        feed_disabled,
    })
}

/// One line per repository: `<id>\t<days>\t<mode>\t<source>`.
pub fn format_policies(output: &PoliciesOutput) -> String {
    let mut out = String::new();
    for repo in &output.resolved.repos {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}{}\n",
            repo.repo_id,
            repo.policy.exclude_newer_than_days(),
            repo.policy.check_mode(),
            repo.period_source.as_str(),
            if repo.clamped { " (clamped)" } else { "" }
        ));
    }
    for id in output.resolved.disabled.iter().chain(&output.feed_disabled) {
        out.push_str(&format!("{id}\t-\t-\tdisabled\n"));
    }
    out
}
