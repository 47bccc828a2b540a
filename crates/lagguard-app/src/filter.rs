//! The `filter` use case: resolve policies, partition the feed, and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use lagguard_settings::{Overrides, ResolvedConfig};
use lagguard_types::{FeedDocument, LagguardReport, RepositoryFeed, Verdict};
use time::OffsetDateTime;

use crate::report::build_report;

/// Input for the filter use case.
#[derive(Clone, Debug)]
pub struct FilterInput<'a> {
    /// Feed file or directory of feed files.
    pub feed_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Epoch seconds to evaluate at; the wall clock when `None`.
    pub now: Option<i64>,
}

/// Output from the filter use case.
#[derive(Clone, Debug)]
pub struct FilterOutput {
    pub report: LagguardReport,
    /// The input feed with excluded packages removed.
    pub kept_feed: FeedDocument,
    pub resolved_config: ResolvedConfig,
}

pub fn run_filter(input: FilterInput<'_>) -> anyhow::Result<FilterOutput> {
    let started_at = OffsetDateTime::now_utc();
    let now = input.now.unwrap_or_else(|| started_at.unix_timestamp());

    let cfg = crate::policies::parse_config(input.config_text)?;

    let feed = lagguard_repo::load_feed(input.feed_path)
        .with_context(|| format!("load feed {}", input.feed_path))?;

    // Policy errors surface here, before any package is looked at.
    let resolved =
        lagguard_settings::resolve_config(&cfg, &input.overrides, &feed.enabled_repo_ids())
            .context("resolve config")?;

    let domain_report = lagguard_domain::evaluate(&feed, &resolved.policies(), now);

    for outcome in &domain_report.repos {
        for ex in &outcome.excluded {
            tracing::debug!(
                " --> {} from {} excluded (too new)",
                ex.package.nevra(),
                outcome.repo_id
            );
        }
    }
    tracing::info!(
        repos = domain_report.counts.repos_scanned,
        scanned = domain_report.counts.packages_scanned,
        excluded = domain_report.counts.packages_excluded,
        "filter complete"
    );

    let kept_feed = FeedDocument {
        schema: feed.schema.clone(),
        repos: feed
            .repos
            .iter()
            .zip(&domain_report.repos)
            .map(|(repo, outcome)| RepositoryFeed {
                id: repo.id.clone(),
                enabled: repo.enabled,
                packages: outcome.kept.clone(),
            })
            .collect(),
    };

    let finished_at = OffsetDateTime::now_utc();
    let report = build_report(&domain_report, now, started_at, finished_at);

    Ok(FilterOutput {
        report,
        kept_feed,
        resolved_config: resolved,
    })
}

/// Exit code for a finished run: 0, or 2 when exclusions should fail the run.
pub fn verdict_exit_code(verdict: Verdict, fail_on_excluded: bool) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn if fail_on_excluded => 2,
        Verdict::Warn => 0,
    }
}
