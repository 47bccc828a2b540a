//! Report assembly and conversion to renderable form.

use anyhow::Context;
use lagguard_domain::report::{DomainReport, saturating_count};
use lagguard_render::{RenderableExclusion, RenderableRepo, RenderableReport, RenderableVerdict};
use lagguard_types::{
    ExcludedPackage, LagguardReport, PolicySnapshot, ReportSummary, RepoResult, SCHEMA_REPORT_V1,
    ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn build_report(
    domain: &DomainReport,
    now: i64,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> LagguardReport {
    let repos = domain
        .repos
        .iter()
        .map(|o| RepoResult {
            repo_id: o.repo_id.clone(),
            filtered: o.is_filtered(),
            policy: o.policy.map(|p| PolicySnapshot {
                exclude_newer_than_days: p.exclude_newer_than_days(),
                check_mode: p.check_mode().as_str().to_string(),
            }),
            cutoff: o.cutoff,
            kept: saturating_count(o.kept.len()),
            excluded: o
                .excluded
                .iter()
                .map(|ex| ExcludedPackage {
                    package: ex.package.clone(),
                    selected_time: ex.selected_time,
                    reason: ids::REASON_TOO_NEW.to_string(),
                })
                .collect(),
        })
        .collect();

    LagguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        now,
        verdict: domain.verdict,
        summary: ReportSummary {
            repos_scanned: domain.counts.repos_scanned,
            repos_filtered: domain.counts.repos_filtered,
            packages_scanned: domain.counts.packages_scanned,
            packages_kept: domain.counts.packages_kept,
            packages_excluded: domain.counts.packages_excluded,
        },
        repos,
    }
}

/// Parse a previously written report, checking its schema id.
pub fn parse_report_json(text: &str) -> anyhow::Result<LagguardReport> {
    let report: LagguardReport = serde_json::from_str(text).context("parse report JSON")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unsupported report schema: {} (expected {SCHEMA_REPORT_V1})",
            report.schema
        );
    }
    Ok(report)
}

pub fn to_renderable(report: &LagguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
        },
        now: report.now,
        packages_scanned: report.summary.packages_scanned,
        packages_excluded: report.summary.packages_excluded,
        repos: report
            .repos
            .iter()
            .map(|r| RenderableRepo {
                repo_id: r.repo_id.clone(),
                policy: r
                    .policy
                    .as_ref()
                    .map(|p| (p.exclude_newer_than_days, p.check_mode.clone())),
                cutoff: r.cutoff,
                kept: r.kept,
                excluded: r
                    .excluded
                    .iter()
                    .map(|ex| RenderableExclusion {
                        package: ex.package.nevra(),
                        selected_time: ex.selected_time,
                    })
                    .collect(),
            })
            .collect(),
    }
}
