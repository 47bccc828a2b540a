use crate::{RenderableRepo, RenderableReport, RenderableVerdict};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Lagguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Evaluated at: {}\n- Packages: {} scanned / {} excluded\n\n",
        verdict,
        format_epoch(report.now),
        report.packages_scanned,
        report.packages_excluded
    ));

    if report.packages_excluded == 0 {
        out.push_str("No packages excluded.\n");
    }

    for repo in &report.repos {
        render_repo(&mut out, repo);
    }

    out
}

fn render_repo(out: &mut String, repo: &RenderableRepo) {
    out.push_str(&format!("\n## `{}`\n\n", repo.repo_id));

    match (&repo.policy, repo.cutoff) {
        (Some((days, mode)), Some(cutoff)) => {
            out.push_str(&format!(
                "- Policy: exclude newer than {} day(s), check mode `{}`\n- Cutoff: {}\n",
                days,
                mode,
                format_epoch(cutoff)
            ));
        }
        _ => out.push_str("- Not filtered\n"),
    }
    out.push_str(&format!(
        "- Kept: {}, excluded: {}\n",
        repo.kept,
        repo.excluded.len()
    ));

    if repo.excluded.is_empty() {
        return;
    }

    out.push('\n');
    for ex in &repo.excluded {
        out.push_str(&format!(
            "- `{}` (too new: {})\n",
            ex.package,
            format_epoch(ex.selected_time)
        ));
    }
}

/// RFC 3339 when representable, raw epoch seconds otherwise.
fn format_epoch(ts: i64) -> String {
    OffsetDateTime::from_unix_timestamp(ts)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderableExclusion;

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            now: 0,
            packages_scanned: 0,
            packages_excluded: 0,
            repos: Vec::new(),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Evaluated at: 1970-01-01T00:00:00Z"));
        assert!(md.contains("No packages excluded"));
    }

    #[test]
    fn renders_exclusions_per_repo() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Warn,
            now: 1_000_000,
            packages_scanned: 3,
            packages_excluded: 1,
            repos: vec![
                RenderableRepo {
                    repo_id: "updates".to_string(),
                    policy: Some((1, "file".to_string())),
                    cutoff: Some(913_600),
                    kept: 1,
                    excluded: vec![RenderableExclusion {
                        package: "curl-8.6.0-1.x86_64".to_string(),
                        selected_time: 913_601,
                    }],
                },
                RenderableRepo {
                    repo_id: "debuginfo".to_string(),
                    policy: None,
                    cutoff: None,
                    kept: 1,
                    excluded: Vec::new(),
                },
            ],
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **WARN**"));
        assert!(md.contains("3 scanned / 1 excluded"));
        assert!(md.contains("## `updates`"));
        assert!(md.contains("exclude newer than 1 day(s), check mode `file`"));
        assert!(md.contains("Cutoff: 1970-01-11T13:46:40Z"));
        assert!(md.contains("`curl-8.6.0-1.x86_64` (too new: 1970-01-11T13:46:41Z)"));
        assert!(md.contains("## `debuginfo`"));
        assert!(md.contains("- Not filtered"));
        assert!(!md.contains("No packages excluded"));
    }

    #[test]
    fn out_of_range_epoch_falls_back_to_number() {
        assert_eq!(format_epoch(i64::MAX), i64::MAX.to_string());
    }
}
