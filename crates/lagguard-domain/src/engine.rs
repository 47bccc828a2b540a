use crate::filter::{filter_packages, select_timestamp};
use crate::policy::RepoPolicies;
use crate::report::{DomainReport, Exclusion, FilterCounts, RepoOutcome};
use lagguard_types::{FeedDocument, Verdict};

/// Apply each repository's policy to its packages.
///
/// Repositories are reported in feed order. A repository with no entry in `policies`
/// (disabled, or never resolved) has every package kept.
pub fn evaluate(feed: &FeedDocument, policies: &RepoPolicies, now: i64) -> DomainReport {
    let mut repos = Vec::with_capacity(feed.repos.len());

    for repo in &feed.repos {
        let policy = if repo.enabled {
            policies.get(&repo.id).copied()
        } else {
            None
        };

        let outcome = match policy {
            Some(policy) => {
                let split = filter_packages(repo.packages.iter(), &policy, now);
                RepoOutcome {
                    repo_id: repo.id.clone(),
                    policy: Some(policy),
                    cutoff: Some(policy.cutoff(now)),
                    kept: split.kept.into_iter().cloned().collect(),
                    excluded: split
                        .excluded
                        .into_iter()
                        .map(|p| Exclusion {
                            selected_time: select_timestamp(p, policy.check_mode()),
                            package: p.clone(),
                        })
                        .collect(),
                }
            }
            None => RepoOutcome {
                repo_id: repo.id.clone(),
                policy: None,
                cutoff: None,
                kept: repo.packages.clone(),
                excluded: Vec::new(),
            },
        };
        repos.push(outcome);
    }

    let counts = FilterCounts::from_outcomes(&repos);
    let verdict = if counts.packages_excluded > 0 {
        Verdict::Warn
    } else {
        Verdict::Pass
    };

    DomainReport {
        verdict,
        repos,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CheckMode;
    use crate::test_support::{feed, pkg, policy, repo};

    const NOW: i64 = 1_000_000;

    #[test]
    fn repos_without_policy_pass_through() {
        let mut disabled = repo("debuginfo", vec![pkg("fresh-debug", NOW, NOW)]);
        disabled.enabled = false;
        let doc = feed(vec![
            repo("base", vec![pkg("old", 10, 10), pkg("fresh", NOW, NOW)]),
            disabled,
            repo("unknown", vec![pkg("fresh-unknown", NOW, NOW)]),
        ]);

        let mut policies = RepoPolicies::new();
        policies.insert("base".to_string(), policy(7, CheckMode::File));
        // a policy for a disabled repo is never applied
        policies.insert("debuginfo".to_string(), policy(7, CheckMode::File));

        let report = evaluate(&doc, &policies, NOW);
        assert_eq!(report.repos.len(), 3);

        let base = &report.repos[0];
        assert!(base.is_filtered());
        assert_eq!(base.cutoff, Some(NOW - 7 * 86_400));
        assert_eq!(base.kept.len(), 1);
        assert_eq!(base.excluded.len(), 1);
        assert_eq!(base.excluded[0].package.name, "fresh");
        assert_eq!(base.excluded[0].selected_time, NOW);

        for passthrough in &report.repos[1..] {
            assert!(!passthrough.is_filtered());
            assert_eq!(passthrough.kept.len(), 1);
            assert!(passthrough.excluded.is_empty());
        }

        assert_eq!(report.verdict, Verdict::Warn);
        assert_eq!(
            report.counts,
            FilterCounts {
                repos_scanned: 3,
                repos_filtered: 1,
                packages_scanned: 4,
                packages_kept: 3,
                packages_excluded: 1,
            }
        );
    }

    #[test]
    fn verdict_passes_when_nothing_excluded() {
        let doc = feed(vec![repo("base", vec![pkg("old", 10, 10)])]);
        let mut policies = RepoPolicies::new();
        policies.insert("base".to_string(), policy(7, CheckMode::Newest));

        let report = evaluate(&doc, &policies, NOW);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.counts.packages_excluded, 0);
    }

    #[test]
    fn selected_time_follows_check_mode() {
        let doc = feed(vec![repo("base", vec![pkg("rebuilt", 100, NOW)])]);
        let mut policies = RepoPolicies::new();
        policies.insert("base".to_string(), policy(1, CheckMode::Newest));

        let report = evaluate(&doc, &policies, NOW);
        assert_eq!(report.repos[0].excluded[0].selected_time, NOW);
    }
}
