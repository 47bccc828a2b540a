use crate::policy::RepositoryPolicy;
use lagguard_types::{PackageRecord, Verdict};

/// A package held back by the filter, with the timestamp that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exclusion {
    pub package: PackageRecord,
    pub selected_time: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoOutcome {
    pub repo_id: String,
    /// `None` when the repository had no policy and every package passed through.
    pub policy: Option<RepositoryPolicy>,
    pub cutoff: Option<i64>,
    pub kept: Vec<PackageRecord>,
    pub excluded: Vec<Exclusion>,
}

impl RepoOutcome {
    pub fn is_filtered(&self) -> bool {
        self.policy.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub repos_scanned: u32,
    pub repos_filtered: u32,
    pub packages_scanned: u32,
    pub packages_kept: u32,
    pub packages_excluded: u32,
}

/// `len` as a report count, saturating at `u32::MAX`.
pub fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl FilterCounts {
    pub fn from_outcomes(outcomes: &[RepoOutcome]) -> Self {
        let mut counts = FilterCounts::default();
        for o in outcomes {
            counts.repos_scanned = counts.repos_scanned.saturating_add(1);
            if o.is_filtered() {
                counts.repos_filtered = counts.repos_filtered.saturating_add(1);
            }
            counts.packages_kept = counts
                .packages_kept
                .saturating_add(saturating_count(o.kept.len()));
            counts.packages_excluded = counts
                .packages_excluded
                .saturating_add(saturating_count(o.excluded.len()));
        }
        counts.packages_scanned = counts.packages_kept.saturating_add(counts.packages_excluded);
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub repos: Vec<RepoOutcome>,
    pub counts: FilterCounts,
}
