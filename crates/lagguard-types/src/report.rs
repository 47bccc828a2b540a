use crate::PackageRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for lagguard reports.
pub const SCHEMA_REPORT_V1: &str = "lagguard.report.v1";

/// `pass` when nothing was held back, `warn` when at least one package was excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The resolved policy that was applied to a repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicySnapshot {
    pub exclude_newer_than_days: u32,
    pub check_mode: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExcludedPackage {
    #[serde(flatten)]
    pub package: PackageRecord,
    /// The timestamp chosen by the check mode and compared against the cutoff.
    pub selected_time: i64,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepoResult {
    pub repo_id: String,

    /// False when the repository had no policy (disabled) and was passed through.
    pub filtered: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicySnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<i64>,

    pub kept: u32,

    #[serde(default)]
    pub excluded: Vec<ExcludedPackage>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    pub repos_scanned: u32,
    pub repos_filtered: u32,
    pub packages_scanned: u32,
    pub packages_kept: u32,
    pub packages_excluded: u32,
}

/// `lagguard.report.v1` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LagguardReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    /// Epoch seconds the cutoffs were computed from.
    pub now: i64,

    pub verdict: Verdict,
    pub summary: ReportSummary,
    pub repos: Vec<RepoResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn excluded_package_flattens_record() {
        let excluded = ExcludedPackage {
            package: PackageRecord {
                name: "kernel".to_string(),
                version: "6.9.1".to_string(),
                arch: None,
                time_file: 200,
                time_build: 100,
            },
            selected_time: 200,
            reason: crate::ids::REASON_TOO_NEW.to_string(),
        };

        let value = serde_json::to_value(&excluded).expect("serialize");
        assert_eq!(
            value,
            json!({
                "name": "kernel",
                "version": "6.9.1",
                "time_file": 200,
                "time_build": 100,
                "selected_time": 200,
                "reason": "too_new",
            })
        );
    }

    #[test]
    fn report_timestamps_are_rfc3339() {
        let report = LagguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "lagguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2024-05-01 12:00:00 UTC),
            finished_at: datetime!(2024-05-01 12:00:01 UTC),
            now: 1_714_564_800,
            verdict: Verdict::Pass,
            summary: ReportSummary::default(),
            repos: Vec::new(),
        };

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["started_at"], "2024-05-01T12:00:00Z");
        assert_eq!(value["verdict"], "pass");

        let back: LagguardReport = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, report);
    }
}
