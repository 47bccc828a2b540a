use crate::model::{DEFAULT_EXCLUDE_NEWER_THAN, LagguardConfigV1};
use anyhow::Context;
use lagguard_domain::policy::MAX_EXCLUDE_DAYS;
use lagguard_domain::{CheckMode, FilterError, RepoPolicies, RepositoryPolicy};

/// Command-line overrides. When set, they apply uniformly to every repository.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub exclude_newer_than: Option<i64>,
    pub check_mode: Option<String>,
}

/// Where a repository's exclusion period came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodSource {
    Default,
    Global,
    Repo,
    CommandLine,
}

impl PeriodSource {
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodSource::Default => "default",
            PeriodSource::Global => "global",
            PeriodSource::Repo => "repo",
            PeriodSource::CommandLine => "command-line",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRepo {
    pub repo_id: String,
    pub policy: RepositoryPolicy,
    pub period_source: PeriodSource,
    /// True when the configured period exceeded the maximum and was clamped.
    pub clamped: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedConfig {
    /// One entry per filtered repository, in the order the ids were supplied.
    pub repos: Vec<ResolvedRepo>,
    /// Supplied ids disabled through `[repos.<id>] enabled = false`.
    pub disabled: Vec<String>,
}

impl ResolvedConfig {
    pub fn policies(&self) -> RepoPolicies {
        self.repos
            .iter()
            .map(|r| (r.repo_id.clone(), r.policy))
            .collect()
    }
}

pub fn resolve_config(
    cfg: &LagguardConfigV1,
    overrides: &Overrides,
    repo_ids: &[String],
) -> anyhow::Result<ResolvedConfig> {
    // Validate every configured value up front, before any package is evaluated.
    // All periods are checked before any check mode.
    validate_period(cfg.exclude_newer_than, "exclude_newer_than")?;
    validate_period(overrides.exclude_newer_than, "--exclude-newer-than")?;
    for (repo_id, rc) in &cfg.repos {
        validate_period(
            rc.exclude_newer_than,
            &format!("repos.{repo_id}.exclude_newer_than"),
        )?;
    }

    let global_mode = parse_mode(cfg.check_mode.as_deref(), "check_mode")?;
    let override_mode = parse_mode(overrides.check_mode.as_deref(), "--check-mode")?;
    for (repo_id, rc) in &cfg.repos {
        parse_mode(rc.check_mode.as_deref(), &format!("repos.{repo_id}.check_mode"))?;
        if !repo_ids.iter().any(|id| id == repo_id) {
            tracing::debug!(repo = %repo_id, "config names a repository that is not in the feed");
        }
    }

    if let Some(days) = overrides.exclude_newer_than {
        tracing::info!("set all repos to exclude_newer_than={days}");
    }

    let mut resolved = ResolvedConfig::default();
    for repo_id in repo_ids {
        let repo_cfg = cfg.repos.get(repo_id);

        if repo_cfg.and_then(|rc| rc.enabled) == Some(false) {
            tracing::debug!(repo = %repo_id, "filtering disabled for repo");
            resolved.disabled.push(repo_id.clone());
            continue;
        }

        // The command-line period replaces per-repo values outright.
        let (days, period_source) = match (
            overrides.exclude_newer_than,
            repo_cfg.and_then(|rc| rc.exclude_newer_than),
            cfg.exclude_newer_than,
        ) {
            (Some(days), _, _) => (days, PeriodSource::CommandLine),
            (None, Some(days), _) => (days, PeriodSource::Repo),
            (None, None, Some(days)) => (days, PeriodSource::Global),
            (None, None, None) => (DEFAULT_EXCLUDE_NEWER_THAN, PeriodSource::Default),
        };

        let mode = match override_mode {
            Some(mode) => mode,
            None => match parse_mode(
                repo_cfg.and_then(|rc| rc.check_mode.as_deref()),
                &format!("repos.{repo_id}.check_mode"),
            )? {
                Some(mode) => mode,
                None => global_mode.unwrap_or_default(),
            },
        };

        let clamped = days > i64::from(MAX_EXCLUDE_DAYS);
        if clamped {
            tracing::warn!(
                repo = %repo_id,
                "exclude_newer_than={days} exceeds {MAX_EXCLUDE_DAYS}; clamping"
            );
        }

        let policy = RepositoryPolicy::new(days, mode)
            .with_context(|| format!("invalid policy for repo {repo_id}"))?;

        tracing::debug!(
            repo = %repo_id,
            source = period_source.as_str(),
            check_mode = %mode,
            "set repo ({repo_id}) to exclude_newer_than={}",
            policy.exclude_newer_than_days()
        );

        resolved.repos.push(ResolvedRepo {
            repo_id: repo_id.clone(),
            policy,
            period_source,
            clamped,
        });
    }

    Ok(resolved)
}

fn parse_mode(value: Option<&str>, field: &str) -> anyhow::Result<Option<CheckMode>> {
    match value {
        None => Ok(None),
        Some(v) => {
            let mode = v
                .parse::<CheckMode>()
                .with_context(|| format!("invalid {field}"))?;
            Ok(Some(mode))
        }
    }
}

fn validate_period(value: Option<i64>, field: &str) -> anyhow::Result<()> {
    match value {
        Some(days) if days < 0 => {
            Err(FilterError::InvalidPeriod(days)).with_context(|| format!("invalid {field}"))
        }
        _ => Ok(()),
    }
}
