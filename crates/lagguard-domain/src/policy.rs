use crate::error::FilterError;
use lagguard_types::ids;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Upper bound on the exclusion period; larger values are clamped to this.
pub const MAX_EXCLUDE_DAYS: u32 = 365;

/// Which timestamp(s) of a package to compare against the cutoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckMode {
    #[default]
    File,
    Build,
    Newest,
    Oldest,
}

impl CheckMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckMode::File => ids::CHECK_MODE_FILE,
            CheckMode::Build => ids::CHECK_MODE_BUILD,
            CheckMode::Newest => ids::CHECK_MODE_NEWEST,
            CheckMode::Oldest => ids::CHECK_MODE_OLDEST,
        }
    }
}

impl FromStr for CheckMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::CHECK_MODE_FILE => Ok(CheckMode::File),
            ids::CHECK_MODE_BUILD => Ok(CheckMode::Build),
            ids::CHECK_MODE_NEWEST => Ok(CheckMode::Newest),
            ids::CHECK_MODE_OLDEST => Ok(CheckMode::Oldest),
            other => Err(FilterError::InvalidCheckMode(other.to_string())),
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved per-repository policy.
///
/// Only constructible through validating constructors, so a held value always satisfies
/// `0 <= exclude_newer_than_days <= MAX_EXCLUDE_DAYS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepositoryPolicy {
    exclude_newer_than_days: u32,
    check_mode: CheckMode,
}

impl RepositoryPolicy {
    /// Rejects negative periods; clamps periods above [`MAX_EXCLUDE_DAYS`].
    pub fn new(exclude_newer_than_days: i64, check_mode: CheckMode) -> Result<Self, FilterError> {
        if exclude_newer_than_days < 0 {
            return Err(FilterError::InvalidPeriod(exclude_newer_than_days));
        }
        let days = exclude_newer_than_days.min(i64::from(MAX_EXCLUDE_DAYS)) as u32;
        Ok(Self {
            exclude_newer_than_days: days,
            check_mode,
        })
    }

    /// Validates both fields from their configured (string) form.
    ///
    /// The period is validated first, so `(-5, "bogus")` reports the period.
    pub fn parse(exclude_newer_than_days: i64, check_mode: &str) -> Result<Self, FilterError> {
        if exclude_newer_than_days < 0 {
            return Err(FilterError::InvalidPeriod(exclude_newer_than_days));
        }
        let mode = check_mode.parse::<CheckMode>()?;
        Self::new(exclude_newer_than_days, mode)
    }

    pub fn exclude_newer_than_days(&self) -> u32 {
        self.exclude_newer_than_days
    }

    pub fn check_mode(&self) -> CheckMode {
        self.check_mode
    }

    /// Epoch-second boundary for this policy at `now`.
    pub fn cutoff(&self, now: i64) -> i64 {
        crate::filter::cutoff_seconds(now, i64::from(self.exclude_newer_than_days))
    }
}

/// Policies keyed by repository id. Repositories absent from the map are not filtered.
pub type RepoPolicies = BTreeMap<String, RepositoryPolicy>;
