//! The staleness decision and the partition built on it.

use crate::error::FilterError;
use crate::model::Timestamped;
use crate::policy::{CheckMode, RepositoryPolicy, SECONDS_PER_DAY};

/// Timestamp to compare against the cutoff for `mode`.
pub fn select_timestamp<P: Timestamped + ?Sized>(package: &P, mode: CheckMode) -> i64 {
    match mode {
        CheckMode::File => package.file_time(),
        CheckMode::Build => package.build_time(),
        CheckMode::Newest => package.file_time().max(package.build_time()),
        CheckMode::Oldest => package.file_time().min(package.build_time()),
    }
}

/// [`select_timestamp`] for a mode given in its configured string form.
pub fn select_timestamp_str<P: Timestamped + ?Sized>(
    package: &P,
    mode: &str,
) -> Result<i64, FilterError> {
    let mode = mode.parse::<CheckMode>()?;
    Ok(select_timestamp(package, mode))
}

/// `now - days * 86400`. Negative periods are an error; callers clamp beforehand if they want to.
pub fn compute_cutoff(now: i64, exclude_newer_than_days: i64) -> Result<i64, FilterError> {
    if exclude_newer_than_days < 0 {
        return Err(FilterError::InvalidPeriod(exclude_newer_than_days));
    }
    Ok(cutoff_seconds(now, exclude_newer_than_days))
}

/// Cutoff for a non-negative period, saturating at `i64::MIN`.
pub(crate) fn cutoff_seconds(now: i64, exclude_newer_than_days: i64) -> i64 {
    let span = i128::from(exclude_newer_than_days) * i128::from(SECONDS_PER_DAY);
    i64::try_from(i128::from(now) - span).unwrap_or(i64::MIN)
}

/// True iff the selected timestamp is strictly after the cutoff.
pub fn is_too_new<P: Timestamped + ?Sized>(
    package: &P,
    policy: &RepositoryPolicy,
    now: i64,
) -> bool {
    select_timestamp(package, policy.check_mode()) > policy.cutoff(now)
}

/// Order-preserving split of a package list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<P> {
    pub kept: Vec<P>,
    pub excluded: Vec<P>,
}

impl<P> Partition<P> {
    pub fn len(&self) -> usize {
        self.kept.len() + self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty() && self.excluded.is_empty()
    }
}

impl<P> Default for Partition<P> {
    fn default() -> Self {
        Self {
            kept: Vec::new(),
            excluded: Vec::new(),
        }
    }
}

/// Partition `packages` into kept and excluded under `policy`.
///
/// Pass `slice.iter()` to partition borrowed packages.
pub fn filter_packages<P, I>(packages: I, policy: &RepositoryPolicy, now: i64) -> Partition<P>
where
    P: Timestamped,
    I: IntoIterator<Item = P>,
{
    let cutoff = policy.cutoff(now);
    let mode = policy.check_mode();

    let mut out = Partition::default();
    for pkg in packages {
        if select_timestamp(&pkg, mode) > cutoff {
            out.excluded.push(pkg);
        } else {
            out.kept.push(pkg);
        }
    }
    out
}
