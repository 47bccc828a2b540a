//! Property-based tests for the staleness filter.
//!
//! These tests use proptest to verify invariants around:
//! - partition completeness and order preservation
//! - check mode selection
//! - idempotence of re-filtering the kept set
//! - the strict cutoff comparison

use crate::filter::{compute_cutoff, filter_packages, is_too_new, select_timestamp};
use crate::policy::{CheckMode, MAX_EXCLUDE_DAYS, RepositoryPolicy};
use lagguard_types::PackageRecord;
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies
// ============================================================================

/// Timestamps spread across roughly two years either side of `arb_now`.
fn arb_timestamp() -> impl Strategy<Value = i64> {
    1_600_000_000i64..1_800_000_000i64
}

fn arb_now() -> impl Strategy<Value = i64> {
    1_650_000_000i64..1_750_000_000i64
}

fn arb_check_mode() -> impl Strategy<Value = CheckMode> {
    prop_oneof![
        Just(CheckMode::File),
        Just(CheckMode::Build),
        Just(CheckMode::Newest),
        Just(CheckMode::Oldest),
    ]
}

fn arb_policy() -> impl Strategy<Value = RepositoryPolicy> {
    (0i64..=i64::from(MAX_EXCLUDE_DAYS), arb_check_mode()).prop_map(|(days, mode)| {
        RepositoryPolicy::new(days, mode).expect("generated policy is in range")
    })
}

fn arb_package() -> impl Strategy<Value = PackageRecord> {
    (
        prop::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap(),
        arb_timestamp(),
        arb_timestamp(),
    )
        .prop_map(|(name, time_file, time_build)| PackageRecord {
            name,
            version: "1.0-1".to_string(),
            arch: None,
            time_file,
            time_build,
        })
}

/// Packages tagged with their input index so duplicates stay distinguishable.
fn arb_indexed_packages() -> impl Strategy<Value = Vec<(usize, PackageRecord)>> {
    prop::collection::vec(arb_package(), 0..64)
        .prop_map(|pkgs| pkgs.into_iter().enumerate().collect())
}

struct Indexed<'a>(usize, &'a PackageRecord);

impl crate::model::Timestamped for Indexed<'_> {
    fn file_time(&self) -> i64 {
        self.1.time_file
    }

    fn build_time(&self) -> i64 {
        self.1.time_build
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn partition_is_complete_and_disjoint(
        packages in arb_indexed_packages(),
        policy in arb_policy(),
        now in arb_now(),
    ) {
        let out = filter_packages(
            packages.iter().map(|(i, p)| Indexed(*i, p)),
            &policy,
            now,
        );

        prop_assert_eq!(out.kept.len() + out.excluded.len(), packages.len());

        let mut seen = HashSet::new();
        for item in out.kept.iter().chain(out.excluded.iter()) {
            prop_assert!(seen.insert(item.0), "index {} emitted twice", item.0);
        }
        prop_assert_eq!(seen.len(), packages.len());
    }

    #[test]
    fn partition_preserves_relative_order(
        packages in arb_indexed_packages(),
        policy in arb_policy(),
        now in arb_now(),
    ) {
        let out = filter_packages(
            packages.iter().map(|(i, p)| Indexed(*i, p)),
            &policy,
            now,
        );

        let kept: Vec<usize> = out.kept.iter().map(|x| x.0).collect();
        let excluded: Vec<usize> = out.excluded.iter().map(|x| x.0).collect();
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(excluded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn excluded_iff_too_new(
        packages in prop::collection::vec(arb_package(), 0..32),
        policy in arb_policy(),
        now in arb_now(),
    ) {
        let out = filter_packages(packages.iter(), &policy, now);
        for p in &out.kept {
            prop_assert!(!is_too_new(*p, &policy, now));
        }
        for p in &out.excluded {
            prop_assert!(is_too_new(*p, &policy, now));
        }
    }

    #[test]
    fn zero_days_excludes_only_future(
        package in arb_package(),
        mode in arb_check_mode(),
        now in arb_now(),
    ) {
        let policy = RepositoryPolicy::new(0, mode).expect("zero is valid");
        let selected = select_timestamp(&package, mode);
        prop_assert_eq!(is_too_new(&package, &policy, now), selected > now);
    }

    #[test]
    fn newest_is_never_older_than_oldest(package in arb_package()) {
        prop_assert!(
            select_timestamp(&package, CheckMode::Newest)
                >= select_timestamp(&package, CheckMode::Oldest)
        );
    }

    #[test]
    fn refiltering_kept_is_idempotent(
        packages in prop::collection::vec(arb_package(), 0..32),
        policy in arb_policy(),
        now in arb_now(),
    ) {
        let first = filter_packages(packages, &policy, now);
        let second = filter_packages(first.kept.clone(), &policy, now);
        prop_assert_eq!(second.kept, first.kept);
        prop_assert!(second.excluded.is_empty());
    }

    #[test]
    fn cutoff_boundary_is_kept(
        days in 0i64..=i64::from(MAX_EXCLUDE_DAYS),
        mode in arb_check_mode(),
        now in arb_now(),
    ) {
        let cutoff = compute_cutoff(now, days).expect("non-negative");
        let policy = RepositoryPolicy::new(days, mode).expect("valid");
        prop_assert_eq!(policy.cutoff(now), cutoff);

        let at = PackageRecord {
            name: "edge".to_string(),
            version: "1".to_string(),
            arch: None,
            time_file: cutoff,
            time_build: cutoff,
        };
        prop_assert!(!is_too_new(&at, &policy, now));

        let after = PackageRecord { time_file: cutoff + 1, time_build: cutoff + 1, ..at };
        prop_assert!(is_too_new(&after, &policy, now));
    }

    #[test]
    fn negative_periods_always_rejected(days in i64::MIN..0i64, now in arb_now()) {
        prop_assert!(compute_cutoff(now, days).is_err());
        prop_assert!(RepositoryPolicy::new(days, CheckMode::File).is_err());
    }
}
