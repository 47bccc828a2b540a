//! Stable DTOs and IDs used across the lagguard workspace.
//!
//! This crate is intentionally boring:
//! - package and repository feed records
//! - the emitted report envelope
//! - stable string IDs and schema constants

#![forbid(unsafe_code)]

pub mod feed;
pub mod ids;
pub mod report;

pub use feed::{FeedDocument, PackageRecord, RepositoryFeed, SCHEMA_FEED_V1};
pub use report::{
    ExcludedPackage, LagguardReport, PolicySnapshot, ReportSummary, RepoResult, SCHEMA_REPORT_V1,
    ToolMeta, Verdict,
};
