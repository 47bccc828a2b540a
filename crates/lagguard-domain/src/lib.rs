//! Pure staleness filtering (no IO).
//!
//! Input: packages exposing file/build timestamps, a resolved repository policy, and "now".
//! Output: an order-preserving partition into kept and excluded packages.

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use error::FilterError;
pub use filter::{
    Partition, compute_cutoff, filter_packages, is_too_new, select_timestamp,
    select_timestamp_str,
};
pub use model::Timestamped;
pub use policy::{CheckMode, RepoPolicies, RepositoryPolicy};
