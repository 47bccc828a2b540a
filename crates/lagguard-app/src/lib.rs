//! Use case orchestration for lagguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, repo,
//! domain, and render layers. The CLI crate depends on this; it only handles argument parsing
//! and I/O.

#![forbid(unsafe_code)]

mod filter;
mod policies;
mod render;
mod report;

pub use filter::{FilterInput, FilterOutput, run_filter, verdict_exit_code};
pub use policies::{PoliciesOutput, format_policies, run_policies};
pub use render::{render_markdown, serialize_feed, serialize_report, write_text};
pub use report::{build_report, parse_report_json, to_renderable};
