//! Rendering utilities for human-facing summaries.

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableExclusion, RenderableRepo, RenderableReport, RenderableVerdict};
