//! repo-pulse crate
//!
//! This crate is the analysis pipeline behind the `repo-pulse` tool. It fetches
//! metadata about a hosted repository (commits, pull requests, contributors,
//! languages, file tree) and derives a structured report: contributor geography
//! and bus factor, commit timing patterns, a tool inventory, and an aggregate
//! health score. Presentation layers (CLI, extensions, web) consume the report
//! as plain serialized data.
//!
//! This crate's API is fluid and may change without warning and in a
//! semver-incompatible way.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod analysis;
pub mod convention;
pub mod fetch;
pub mod geo;
pub mod orchestrator;
pub mod progress;
pub mod report;

pub use crate::orchestrator::{AnalyzeError, AnalyzeOptions, analyze};
pub use crate::progress::{Phase, ProgressUpdate};
pub use crate::report::AnalysisReport;
