//! The assembled analysis report.

use crate::analysis::{
    BasicStats, CommitAnalysis, ContributorAnalysis, HealthScore, LanguageAnalysis, PullAnalysis, ToolingAnalysis,
};
use crate::fetch::RawBundle;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the presentation layers consume, as plain serializable data.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub repo: String,
    pub basic: BasicStats,
    pub languages: LanguageAnalysis,
    pub pulls: PullAnalysis,
    pub contributors: ContributorAnalysis,
    pub commits: CommitAnalysis,
    pub tooling: ToolingAnalysis,
    pub health: HealthScore,
    pub generator: GeneratorInfo,
    /// The unprocessed API payloads, attached only on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawBundle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl GeneratorInfo {
    #[must_use]
    pub fn new(generated_at: DateTime<Utc>, duration_ms: u64) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            generated_at,
            duration_ms,
        }
    }
}
