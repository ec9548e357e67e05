//! Pure analyzers over the fetched raw data. Every function here is
//! deterministic and touches no I/O; the orchestrator wires them together.

pub mod basic_stats;
pub mod commits;
pub mod contributors;
pub mod health;
pub mod languages;
pub mod pulls;
pub mod tooling;

pub use basic_stats::{BasicStats, process_basic_stats};
pub use commits::{ActivityHeatmap, CommitAnalysis, WorkPattern, WorkPatterns, process_commits, work_patterns};
pub use contributors::{
    ContributorAnalysis, ContributorProfile, TeamSize, bus_factor, classify_team_size, process_contributors,
};
pub use health::{CategoryScore, HealthScore, Signal, score_health};
pub use languages::{LanguageAnalysis, LanguageEntry, process_languages};
pub use pulls::{PullAnalysis, process_pulls};
pub use tooling::{DetectedTool, ToolCategory, ToolingAnalysis, detect_tools};
