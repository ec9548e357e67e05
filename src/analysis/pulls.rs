//! Pull request state breakdown.

use crate::convention::{self, ConventionSummary};
use crate::fetch::RawPullRequest;
use serde::Serialize;

/// Counts partition the sampled pull requests exactly:
/// `open + merged + closed == total`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PullAnalysis {
    pub total: usize,
    pub open: usize,
    pub merged: usize,
    pub closed: usize,
    /// Convention usage across PR titles.
    pub conventions: ConventionSummary,
}

#[must_use]
pub fn process_pulls(pulls: &[RawPullRequest]) -> PullAnalysis {
    let mut analysis = PullAnalysis {
        total: pulls.len(),
        ..PullAnalysis::default()
    };

    for pr in pulls {
        if pr.state == "open" {
            analysis.open += 1;
        } else if pr.merged_at.is_some() {
            // Merged PRs also report state "closed"; merged wins.
            analysis.merged += 1;
        } else {
            analysis.closed += 1;
        }
    }

    analysis.conventions = convention::detect_conventions(pulls.iter().map(|p| p.title.as_str()));
    analysis
}
