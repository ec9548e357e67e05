//! Aggregate health score.
//!
//! Five independent category scorers, each pure over already-computed
//! analysis outputs. The caps sum to 100 so the overall score is bounded by
//! construction.

use crate::analysis::basic_stats::BasicStats;
use crate::analysis::commits::CommitAnalysis;
use crate::analysis::contributors::ContributorAnalysis;
use crate::analysis::pulls::PullAnalysis;
use crate::analysis::tooling::{ToolCategory, ToolingAnalysis};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One scoring observation; `delta` is the signed points it contributed
/// (zero for neutral observations such as a missing license).
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub delta: i32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub score: u32,
    pub max: u32,
    pub signals: Vec<Signal>,
}

impl CategoryScore {
    fn new(max: u32) -> Self {
        Self {
            score: 0,
            max,
            signals: Vec::new(),
        }
    }

    fn add(&mut self, delta: u32, message: impl Into<String>) {
        self.score = (self.score + delta).min(self.max);
        self.signals.push(Signal {
            delta: delta as i32,
            message: message.into(),
        });
    }

    fn note(&mut self, message: impl Into<String>) {
        self.signals.push(Signal {
            delta: 0,
            message: message.into(),
        });
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthScore {
    /// Sum of the category scores, 0 to 100.
    pub overall: u32,
    pub maintenance: CategoryScore,
    pub documentation: CategoryScore,
    pub community: CategoryScore,
    pub code_quality: CategoryScore,
    pub security: CategoryScore,
}

#[must_use]
pub fn score_maintenance(
    basic: &BasicStats,
    commits: &CommitAnalysis,
    tooling: &ToolingAnalysis,
    now: DateTime<Utc>,
) -> CategoryScore {
    let mut cat = CategoryScore::new(25);

    match basic.pushed_at.map(|at| (now - at).num_days()) {
        Some(days) if days < 30 => cat.add(10, "pushed within the last 30 days"),
        Some(days) if days < 180 => cat.add(5, "pushed within the last 6 months"),
        _ => cat.note("no recent pushes"),
    }

    if commits.total > 100 {
        cat.add(8, "over 100 recent commits");
    } else if commits.total > 20 {
        cat.add(4, "over 20 recent commits");
    }

    if basic.archived {
        cat.note("repository is archived");
    } else {
        cat.add(4, "not archived");
    }

    if tooling.has_category(ToolCategory::CiCd) {
        cat.add(3, "CI/CD configured");
    }

    cat
}

#[must_use]
pub fn score_documentation(basic: &BasicStats) -> CategoryScore {
    let mut cat = CategoryScore::new(20);

    if basic.description.as_deref().is_some_and(|d| !d.is_empty()) {
        cat.add(5, "has a description");
    } else {
        cat.note("no description");
    }

    if basic.license.is_some() {
        cat.add(5, "has a license");
    } else {
        cat.note("no license");
    }

    if basic.homepage.is_some() {
        cat.add(3, "has a homepage");
    }

    if basic.has_wiki {
        cat.add(3, "wiki enabled");
    }

    let topic_points = (basic.topics.len() as u32).min(4);
    if topic_points > 0 {
        cat.add(topic_points, format!("{} topic(s) set", basic.topics.len()));
    }

    cat
}

#[must_use]
pub fn score_community(basic: &BasicStats, contributors: &ContributorAnalysis) -> CategoryScore {
    let mut cat = CategoryScore::new(25);

    if basic.stars >= 1000 {
        cat.add(8, "1000+ stars");
    } else if basic.stars >= 100 {
        cat.add(5, "100+ stars");
    } else if basic.stars >= 10 {
        cat.add(2, "10+ stars");
    }

    if contributors.total >= 10 {
        cat.add(7, "10+ contributors");
    } else if contributors.total >= 3 {
        cat.add(4, "3+ contributors");
    } else if contributors.total >= 1 {
        cat.add(1, "has contributors");
    }

    if contributors.bus_factor >= 3 {
        cat.add(5, "bus factor 3 or higher");
    } else if contributors.bus_factor >= 2 {
        cat.add(3, "bus factor 2");
    } else {
        cat.note("knowledge concentrated in one contributor");
    }

    if basic.forks >= 100 {
        cat.add(5, "100+ forks");
    } else if basic.forks >= 10 {
        cat.add(3, "10+ forks");
    }

    cat
}

#[must_use]
pub fn score_code_quality(pulls: &PullAnalysis, tooling: &ToolingAnalysis) -> CategoryScore {
    let mut cat = CategoryScore::new(15);

    if tooling.has_category(ToolCategory::Testing) {
        cat.add(5, "test tooling present");
    } else {
        cat.note("no test tooling detected");
    }

    if tooling.has_category(ToolCategory::Linting) {
        cat.add(5, "linting or formatting configured");
    }

    if pulls.merged > 10 {
        cat.add(5, "over 10 merged pull requests");
    } else if pulls.merged > 0 {
        cat.add(2, "has merged pull requests");
    }

    cat
}

#[must_use]
pub fn score_security(basic: &BasicStats, tooling: &ToolingAnalysis) -> CategoryScore {
    let mut cat = CategoryScore::new(15);

    if basic.license.is_some() {
        cat.add(5, "has a license");
    }

    if tooling.has_category(ToolCategory::CiCd) {
        cat.add(5, "CI/CD configured");
    }

    if tooling.has_category(ToolCategory::Linting) {
        cat.add(3, "linting configured");
    }

    if tooling.has_container_tooling() {
        cat.add(2, "containerized builds");
    }

    cat
}

#[must_use]
pub fn score_health(
    basic: &BasicStats,
    commits: &CommitAnalysis,
    contributors: &ContributorAnalysis,
    pulls: &PullAnalysis,
    tooling: &ToolingAnalysis,
    now: DateTime<Utc>,
) -> HealthScore {
    let maintenance = score_maintenance(basic, commits, tooling, now);
    let documentation = score_documentation(basic);
    let community = score_community(basic, contributors);
    let code_quality = score_code_quality(pulls, tooling);
    let security = score_security(basic, tooling);

    HealthScore {
        overall: maintenance.score + documentation.score + community.score + code_quality.score + security.score,
        maintenance,
        documentation,
        community,
        code_quality,
        security,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::commits::process_commits;
    use crate::analysis::contributors::process_contributors;
    use crate::analysis::pulls::process_pulls;
    use crate::analysis::tooling::detect_tools;
    use crate::analysis::basic_stats::process_basic_stats;
    use crate::fetch::{Actor, License, RawContributor, Repository};
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn strong_repo() -> Repository {
        Repository {
            name: "widget".into(),
            full_name: "acme/widget".into(),
            owner: Actor {
                login: "acme".into(),
                kind: None,
            },
            description: Some("Makes widgets".into()),
            html_url: "https://github.com/acme/widget".into(),
            stargazers_count: 5000,
            forks_count: 300,
            subscribers_count: None,
            open_issues_count: 12,
            language: Some("Rust".into()),
            license: Some(License {
                spdx_id: Some("MIT".into()),
                name: None,
            }),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            updated_at: now(),
            pushed_at: Some(Utc.with_ymd_and_hms(2024, 5, 25, 0, 0, 0).unwrap()),
            archived: false,
            topics: vec!["cli".into(), "tools".into(), "rust".into(), "analysis".into(), "extra".into()],
            homepage: Some("https://widget.example".into()),
            has_wiki: true,
            has_pages: false,
            default_branch: Some("main".into()),
        }
    }

    fn contributors(n: usize) -> ContributorAnalysis {
        let raw: Vec<RawContributor> = (0..n)
            .map(|i| RawContributor {
                login: format!("user{i}"),
                contributions: 10,
                kind: None,
            })
            .collect();
        process_contributors(&raw, &[])
    }

    #[test]
    fn test_maintenance_full_score() {
        let basic = process_basic_stats(&strong_repo(), now());
        let commits = process_commits(
            &(0..150)
                .map(|i| crate::fetch::RawCommit {
                    sha: format!("{i}"),
                    author: None,
                    commit: crate::fetch::CommitInfo {
                        author: Some(crate::fetch::CommitIdentity {
                            name: None,
                            email: None,
                            date: Some("2024-05-20T10:00:00Z".into()),
                        }),
                        message: "change".into(),
                    },
                    parents: vec![],
                })
                .collect::<Vec<_>>(),
            &HashMap::new(),
            None,
        );
        let tooling = detect_tools(&[".github/workflows/ci.yml"]);

        let cat = score_maintenance(&basic, &commits, &tooling, now());
        assert_eq!(cat.score, 25);
        assert_eq!(cat.max, 25);
    }

    #[test]
    fn test_maintenance_stale_archived() {
        let mut repo = strong_repo();
        repo.archived = true;
        repo.pushed_at = Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap());
        let basic = process_basic_stats(&repo, now());
        let commits = process_commits(&[], &HashMap::new(), None);
        let tooling = detect_tools::<&str>(&[]);

        let cat = score_maintenance(&basic, &commits, &tooling, now());
        assert_eq!(cat.score, 0);
    }

    #[test]
    fn test_documentation_topics_capped() {
        let basic = process_basic_stats(&strong_repo(), now());
        let cat = score_documentation(&basic);
        // 5 topics still only score the 4-point cap; everything else present.
        assert_eq!(cat.score, 20);
    }

    #[test]
    fn test_documentation_bare_repo() {
        let mut repo = strong_repo();
        repo.description = None;
        repo.license = None;
        repo.homepage = None;
        repo.has_wiki = false;
        repo.topics.clear();
        let cat = score_documentation(&process_basic_stats(&repo, now()));
        assert_eq!(cat.score, 0);
        assert!(cat.signals.iter().any(|s| s.message == "no license"));
    }

    #[test]
    fn test_community_tiers() {
        let basic = process_basic_stats(&strong_repo(), now());
        let cat = score_community(&basic, &contributors(12));
        // 8 (stars) + 7 (contributors) + 5 (bus factor) + 5 (forks)
        assert_eq!(cat.score, 25);

        let mut repo = strong_repo();
        repo.stargazers_count = 50;
        repo.forks_count = 5;
        let basic = process_basic_stats(&repo, now());
        let cat = score_community(&basic, &contributors(1));
        // 2 (stars) + 1 (contributor) + 0 (bus factor 1) + 0 (forks)
        assert_eq!(cat.score, 3);
    }

    #[test]
    fn test_code_quality() {
        let pulls = process_pulls(&[]);
        let tooling = detect_tools(&["jest.config.js", ".eslintrc.json"]);
        let cat = score_code_quality(&pulls, &tooling);
        assert_eq!(cat.score, 10);
    }

    #[test]
    fn test_security() {
        let basic = process_basic_stats(&strong_repo(), now());
        let tooling = detect_tools(&[".github/workflows/ci.yml", ".eslintrc.json", "Dockerfile"]);
        let cat = score_security(&basic, &tooling);
        assert_eq!(cat.score, 15);
    }

    #[test]
    fn test_overall_bounded() {
        let basic = process_basic_stats(&strong_repo(), now());
        let commits = process_commits(&[], &HashMap::new(), None);
        let contributors = contributors(12);
        let pulls = process_pulls(&[]);
        let tooling = detect_tools(&[".github/workflows/ci.yml", "jest.config.js", ".eslintrc.json", "Dockerfile"]);

        let health = score_health(&basic, &commits, &contributors, &pulls, &tooling, now());
        assert!(health.overall <= 100);
        assert_eq!(
            health.overall,
            health.maintenance.score
                + health.documentation.score
                + health.community.score
                + health.code_quality.score
                + health.security.score
        );
    }

    #[test]
    fn test_signal_deltas_are_signed() {
        let basic = process_basic_stats(&strong_repo(), now());
        let cat = score_documentation(&basic);
        assert!(cat.signals.iter().all(|s| s.delta >= 0));

        let mut repo = strong_repo();
        repo.license = None;
        let cat = score_documentation(&process_basic_stats(&repo, now()));
        let missing = cat.signals.iter().find(|s| s.message == "no license").unwrap();
        assert_eq!(missing.delta, 0i32);

        // The serialized shape carries a signed delta.
        let json = serde_json::to_value(Signal {
            delta: -2,
            message: "hypothetical deduction".into(),
        })
        .unwrap();
        assert_eq!(json["delta"], -2);
    }

    #[test]
    fn test_category_caps_sum_to_100() {
        let basic = process_basic_stats(&strong_repo(), now());
        let commits = process_commits(&[], &HashMap::new(), None);
        let health = score_health(&basic, &commits, &contributors(1), &process_pulls(&[]), &detect_tools::<&str>(&[]), now());
        let caps = health.maintenance.max
            + health.documentation.max
            + health.community.max
            + health.code_quality.max
            + health.security.max;
        assert_eq!(caps, 100);
    }
}
