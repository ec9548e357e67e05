//! Basic repository metadata block.

use crate::fetch::Repository;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BasicStats {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: Option<u64>,
    pub open_issues: u64,
    pub license: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub age_days: i64,
    pub archived: bool,
    pub topics: Vec<String>,
    pub homepage: Option<String>,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub default_branch: Option<String>,
}

#[must_use]
pub fn process_basic_stats(repo: &Repository, now: DateTime<Utc>) -> BasicStats {
    BasicStats {
        name: repo.name.clone(),
        full_name: repo.full_name.clone(),
        owner: repo.owner.login.clone(),
        description: repo.description.clone(),
        html_url: repo.html_url.clone(),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        watchers: repo.subscribers_count,
        open_issues: repo.open_issues_count,
        license: repo
            .license
            .as_ref()
            .and_then(|l| l.spdx_id.clone().or_else(|| l.name.clone())),
        created_at: repo.created_at,
        updated_at: repo.updated_at,
        pushed_at: repo.pushed_at,
        age_days: (now - repo.created_at).num_days().max(0),
        archived: repo.archived,
        topics: repo.topics.clone(),
        homepage: repo.homepage.clone().filter(|h| !h.is_empty()),
        has_wiki: repo.has_wiki,
        has_pages: repo.has_pages,
        default_branch: repo.default_branch.clone(),
    }
}
