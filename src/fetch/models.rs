//! Raw API payload types.
//!
//! Field names match the hosting API responses exactly; only the fields the
//! analyzers consume are deserialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: Actor,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    /// Watchers in the UI sense; `watchers_count` mirrors the star count on GitHub.
    #[serde(default)]
    pub subscribers_count: Option<u64>,
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub license: Option<License>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub has_wiki: bool,
    #[serde(default)]
    pub has_pages: bool,
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub spdx_id: Option<String>,
    pub name: Option<String>,
}

/// A user reference as embedded in other payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Actor {
    /// Bots are excluded from contributor geography and profile fetches.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind.as_deref() == Some("Bot") || self.login.ends_with("[bot]")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContributor {
    pub login: String,
    pub contributions: u64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl RawContributor {
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind.as_deref() == Some("Bot") || self.login.ends_with("[bot]")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommit {
    pub sha: String,
    /// The registered account, absent when a commit was authored under an
    /// email not tied to any account.
    pub author: Option<Actor>,
    pub commit: CommitInfo,
    #[serde(default)]
    pub parents: Vec<ParentRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub author: Option<CommitIdentity>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Kept as the raw string; unparseable dates are skipped with a warning
    /// during analysis rather than failing deserialization.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub sha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPullRequest {
    pub number: u64,
    pub state: String,
    pub title: String,
    pub user: Option<Actor>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    /// Free-text location, resolved by the `geo` module when possible.
    pub location: Option<String>,
    pub html_url: String,
    pub avatar_url: Option<String>,
}

/// The seven fetched resources for one analysis run. Immutable once fetched;
/// owned by the orchestrator for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBundle {
    pub repo: Repository,
    pub contributors: Vec<RawContributor>,
    pub commits: Vec<RawCommit>,
    pub pulls: Vec<RawPullRequest>,
    pub languages: BTreeMap<String, u64>,
    pub tree: Vec<TreeEntry>,
    pub profiles: Vec<UserProfile>,
}
