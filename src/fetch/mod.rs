//! Remote data fetching: repository identifiers, the hosting API client, and
//! the raw payload types the analyzers consume.

mod client;
mod models;
mod repo_spec;

pub use client::{Client, FetchError, RateLimitSnapshot};
pub use models::{
    Actor, CommitIdentity, CommitInfo, License, ParentRef, RawBundle, RawCommit, RawContributor, RawPullRequest,
    Repository, TreeEntry, TreeResponse, UserProfile,
};
pub use repo_spec::RepoSpec;
