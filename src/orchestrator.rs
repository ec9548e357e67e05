//! Pipeline orchestration: fetches the raw data, runs the analyzers in
//! dependency order, and assembles the report.
//!
//! The fetch phase issues the six resource requests concurrently and fails
//! the run on the first error; partial data only arises from the client's
//! page cap and empty-repository handling. Profile fetches are a second
//! concurrent batch where a 404 merely drops that profile.

use crate::analysis;
use crate::fetch::{Client, FetchError, RawBundle, RawCommit, RawContributor, RepoSpec, TreeResponse, UserProfile};
use crate::progress::{Phase, ProgressUpdate};
use crate::report::{AnalysisReport, GeneratorInfo};
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter};
use futures_util::future::join_all;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio_util::sync::CancellationToken;

const LOG_TARGET: &str = "  pipeline";

/// Deliberate sampling caps: three pages of 100 keep large repositories
/// affordable while covering recent activity.
const COMMIT_PAGE_CAP: u32 = 3;
const PULL_PAGE_CAP: u32 = 3;
const CONTRIBUTOR_PAGE_CAP: u32 = 10;

/// Profiles are fetched for the union of the top contributors and the most
/// frequent recent commit authors, ten of each.
const PROFILE_SAMPLE: usize = 10;

/// The fetch phase spans 0-80% of overall progress: six resource fetches plus
/// the profile batch, each advancing one step.
const FETCH_STEPS: u32 = 7;
const FETCH_PERCENT_SPAN: u32 = 80;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Personal access token; anonymous access works but is tightly limited.
    pub token: Option<String>,
    pub cancel: CancellationToken,
    /// Attach the raw API payloads to the report for debugging consumers.
    pub include_raw: bool,
    /// Override the API base URL (self-hosted forges, mock servers).
    pub api_base_url: Option<String>,
}

/// A failed analysis run.
#[derive(Debug)]
pub enum AnalyzeError {
    /// The repository identifier could not be parsed; nothing was fetched.
    InvalidRepo(ohno::AppError),
    /// The repository does not exist or is not visible with this token.
    NotFound,
    RateLimited { reset_at: Option<DateTime<Utc>> },
    Api { status: u16 },
    Transport(ohno::AppError),
    Cancelled,
}

impl Display for AnalyzeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRepo(e) => write!(f, "invalid repository identifier: {e}"),
            Self::NotFound => write!(f, "repository not found"),
            Self::RateLimited { reset_at: Some(at) } => {
                write!(f, "API rate limit exhausted, resets at {}", at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            Self::RateLimited { reset_at: None } => write!(f, "API rate limit exhausted"),
            Self::Api { status } => write!(f, "API request failed with status {status}"),
            Self::Transport(e) => write!(f, "{e}"),
            Self::Cancelled => write!(f, "analysis cancelled"),
        }
    }
}

impl std::error::Error for AnalyzeError {}

impl From<FetchError> for AnalyzeError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => Self::NotFound,
            FetchError::RateLimited { reset_at } => Self::RateLimited { reset_at },
            FetchError::Api { status } => Self::Api { status },
            FetchError::Transport(e) => Self::Transport(e),
        }
    }
}

/// Run the full analysis pipeline for one repository.
///
/// `repo` accepts `owner/repo` shorthand or a full repository URL. Progress
/// updates are delivered synchronously through `on_progress` as the pipeline
/// advances; the callback must be cheap.
pub async fn analyze(
    repo: &str,
    options: &AnalyzeOptions,
    mut on_progress: impl FnMut(ProgressUpdate),
) -> Result<AnalysisReport, AnalyzeError> {
    let started = std::time::Instant::now();
    let spec = RepoSpec::parse(repo).map_err(AnalyzeError::InvalidRepo)?;
    let token = options.token.as_deref();
    let client = match &options.api_base_url {
        Some(base) => Client::with_base_url(token, base),
        None => Client::new(token),
    }
    .map_err(AnalyzeError::Transport)?;

    on_progress(ProgressUpdate::new(Phase::Fetching, 0, format!("fetching {spec}")));

    let bundle = fetch_bundle(&client, &spec, &options.cancel, &mut on_progress).await?;
    log::info!(
        target: LOG_TARGET,
        "fetched {}: {} contributor(s), {} commit(s), {} pull(s), {} tree entries, {} profile(s)",
        spec,
        bundle.contributors.len(),
        bundle.commits.len(),
        bundle.pulls.len(),
        bundle.tree.len(),
        bundle.profiles.len(),
    );

    let now = Utc::now();

    on_progress(ProgressUpdate::new(Phase::Analyzing, 82, "computing repository statistics"));
    let basic = analysis::process_basic_stats(&bundle.repo, now);
    let languages = analysis::process_languages(&bundle.languages);
    let pulls = analysis::process_pulls(&bundle.pulls);

    on_progress(ProgressUpdate::new(Phase::Analyzing, 86, "analyzing contributors and commit activity"));
    let contributors = analysis::process_contributors(&bundle.contributors, &bundle.profiles);
    let commits = analysis::process_commits(
        &bundle.commits,
        &contributors.author_offsets(),
        contributors.primary_offset_secs,
    );

    on_progress(ProgressUpdate::new(Phase::ToolingDetection, 92, "detecting tools and frameworks"));
    let blob_paths: Vec<&str> = bundle
        .tree
        .iter()
        .filter(|e| e.kind == "blob")
        .map(|e| e.path.as_str())
        .collect();
    let tooling = analysis::detect_tools(&blob_paths);

    let health = analysis::score_health(&basic, &commits, &contributors, &pulls, &tooling, now);

    on_progress(ProgressUpdate::new(Phase::Complete, 100, "analysis complete"));

    Ok(AnalysisReport {
        repo: spec.to_string(),
        basic,
        languages,
        pulls,
        contributors,
        commits,
        tooling,
        health,
        generator: GeneratorInfo::new(now, started.elapsed().as_millis() as u64),
        raw: options.include_raw.then_some(bundle),
    })
}

/// Percentage after `done` of the fetch-phase steps have completed.
fn fetch_step_percent(done: u32) -> u8 {
    (done.min(FETCH_STEPS) * FETCH_PERCENT_SPAN / FETCH_STEPS) as u8
}

/// Fetch the six repository resources concurrently, then the profile batch.
///
/// Each completed fetch advances a shared step counter and emits a progress
/// update, so the callback sees the fetch phase fill in as individual
/// resources land rather than jumping when the whole join settles. The six
/// futures are polled on one task; the counter and callback lock exist only
/// so the completion hooks can share them.
async fn fetch_bundle(
    client: &Client,
    spec: &RepoSpec,
    cancel: &CancellationToken,
    on_progress: &mut impl FnMut(ProgressUpdate),
) -> Result<RawBundle, AnalyzeError> {
    let base = format!("/repos/{}/{}", spec.owner(), spec.repo());

    let completed = AtomicU32::new(0);
    let progress = Mutex::new(on_progress);
    let step = |message: &str| {
        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Ok(mut cb) = progress.lock() {
            (*cb)(ProgressUpdate::new(Phase::Fetching, fetch_step_percent(done), message));
        }
    };

    let (repo, contributors, commits, pulls, languages, tree) = tokio::try_join!(
        async {
            let repo = cancellable(cancel, client.fetch_one::<crate::fetch::Repository>(&base)).await?;
            step("fetched repository details");
            Ok::<_, AnalyzeError>(repo)
        },
        async {
            let contributors = cancellable(
                cancel,
                client.fetch_paginated::<RawContributor>(&format!("{base}/contributors"), CONTRIBUTOR_PAGE_CAP),
            )
            .await?;
            step("fetched contributor list");
            Ok::<_, AnalyzeError>(contributors)
        },
        async {
            let commits =
                cancellable(cancel, client.fetch_paginated::<RawCommit>(&format!("{base}/commits"), COMMIT_PAGE_CAP))
                    .await?;
            step("fetched commit history");
            Ok::<_, AnalyzeError>(commits)
        },
        async {
            let pulls = cancellable(
                cancel,
                client.fetch_paginated::<crate::fetch::RawPullRequest>(
                    &format!("{base}/pulls?state=all&sort=created&direction=desc"),
                    PULL_PAGE_CAP,
                ),
            )
            .await?;
            step("fetched pull requests");
            Ok::<_, AnalyzeError>(pulls)
        },
        async {
            let languages =
                cancellable(cancel, client.fetch_one::<BTreeMap<String, u64>>(&format!("{base}/languages"))).await?;
            step("fetched language breakdown");
            Ok::<_, AnalyzeError>(languages)
        },
        async {
            let tree =
                cancellable(cancel, client.fetch_one::<TreeResponse>(&format!("{base}/git/trees/HEAD?recursive=1")))
                    .await?;
            step("fetched file tree");
            Ok::<_, AnalyzeError>(tree)
        },
    )?;

    if tree.truncated {
        log::debug!(target: LOG_TARGET, "tree listing for {spec} is truncated, tool detection may be incomplete");
    }

    let profiles = fetch_profiles(client, &contributors, &commits, cancel).await?;
    step(&format!("fetched {} contributor profile(s)", profiles.len()));

    Ok(RawBundle {
        repo,
        contributors,
        commits,
        pulls,
        languages,
        tree: tree.tree,
        profiles,
    })
}

/// Fetch user profiles for the sampled logins as one concurrent batch. A 404
/// degrades to a missing profile; renamed and unregistered accounts are
/// expected. Any other failure fails the run.
async fn fetch_profiles(
    client: &Client,
    contributors: &[RawContributor],
    commits: &[RawCommit],
    cancel: &CancellationToken,
) -> Result<Vec<UserProfile>, AnalyzeError> {
    let logins = profile_logins(contributors, commits);

    let results = join_all(logins.iter().map(|login| {
        let path = format!("/users/{login}");
        async move { cancellable(cancel, client.fetch_one::<UserProfile>(&path)).await }
    }))
    .await;

    let mut profiles = Vec::with_capacity(results.len());
    for (login, result) in logins.iter().zip(results) {
        match result {
            Ok(profile) => profiles.push(profile),
            Err(AnalyzeError::NotFound) => {
                log::debug!(target: LOG_TARGET, "no profile for {login}, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(profiles)
}

/// Union of the top contributors by count and the most frequent recent commit
/// authors, bots excluded, order-preserving dedup.
fn profile_logins(contributors: &[RawContributor], commits: &[RawCommit]) -> Vec<String> {
    let mut logins: Vec<String> = Vec::new();
    let mut push = |login: &str| {
        if !logins.iter().any(|l| l == login) {
            logins.push(login.to_owned());
        }
    };

    let mut top_contributors: Vec<&RawContributor> = contributors.iter().filter(|c| !c.is_bot()).collect();
    top_contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions));
    for c in top_contributors.iter().take(PROFILE_SAMPLE) {
        push(&c.login);
    }

    let mut author_counts: HashMap<&str, u64> = HashMap::new();
    for commit in commits {
        if let Some(author) = &commit.author
            && !author.is_bot()
        {
            *author_counts.entry(author.login.as_str()).or_insert(0) += 1;
        }
    }
    let mut frequent: Vec<(&str, u64)> = author_counts.into_iter().collect();
    frequent.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (login, _) in frequent.iter().take(PROFILE_SAMPLE) {
        push(login);
    }

    logins
}

/// Race a fetch against cancellation; a cancelled run abandons the request.
async fn cancellable<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, AnalyzeError> {
    tokio::select! {
        () = cancel.cancelled() => Err(AnalyzeError::Cancelled),
        result = fut => result.map_err(Into::into),
    }
}
