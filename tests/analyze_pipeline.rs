//! Full-pipeline tests against a mock API server, including the progress
//! contract: one update per completed fetch step, monotonically increasing
//! percentages, and a final 100%.

use pretty_assertions::assert_eq;
use repo_pulse::{AnalyzeError, AnalyzeOptions, Phase, ProgressUpdate, analyze};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_repository(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "widget",
            "full_name": "acme/widget",
            "owner": {"login": "acme", "type": "Organization"},
            "description": "Makes widgets",
            "html_url": "https://github.com/acme/widget",
            "stargazers_count": 150,
            "forks_count": 12,
            "open_issues_count": 3,
            "language": "Rust",
            "license": {"spdx_id": "MIT", "name": "MIT License"},
            "created_at": "2022-01-01T00:00:00Z",
            "updated_at": "2024-06-01T00:00:00Z",
            "pushed_at": "2024-06-01T00:00:00Z",
            "homepage": "https://widget.example",
            "topics": ["cli"],
            "has_wiki": true,
            "has_pages": false,
            "default_branch": "main"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"login": "alice", "contributions": 42, "type": "User"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "sha": "abc123",
                "author": {"login": "alice", "type": "User"},
                "commit": {
                    "author": {"name": "Alice", "email": "alice@example.com", "date": "2024-05-28T10:00:00Z"},
                    "message": "feat: add widgets"
                },
                "parents": [{"sha": "def456"}]
            }
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Rust": 1000})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/git/trees/HEAD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tree": [{"path": "package-lock.json", "type": "blob", "size": 10}],
            "truncated": false
        })))
        .mount(server)
        .await;

}

async fn mock_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "login": "alice",
            "name": "Alice",
            "location": "Berlin",
            "html_url": "https://github.com/alice",
            "avatar_url": "https://avatars.example/alice"
        })))
        .mount(server)
        .await;
}

fn options_for(server: &MockServer) -> AnalyzeOptions {
    AnalyzeOptions {
        api_base_url: Some(server.uri()),
        ..AnalyzeOptions::default()
    }
}

#[tokio::test]
async fn test_analyze_assembles_report() {
    let server = MockServer::start().await;
    mock_repository(&server).await;
    mock_profile(&server).await;

    let report = analyze("acme/widget", &options_for(&server), |_| {}).await.unwrap();

    assert_eq!(report.repo, "acme/widget");
    assert_eq!(report.basic.stars, 150);
    assert_eq!(report.languages.primary.as_deref(), Some("Rust"));
    assert_eq!(report.contributors.total, 1);
    assert_eq!(
        report.contributors.contributors[0]
            .location
            .as_ref()
            .unwrap()
            .country_code,
        "DE"
    );
    assert_eq!(report.commits.total, 1);
    assert!(report.commits.conventions.conventional_commits);
    assert_eq!(report.tooling.tools.len(), 1);
    assert_eq!(report.tooling.tools[0].name, "npm");
    assert!(report.health.overall <= 100);
    assert!(report.raw.is_none());
}

#[tokio::test]
async fn test_progress_advances_per_fetch_step() {
    let server = MockServer::start().await;
    mock_repository(&server).await;
    mock_profile(&server).await;

    let mut updates: Vec<ProgressUpdate> = Vec::new();
    let _report = analyze("acme/widget", &options_for(&server), |u| updates.push(u))
        .await
        .unwrap();

    // Percentages never go backwards.
    for pair in updates.windows(2) {
        assert!(pair[0].percent <= pair[1].percent, "{} > {}", pair[0].percent, pair[1].percent);
    }

    // One update per fetch step: six resources plus the profile batch,
    // after the initial 0% announcement.
    let fetch_steps: Vec<&ProgressUpdate> = updates
        .iter()
        .filter(|u| u.phase == Phase::Fetching && u.percent > 0)
        .collect();
    assert_eq!(fetch_steps.len(), 7);
    assert_eq!(fetch_steps.last().unwrap().percent, 80);

    let first = updates.first().unwrap();
    assert_eq!(first.phase, Phase::Fetching);
    assert_eq!(first.percent, 0);

    let last = updates.last().unwrap();
    assert_eq!(last.phase, Phase::Complete);
    assert_eq!(last.percent, 100);
}

#[tokio::test]
async fn test_missing_repository_fails_without_analysis() {
    let server = MockServer::start().await;
    // No mounts: every request 404s.

    let mut saw_analysis_phase = false;
    let result = analyze("acme/gone", &AnalyzeOptions {
        api_base_url: Some(server.uri()),
        ..AnalyzeOptions::default()
    }, |u| {
        saw_analysis_phase |= u.phase == Phase::Analyzing;
    })
    .await;

    assert!(matches!(result, Err(AnalyzeError::NotFound)));
    assert!(!saw_analysis_phase);
}

#[tokio::test]
async fn test_profile_404_degrades_to_missing_profile() {
    let server = MockServer::start().await;
    mock_repository(&server).await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let report = analyze("acme/widget", &options_for(&server), |_| {}).await.unwrap();
    assert_eq!(report.contributors.total, 1);
    assert!(report.contributors.contributors[0].location.is_none());
}
