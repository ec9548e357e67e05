use clap::Parser;
use repo_pulse::{AnalyzeError, AnalyzeOptions, analyze};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

/// Analyze a hosted repository: contributors, commit patterns, tooling, and
/// an overall health score, emitted as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Repository to analyze, as `owner/repo` or a full URL.
    repo: String,

    /// API token; anonymous access is limited to 60 requests per hour.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Attach the raw API payloads to the report.
    #[arg(long)]
    raw: bool,

    /// Print verbose diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        let _ = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("interrupted, stopping");
                cancel.cancel();
            }
        });
    }

    let had_token = args.token.is_some();
    let options = AnalyzeOptions {
        token: args.token,
        cancel,
        include_raw: args.raw,
        ..AnalyzeOptions::default()
    };

    let result = analyze(&args.repo, &options, |update| {
        eprintln!("[{:>3}%] {}", update.percent, update.message);
    })
    .await;

    match result {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: failed to serialize report: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, AnalyzeError::RateLimited { .. }) && !had_token {
                eprintln!("hint: set GITHUB_TOKEN or pass --token to raise the rate limit");
            }
            ExitCode::FAILURE
        }
    }
}
