mod config;
mod errors;
mod input;
mod models;
mod parsing;
mod render;
mod scoring;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::input::{load_job, load_profile, read_block};
use crate::render::{render, write_report, MatchReport, ReportFormat};
use crate::scoring::{analyze, MatchRequest};

/// Score how well a candidate profile matches a job description.
#[derive(Debug, Parser)]
#[command(name = "matcher", version, about)]
struct Cli {
    /// Profile document (.json, or Markdown / plain text)
    #[arg(long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Job description document (.json, or Markdown / plain text)
    #[arg(long, value_name = "PATH")]
    job: Option<PathBuf>,

    /// Paste profile and job text on standard input
    #[arg(long)]
    interactive: bool,

    /// Write the report to this file instead of standard output
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Report format [default: MATCHER_REPORT_FORMAT or markdown]
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let batch = cli.profile.as_deref().zip(cli.job.as_deref());
    if !cli.interactive && batch.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let format = config.resolve_report_format(cli.format)?;

    let outcome = match batch {
        Some((profile, job)) if !cli.interactive => {
            info!(?format, "Starting batch analysis");
            run_batch(profile, job, format, cli.output.as_deref())
        }
        _ => {
            info!(?format, "Starting interactive session");
            run_interactive(format, cli.output.as_deref())
        }
    };

    if let Err(err) = &outcome {
        error!(code = err.code(), "{err}");
    }
    Ok(outcome?)
}

fn run_batch(
    profile_path: &Path,
    job_path: &Path,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let profile = load_profile(profile_path)?;
    let job = load_job(job_path)?;
    info!(
        candidate = profile.name.as_deref().unwrap_or("unnamed"),
        title = job.title.as_deref().unwrap_or("untitled"),
        "Analyzing match"
    );

    let result = analyze(&MatchRequest::from_documents(&profile, &job));
    info!(total = result.total_score, tier = %result.match_tier, "Analysis complete");

    let report = MatchReport::new(&result, job.title.as_deref(), job.company.as_deref(), Utc::now());
    write_report(&render(&report, format)?, output)
}

fn run_interactive(format: ReportFormat, output: Option<&Path>) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("=== Match Score Calculator ===\n");
    println!("Paste profile text (end with empty line):");
    flush_stdout()?;
    let profile_text = read_block(&mut reader)?;

    println!("Paste job description (end with empty line):");
    flush_stdout()?;
    let job_text = read_block(&mut reader)?;

    let result = analyze(&MatchRequest::from_text(profile_text, job_text));
    info!(total = result.total_score, tier = %result.match_tier, "Analysis complete");

    let report = MatchReport::new(&result, None, None, Utc::now());
    println!();
    write_report(&render(&report, format)?, output)
}

fn flush_stdout() -> Result<(), AppError> {
    io::stdout().flush().map_err(|e| AppError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_batch_flags() {
        let cli = Cli::try_parse_from([
            "matcher", "--profile", "p.json", "--job", "j.md", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.profile, Some(PathBuf::from("p.json")));
        assert_eq!(cli.job, Some(PathBuf::from("j.md")));
        assert_eq!(cli.format, Some(ReportFormat::Json));
        assert!(!cli.interactive);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["matcher", "--format", "html"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_batch_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("profile.json");
        let job = dir.path().join("job.json");
        let out = dir.path().join("report.json");
        std::fs::write(&profile, r#"{"text": "Rust engineer", "skills": ["rust"]}"#).unwrap();
        std::fs::write(
            &job,
            r#"{"text": "Rust engineer", "title": "Engineer", "requirements": ["rust", "go"]}"#,
        )
        .unwrap();

        run_batch(&profile, &job, ReportFormat::Json, Some(&out)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["job_title"], "Engineer");
        assert_eq!(value["company"], "Unknown");
        assert_eq!(value["result"]["skills_score"], 50.0);
    }
}
