//! Report rendering — turns a `MatchResult` into Markdown or JSON and writes it
//! to a file or standard output.

pub mod json;
pub mod markdown;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::MatchResult;

/// Placeholder for a missing job title or company.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// A scored result plus the context needed to present it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport<'a> {
    pub job_title: &'a str,
    pub company: &'a str,
    pub generated_at: DateTime<Utc>,
    pub result: &'a MatchResult,
}

impl<'a> MatchReport<'a> {
    pub fn new(
        result: &'a MatchResult,
        job_title: Option<&'a str>,
        company: Option<&'a str>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            job_title: job_title.unwrap_or(UNKNOWN),
            company: company.unwrap_or(UNKNOWN),
            generated_at,
            result,
        }
    }
}

pub fn render(report: &MatchReport<'_>, format: ReportFormat) -> Result<String, AppError> {
    match format {
        ReportFormat::Markdown => Ok(markdown::format_report(report)),
        ReportFormat::Json => json::format_report(report),
    }
}

/// Writes the rendered report to `output`, or prints it when no path is given.
pub fn write_report(rendered: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| AppError::io(path, e))?;
            info!(path = %path.display(), bytes = rendered.len(), "Report written");
            println!("Report saved to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
