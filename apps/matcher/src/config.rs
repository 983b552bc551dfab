use anyhow::{anyhow, Result};
use clap::ValueEnum;

use crate::render::ReportFormat;

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Raw `MATCHER_REPORT_FORMAT`, only parsed when `--format` is absent.
    pub report_format: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            report_format: std::env::var("MATCHER_REPORT_FORMAT").ok(),
        }
    }

    /// The command-line format wins; otherwise the environment, then Markdown.
    pub fn resolve_report_format(&self, cli_format: Option<ReportFormat>) -> Result<ReportFormat> {
        match (cli_format, self.report_format.as_deref()) {
            (Some(format), _) => Ok(format),
            (None, Some(raw)) => parse_report_format(raw),
            (None, None) => Ok(ReportFormat::default()),
        }
    }
}

fn parse_report_format(raw: &str) -> Result<ReportFormat> {
    ReportFormat::from_str(raw.trim(), true).map_err(|_| {
        anyhow!("MATCHER_REPORT_FORMAT must be 'markdown' or 'json', got '{raw}'")
    })
}
