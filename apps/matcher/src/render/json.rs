use crate::errors::AppError;
use crate::render::MatchReport;

/// Pretty-printed JSON; dimension scores sit at the top level of `result`.
pub fn format_report(report: &MatchReport<'_>) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}
