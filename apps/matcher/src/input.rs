//! Input providers — load profile / job documents from disk, or capture
//! free text interactively.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{JobDocument, ProfileDocument};
use crate::parsing::jd_parser::parse_job_description;
use crate::parsing::profile_parser::parse_profile;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_to_string(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| AppError::io(path, e))
}

fn parse_json<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw).map_err(|source| AppError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a profile. `.json` files must decode as a `ProfileDocument`; anything
/// else is read as a Markdown / plain-text profile.
pub fn load_profile(path: &Path) -> Result<ProfileDocument, AppError> {
    let raw = read_to_string(path)?;
    let profile = if is_json(path) {
        parse_json(path, &raw)?
    } else {
        parse_profile(&raw)
    };

    info!(
        path = %path.display(),
        skills = profile.skills.as_ref().map_or(0, Vec::len),
        experience = profile.experience.as_ref().map_or(0, Vec::len),
        years = profile.years.unwrap_or(0),
        "Profile loaded"
    );
    Ok(profile)
}

/// Loads a job description, same format rules as `load_profile`.
pub fn load_job(path: &Path) -> Result<JobDocument, AppError> {
    let raw = read_to_string(path)?;
    let job = if is_json(path) {
        parse_json(path, &raw)?
    } else {
        parse_job_description(&raw)
    };

    info!(
        path = %path.display(),
        requirements = job.requirements.as_ref().map_or(0, Vec::len),
        years_required = job.years_required.unwrap_or(0),
        "Job description loaded"
    );
    Ok(job)
}

/// Reads lines until a blank line or end of input, joined with `\n`.
///
/// End of input terminates the block the same way a blank line does, so piped
/// input without a trailing blank line still works.
pub fn read_block<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut lines = Vec::new();
    let mut buf = String::new();

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| AppError::io("<stdin>", e))?;
        if read == 0 {
            debug!(lines = lines.len(), "End of input reached while reading block");
            break;
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    Ok(lines.join("\n"))
}
