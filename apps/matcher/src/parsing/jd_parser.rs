//! JD Parser — extracts requirements, required years, and a title from a raw
//! job description.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::JobDocument;
use crate::parsing::bullet_text;

/// Lines that open a requirements block, matched case-insensitively.
static SECTION_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)requirements|qualifications|what you.?ll need|must have|required")
        .expect("valid section regex")
});

/// Lines that close a requirements block.
static SECTION_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)benefits|about us").expect("valid section end regex"));

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").expect("valid numbered regex"));

/// Tried in order; the first match wins.
static YEARS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\+?\s*years?\s*(?:of\s+)?experience",
        r"(?i)minimum\s+(?:of\s+)?(\d+)\s*years?",
        r"(?i)at\s+least\s+(\d+)\s*years?",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid years regex"))
    .collect()
});

/// Requirement text must be strictly longer than this...
const REQUIREMENT_MIN_LEN: usize = 10;
/// ...and strictly shorter than this.
const REQUIREMENT_MAX_LEN: usize = 200;

fn requirement_len_ok(text: &str) -> bool {
    let len = text.chars().count();
    len > REQUIREMENT_MIN_LEN && len < REQUIREMENT_MAX_LEN
}

/// Bullets under requirement-like headings plus numbered items, deduplicated
/// in document order.
///
/// A block opens on a line mentioning requirements / qualifications / etc. and
/// closes at the first blank line after a bullet, at the next Markdown heading,
/// or at a line mentioning benefits / about us.
pub fn extract_requirements(text: &str) -> Vec<String> {
    let mut requirements: Vec<String> = Vec::new();
    let mut in_section = false;
    let mut section_has_bullets = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if in_section {
            if let Some(item) = bullet_text(line, &['-', '•', '*']) {
                section_has_bullets = true;
                if requirement_len_ok(&item) && !requirements.contains(&item) {
                    requirements.push(item);
                }
                continue;
            }

            let closes = (trimmed.is_empty() && section_has_bullets)
                || trimmed.starts_with('#')
                || SECTION_END_RE.is_match(trimmed);
            if closes {
                in_section = false;
            }
        }

        if !in_section && SECTION_START_RE.is_match(trimmed) && !SECTION_END_RE.is_match(trimmed) {
            in_section = true;
            section_has_bullets = false;
        }
    }

    for caps in text.lines().filter_map(|line| NUMBERED_RE.captures(line)) {
        let item = caps[1].trim().to_string();
        if requirement_len_ok(&item) && !requirements.contains(&item) {
            requirements.push(item);
        }
    }

    requirements
}

/// Years of experience the posting asks for, if stated.
pub fn extract_years_required(text: &str) -> Option<u32> {
    YEARS_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|caps| caps[1].parse().ok())
}

/// Text of the first `# ` heading.
pub fn extract_title(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Builds a job document from Markdown / plain text. The company is never
/// inferred.
pub fn parse_job_description(text: &str) -> JobDocument {
    let requirements = extract_requirements(text);

    JobDocument {
        text: text.to_string(),
        title: extract_title(text),
        company: None,
        requirements: (!requirements.is_empty()).then_some(requirements),
        years_required: extract_years_required(text).map(i64::from),
    }
}
