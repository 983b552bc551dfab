//! Profile Parser — extracts skills, experience bullets and total years from a
//! Markdown "master profile".
//!
//! Recognised layout:
//! - `# Master Profile: <name>`
//! - `## SKILLS INVENTORY` with one skill per bullet
//! - `## PROFESSIONAL EXPERIENCE` with achievement bullets and
//!   `Mon YYYY - Mon YYYY` / `Mon YYYY - Present` date ranges
//!
//! Well-known skills are also picked up anywhere in the text.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ProfileDocument;
use crate::parsing::{bullet_text, section_lines};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^#\s*Master Profile:\s*(.+)$").expect("valid name regex"));

/// Skill vocabularies matched anywhere in the profile, grouped by area.
static SKILL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Technical
        r"(?i)\b(?:python|javascript|typescript|react|node\.?js|sql|aws|azure|gcp|kubernetes|docker)\b",
        // AI/ML
        r"(?i)\b(?:machine learning|deep learning|nlp|computer vision|pytorch|tensorflow|claude|gemini|gpt|llm)\b",
        // Tools
        r"(?i)\b(?:salesforce|hubspot|jira|confluence|notion|figma|github|gitlab)\b",
        // Business
        r"(?i)\b(?:partner\s+operations|gtm|revenue\s+operations|crm|deal\s+registration)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid skill regex"))
    .collect()
});

const MONTH: &str = r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";

/// `Mon YYYY - Mon YYYY`, `Mon YYYY - YYYY`, or `Mon YYYY - Present`.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)\b{MONTH}\s+(\d{{4}})\s*[-–—]\s*(?:(present|current)|(?:{MONTH}\s+)?(\d{{4}}))"
    );
    Regex::new(&pattern).expect("valid date range regex")
});

const SKILL_MIN_LEN: usize = 3;
const SKILL_MAX_LEN: usize = 49;
const EXPERIENCE_MIN_LEN: usize = 21;

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Skills in first-seen order: vocabulary hits first, then inventory bullets.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();

    for pattern in SKILL_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            push_unique(&mut skills, m.as_str().trim().to_lowercase());
        }
    }

    for line in section_lines(text, "## skills inventory", &["##"]) {
        if let Some(skill) = bullet_text(line, &['-', '•']) {
            let skill = skill.to_lowercase();
            let len = skill.chars().count();
            if (SKILL_MIN_LEN..=SKILL_MAX_LEN).contains(&len) {
                push_unique(&mut skills, skill);
            }
        }
    }

    skills
}

/// Achievement bullets from the professional experience section.
pub fn extract_experience(text: &str) -> Vec<String> {
    section_lines(
        text,
        "## professional experience",
        &["## education", "## certifications"],
    )
    .into_iter()
    .filter_map(|line| bullet_text(line, &['-', '•']))
    .filter(|bullet| bullet.chars().count() >= EXPERIENCE_MIN_LEN)
    .collect()
}

fn month_number(name: &str) -> u32 {
    match name.to_lowercase().get(..3) {
        Some("jan") => 1,
        Some("feb") => 2,
        Some("mar") => 3,
        Some("apr") => 4,
        Some("may") => 5,
        Some("jun") => 6,
        Some("jul") => 7,
        Some("aug") => 8,
        Some("sep") => 9,
        Some("oct") => 10,
        Some("nov") => 11,
        Some("dec") => 12,
        _ => 1,
    }
}

/// Sums every date range in the text and rounds to whole years.
///
/// `Present` resolves to `today`. A bare end year (`Mar 2019 - 2021`) is read as
/// December of that year. Ranges that end before they start contribute nothing.
pub fn years_of_experience(text: &str, today: NaiveDate) -> u32 {
    let total_months: i64 = DATE_RANGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let start_month = month_number(caps.get(1)?.as_str());
            let start_year: i64 = caps.get(2)?.as_str().parse().ok()?;

            let (end_year, end_month) = if caps.get(3).is_some() {
                (i64::from(today.year()), today.month())
            } else {
                let end_year: i64 = caps.get(5)?.as_str().parse().ok()?;
                let end_month = caps.get(4).map_or(12, |m| month_number(m.as_str()));
                (end_year, end_month)
            };

            let months =
                (end_year - start_year) * 12 + i64::from(end_month) - i64::from(start_month);
            Some(months.max(0))
        })
        .sum();

    (total_months as f64 / 12.0).round() as u32
}

/// Builds a profile document from Markdown / plain text.
pub fn parse_profile(text: &str) -> ProfileDocument {
    parse_profile_as_of(text, Local::now().date_naive())
}

pub fn parse_profile_as_of(text: &str, today: NaiveDate) -> ProfileDocument {
    let name = NAME_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());

    let skills = extract_skills(text);
    let experience = extract_experience(text);
    let years = years_of_experience(text, today);

    ProfileDocument {
        text: text.to_string(),
        name,
        skills: (!skills.is_empty()).then_some(skills),
        experience: (!experience.is_empty()).then_some(experience),
        years: (years > 0).then_some(i64::from(years)),
    }
}
