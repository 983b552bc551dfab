//! Set-overlap scoring for the keyword and skills dimensions.
//!
//! Both dimensions use the same formula: the share of job-side terms that the
//! profile also covers, as a percentage. Outputs are sorted for reproducibility.

use std::collections::BTreeSet;

use crate::scoring::keywords::extract_keywords;

/// Score plus the matched / missing terms behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapScore {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Compares a profile-side set against a job-side set.
///
/// An empty job-side set scores 0.0: there is nothing to match against.
fn overlap(profile: &BTreeSet<String>, required: &BTreeSet<String>) -> OverlapScore {
    let matched: Vec<String> = required.intersection(profile).cloned().collect();
    let missing: Vec<String> = required.difference(profile).cloned().collect();

    let score = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    OverlapScore {
        score,
        matched,
        missing,
    }
}

/// Keyword alignment between free-text profile and job description.
pub fn keyword_match(profile_text: &str, job_text: &str) -> OverlapScore {
    let job_keywords = extract_keywords(job_text);
    let profile_keywords = extract_keywords(profile_text);
    overlap(&profile_keywords, &job_keywords)
}

/// Skills coverage between explicit skill lists, compared case-insensitively.
pub fn skills_match(profile_skills: &[String], job_requirements: &[String]) -> OverlapScore {
    let profile_set: BTreeSet<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();
    let required_set: BTreeSet<String> =
        job_requirements.iter().map(|r| r.to_lowercase()).collect();
    overlap(&profile_set, &required_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_job_text_against_itself_scores_100() {
        let job = "Senior Rust Engineer building distributed systems on Kubernetes with Kafka";
        let result = keyword_match(job, job);
        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_job_text_scores_zero() {
        let result = keyword_match("Rust and Python", "");
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_job_of_only_stop_words_scores_zero() {
        let result = keyword_match("Rust", "the team and the role");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_partial_keyword_overlap() {
        let result = keyword_match("rust python", "rust golang python kafka");
        assert!((result.score - 50.0).abs() < 1e-9, "score was {}", result.score);
        assert_eq!(result.matched, strings(&["python", "rust"]));
        assert_eq!(result.missing, strings(&["golang", "kafka"]));
    }

    #[test]
    fn test_profile_superset_still_100() {
        let result = keyword_match("rust python kafka terraform", "rust kafka");
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_skills_empty_requirements_zero_and_empty_lists() {
        let result = skills_match(&strings(&["rust", "python"]), &[]);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_skills_case_folded() {
        let result = skills_match(&strings(&["Python", "AWS"]), &strings(&["python", "aws", "Docker"]));
        assert!((result.score - 200.0 / 3.0).abs() < 1e-9, "score was {}", result.score);
        assert_eq!(result.matched, strings(&["aws", "python"]));
        assert_eq!(result.missing, strings(&["docker"]));
    }

    #[test]
    fn test_skills_duplicate_requirements_counted_once() {
        let result = skills_match(&strings(&["rust"]), &strings(&["Rust", "rust", "go"]));
        assert!((result.score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_skills_score_bounded() {
        let result = skills_match(&strings(&["a", "b", "c", "d"]), &strings(&["a"]));
        assert!(result.score <= 100.0);
        assert!(result.score >= 0.0);
    }
}
