use crate::models::MatchResult;

const MAX_KEYWORDS_LISTED: usize = 5;
const MAX_SKILLS_LISTED: usize = 3;
const MAX_GAPS_LISTED: usize = 3;

/// Composite score below which the role itself is questioned.
const LOW_ALIGNMENT_THRESHOLD: f64 = 50.0;

/// Joins the first `limit` items, keeping their original order.
fn head(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds actionable suggestions from the gaps and flags of a scored result.
///
/// The order is fixed: keywords, skills, experience gaps, overqualification,
/// underqualification, overall alignment.
pub fn generate_recommendations(result: &MatchResult) -> Vec<String> {
    let mut recs = Vec::new();

    if !result.keywords_missing.is_empty() {
        recs.push(format!(
            "Add keywords to profile: {}",
            head(&result.keywords_missing, MAX_KEYWORDS_LISTED)
        ));
    }

    if !result.skills_missing.is_empty() {
        recs.push(format!(
            "Skills gap - consider: {}",
            head(&result.skills_missing, MAX_SKILLS_LISTED)
        ));
    }

    if !result.experience_gaps.is_empty() {
        recs.push(format!(
            "Experience gaps to address: {}",
            head(&result.experience_gaps, MAX_GAPS_LISTED)
        ));
    }

    if result.overqualified {
        recs.push("Consider right-sizing experience presentation".to_string());
        recs.push("Generate negotiation brief for leverage".to_string());
    }

    if result.underqualified {
        recs.push("Focus cover letter on transferable skills".to_string());
        recs.push("Address gaps proactively".to_string());
    }

    if result.total_score < LOW_ALIGNMENT_THRESHOLD {
        recs.push("Consider if this role aligns with career goals".to_string());
    }

    recs
}
