use crate::render::MatchReport;
use crate::scoring::composite::{weighted_dimensions, WEIGHTS};

/// Items shown per experience bucket.
const EXPERIENCE_DISPLAY_LIMIT: usize = 5;
/// Items shown per skills list.
const SKILLS_DISPLAY_LIMIT: usize = 10;

fn bullet_list(items: &[String], limit: usize, empty: &str) -> String {
    if items.is_empty() {
        return format!("- {empty}");
    }
    items
        .iter()
        .take(limit)
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn inline_list(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the Markdown match report.
pub fn format_report(report: &MatchReport<'_>) -> String {
    let result = report.result;
    let mut out = String::new();

    out.push_str(&format!("# Match Report: {} @ {}\n\n", report.job_title, report.company));
    out.push_str(&format!(
        "## Overall Score: {:.1}% — {} {}\n\n",
        result.total_score,
        result.match_tier.marker(),
        result.match_tier.label()
    ));

    out.push_str("### Dimension Breakdown\n\n");
    out.push_str("| Dimension | Score | Weight | Weighted |\n");
    out.push_str("|-----------|-------|--------|----------|\n");
    for dim in weighted_dimensions(&result.scores, &WEIGHTS) {
        out.push_str(&format!(
            "| {} | {:.1}% | {:.0}% | {:.1} |\n",
            dim.name,
            dim.score,
            dim.weight * 100.0,
            dim.weighted
        ));
    }

    out.push_str("\n### Experience Classification\n\n");
    for (heading, items) in [
        ("Direct Match", &result.experience_direct),
        ("Transferable", &result.experience_transferable),
        ("Gaps", &result.experience_gaps),
    ] {
        out.push_str(&format!(
            "**{heading} ({}):**\n{}\n\n",
            items.len(),
            bullet_list(items, EXPERIENCE_DISPLAY_LIMIT, "None identified")
        ));
    }

    out.push_str("### Skills Analysis\n\n");
    out.push_str(&format!(
        "**Matched:** {}\n\n",
        inline_list(&result.skills_matched, SKILLS_DISPLAY_LIMIT)
    ));
    out.push_str(&format!(
        "**Missing:** {}\n\n",
        inline_list(&result.skills_missing, SKILLS_DISPLAY_LIMIT)
    ));

    out.push_str("### Flags\n\n");
    if result.overqualified {
        out.push_str("⚠️ **Overqualified** — Consider negotiation leverage\n");
    }
    if result.underqualified {
        out.push_str("⚠️ **Underqualified** — Address gaps in cover letter\n");
    }
    if !result.overqualified && !result.underqualified {
        out.push_str("None\n");
    }

    out.push_str("\n### Recommendations\n\n");
    out.push_str(&format!(
        "{}\n\n",
        bullet_list(&result.recommendations, usize::MAX, "No specific recommendations")
    ));

    out.push_str(&format!("---\n*Generated: {}*\n", report.generated_at.to_rfc3339()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchResult, MatchTier};
    use crate::scoring::{analyze, MatchRequest};
    use chrono::{TimeZone, Utc};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn render(result: &MatchResult) -> String {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        format_report(&MatchReport::new(result, Some("Backend Engineer"), Some("Acme"), generated_at))
    }

    fn sample_result() -> MatchResult {
        analyze(&MatchRequest {
            profile_skills: Some(strings(&["python", "aws"])),
            job_requirements: Some(strings(&["python", "aws", "docker"])),
            ..MatchRequest::from_text(
                "Python developer with AWS and Docker experience",
                "Python developer with AWS and Docker experience",
            )
        })
    }

    #[test]
    fn test_header_and_tier_marker() {
        let mut result = sample_result();
        result.total_score = 80.0;
        result.match_tier = MatchTier::StrongMatch;
        let md = render(&result);
        assert!(md.starts_with("# Match Report: Backend Engineer @ Acme\n"));
        assert!(md.contains("## Overall Score: 80.0% — ✅ STRONG MATCH"), "{md}");
    }

    #[test]
    fn test_dimension_table_rows() {
        let md = render(&sample_result());
        assert!(md.contains("| Keyword Alignment | 100.0% | 25% | 25.0 |"), "{md}");
        assert!(md.contains("| Skills Coverage | 66.7% | 20% | 13.3 |"), "{md}");
        assert!(md.contains("| Recency Match | 70.0% | 10% | 7.0 |"));
        assert!(md.contains("| Culture Signals | 60.0% | 5% | 3.0 |"));
    }

    #[test]
    fn test_empty_experience_placeholder() {
        let md = render(&sample_result());
        assert!(md.contains("**Direct Match (0):**\n- None identified"), "{md}");
        assert!(md.contains("**Gaps (0):**\n- None identified"));
    }

    #[test]
    fn test_experience_lists_capped_at_five() {
        let mut result = sample_result();
        result.experience_gaps = (1..=7).map(|n| format!("gap {n}")).collect();
        let md = render(&result);
        assert!(md.contains("**Gaps (7):**"));
        assert!(md.contains("- gap 5"));
        assert!(!md.contains("- gap 6"));
    }

    #[test]
    fn test_skills_lists_capped_at_ten() {
        let mut result = sample_result();
        result.skills_missing = (1..=12).map(|n| format!("s{n}")).collect();
        let md = render(&result);
        assert!(md.contains("**Missing:** s1, s2, s3, s4, s5, s6, s7, s8, s9, s10\n"), "{md}");
        assert!(md.contains("**Matched:** aws, python"));
    }

    #[test]
    fn test_flags_section() {
        let mut result = sample_result();
        assert!(render(&result).contains("### Flags\n\nNone\n"));
        result.underqualified = true;
        let md = render(&result);
        assert!(md.contains("**Underqualified**"));
        assert!(!md.contains("**Overqualified**"));
    }

    #[test]
    fn test_sections_in_order_with_blank_line_separation() {
        let md = render(&sample_result());
        let headings = [
            "\n\n### Dimension Breakdown\n\n| Dimension |",
            "|\n\n### Experience Classification\n\n**Direct Match",
            "\n\n### Skills Analysis\n\n**Matched:**",
            "\n\n### Flags\n\n",
            "\n\n### Recommendations\n\n- ",
            "\n\n---\n*Generated:",
        ];
        let mut cursor = 0;
        for heading in headings {
            let at = md[cursor..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing {heading:?} after byte {cursor} in {md}"));
            cursor += at + heading.len();
        }
    }

    #[test]
    fn test_recommendations_and_footer() {
        let md = render(&sample_result());
        assert!(md.contains("- Skills gap - consider: docker"), "{md}");
        assert!(md.ends_with("*Generated: 2024-03-01T12:00:00+00:00*\n"), "{md}");

        let mut clean = sample_result();
        clean.recommendations.clear();
        assert!(render(&clean).contains("- No specific recommendations"));
    }
}
