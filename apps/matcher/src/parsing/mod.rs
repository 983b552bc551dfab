//! Heuristic parsers for profiles and job descriptions supplied as Markdown or
//! plain text rather than JSON documents.

pub mod jd_parser;
pub mod profile_parser;

/// Returns the text of a bullet line (`-`, `•`, or `*` marker), trimmed.
/// Horizontal rules such as `---` are not bullets.
fn bullet_text(line: &str, markers: &[char]) -> Option<String> {
    let trimmed = line.trim_start();
    let first = trimmed.chars().next()?;
    if !markers.contains(&first) {
        return None;
    }
    let rest = &trimmed[first.len_utf8()..];
    if rest.starts_with(first) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Lines of the `## <heading>` section, up to the next heading that starts
/// with one of `stop_prefixes` (case-insensitive).
fn section_lines<'a>(text: &'a str, heading: &str, stop_prefixes: &[&str]) -> Vec<&'a str> {
    let heading = heading.to_lowercase();
    let mut lines = text.lines();

    if !lines
        .by_ref()
        .any(|line| line.trim().to_lowercase().starts_with(&heading))
    {
        return Vec::new();
    }

    lines
        .take_while(|line| {
            let lowered = line.trim().to_lowercase();
            !stop_prefixes.iter().any(|stop| lowered.starts_with(stop))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_text_markers() {
        assert_eq!(bullet_text("- Rust", &['-', '•']), Some("Rust".to_string()));
        assert_eq!(bullet_text("  • Kafka ", &['-', '•']), Some("Kafka".to_string()));
        assert_eq!(bullet_text("* item", &['-', '•']), None);
        assert_eq!(bullet_text("* item", &['-', '•', '*']), Some("item".to_string()));
        assert_eq!(bullet_text("---", &['-']), None);
        assert_eq!(bullet_text("-", &['-']), None);
        assert_eq!(bullet_text("plain line", &['-']), None);
    }

    #[test]
    fn test_section_lines_stops_at_next_heading() {
        let text = "# Title\n## Skills\n- rust\n- go\n## Education\n- BSc";
        let lines = section_lines(text, "## skills", &["##"]);
        assert_eq!(lines, vec!["- rust", "- go"]);
    }

    #[test]
    fn test_section_lines_missing_heading() {
        assert!(section_lines("no headings here", "## skills", &["##"]).is_empty());
    }
}
