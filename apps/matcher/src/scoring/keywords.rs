//! Keyword extraction — turns free text into a set of normalized significant terms.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that carry no signal for matching: English function words plus
/// filler that appears in nearly every job posting.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "need",
    "we", "you", "your", "our", "their", "this", "that", "these", "those", "it", "its", "they",
    "them", "he", "she", "his", "her", "who", "which", "what", "when", "where", "why", "how",
    "all", "each", "every", "both", "few", "more", "most", "other", "some", "such", "no", "not",
    "only", "same", "so", "than", "too", "very", "just", "also", "now", "about", "into",
    "through", "during", "before", "after", "above", "below", "between", "under", "again",
    "further", "then", "once", "here", "there", "any", "etc", "including", "ability",
    "experience", "strong", "excellent", "work", "working", "team", "teams", "role", "position",
    "opportunity",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// A letter followed by letters, digits, `+`, `#`, `.` or `-`.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z][a-zA-Z0-9+#.-]*\b").expect("valid token regex"));

/// Two or more consecutive capitalized words, e.g. "Google Cloud Platform".
static PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").expect("valid phrase regex")
});

/// Minimum token length (exclusive) for a single word to count as a keyword.
const MIN_TOKEN_LEN: usize = 2;

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Extracts the set of significant keywords from `text`.
///
/// Single tokens are lowercased, stop-word filtered and must be longer than two
/// characters. Capitalized multi-word phrases are added as compound keywords
/// (lowercased, not stop-word filtered).
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();

    let mut keywords: BTreeSet<String> = TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.len() > MIN_TOKEN_LEN && !is_stop_word(w))
        .map(str::to_string)
        .collect();

    keywords.extend(PHRASE_RE.find_iter(text).map(|m| m.as_str().to_lowercase()));

    keywords
}
