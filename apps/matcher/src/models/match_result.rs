use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete match category derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTier {
    StrongMatch,
    ModerateMatch,
    WeakMatch,
    NoMatch,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::StrongMatch => "STRONG_MATCH",
            MatchTier::ModerateMatch => "MODERATE_MATCH",
            MatchTier::WeakMatch => "WEAK_MATCH",
            MatchTier::NoMatch => "NO_MATCH",
        }
    }

    /// Human label: the tier code with underscores replaced by spaces.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Marker symbol shown next to the tier in reports.
    pub fn marker(&self) -> &'static str {
        match self {
            MatchTier::StrongMatch => "✅",
            MatchTier::ModerateMatch => "⚠️",
            MatchTier::WeakMatch => "🟡",
            MatchTier::NoMatch => "🚫",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six dimension scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub keyword_score: f64,
    pub experience_score: f64,
    pub skills_score: f64,
    pub impact_score: f64,
    pub recency_score: f64,
    pub culture_score: f64,
}

/// Snapshot produced by one profile-to-job analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub scores: DimensionScores,

    pub total_score: f64,
    pub match_tier: MatchTier,

    pub keywords_matched: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub experience_direct: Vec<String>,
    pub experience_transferable: Vec<String>,
    pub experience_gaps: Vec<String>,

    /// At most one of the two flags is set.
    pub overqualified: bool,
    pub underqualified: bool,

    pub recommendations: Vec<String>,
}
