//! Profile signal scorers — pluggable scorers for the impact, recency and
//! culture dimensions.
//!
//! Defaults are deliberately coarse stand-ins:
//! - `QuantifiedImpactScorer`: counts number-like tokens as a proxy for
//!   quantified achievements. It does not understand what the numbers mean.
//! - `FixedScorer`: returns a constant. Recency (70) and culture (60) have no
//!   real signal yet; a date-parsing or sentiment scorer would replace them.
//!
//! `Matcher` carries each dimension as `Box<dyn SignalScorer>`, so a real scorer
//! can be swapped in without touching the aggregator.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder recency score until employment dates are parsed.
pub const RECENCY_PLACEHOLDER: f64 = 70.0;
/// Placeholder culture score until culture signals are analysed.
pub const CULTURE_PLACEHOLDER: f64 = 60.0;

/// Points awarded per number-like token.
const IMPACT_POINTS_PER_METRIC: f64 = 10.0;
const MAX_SCORE: f64 = 100.0;

/// A number, optionally followed by `%`, `$`, `K`, `M` or `B`.
static METRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[%$KMB]?").expect("valid metric regex"));

/// Scores one dimension from the profile text, in [0, 100].
pub trait SignalScorer: Send + Sync {
    fn score(&self, profile_text: &str) -> f64;

    /// Backend label, logged alongside the score.
    fn name(&self) -> &'static str;
}

/// Impact heuristic: `min(100, metric_count × 10)`.
pub struct QuantifiedImpactScorer;

impl SignalScorer for QuantifiedImpactScorer {
    fn score(&self, profile_text: &str) -> f64 {
        let metrics = count_metrics(profile_text);
        (metrics as f64 * IMPACT_POINTS_PER_METRIC).min(MAX_SCORE)
    }

    fn name(&self) -> &'static str {
        "metric-count"
    }
}

/// Always returns the wrapped value.
pub struct FixedScorer(pub f64);

impl SignalScorer for FixedScorer {
    fn score(&self, _profile_text: &str) -> f64 {
        self.0
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

pub fn count_metrics(text: &str) -> usize {
    METRIC_RE.find_iter(text).count()
}
