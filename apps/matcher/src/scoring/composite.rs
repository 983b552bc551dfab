use serde::{Deserialize, Serialize};

use crate::models::{DimensionScores, MatchTier};

/// Per-dimension weights of the composite score. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub keyword: f64,
    pub experience: f64,
    pub skills: f64,
    pub impact: f64,
    pub recency: f64,
    pub culture: f64,
}

/// The fixed weighting used for every analysis.
pub const WEIGHTS: DimensionWeights = DimensionWeights {
    keyword: 0.25,
    experience: 0.25,
    skills: 0.20,
    impact: 0.15,
    recency: 0.10,
    culture: 0.05,
};

impl DimensionWeights {
    pub fn total(&self) -> f64 {
        self.keyword + self.experience + self.skills + self.impact + self.recency + self.culture
    }
}

/// One row of the dimension breakdown: label, score, weight, contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedDimension {
    pub name: &'static str,
    pub score: f64,
    pub weight: f64,
    pub weighted: f64,
}

/// Dimension breakdown in display order.
pub fn weighted_dimensions(
    scores: &DimensionScores,
    weights: &DimensionWeights,
) -> Vec<WeightedDimension> {
    [
        ("Keyword Alignment", scores.keyword_score, weights.keyword),
        ("Experience Relevance", scores.experience_score, weights.experience),
        ("Skills Coverage", scores.skills_score, weights.skills),
        ("Quantified Impact", scores.impact_score, weights.impact),
        ("Recency Match", scores.recency_score, weights.recency),
        ("Culture Signals", scores.culture_score, weights.culture),
    ]
    .into_iter()
    .map(|(name, score, weight)| WeightedDimension {
        name,
        score,
        weight,
        weighted: score * weight,
    })
    .collect()
}

/// Weighted sum of the six dimension scores.
pub fn composite_score(scores: &DimensionScores, weights: &DimensionWeights) -> f64 {
    debug_assert!((weights.total() - 1.0).abs() < 1e-9, "weights must sum to 1.0");
    weighted_dimensions(scores, weights)
        .iter()
        .map(|d| d.weighted)
        .sum()
}

/// Step function over the composite score. Each tier includes its lower bound.
pub fn determine_tier(score: f64) -> MatchTier {
    if score >= 75.0 {
        MatchTier::StrongMatch
    } else if score >= 50.0 {
        MatchTier::ModerateMatch
    } else if score >= 25.0 {
        MatchTier::WeakMatch
    } else {
        MatchTier::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> DimensionScores {
        DimensionScores {
            keyword_score: score,
            experience_score: score,
            skills_score: score,
            impact_score: score,
            recency_score: score,
            culture_score: score,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((WEIGHTS.total() - 1.0).abs() < 1e-12, "total was {}", WEIGHTS.total());
    }

    #[test]
    fn test_composite_full_and_empty() {
        assert!((composite_score(&uniform(100.0), &WEIGHTS) - 100.0).abs() < 1e-9);
        assert_eq!(composite_score(&uniform(0.0), &WEIGHTS), 0.0);
    }

    #[test]
    fn test_composite_bounded_for_valid_inputs() {
        for k in [0.0, 13.0, 50.0, 99.9, 100.0] {
            for e in [0.0, 42.0, 100.0] {
                let scores = DimensionScores {
                    keyword_score: k,
                    experience_score: e,
                    skills_score: 100.0 - k,
                    impact_score: e,
                    recency_score: 70.0,
                    culture_score: 60.0,
                };
                let total = composite_score(&scores, &WEIGHTS);
                assert!((0.0..=100.0 + 1e-9).contains(&total), "total was {total}");
            }
        }
    }

    #[test]
    fn test_composite_mixed() {
        let scores = DimensionScores {
            keyword_score: 80.0,
            experience_score: 40.0,
            skills_score: 50.0,
            impact_score: 100.0,
            recency_score: 70.0,
            culture_score: 60.0,
        };
        // 20 + 10 + 10 + 15 + 7 + 3 = 65
        let total = composite_score(&scores, &WEIGHTS);
        assert!((total - 65.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (0.0, MatchTier::NoMatch),
            (24.9, MatchTier::NoMatch),
            (25.0, MatchTier::WeakMatch),
            (49.9, MatchTier::WeakMatch),
            (50.0, MatchTier::ModerateMatch),
            (74.9, MatchTier::ModerateMatch),
            (75.0, MatchTier::StrongMatch),
            (100.0, MatchTier::StrongMatch),
        ];
        for (score, expected) in cases {
            assert_eq!(determine_tier(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_breakdown_rows_in_display_order() {
        let rows = weighted_dimensions(&uniform(40.0), &WEIGHTS);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "Keyword Alignment",
                "Experience Relevance",
                "Skills Coverage",
                "Quantified Impact",
                "Recency Match",
                "Culture Signals"
            ]
        );
        assert!((rows[0].weighted - 10.0).abs() < 1e-9);
    }
}
