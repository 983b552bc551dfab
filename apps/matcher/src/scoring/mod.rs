//! Profile-to-job matching pipeline.
//!
//! keyword extraction → dimension scorers → composite + tier → recommendations.
//! Everything here is pure and synchronous; `Matcher` holds no mutable state and
//! can be shared across threads.

pub mod composite;
pub mod experience;
pub mod keywords;
pub mod overlap;
pub mod qualification;
pub mod recommendations;
pub mod signals;

use tracing::debug;

use crate::models::{DimensionScores, JobDocument, MatchResult, ProfileDocument};
use crate::scoring::composite::{composite_score, determine_tier, WEIGHTS};
use crate::scoring::experience::classify_experience;
use crate::scoring::overlap::{keyword_match, skills_match};
use crate::scoring::qualification::assess_qualification;
use crate::scoring::recommendations::generate_recommendations;
use crate::scoring::signals::{
    FixedScorer, QuantifiedImpactScorer, SignalScorer, CULTURE_PLACEHOLDER, RECENCY_PLACEHOLDER,
};

/// Score used for skills / experience when either side of the comparison is absent.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Everything one analysis needs. Absent lists mean "not provided".
#[derive(Debug, Clone, Default)]
pub struct MatchRequest {
    pub profile_text: String,
    pub job_text: String,
    pub profile_skills: Option<Vec<String>>,
    pub job_requirements: Option<Vec<String>>,
    pub profile_experience: Option<Vec<String>>,
    pub years_experience: u32,
    pub job_years_required: u32,
}

impl MatchRequest {
    /// Text-only request, as captured in interactive mode.
    pub fn from_text(profile_text: impl Into<String>, job_text: impl Into<String>) -> Self {
        Self {
            profile_text: profile_text.into(),
            job_text: job_text.into(),
            ..Default::default()
        }
    }

    pub fn from_documents(profile: &ProfileDocument, job: &JobDocument) -> Self {
        Self {
            profile_text: profile.text.clone(),
            job_text: job.text.clone(),
            profile_skills: profile.skills.clone(),
            job_requirements: job.requirements.clone(),
            profile_experience: profile.experience.clone(),
            years_experience: known_years(profile.years),
            job_years_required: known_years(job.years_required),
        }
    }
}

/// Non-positive or absent year counts become 0, which disables the
/// qualification flags.
fn known_years(years: Option<i64>) -> u32 {
    years
        .filter(|&y| y > 0)
        .map_or(0, |y| u32::try_from(y).unwrap_or(u32::MAX))
}

/// Treats an empty list the same as an absent one.
fn provided(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

/// Runs the full pipeline. The signal dimensions are pluggable.
pub struct Matcher {
    impact: Box<dyn SignalScorer>,
    recency: Box<dyn SignalScorer>,
    culture: Box<dyn SignalScorer>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            impact: Box::new(QuantifiedImpactScorer),
            recency: Box::new(FixedScorer(RECENCY_PLACEHOLDER)),
            culture: Box::new(FixedScorer(CULTURE_PLACEHOLDER)),
        }
    }
}

impl Matcher {
    pub fn analyze(&self, request: &MatchRequest) -> MatchResult {
        let keywords = keyword_match(&request.profile_text, &request.job_text);

        let requirements = provided(&request.job_requirements);

        let skills = match (provided(&request.profile_skills), requirements) {
            (Some(profile_skills), Some(job_requirements)) => {
                Some(skills_match(profile_skills, job_requirements))
            }
            _ => None,
        };

        let experience = match (provided(&request.profile_experience), requirements) {
            (Some(profile_experience), Some(job_requirements)) => {
                Some(classify_experience(profile_experience, job_requirements))
            }
            _ => None,
        };

        let scores = DimensionScores {
            keyword_score: keywords.score,
            experience_score: experience.as_ref().map_or(NEUTRAL_SCORE, |e| e.score()),
            skills_score: skills.as_ref().map_or(NEUTRAL_SCORE, |s| s.score),
            impact_score: self.impact.score(&request.profile_text),
            recency_score: self.recency.score(&request.profile_text),
            culture_score: self.culture.score(&request.profile_text),
        };

        let flags = assess_qualification(request.years_experience, request.job_years_required);
        let total_score = composite_score(&scores, &WEIGHTS);
        let match_tier = determine_tier(total_score);

        debug!(
            keyword = scores.keyword_score,
            experience = scores.experience_score,
            skills = scores.skills_score,
            impact = scores.impact_score,
            impact_backend = self.impact.name(),
            recency_backend = self.recency.name(),
            culture_backend = self.culture.name(),
            total = total_score,
            tier = %match_tier,
            "Match analysis scored"
        );

        let skills = skills.unwrap_or_default();
        let experience = experience.unwrap_or_default();

        let mut result = MatchResult {
            scores,
            total_score,
            match_tier,
            keywords_matched: keywords.matched,
            keywords_missing: keywords.missing,
            skills_matched: skills.matched,
            skills_missing: skills.missing,
            experience_direct: experience.direct,
            experience_transferable: experience.transferable,
            experience_gaps: experience.gaps,
            overqualified: flags.overqualified,
            underqualified: flags.underqualified,
            recommendations: Vec::new(),
        };
        result.recommendations = generate_recommendations(&result);
        result
    }
}

/// Analyzes with the default scorers.
pub fn analyze(request: &MatchRequest) -> MatchResult {
    Matcher::default().analyze(request)
}
