//! Experience classification — buckets each job requirement as direct,
//! transferable, or gap by lexical overlap with the candidate's experience.

use std::collections::HashSet;

/// Ratio above which a requirement counts as a direct match.
const DIRECT_THRESHOLD: f64 = 0.7;
/// Ratio above which a requirement counts as transferable.
const TRANSFERABLE_THRESHOLD: f64 = 0.3;
/// Credit given to a transferable requirement relative to a direct one.
const TRANSFERABLE_WEIGHT: f64 = 0.6;

/// Which bucket a requirement lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceFit {
    Direct,
    Transferable,
    Gap,
}

/// Requirements partitioned into the three buckets, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceClassification {
    pub direct: Vec<String>,
    pub transferable: Vec<String>,
    pub gaps: Vec<String>,
}

impl ExperienceClassification {
    pub fn total(&self) -> usize {
        self.direct.len() + self.transferable.len() + self.gaps.len()
    }

    /// Direct matches count fully, transferable at 60%, gaps not at all.
    pub fn score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        let direct = self.direct.len() as f64 / total;
        let transferable = self.transferable.len() as f64 / total * TRANSFERABLE_WEIGHT;
        (direct + transferable) * 100.0
    }
}

/// Share of the requirement's distinct whitespace tokens found anywhere in the
/// experience text. Matching is substring-based, so "kube" in a requirement
/// matches "kubernetes" in the experience.
pub fn match_ratio(requirement: &str, experience_text: &str) -> f64 {
    let lowered = requirement.to_lowercase();
    let tokens: HashSet<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let hits = tokens
        .iter()
        .filter(|token| experience_text.contains(**token))
        .count();
    hits as f64 / tokens.len() as f64
}

pub fn classify_ratio(ratio: f64) -> ExperienceFit {
    if ratio > DIRECT_THRESHOLD {
        ExperienceFit::Direct
    } else if ratio > TRANSFERABLE_THRESHOLD {
        ExperienceFit::Transferable
    } else {
        ExperienceFit::Gap
    }
}

/// Classifies every requirement against the joined, lowercased experience text.
/// Every requirement lands in exactly one bucket.
pub fn classify_experience(
    profile_experience: &[String],
    job_requirements: &[String],
) -> ExperienceClassification {
    let experience_text = profile_experience.join(" ").to_lowercase();
    let mut classification = ExperienceClassification::default();

    for requirement in job_requirements {
        let bucket = match classify_ratio(match_ratio(requirement, &experience_text)) {
            ExperienceFit::Direct => &mut classification.direct,
            ExperienceFit::Transferable => &mut classification.transferable,
            ExperienceFit::Gap => &mut classification.gaps,
        };
        bucket.push(requirement.clone());
    }

    classification
}
