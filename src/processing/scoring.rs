//! Weighted confidence scoring
//!
//! Required-skill coverage dominates the score; interest alignment and
//! academic standing only separate otherwise similar candidates:
//!
//! | component          | weight |
//! |--------------------|--------|
//! | required coverage  | 0.6    |
//! | preferred coverage | 0.3    |
//! | interest alignment | 0.2    |
//! | academic standing  | 0.1    |
//!
//! The sum is capped at 1.0.

use crate::processing::skill_matcher::SkillSet;
use crate::records::candidate::ACADEMIC_SCALE_MAX;
use crate::records::{CandidateProfile, PositionDescription};
use serde::{Deserialize, Serialize};

pub const REQUIRED_WEIGHT: f64 = 0.6;
pub const PREFERRED_WEIGHT: f64 = 0.3;
pub const INTEREST_WEIGHT: f64 = 0.2;
pub const ACADEMIC_WEIGHT: f64 = 0.1;

/// Intermediate values of one confidence computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub required_matches: usize,
    pub preferred_matches: usize,
    pub skill_coverage: f64,
    pub interest_score: f64,
    pub academic_component: f64,
    pub confidence: f64,
}

/// Combines skill coverage, interest alignment and academic standing
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Unrounded confidence in [0, 1]
    pub fn score(&self, candidate: &CandidateProfile, position: &PositionDescription) -> f64 {
        self.breakdown(candidate, position).confidence
    }

    pub fn breakdown(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
    ) -> ScoreBreakdown {
        let skills = SkillSet::new(&candidate.skills);

        let required_matches = skills.count_possessed(&position.required_skills);
        let preferred_matches = skills.count_possessed(&position.preferred_skills);

        // No requirements means no coverage at all, preferred skills included
        let skill_coverage = if position.required_skills.is_empty() {
            0.0
        } else {
            ratio(required_matches, position.required_skills.len()) * REQUIRED_WEIGHT
                + ratio(preferred_matches, position.preferred_skills.len()) * PREFERRED_WEIGHT
        };

        let interest_score = if interests_align(candidate, position) {
            INTEREST_WEIGHT
        } else {
            0.0
        };

        let academic_component = unit_clamp(candidate.academic_score / ACADEMIC_SCALE_MAX) * ACADEMIC_WEIGHT;

        let confidence = unit_clamp(skill_coverage + interest_score + academic_component);

        log::debug!(
            "confidence {:.4} (required {}/{}, preferred {}/{}, interest {}, academic {:.4})",
            confidence,
            required_matches,
            position.required_skills.len(),
            preferred_matches,
            position.preferred_skills.len(),
            interest_score,
            academic_component,
        );

        ScoreBreakdown {
            required_matches,
            preferred_matches,
            skill_coverage,
            interest_score,
            academic_component,
            confidence,
        }
    }
}

/// Whether any candidate interest occurs inside the position description
pub fn interests_align(candidate: &CandidateProfile, position: &PositionDescription) -> bool {
    let description = position.description_text().to_lowercase();
    candidate
        .interests
        .iter()
        .any(|interest| description.contains(&interest.to_lowercase()))
}

/// `matched / total`, or 0 when there is nothing to match against
fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// Clamp into [0, 1]; NaN collapses to 0
fn unit_clamp(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Integer percentage string such as "39%"
pub fn percentage(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}
