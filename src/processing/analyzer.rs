//! Match engine composing scoring, gap analysis and strength identification

use crate::config::{CategoryConfig, Config};
use crate::error::Result;
use crate::processing::ats_matcher::{KeywordCoverageReport, KeywordCoverageScorer};
use crate::processing::categorizer::SkillCategorizer;
use crate::processing::gaps::{GapAnalyzer, SkillGap};
use crate::processing::scoring::{percentage, round2, ScoreCalculator};
use crate::processing::strengths::StrengthIdentifier;
use crate::records::{CandidateProfile, PositionDescription};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Confidence in [0, 1], rounded to two decimals
    pub confidence_score: f64,
    pub match_percentage: String,
    pub skill_gaps: Vec<SkillGap>,
    pub strengths: Vec<String>,
    pub is_match: bool,
}

/// Entry point of the scoring engine.
///
/// Holds only construction-time configuration; every method is a pure
/// function of its arguments, so one engine can be shared across threads.
pub struct MatchEngine {
    categorizer: SkillCategorizer,
    calculator: ScoreCalculator,
    strengths: StrengthIdentifier,
    keyword_scorer: KeywordCoverageScorer,
    max_gaps: usize,
}

impl MatchEngine {
    /// Create an engine with the gap window and category lists from `config`
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_categories(&config.categories, config.scoring.max_skill_gaps)
    }

    pub fn with_categories(categories: &CategoryConfig, max_gaps: usize) -> Result<Self> {
        Ok(Self {
            categorizer: SkillCategorizer::new(categories)?,
            calculator: ScoreCalculator::new(),
            strengths: StrengthIdentifier::new(),
            keyword_scorer: KeywordCoverageScorer::new(),
            max_gaps,
        })
    }

    /// Full match report; `is_match` compares the rounded confidence to `threshold`
    pub fn score_match(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        threshold: f64,
    ) -> MatchReport {
        let confidence_score = round2(self.calculator.score(candidate, position));
        let skill_gaps = self.find_gaps(candidate, position, self.max_gaps);
        let strengths = self.find_strengths(candidate, position);

        log::debug!(
            "scored '{}' against '{}': {:.2} ({} gaps, {} strengths)",
            candidate.name,
            position.title,
            confidence_score,
            skill_gaps.len(),
            strengths.len()
        );

        MatchReport {
            confidence_score,
            match_percentage: percentage(confidence_score),
            skill_gaps,
            strengths,
            is_match: confidence_score >= threshold,
        }
    }

    pub fn find_gaps(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        max_gaps: usize,
    ) -> Vec<SkillGap> {
        GapAnalyzer::new(&self.categorizer).gaps(candidate, position, max_gaps)
    }

    pub fn find_strengths(&self, candidate: &CandidateProfile, position: &PositionDescription) -> Vec<String> {
        self.strengths.strengths(candidate, position)
    }

    pub fn score_keyword_coverage(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        document: Option<&str>,
    ) -> KeywordCoverageReport {
        self.keyword_scorer.coverage(candidate, position, document)
    }
}
