//! Analysis flows behind each command

use crate::config::{Config, ScoringConfig};
use crate::error::Result;
use crate::llm::CareerAdvisor;
use crate::output::FitReport;
use crate::processing::MatchEngine;
use crate::records::{CandidateProfile, PositionDescription};
use log::info;

pub struct FitPipeline {
    engine: MatchEngine,
    advisor: CareerAdvisor,
    scoring: ScoringConfig,
}

impl FitPipeline {
    pub fn new(config: &Config, advisor: CareerAdvisor) -> Result<Self> {
        Ok(Self {
            engine: MatchEngine::new(config)?,
            advisor,
            scoring: config.scoring.clone(),
        })
    }

    fn report(&self, candidate: &CandidateProfile, position: &PositionDescription) -> FitReport {
        FitReport::new(candidate, position, self.advisor.generator_name())
    }

    /// Match report plus recommendation
    pub async fn analyze(&self, candidate: &CandidateProfile, position: &PositionDescription) -> FitReport {
        let report = self
            .engine
            .score_match(candidate, position, self.scoring.match_threshold);
        let recommendation = self.advisor.recommend(candidate, position, &report).await;

        self.report(candidate, position)
            .with_match(report)
            .with_recommendation(recommendation)
    }

    /// Keyword coverage of `document`, or of the stored resume text when absent
    pub fn keyword_coverage(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        document: Option<&str>,
    ) -> FitReport {
        let coverage = self.engine.score_keyword_coverage(candidate, position, document);
        self.report(candidate, position).with_keyword_coverage(coverage)
    }

    pub async fn optimized_resume(&self, candidate: &CandidateProfile, position: &PositionDescription) -> FitReport {
        let resume = self.advisor.optimized_resume(candidate, position).await;
        self.report(candidate, position).with_optimized_resume(resume)
    }

    /// Match, recommendation, optimized resume, then keyword coverage of that resume
    pub async fn full_analysis(&self, candidate: &CandidateProfile, position: &PositionDescription) -> FitReport {
        info!("Running full analysis for '{}' / '{}'", candidate.name, position.title);

        let analysis = self.analyze(candidate, position).await;
        let resume = self.advisor.optimized_resume(candidate, position).await;
        let coverage = self.engine.score_keyword_coverage(candidate, position, Some(&resume));

        analysis
            .with_optimized_resume(resume)
            .with_keyword_coverage(coverage)
            .with_verdict(self.scoring.ready_ats_threshold)
    }
}
