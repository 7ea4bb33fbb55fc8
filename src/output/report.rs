//! Report structures combining scoring results with generated prose

use crate::processing::{KeywordCoverageReport, MatchReport};
use crate::records::{CandidateProfile, PositionDescription};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything produced for one candidate/position pair.
///
/// Sections are optional so that each command fills in only what it computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub metadata: ReportMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_report: Option<MatchReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_resume: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_coverage: Option<KeywordCoverageReport>,

    /// Set by the full analysis only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_to_apply: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub candidate_name: String,
    pub position_title: String,
    pub organization: String,
    /// Text generator used for prose sections
    pub generator: String,
}

impl FitReport {
    pub fn new(candidate: &CandidateProfile, position: &PositionDescription, generator: &str) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                candidate_name: candidate.name.clone(),
                position_title: position.title.clone(),
                organization: position.organization.clone(),
                generator: generator.to_string(),
            },
            match_report: None,
            recommendation: None,
            optimized_resume: None,
            keyword_coverage: None,
            ready_to_apply: None,
        }
    }

    pub fn with_match(mut self, report: MatchReport) -> Self {
        self.match_report = Some(report);
        self
    }

    pub fn with_recommendation(mut self, recommendation: String) -> Self {
        self.recommendation = Some(recommendation);
        self
    }

    pub fn with_optimized_resume(mut self, resume: String) -> Self {
        self.optimized_resume = Some(resume);
        self
    }

    pub fn with_keyword_coverage(mut self, coverage: KeywordCoverageReport) -> Self {
        self.keyword_coverage = Some(coverage);
        self
    }

    /// Record the verdict: a match whose keyword coverage reaches `ats_threshold`.
    /// Left unset while either section is missing.
    pub fn with_verdict(mut self, ats_threshold: f64) -> Self {
        self.ready_to_apply = match (&self.match_report, &self.keyword_coverage) {
            (Some(report), Some(coverage)) => Some(report.is_match && coverage.ats_score >= ats_threshold),
            _ => None,
        };
        self
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Label for a score in [0, 1]
pub fn score_label(score: f64) -> &'static str {
    match (score * 100.0).round() as i64 {
        80..=100 => "Excellent",
        65..=79 => "Good",
        50..=64 => "Fair",
        _ => "Weak",
    }
}
