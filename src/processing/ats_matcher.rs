//! ATS (Applicant Tracking System) keyword coverage scoring

use crate::processing::scoring::{percentage, round2};
use crate::records::{CandidateProfile, PositionDescription};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How much of a position's skill vocabulary appears literally in a document.
///
/// The keyword sets are unordered by nature; they are kept sorted so that
/// identical inputs always serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCoverageReport {
    pub ats_score: f64,
    pub ats_percentage: String,
    pub matched_keywords: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
    pub keyword_count: usize,
    pub matched_count: usize,
}

/// Scores a document against the union of required and preferred skills
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCoverageScorer;

impl KeywordCoverageScorer {
    pub fn new() -> Self {
        Self
    }

    /// Keyword coverage of `document`, falling back to the candidate's stored
    /// resume text when no non-empty document is given.
    pub fn coverage(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        document: Option<&str>,
    ) -> KeywordCoverageReport {
        let document = select_document(candidate, document).to_lowercase();
        let keywords = keyword_set(position);

        let (matched_keywords, missing_keywords): (BTreeSet<String>, BTreeSet<String>) = keywords
            .into_iter()
            .partition(|keyword| document.contains(&keyword.to_lowercase()));

        let keyword_count = matched_keywords.len() + missing_keywords.len();
        let matched_count = matched_keywords.len();

        let ats_score = if keyword_count == 0 {
            0.0
        } else {
            round2(matched_count as f64 / keyword_count as f64)
        };

        log::debug!(
            "keyword coverage {}/{} ({:.2}) over {} document characters",
            matched_count,
            keyword_count,
            ats_score,
            document.len()
        );

        KeywordCoverageReport {
            ats_score,
            ats_percentage: percentage(ats_score),
            matched_keywords,
            missing_keywords,
            keyword_count,
            matched_count,
        }
    }
}

fn select_document<'a>(candidate: &'a CandidateProfile, document: Option<&'a str>) -> &'a str {
    match document {
        Some(text) if !text.is_empty() => text,
        _ => &candidate.resume_text,
    }
}

/// Deduplicated union of required and preferred skills
fn keyword_set(position: &PositionDescription) -> BTreeSet<String> {
    position
        .required_skills
        .iter()
        .chain(position.preferred_skills.iter())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Description;

    fn candidate(resume_text: &str) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            contact: "test@example.com".to_string(),
            skills: vec![],
            interests: vec![],
            experience_summary: String::new(),
            academic_score: 3.0,
            resume_text: resume_text.to_string(),
        }
    }

    fn position(required: &[&str], preferred: &[&str]) -> PositionDescription {
        PositionDescription {
            title: "Backend Intern".to_string(),
            organization: "TechCorp".to_string(),
            description: Description::default(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
            responsibilities: vec![],
            duration_months: 3,
            location: "Remote".to_string(),
            compensation: "Competitive".to_string(),
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_coverage() {
        let report = KeywordCoverageScorer::new().coverage(
            &candidate(""),
            &position(&["Python", "REST APIs"], &[]),
            Some("python experience"),
        );

        assert_eq!(report.matched_keywords, set(&["Python"]));
        assert_eq!(report.missing_keywords, set(&["REST APIs"]));
        assert_eq!(report.ats_score, 0.5);
        assert_eq!(report.ats_percentage, "50%");
        assert_eq!(report.keyword_count, 2);
        assert_eq!(report.matched_count, 1);
    }

    #[test]
    fn test_empty_keyword_set() {
        let report = KeywordCoverageScorer::new().coverage(
            &candidate("anything"),
            &position(&[], &[]),
            Some("python"),
        );

        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.keyword_count, 0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_keywords_deduplicated() {
        let report = KeywordCoverageScorer::new().coverage(
            &candidate(""),
            &position(&["Python", "Docker"], &["Docker", "AWS"]),
            Some("Docker and AWS"),
        );

        assert_eq!(report.keyword_count, 3);
        assert_eq!(report.matched_keywords, set(&["AWS", "Docker"]));
        assert_eq!(report.ats_score, 0.67);
    }

    #[test]
    fn test_falls_back_to_stored_resume() {
        let scorer = KeywordCoverageScorer::new();
        let c = candidate("Experienced with Docker");
        let p = position(&["Docker"], &[]);

        assert_eq!(scorer.coverage(&c, &p, None).matched_count, 1);
        assert_eq!(scorer.coverage(&c, &p, Some("")).matched_count, 1);
        assert_eq!(scorer.coverage(&c, &p, Some("nothing relevant")).matched_count, 0);
    }

    #[test]
    fn test_no_document_at_all() {
        let report = KeywordCoverageScorer::new().coverage(&candidate(""), &position(&["Python"], &[]), None);
        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.missing_keywords, set(&["Python"]));
    }
}
