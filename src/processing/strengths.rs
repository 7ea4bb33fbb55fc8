//! Strength identification

use crate::processing::skill_matcher::SkillSet;
use crate::records::{CandidateProfile, PositionDescription};

/// Leading required skills inspected for strengths
pub const STRENGTH_REQUIREMENTS_CONSIDERED: usize = 3;

/// Academic score at which academic performance counts as a strength
pub const ACADEMIC_STRENGTH_THRESHOLD: f64 = 3.5;

pub const ACADEMIC_STRENGTH: &str = "Excellent academic performance (score ≥ 3.5)";

pub const FALLBACK_STRENGTH: &str = "Motivated candidate with relevant interests";

#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthIdentifier;

impl StrengthIdentifier {
    pub fn new() -> Self {
        Self
    }

    /// Matched strengths, never empty.
    ///
    /// One line per (required skill, candidate skill) pair, so a candidate
    /// skill covering two requirements is listed twice.
    pub fn strengths(&self, candidate: &CandidateProfile, position: &PositionDescription) -> Vec<String> {
        let skills = SkillSet::new(&candidate.skills);

        let mut strengths: Vec<String> = position
            .required_skills
            .iter()
            .take(STRENGTH_REQUIREMENTS_CONSIDERED)
            .flat_map(|required| {
                skills
                    .holders(required)
                    .into_iter()
                    .map(move |held| format!("Strong in {} (aligns with {})", held, required))
            })
            .collect();

        if candidate.academic_score >= ACADEMIC_STRENGTH_THRESHOLD {
            strengths.push(ACADEMIC_STRENGTH.to_string());
        }

        if strengths.is_empty() {
            strengths.push(FALLBACK_STRENGTH.to_string());
        }

        strengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Description;

    fn fixture(skills: &[&str], required: &[&str], academic_score: f64) -> (CandidateProfile, PositionDescription) {
        let candidate = CandidateProfile {
            name: "Rajesh Kumar".to_string(),
            contact: "rajesh@example.com".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: vec![],
            experience_summary: String::new(),
            academic_score,
            resume_text: String::new(),
        };
        let position = PositionDescription {
            title: "Full Stack Web Developer Intern".to_string(),
            organization: "TechCorp India".to_string(),
            description: Description::default(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec![],
            responsibilities: vec![],
            duration_months: 3,
            location: "Remote".to_string(),
            compensation: "Competitive".to_string(),
        };
        (candidate, position)
    }

    #[test]
    fn test_matched_requirements() {
        let (candidate, position) = fixture(
            &["Python", "JavaScript", "React", "Flask"],
            &["Python", "JavaScript", "React", "REST APIs", "Database Design"],
            3.6,
        );
        let strengths = StrengthIdentifier::new().strengths(&candidate, &position);

        assert_eq!(
            strengths,
            vec![
                "Strong in Python (aligns with Python)".to_string(),
                "Strong in JavaScript (aligns with JavaScript)".to_string(),
                "Strong in React (aligns with React)".to_string(),
                ACADEMIC_STRENGTH.to_string(),
            ]
        );
    }

    #[test]
    fn test_only_first_three_requirements() {
        let (candidate, position) = fixture(&["Docker"], &["Rust", "Kotlin", "Scala", "Docker"], 2.0);
        let strengths = StrengthIdentifier::new().strengths(&candidate, &position);
        assert_eq!(strengths, vec![FALLBACK_STRENGTH.to_string()]);
    }

    #[test]
    fn test_duplicates_per_pair() {
        let (candidate, position) = fixture(&["JavaScript"], &["Java", "Script"], 3.0);
        let strengths = StrengthIdentifier::new().strengths(&candidate, &position);
        assert_eq!(
            strengths,
            vec![
                "Strong in JavaScript (aligns with Java)".to_string(),
                "Strong in JavaScript (aligns with Script)".to_string(),
            ]
        );
    }

    #[test]
    fn test_academic_only() {
        let (candidate, position) = fixture(&[], &["Rust"], 3.5);
        let strengths = StrengthIdentifier::new().strengths(&candidate, &position);
        assert_eq!(strengths, vec![ACADEMIC_STRENGTH.to_string()]);
    }

    #[test]
    fn test_never_empty() {
        let (candidate, position) = fixture(&[], &[], 0.0);
        let strengths = StrengthIdentifier::new().strengths(&candidate, &position);
        assert_eq!(strengths, vec![FALLBACK_STRENGTH.to_string()]);
    }
}
