//! Prompt templates for recommendation and resume prose

use crate::processing::MatchReport;
use crate::records::{CandidateProfile, PositionDescription};

/// Leading responsibilities / required skills quoted in the resume prompt
const RESUME_FOCUS_ITEMS: usize = 3;

/// Final line of the recommendation prompt, also used to recognise it
pub const RECOMMENDATION_MARKER: &str = "Recommendation:";

/// Final line of the resume prompt, also used to recognise it
pub const RESUME_MARKER: &str = "Resume:";

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub recommendation: String,
    pub resume: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            recommendation: RECOMMENDATION_TEMPLATE.to_string(),
            resume: RESUME_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Prompt asking whether the candidate should apply
    pub fn render_recommendation(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        report: &MatchReport,
    ) -> String {
        let gaps: Vec<&str> = report.skill_gaps.iter().map(|g| g.skill.as_str()).collect();
        let confidence = (report.confidence_score * 100.0).round() as i64;

        self.recommendation
            .replace("{name}", &candidate.name)
            .replace("{confidence}", &confidence.to_string())
            .replace("{skills}", &candidate.skills.join(", "))
            .replace("{interests}", &candidate.interests.join(", "))
            .replace("{title}", &position.title)
            .replace("{organization}", &position.organization)
            .replace("{required}", &position.required_skills.join(", "))
            .replace("{gaps}", &gaps.join(", "))
    }

    /// Prompt asking for a resume tailored to the position
    pub fn render_resume(&self, candidate: &CandidateProfile, position: &PositionDescription) -> String {
        let responsibilities = leading(&position.responsibilities);
        let focus = leading(&position.required_skills);

        self.resume
            .replace("{name}", &candidate.name)
            .replace("{skills}", &candidate.skills.join(", "))
            .replace("{interests}", &candidate.interests.join(", "))
            .replace("{experience}", &candidate.experience_summary)
            .replace("{academic_score}", &candidate.academic_score.to_string())
            .replace("{title}", &position.title)
            .replace("{organization}", &position.organization)
            .replace("{required}", &position.required_skills.join(", "))
            .replace("{preferred}", &position.preferred_skills.join(", "))
            .replace("{responsibilities}", &responsibilities)
            .replace("{focus}", &focus)
    }
}

fn leading(items: &[String]) -> String {
    items
        .iter()
        .take(RESUME_FOCUS_ITEMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

const RECOMMENDATION_TEMPLATE: &str = r#"You are a career advisor for an internship platform.

Candidate: {name}
Match Confidence: {confidence}%
Candidate Skills: {skills}
Candidate Interests: {interests}

Position: {title} at {organization}
Required: {required}
Skill Gaps: {gaps}

Give a 2-3 sentence personalized recommendation on whether this candidate should apply.
Weigh the match score against the skill gaps. Be encouraging but honest.

Recommendation:"#;

const RESUME_TEMPLATE: &str = r#"You are a resume optimization expert.

Candidate Profile:
- Name: {name}
- Skills: {skills}
- Interests: {interests}
- Experience: {experience}
- Academic score: {academic_score}

Position:
- Title: {title}
- Organization: {organization}
- Required Skills: {required}
- Preferred Skills: {preferred}
- Key Responsibilities: {responsibilities}

TASK: Write a concise, ATS-friendly resume tailored to this position.
Highlight the relevant skills and experience, keep it under 300 words,
and emphasize alignment with: {focus}

Resume:"#;
