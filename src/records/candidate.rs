//! Candidate profile record

use crate::error::{FitError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound of the academic score scale
pub const ACADEMIC_SCALE_MAX: f64 = 4.0;

/// A candidate's skills, interests and academic standing.
///
/// Field aliases accept the older `email` / `experience` / `cgpa` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,

    #[serde(alias = "email")]
    pub contact: String,

    pub skills: Vec<String>,

    pub interests: Vec<String>,

    #[serde(alias = "experience")]
    pub experience_summary: String,

    /// Score on a 0 to 4.0 scale
    #[serde(alias = "cgpa")]
    pub academic_score: f64,

    #[serde(default)]
    pub resume_text: String,
}

impl CandidateProfile {
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the fields the engine relies on.
    ///
    /// Out-of-range academic scores are accepted (scoring clamps them), only
    /// non-finite values are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FitError::Validation("candidate name must not be empty".to_string()));
        }
        if !self.academic_score.is_finite() {
            return Err(FitError::Validation(format!(
                "candidate academic_score must be a finite number, got {}",
                self.academic_score
            )));
        }
        Ok(())
    }

    /// Human-readable profile summary
    pub fn summary(&self) -> String {
        format!(
            "Candidate: {}\nContact: {}\nAcademic score: {}/{}\nSkills: {}\nInterests: {}\nExperience: {}\n",
            self.name,
            self.contact,
            self.academic_score,
            ACADEMIC_SCALE_MAX,
            self.skills.join(", "),
            self.interests.join(", "),
            self.experience_summary,
        )
    }
}
