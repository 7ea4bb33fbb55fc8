//! Position description record

use crate::error::{FitError, Result};
use serde::{Deserialize, Serialize};

/// Position description text, either one block or a list of segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Segments(Vec<String>),
}

impl Description {
    /// Full description text, segments joined with single spaces
    pub fn text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Segments(segments) => segments.join(" "),
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Description::Text(String::new())
    }
}

fn default_compensation() -> String {
    "Competitive".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDescription {
    pub title: String,

    #[serde(alias = "company")]
    pub organization: String,

    pub description: Description,

    pub required_skills: Vec<String>,

    #[serde(default)]
    pub preferred_skills: Vec<String>,

    #[serde(default)]
    pub responsibilities: Vec<String>,

    pub duration_months: u32,

    pub location: String,

    #[serde(default = "default_compensation")]
    pub compensation: String,
}

impl PositionDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        let position: Self = serde_json::from_str(json)?;
        position.validate()?;
        Ok(position)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(FitError::Validation("position title must not be empty".to_string()));
        }
        if self.duration_months == 0 {
            return Err(FitError::Validation(
                "position duration_months must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    pub fn description_text(&self) -> String {
        self.description.text()
    }

    /// Human-readable summary of the position
    pub fn summary(&self) -> String {
        let responsibilities: Vec<String> = self
            .responsibilities
            .iter()
            .map(|r| format!("  - {}", r))
            .collect();

        format!(
            "Position: {}\nOrganization: {}\nLocation: {}\nDuration: {} months\nCompensation: {}\n\nRequired Skills: {}\nPreferred Skills: {}\n\nResponsibilities:\n{}\n\nDescription:\n{}\n",
            self.title,
            self.organization,
            self.location,
            self.duration_months,
            self.compensation,
            self.required_skills.join(", "),
            self.preferred_skills.join(", "),
            responsibilities.join("\n"),
            self.description_text().trim(),
        )
    }
}
