//! Keyword-list skill categorization

use crate::config::CategoryConfig;
use crate::error::{FitError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming Language")]
    ProgrammingLanguage,
    #[serde(rename = "Framework/Library")]
    FrameworkOrLibrary,
    #[serde(rename = "Cloud Platform")]
    CloudPlatform,
    #[serde(rename = "Technical Skill")]
    TechnicalSkill,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillCategory::ProgrammingLanguage => "Programming Language",
            SkillCategory::FrameworkOrLibrary => "Framework/Library",
            SkillCategory::CloudPlatform => "Cloud Platform",
            SkillCategory::TechnicalSkill => "Technical Skill",
        };
        f.write_str(label)
    }
}

/// Classifies skills by checking whether any category keyword occurs inside
/// the lowercased skill. Categories are tried in priority order and the first
/// hit wins; anything unmatched is a technical skill.
pub struct SkillCategorizer {
    rules: Vec<(SkillCategory, AhoCorasick)>,
}

impl SkillCategorizer {
    pub fn new(config: &CategoryConfig) -> Result<Self> {
        let ordered = [
            (SkillCategory::ProgrammingLanguage, &config.programming_languages),
            (SkillCategory::FrameworkOrLibrary, &config.frameworks),
            (SkillCategory::CloudPlatform, &config.cloud_platforms),
        ];

        let mut rules = Vec::with_capacity(ordered.len());
        for (category, keywords) in ordered {
            let patterns: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
            let matcher = AhoCorasick::new(&patterns).map_err(|e| {
                FitError::Processing(format!("Failed to build {} matcher: {}", category, e))
            })?;
            rules.push((category, matcher));
        }

        Ok(Self { rules })
    }

    pub fn categorize(&self, skill: &str) -> SkillCategory {
        let skill = skill.to_lowercase();
        self.rules
            .iter()
            .find(|(_, matcher)| matcher.is_match(&skill))
            .map(|(category, _)| *category)
            .unwrap_or(SkillCategory::TechnicalSkill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorizer() -> SkillCategorizer {
        SkillCategorizer::new(&CategoryConfig::default()).unwrap()
    }

    #[test]
    fn test_default_categories() {
        let categorizer = categorizer();
        assert_eq!(categorizer.categorize("Python"), SkillCategory::ProgrammingLanguage);
        assert_eq!(categorizer.categorize("Flask"), SkillCategory::FrameworkOrLibrary);
        assert_eq!(categorizer.categorize("AWS Lambda"), SkillCategory::CloudPlatform);
        assert_eq!(categorizer.categorize("Azure Functions"), SkillCategory::CloudPlatform);
        assert_eq!(categorizer.categorize("Database Design"), SkillCategory::TechnicalSkill);
    }

    #[test]
    fn test_priority_order() {
        // "javascript" is a language keyword, "react" a framework keyword
        let categorizer = categorizer();
        assert_eq!(
            categorizer.categorize("React with JavaScript"),
            SkillCategory::ProgrammingLanguage
        );
    }

    #[test]
    fn test_substring_membership() {
        // "go" appears inside "MongoDB", "Django" and "Google Cloud"
        let categorizer = categorizer();
        assert_eq!(categorizer.categorize("MongoDB"), SkillCategory::ProgrammingLanguage);
        assert_eq!(categorizer.categorize("Django"), SkillCategory::ProgrammingLanguage);
        assert_eq!(categorizer.categorize("Google Cloud"), SkillCategory::ProgrammingLanguage);
    }

    #[test]
    fn test_empty_and_unknown_fall_back() {
        let categorizer = categorizer();
        assert_eq!(categorizer.categorize(""), SkillCategory::TechnicalSkill);
        assert_eq!(categorizer.categorize("Agile/Scrum"), SkillCategory::TechnicalSkill);
    }

    #[test]
    fn test_custom_lists() {
        let config = CategoryConfig {
            programming_languages: vec!["Kotlin".to_string()],
            frameworks: vec![],
            cloud_platforms: vec!["Heroku".to_string()],
        };
        let categorizer = SkillCategorizer::new(&config).unwrap();
        assert_eq!(categorizer.categorize("kotlin"), SkillCategory::ProgrammingLanguage);
        assert_eq!(categorizer.categorize("React"), SkillCategory::TechnicalSkill);
        assert_eq!(categorizer.categorize("HEROKU pipelines"), SkillCategory::CloudPlatform);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(SkillCategory::FrameworkOrLibrary.to_string(), "Framework/Library");
        assert_eq!(
            serde_json::to_string(&SkillCategory::CloudPlatform).unwrap(),
            "\"Cloud Platform\""
        );
    }
}
