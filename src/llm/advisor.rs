//! Career advisor producing recommendation and resume prose

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::llm::generator::{MockGenerator, OpenAiGenerator, TextGenerator};
use crate::llm::prompts::PromptTemplates;
use crate::processing::MatchReport;
use crate::records::{CandidateProfile, PositionDescription};

/// Wraps a [`TextGenerator`] so that generation never fails: any error from
/// the configured generator is logged and answered by the offline mock.
pub struct CareerAdvisor {
    generator: Box<dyn TextGenerator>,
    fallback: MockGenerator,
    templates: PromptTemplates,
}

impl CareerAdvisor {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            fallback: MockGenerator::new(),
            templates: PromptTemplates::default(),
        }
    }

    /// Offline advisor
    pub fn mock() -> Self {
        Self::new(Box::new(MockGenerator::new()))
    }

    /// Pick the generator from configuration.
    ///
    /// The live client is used when `use_mock` is off (or `force_live` is set)
    /// and an API key is available; otherwise the mock is used.
    pub fn from_config(config: &GenerationConfig, api_key: Option<String>, force_live: bool) -> Result<Self> {
        if !force_live && config.use_mock {
            log::info!("Using offline text generator");
            return Ok(Self::mock());
        }

        match api_key {
            Some(key) => {
                log::info!("Using live text generator ({})", config.model);
                Ok(Self::new(Box::new(OpenAiGenerator::new(config, key)?)))
            }
            None => {
                log::warn!(
                    "No API key found in ${}, falling back to offline text generator",
                    config.api_key_env
                );
                Ok(Self::mock())
            }
        }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Generate text for a prompt, falling back to the mock on failure
    pub async fn generate_text(&self, prompt: &str) -> String {
        match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{} failed ({}), using offline response", self.generator.name(), e);
                self.fallback.respond(prompt)
            }
        }
    }

    pub async fn recommend(
        &self,
        candidate: &CandidateProfile,
        position: &PositionDescription,
        report: &MatchReport,
    ) -> String {
        let prompt = self.templates.render_recommendation(candidate, position, report);
        self.generate_text(&prompt).await
    }

    pub async fn optimized_resume(&self, candidate: &CandidateProfile, position: &PositionDescription) -> String {
        let prompt = self.templates.render_resume(candidate, position);
        self.generate_text(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitError;
    use crate::records::Description;
    use async_trait::async_trait;

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(FitError::TextGeneration("service unavailable".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            name: "Rajesh Kumar".to_string(),
            contact: "rajesh.kumar@email.com".to_string(),
            skills: vec!["Python".to_string(), "React".to_string()],
            interests: vec!["Web Development".to_string()],
            experience_summary: "Built 3 full-stack web projects".to_string(),
            academic_score: 3.6,
            resume_text: String::new(),
        }
    }

    fn position() -> PositionDescription {
        PositionDescription {
            title: "Full Stack Web Developer Intern".to_string(),
            organization: "TechCorp India".to_string(),
            description: Description::default(),
            required_skills: vec!["Python".to_string(), "React".to_string()],
            preferred_skills: vec![],
            responsibilities: vec![],
            duration_months: 3,
            location: "Remote".to_string(),
            compensation: "Competitive".to_string(),
        }
    }

    fn report(confidence_score: f64) -> MatchReport {
        MatchReport {
            confidence_score,
            match_percentage: format!("{}%", (confidence_score * 100.0).round()),
            skill_gaps: vec![],
            strengths: vec![],
            is_match: confidence_score >= 0.5,
        }
    }

    #[tokio::test]
    async fn test_failing_generator_falls_back() {
        let advisor = CareerAdvisor::new(Box::new(FailingGenerator));
        assert_eq!(advisor.generator_name(), "failing");

        let text = advisor.recommend(&candidate(), &position(), &report(0.9)).await;
        assert!(text.starts_with("Strong match"));

        let resume = advisor.optimized_resume(&candidate(), &position()).await;
        assert!(resume.contains("PROFESSIONAL SUMMARY"));
    }

    #[tokio::test]
    async fn test_mock_recommendation_follows_confidence() {
        let advisor = CareerAdvisor::mock();
        let moderate = advisor.recommend(&candidate(), &position(), &report(0.57)).await;
        assert!(moderate.starts_with("Moderate match"));

        let weak = advisor.recommend(&candidate(), &position(), &report(0.2)).await;
        assert!(weak.starts_with("Developing match"));
    }

    #[test]
    fn test_from_config_selection() {
        let config = GenerationConfig::default();
        let advisor = CareerAdvisor::from_config(&config, Some("key".to_string()), false).unwrap();
        assert_eq!(advisor.generator_name(), "mock");

        let advisor = CareerAdvisor::from_config(&config, None, true).unwrap();
        assert_eq!(advisor.generator_name(), "mock");

        let advisor = CareerAdvisor::from_config(&config, Some("key".to_string()), true).unwrap();
        assert_eq!(advisor.generator_name(), "gpt-4");
    }
}
