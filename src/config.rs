//! Configuration management for the candidate fit engine

use crate::error::{FitError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub categories: CategoryConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Minimum confidence for a candidate to count as a match
    pub match_threshold: f64,
    /// Number of leading required skills inspected for gaps
    pub max_skill_gaps: usize,
    /// Minimum ATS score for the full analysis to report "ready to apply"
    pub ready_ats_threshold: f64,
}

/// Keyword lists used to categorize skills, checked in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryConfig {
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub cloud_platforms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    pub use_mock: bool,
    pub model: String,
    pub api_base: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.5,
            max_skill_gaps: 5,
            ready_ats_threshold: 0.7,
        }
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            programming_languages: owned(&["python", "javascript", "java", "c++", "go", "rust"]),
            frameworks: owned(&["react", "django", "flask", "spring", "vue", "angular"]),
            cloud_platforms: owned(&["aws", "azure", "gcp", "google cloud"]),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            use_mock: true,
            model: "gpt-4".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_tokens: 300,
            temperature: 0.7,
            timeout_secs: 60,
            max_retries: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            categories: CategoryConfig::default(),
            generation: GenerationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load and validate a configuration file at an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| FitError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| FitError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("candidate-fit")
            .join("config.toml")
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;

        if !(0.0..=1.0).contains(&scoring.match_threshold) {
            return Err(FitError::Configuration(format!(
                "scoring.match_threshold must be within [0, 1], got {}",
                scoring.match_threshold
            )));
        }
        if !(0.0..=1.0).contains(&scoring.ready_ats_threshold) {
            return Err(FitError::Configuration(format!(
                "scoring.ready_ats_threshold must be within [0, 1], got {}",
                scoring.ready_ats_threshold
            )));
        }
        if scoring.max_skill_gaps == 0 {
            return Err(FitError::Configuration(
                "scoring.max_skill_gaps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// API key for the live generator, if one is available in the environment
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.generation.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
