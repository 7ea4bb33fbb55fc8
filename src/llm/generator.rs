//! Text generators: a deterministic offline mock and an OpenAI-compatible client

use crate::config::GenerationConfig;
use crate::error::{FitError, Result};
use crate::llm::prompts::{RECOMMENDATION_MARKER, RESUME_MARKER};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Produces prose for a rendered prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short identifier recorded in report metadata
    fn name(&self) -> &str;
}

const MOCK_RESUME: &str = "PROFESSIONAL SUMMARY
Motivated computer science student with hands-on experience in full-stack web development. \
Built several production-style projects with modern frameworks and is eager to contribute \
to a collaborative engineering team.

TECHNICAL SKILLS
- Languages: Python, JavaScript, SQL
- Frameworks: React, Flask
- Tools: Git, REST APIs

PROJECTS
- Task management web app with a React frontend and Flask backend
- REST API powering a campus events portal
- Data dashboard with interactive charts

EDUCATION
Bachelor of Technology in Computer Science";

const STRONG_RECOMMENDATION: &str = "Strong match. Your skills line up well with the core \
requirements of this role and your project experience shows you can deliver. Apply with \
confidence and highlight your most relevant projects.";

const MODERATE_RECOMMENDATION: &str = "Moderate match. You cover part of the required skill \
set, so consider closing one or two of the listed gaps before applying. A short focused \
project would strengthen your application considerably.";

const WEAK_RECOMMENDATION: &str = "Developing match. This role needs several skills you have \
not shown yet. Build experience in the missing areas first, or look for positions closer \
to your current strengths.";

const GENERIC_RESPONSE: &str = "Thank you for your submission. The analysis is complete.";

/// Offline generator returning canned prose keyed on the prompt's intent.
///
/// Recommendations are bucketed by the `Match Confidence: NN%` line of the
/// recommendation prompt: 80 and above is strong, 50 and above moderate.
pub struct MockGenerator {
    confidence: Regex,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            confidence: Regex::new(r"Match Confidence:\s*(\d+)%").expect("Invalid confidence regex"),
        }
    }

    fn recommendation(&self, prompt: &str) -> &'static str {
        let confidence = self
            .confidence
            .captures(prompt)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok());

        match confidence {
            Some(c) if c >= 80 => STRONG_RECOMMENDATION,
            Some(c) if c >= 50 => MODERATE_RECOMMENDATION,
            Some(_) => WEAK_RECOMMENDATION,
            None => GENERIC_RESPONSE,
        }
    }

    /// Canned response for `prompt`, never fails
    pub fn respond(&self, prompt: &str) -> String {
        let trimmed = prompt.trim_end();

        let text = if trimmed.ends_with(RECOMMENDATION_MARKER) {
            self.recommendation(prompt)
        } else if trimmed.ends_with(RESUME_MARKER) || prompt.to_lowercase().contains("resume") {
            MOCK_RESUME
        } else if self.confidence.is_match(prompt) {
            self.recommendation(prompt)
        } else {
            GENERIC_RESPONSE
        };

        text.to_string()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.respond(prompt))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Retries on 429 and 5xx with exponential backoff; any other non-success
/// status fails immediately.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    max_retries: u32,
}

impl OpenAiGenerator {
    pub fn new(config: &GenerationConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FitError::TextGeneration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            max_retries: config.max_retries.max(1),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let mut last_error: Option<FitError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1).min(6)));
                log::warn!(
                    "Generation attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    last_error = Some(e.into());
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                log::warn!("Generation endpoint returned {}: {}", status, body);
                last_error = Some(FitError::TextGeneration(format!("status {}: {}", status, body)));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(FitError::TextGeneration(format!("status {}: {}", status, body)));
            }

            let reply: ChatResponse = response.json().await?;
            let text = reply
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .map(|content| content.trim().to_string())
                .filter(|content| !content.is_empty())
                .ok_or_else(|| FitError::TextGeneration("empty completion".to_string()))?;

            log::debug!("Generated {} characters with {}", text.len(), self.model);
            return Ok(text);
        }

        Err(last_error.unwrap_or_else(|| {
            FitError::TextGeneration(format!("no response after {} attempts", self.max_retries))
        }))
    }

    fn name(&self) -> &str {
        &self.model
    }
}
