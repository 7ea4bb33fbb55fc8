//! Text generation for recommendations and optimized resumes

pub mod advisor;
pub mod generator;
pub mod prompts;

pub use advisor::CareerAdvisor;
pub use generator::{MockGenerator, OpenAiGenerator, TextGenerator};
pub use prompts::PromptTemplates;
