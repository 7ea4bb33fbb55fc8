//! Candidate/position fit scoring library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod records;

pub use config::Config;
pub use error::{FitError, Result};
pub use pipeline::FitPipeline;
pub use processing::{KeywordCoverageReport, MatchEngine, MatchReport};
pub use records::{CandidateProfile, PositionDescription};
