//! Error handling for the candidate fit engine and its callers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Document extraction error: {0}")]
    DocumentExtraction(String),

    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, FitError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for FitError {
    fn from(err: anyhow::Error) -> Self {
        FitError::Processing(err.to_string())
    }
}

impl From<reqwest::Error> for FitError {
    fn from(err: reqwest::Error) -> Self {
        FitError::TextGeneration(err.to_string())
    }
}
