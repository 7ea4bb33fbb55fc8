//! Input manager for records and resume documents

use crate::error::{FitError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::records::{CandidateProfile, PositionDescription};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load and validate a candidate profile from a `.json` file
    pub async fn load_candidate(&self, path: &Path) -> Result<CandidateProfile> {
        let json = read_json(path).await?;
        let candidate = CandidateProfile::from_json(&json)?;
        info!("Loaded candidate '{}' from {}", candidate.name, path.display());
        debug!("{}", candidate.summary());
        Ok(candidate)
    }

    /// Load and validate a position description from a `.json` file
    pub async fn load_position(&self, path: &Path) -> Result<PositionDescription> {
        let json = read_json(path).await?;
        let position = PositionDescription::from_json(&json)?;
        info!("Loaded position '{}' from {}", position.title, path.display());
        debug!("{}", position.summary());
        Ok(position)
    }

    /// Plain text of a resume document (`.txt`, `.md`, `.pdf`)
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let key = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&key) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        ensure_exists(path)?;

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Json | FileType::Unknown => {
                return Err(FitError::UnsupportedFormat(format!(
                    "Not a resume document: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(key, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(FitError::InvalidInput(format!("File does not exist: {}", path.display())))
    }
}

async fn read_json(path: &Path) -> Result<String> {
    ensure_exists(path)?;

    if FileType::from_path(path) != FileType::Json {
        return Err(FitError::UnsupportedFormat(format!(
            "Expected a .json record file: {}",
            path.display()
        )));
    }

    Ok(fs::read_to_string(path).await?)
}
