//! CLI interface for candidate-fit

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "candidate-fit")]
#[command(version)]
#[command(about = "Candidate/position fit scoring, skill gap analysis and ATS keyword coverage")]
#[command(long_about = "Score how well a candidate profile fits a position description, list skill gaps \
and strengths, measure ATS keyword coverage of a resume, and draft recommendations and tailored resumes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Candidate and position record files
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Path to candidate profile (JSON)
    #[arg(short = 'C', long)]
    pub candidate: PathBuf,

    /// Path to position description (JSON)
    #[arg(short, long)]
    pub position: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate against a position and recommend whether to apply
    Analyze {
        #[command(flatten)]
        records: RecordArgs,

        /// Minimum confidence to count as a match (overrides config)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Number of leading required skills inspected for gaps (overrides config)
        #[arg(long)]
        max_gaps: Option<usize>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Use the live text generator when an API key is available
        #[arg(long)]
        live: bool,

        /// Output detailed report
        #[arg(short, long)]
        detailed: bool,
    },

    /// Measure ATS keyword coverage of a resume
    Ats {
        #[command(flatten)]
        records: RecordArgs,

        /// Resume document (TXT, MD, PDF); defaults to the profile's resume_text
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Draft a resume tailored to the position
    Resume {
        #[command(flatten)]
        records: RecordArgs,

        /// Use the live text generator when an API key is available
        #[arg(long)]
        live: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Match, recommendation, tailored resume and its ATS coverage
    Full {
        #[command(flatten)]
        records: RecordArgs,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Use the live text generator when an API key is available
        #[arg(long)]
        live: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("candidate.JSON"), &["json"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.docx"), &["txt", "md", "pdf"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["txt"]).is_err());
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "candidate-fit",
            "--verbose",
            "analyze",
            "--candidate",
            "c.json",
            "--position",
            "p.json",
            "--threshold",
            "0.6",
            "--max-gaps",
            "3",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { records, threshold, max_gaps, live, .. } => {
                assert_eq!(records.candidate, PathBuf::from("c.json"));
                assert_eq!(threshold, Some(0.6));
                assert_eq!(max_gaps, Some(3));
                assert!(!live);
            }
            _ => panic!("expected analyze"),
        }
    }
}
