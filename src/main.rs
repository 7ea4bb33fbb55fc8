//! candidate-fit: candidate/position fit scoring from the command line

use candidate_fit::cli::{self, Cli, Commands, ConfigAction, RecordArgs};
use candidate_fit::config::{Config, OutputFormat};
use candidate_fit::error::{FitError, Result};
use candidate_fit::input::InputManager;
use candidate_fit::llm::CareerAdvisor;
use candidate_fit::output::formatter::save_report_to_file;
use candidate_fit::output::{FitReport, ReportGenerator};
use candidate_fit::pipeline::FitPipeline;
use candidate_fit::records::{CandidateProfile, PositionDescription};
use clap::Parser;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env file: {}", e);
        }
    }

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            warn!("No configuration at {}, using defaults", path.display());
            Ok(Config::default())
        }
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            records,
            threshold,
            max_gaps,
            output,
            save,
            live,
            detailed,
        } => {
            if let Some(threshold) = threshold {
                config.scoring.match_threshold = threshold;
            }
            if let Some(max_gaps) = max_gaps {
                config.scoring.max_skill_gaps = max_gaps;
            }
            if detailed {
                config.output.detailed = true;
            }
            config.validate()?;

            let format = output_format(output.as_deref(), &config)?;
            let (candidate, position) = load_records(&records).await?;
            let pipeline = build_pipeline(&config, live)?;

            info!("Analyzing '{}' against '{}'", candidate.name, position.title);
            let report = pipeline.analyze(&candidate, &position).await;
            emit(&report, format, &config, save.as_deref())
        }

        Commands::Ats {
            records,
            resume,
            output,
            save,
        } => {
            let format = output_format(output.as_deref(), &config)?;
            let (candidate, position) = load_records(&records).await?;

            let document = match resume {
                Some(path) => {
                    cli::validate_file_extension(&path, &["txt", "md", "markdown", "pdf"])
                        .map_err(|e| FitError::InvalidInput(format!("Resume file: {}", e)))?;
                    Some(InputManager::new().extract_text(&path).await?)
                }
                None => None,
            };

            let pipeline = FitPipeline::new(&config, CareerAdvisor::mock())?;
            let report = pipeline.keyword_coverage(&candidate, &position, document.as_deref());
            emit(&report, format, &config, save.as_deref())
        }

        Commands::Resume { records, live, save } => {
            let (candidate, position) = load_records(&records).await?;
            let pipeline = build_pipeline(&config, live)?;

            let report = pipeline.optimized_resume(&candidate, &position).await;
            match save {
                Some(path) => {
                    let resume = report.optimized_resume.as_deref().unwrap_or_default();
                    save_report_to_file(resume, &path)?;
                    println!("Resume saved to: {}", path.display());
                    Ok(())
                }
                None => emit(&report, OutputFormat::Console, &config, None),
            }
        }

        Commands::Full {
            records,
            output,
            save,
            live,
        } => {
            let format = output_format(output.as_deref(), &config)?;
            let (candidate, position) = load_records(&records).await?;
            let pipeline = build_pipeline(&config, live)?;

            let report = pipeline.full_analysis(&candidate, &position).await;
            emit(&report, format, &config, save.as_deref())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| FitError::Configuration(e.to_string()))?;
                    println!("# {}", path.display());
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }
                ConfigAction::Path => println!("{}", path.display()),
            }
            Ok(())
        }
    }
}

async fn load_records(records: &RecordArgs) -> Result<(CandidateProfile, PositionDescription)> {
    cli::validate_file_extension(&records.candidate, &["json"])
        .map_err(|e| FitError::InvalidInput(format!("Candidate file: {}", e)))?;
    cli::validate_file_extension(&records.position, &["json"])
        .map_err(|e| FitError::InvalidInput(format!("Position file: {}", e)))?;

    let manager = InputManager::new();
    let candidate = manager.load_candidate(&records.candidate).await?;
    let position = manager.load_position(&records.position).await?;
    Ok((candidate, position))
}

fn build_pipeline(config: &Config, live: bool) -> Result<FitPipeline> {
    let advisor = CareerAdvisor::from_config(&config.generation, config.api_key(), live)?;
    FitPipeline::new(config, advisor)
}

fn output_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(flag) => cli::parse_output_format(flag).map_err(FitError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(report: &FitReport, format: OutputFormat, config: &Config, save: Option<&Path>) -> Result<()> {
    let generator = match save {
        Some(_) => ReportGenerator::with_options(false, config.output.detailed, true, true, true),
        None => ReportGenerator::from_config(&config.output),
    };
    let content = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            save_report_to_file(&content, path)?;
            println!("Report saved to: {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
