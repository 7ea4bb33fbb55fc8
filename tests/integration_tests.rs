//! Integration tests for candidate-fit

use candidate_fit::config::{Config, OutputFormat};
use candidate_fit::error::FitError;
use candidate_fit::input::InputManager;
use candidate_fit::llm::CareerAdvisor;
use candidate_fit::output::ReportGenerator;
use candidate_fit::pipeline::FitPipeline;
use candidate_fit::processing::SkillCategory;
use candidate_fit::records::{CandidateProfile, PositionDescription};
use candidate_fit::MatchEngine;
use std::path::Path;

async fn load(candidate: &str, position: &str) -> (CandidateProfile, PositionDescription) {
    let manager = InputManager::new();
    let dir = Path::new("tests/fixtures");
    let candidate = manager.load_candidate(&dir.join(candidate)).await.unwrap();
    let position = manager.load_position(&dir.join(position)).await.unwrap();
    (candidate, position)
}

fn pipeline() -> FitPipeline {
    FitPipeline::new(&Config::default(), CareerAdvisor::mock()).unwrap()
}

#[tokio::test]
async fn test_legacy_keys_are_accepted() {
    let (candidate, position) = load("candidate_rajesh.json", "position_fullstack.json").await;

    assert_eq!(candidate.contact, "rajesh.kumar@email.com");
    assert_eq!(candidate.academic_score, 3.6);
    assert!(candidate.resume_text.is_empty());
    assert_eq!(position.organization, "TechCorp India");
}

#[tokio::test]
async fn test_strong_candidate_end_to_end() {
    let (candidate, position) = load("candidate_rajesh.json", "position_fullstack.json").await;
    let report = pipeline().analyze(&candidate, &position).await;
    let m = report.match_report.as_ref().unwrap();

    assert_eq!(m.confidence_score, 0.57);
    assert_eq!(m.match_percentage, "57%");
    assert!(m.is_match);
    assert_eq!(m.skill_gaps.len(), 1);
    assert_eq!(m.skill_gaps[0].skill, "Database Design");
    assert_eq!(
        m.strengths,
        vec![
            "Strong in Python (aligns with Python)".to_string(),
            "Strong in JavaScript (aligns with JavaScript)".to_string(),
            "Strong in React (aligns with React)".to_string(),
            "Excellent academic performance (score ≥ 3.5)".to_string(),
        ]
    );
    assert!(report.recommendation.is_some());
}

#[tokio::test]
async fn test_beginner_candidate_end_to_end() {
    let (candidate, position) = load("candidate_priya.json", "position_backend.json").await;
    let report = pipeline().analyze(&candidate, &position).await;
    let m = report.match_report.as_ref().unwrap();

    // 1/5 required * 0.6 + 3.2/4 * 0.1
    assert_eq!(m.confidence_score, 0.2);
    assert_eq!(m.match_percentage, "20%");
    assert!(!m.is_match);

    let gaps: Vec<(&str, SkillCategory)> = m.skill_gaps.iter().map(|g| (g.skill.as_str(), g.category)).collect();
    assert_eq!(
        gaps,
        vec![
            ("System Design", SkillCategory::TechnicalSkill),
            ("Docker", SkillCategory::TechnicalSkill),
            ("AWS", SkillCategory::CloudPlatform),
            ("Microservices", SkillCategory::TechnicalSkill),
        ]
    );
    assert_eq!(m.strengths, vec!["Strong in Python (aligns with Python)".to_string()]);
    assert!(report.recommendation.as_deref().unwrap().starts_with("Developing match"));
}

#[tokio::test]
async fn test_segmented_description_joined() {
    let (_, position) = load("candidate_priya.json", "position_backend.json").await;
    assert_eq!(
        position.description_text(),
        "Join our backend team to build scalable microservices. Work with Python, Docker, Kubernetes, and cloud technologies."
    );
    assert_eq!(position.compensation, "Competitive");
}

#[tokio::test]
async fn test_ats_from_text_resume() {
    let (candidate, position) = load("candidate_rajesh.json", "position_fullstack.json").await;
    let text = InputManager::new()
        .extract_text(Path::new("tests/fixtures/resume.txt"))
        .await
        .unwrap();

    let report = pipeline().keyword_coverage(&candidate, &position, Some(&text));
    let coverage = report.keyword_coverage.unwrap();

    assert_eq!(coverage.keyword_count, 9);
    assert_eq!(coverage.matched_count, 6);
    assert_eq!(coverage.ats_score, 0.67);
    assert_eq!(coverage.ats_percentage, "67%");
    assert!(coverage.missing_keywords.contains("Database Design"));
    assert!(coverage.missing_keywords.contains("Agile/Scrum"));
}

#[tokio::test]
async fn test_ats_from_markdown_resume() {
    let (candidate, position) = load("candidate_rajesh.json", "position_fullstack.json").await;
    let text = InputManager::new()
        .extract_text(Path::new("tests/fixtures/resume.md"))
        .await
        .unwrap();

    assert!(!text.contains("**"));
    assert!(!text.contains("##"));

    let coverage = pipeline()
        .keyword_coverage(&candidate, &position, Some(&text))
        .keyword_coverage
        .unwrap();
    let matched: Vec<&str> = coverage.matched_keywords.iter().map(String::as_str).collect();
    assert_eq!(matched, vec!["PostgreSQL", "Python", "REST APIs", "React"]);
    assert_eq!(coverage.ats_score, 0.44);
}

#[tokio::test]
async fn test_ats_uses_stored_resume_text() {
    let (candidate, position) = load("candidate_priya.json", "position_backend.json").await;
    let coverage = pipeline()
        .keyword_coverage(&candidate, &position, None)
        .keyword_coverage
        .unwrap();

    assert_eq!(coverage.matched_count, 2);
    assert_eq!(coverage.ats_score, 0.22);
}

#[tokio::test]
async fn test_full_analysis_verdict() {
    let (candidate, position) = load("candidate_rajesh.json", "position_fullstack.json").await;
    let report = pipeline().full_analysis(&candidate, &position).await;

    assert!(report.match_report.as_ref().unwrap().is_match);
    assert!(report.optimized_resume.is_some());
    let ats = report.keyword_coverage.as_ref().unwrap().ats_score;
    assert_eq!(report.ready_to_apply, Some(ats >= 0.7));
}

#[tokio::test]
async fn test_record_round_trip() {
    let (candidate, position) = load("candidate_rajesh.json", "position_fullstack.json").await;

    let candidate_back = CandidateProfile::from_json(&candidate.to_json().unwrap()).unwrap();
    let position_back = PositionDescription::from_json(&position.to_json().unwrap()).unwrap();
    assert_eq!(candidate_back, candidate);
    assert_eq!(position_back, position);

    let engine = MatchEngine::new(&Config::default()).unwrap();
    assert_eq!(
        engine.score_match(&candidate_back, &position_back, 0.5),
        engine.score_match(&candidate, &position, 0.5)
    );
}

#[tokio::test]
async fn test_report_formats_render() {
    let (candidate, position) = load("candidate_priya.json", "position_backend.json").await;
    let report = pipeline().full_analysis(&candidate, &position).await;
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    let markdown = generator
        .generate_report(&report, OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("## Optimized Resume"));
    assert!(markdown.contains("**Improve the resume or close skill gaps before applying**"));

    let html = generator
        .generate_report(&report, OutputFormat::Html)
        .unwrap();
    assert!(html.contains("<h4>Skill Gaps</h4>"));
    assert!(html.contains("<li>Docker <em>(Technical Skill)</em></li>"));
}

#[tokio::test]
async fn test_text_extraction_caching() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();

    let unsupported = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(unsupported, Err(FitError::UnsupportedFormat(_))));

    let missing = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(missing, Err(FitError::InvalidInput(_))));

    let not_json = manager.load_candidate(Path::new("tests/fixtures/resume.txt")).await;
    assert!(matches!(not_json, Err(FitError::UnsupportedFormat(_))));
}
