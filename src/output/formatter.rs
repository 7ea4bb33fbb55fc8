//! Output formatters for fit reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{FitError, Result};
use crate::output::report::{score_label, FitReport};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting fit reports
pub trait OutputFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Candidate Fit Report: {{ candidate_name }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .badge { display: inline-block; padding: 6px 14px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .badge-excellent { background: #28a745; }
        .badge-good { background: #17a2b8; }
        .badge-fair { background: #ffc107; color: #000; }
        .badge-weak { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .strengths, .gaps, .keywords { background: #f8f9fa; padding: 15px; border-radius: 6px; margin: 10px 0; }
        .strengths { border-left: 4px solid #28a745; }
        .gaps { border-left: 4px solid #ffc107; }
        .keywords { border-left: 4px solid #17a2b8; }
        pre { white-space: pre-wrap; background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Candidate Fit Report</h1>
            <p>{{ candidate_name }} for {{ position_title }} at {{ organization }}</p>
            <p>Generated: {{ generated_at }}</p>
        </div>

        {% if has_match %}
        <div class="section">
            <h2>Match Analysis</h2>
            <h3>Confidence: {{ match_percentage }} <span class="badge {{ match_class }}">{{ match_label }}</span></h3>
            <p><strong>Match:</strong> {{ match_verdict }}</p>
            <div class="strengths">
                <h4>Strengths</h4>
                <ul>
                {% for strength in strengths %}
                    <li>{{ strength }}</li>
                {% endfor %}
                </ul>
            </div>
            {% if !gaps.is_empty() %}
            <div class="gaps">
                <h4>Skill Gaps</h4>
                <ul>
                {% for gap in gaps %}
                    <li>{{ gap.skill }} <em>({{ gap.category }})</em></li>
                {% endfor %}
                </ul>
            </div>
            {% endif %}
        </div>
        {% endif %}

        {% if has_recommendation %}
        <div class="section">
            <h2>Recommendation</h2>
            <blockquote>{{ recommendation }}</blockquote>
        </div>
        {% endif %}

        {% if has_coverage %}
        <div class="section">
            <h2>ATS Keyword Coverage</h2>
            <h3>Score: {{ ats_percentage }} ({{ matched_count }}/{{ keyword_count }} keywords)</h3>
            <div class="keywords">
                <p><strong>Matched:</strong> {{ matched_keywords }}</p>
                <p><strong>Missing:</strong> {{ missing_keywords }}</p>
            </div>
        </div>
        {% endif %}

        {% if has_verdict %}
        <div class="section">
            <h2>Verdict</h2>
            <p><strong>{{ verdict }}</strong></p>
        </div>
        {% endif %}

        {% if has_resume %}
        <div class="section">
            <h2>Optimized Resume</h2>
            <pre>{{ optimized_resume }}</pre>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by candidate-fit v{{ version }}</strong> | Text generator: {{ generator }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    candidate_name: String,
    position_title: String,
    organization: String,
    generated_at: String,
    has_match: bool,
    match_percentage: String,
    match_class: String,
    match_label: String,
    match_verdict: String,
    strengths: Vec<String>,
    gaps: Vec<HtmlGap>,
    has_recommendation: bool,
    recommendation: String,
    has_coverage: bool,
    ats_percentage: String,
    matched_count: usize,
    keyword_count: usize,
    matched_keywords: String,
    missing_keywords: String,
    has_verdict: bool,
    verdict: String,
    has_resume: bool,
    optimized_resume: String,
    version: String,
    generator: String,
}

struct HtmlGap {
    skill: String,
    category: String,
}

fn join_or_none<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items.into_iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

fn verdict_text(ready: bool) -> &'static str {
    if ready {
        "Ready to apply"
    } else {
        "Improve the resume or close skill gaps before applying"
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let label = score_label(score);
        let color = match label {
            "Excellent" => Color::Green,
            "Good" => Color::BrightGreen,
            "Fair" => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", label.to_uppercase().color(color).bold())
        } else {
            format!("[{}]", label.to_uppercase())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut output = String::new();
        let meta = &report.metadata;

        output.push_str(&self.format_header("CANDIDATE FIT REPORT", 1));
        output.push_str(&format!(
            "{} for {} at {}\nGenerated: {}\n",
            meta.candidate_name,
            meta.position_title,
            meta.organization,
            report.generated_at_display()
        ));

        if let Some(m) = &report.match_report {
            output.push_str(&self.format_header("Match Analysis", 2));
            output.push_str(&format!(
                "Confidence: {} {}\n",
                m.match_percentage,
                self.format_score_badge(m.confidence_score)
            ));
            let verdict = if m.is_match {
                self.colorize("yes", Color::Green)
            } else {
                self.colorize("no", Color::Red)
            };
            output.push_str(&format!("Match: {}\n", verdict));

            output.push_str(&self.format_header("Strengths", 3));
            for strength in &m.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }

            if !m.skill_gaps.is_empty() {
                output.push_str(&self.format_header("Skill Gaps", 3));
                for gap in &m.skill_gaps {
                    output.push_str(&format!(
                        "  • {} {}\n",
                        self.colorize(&gap.skill, Color::Yellow),
                        self.colorize(&format!("({})", gap.category), Color::BrightBlack)
                    ));
                }
            }
        }

        if let Some(recommendation) = &report.recommendation {
            output.push_str(&self.format_header("Recommendation", 2));
            output.push_str(&format!("{}\n", self.colorize(recommendation, Color::Cyan)));
        }

        if let Some(coverage) = &report.keyword_coverage {
            output.push_str(&self.format_header("ATS Keyword Coverage", 2));
            output.push_str(&format!(
                "Score: {} {} ({}/{} keywords)\n",
                coverage.ats_percentage,
                self.format_score_badge(coverage.ats_score),
                coverage.matched_count,
                coverage.keyword_count
            ));
            output.push_str(&format!(
                "Matched: {}\n",
                self.colorize(&join_or_none(&coverage.matched_keywords), Color::Green)
            ));
            output.push_str(&format!(
                "Missing: {}\n",
                self.colorize(&join_or_none(&coverage.missing_keywords), Color::Red)
            ));
        }

        if let Some(ready) = report.ready_to_apply {
            output.push_str(&self.format_header("Verdict", 2));
            let color = if ready { Color::Green } else { Color::Yellow };
            output.push_str(&format!("{}\n", self.colorize(verdict_text(ready), color)));
        }

        if let Some(resume) = &report.optimized_resume {
            output.push_str(&self.format_header("Optimized Resume", 2));
            if self.detailed || report.match_report.is_none() {
                output.push_str(resume);
                output.push('\n');
            } else {
                let preview: String = resume.chars().take(300).collect();
                output.push_str(&preview);
                if preview.len() < resume.len() {
                    output.push_str("...\n(use --detailed for the full text)");
                }
                output.push('\n');
            }
        }

        output.push_str(&format!(
            "\n{} Generated by candidate-fit v{} | Text generator: {}\n",
            self.colorize("ℹ", Color::Blue),
            meta.version,
            meta.generator
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        let mut output = String::new();
        let meta = &report.metadata;

        output.push_str("# Candidate Fit Report\n\n");
        output.push_str(&format!(
            "**Candidate:** {} | **Position:** {} at {}\n\n",
            meta.candidate_name, meta.position_title, meta.organization
        ));
        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}\n\n", report.generated_at_display()));
        }

        if let Some(m) = &report.match_report {
            output.push_str("## Match Analysis\n\n");
            output.push_str("| Metric | Value |\n");
            output.push_str("|--------|-------|\n");
            output.push_str(&format!(
                "| Confidence | {} ({}) |\n",
                m.match_percentage,
                score_label(m.confidence_score)
            ));
            output.push_str(&format!("| Match | {} |\n", if m.is_match { "yes" } else { "no" }));
            output.push_str(&format!("| Skill gaps | {} |\n\n", m.skill_gaps.len()));

            output.push_str("### Strengths\n\n");
            for strength in &m.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');

            if !m.skill_gaps.is_empty() {
                output.push_str("### Skill Gaps\n\n");
                for gap in &m.skill_gaps {
                    output.push_str(&format!("- **{}** ({})\n", gap.skill, gap.category));
                }
                output.push('\n');
            }
        }

        if let Some(recommendation) = &report.recommendation {
            output.push_str("## Recommendation\n\n");
            output.push_str(&format!("> {}\n\n", recommendation));
        }

        if let Some(coverage) = &report.keyword_coverage {
            output.push_str("## ATS Keyword Coverage\n\n");
            output.push_str(&format!(
                "**Score:** {} ({}/{} keywords)\n\n",
                coverage.ats_percentage, coverage.matched_count, coverage.keyword_count
            ));
            output.push_str(&format!("**Matched:** {}\n\n", join_or_none(&coverage.matched_keywords)));
            output.push_str(&format!("**Missing:** {}\n\n", join_or_none(&coverage.missing_keywords)));
        }

        if let Some(ready) = report.ready_to_apply {
            output.push_str("## Verdict\n\n");
            output.push_str(&format!("**{}**\n\n", verdict_text(ready)));
        }

        if let Some(resume) = &report.optimized_resume {
            output.push_str("## Optimized Resume\n\n");
            output.push_str(&format!("```\n{}\n```\n\n", resume));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by candidate-fit v{} using {}*\n",
                meta.version, meta.generator
            ));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &FitReport) -> HtmlTemplate {
        let meta = &report.metadata;
        let m = report.match_report.as_ref();
        let coverage = report.keyword_coverage.as_ref();

        let (match_class, match_label) = match m.map(|m| score_label(m.confidence_score)) {
            Some("Excellent") => ("badge-excellent", "Excellent"),
            Some("Good") => ("badge-good", "Good"),
            Some("Fair") => ("badge-fair", "Fair"),
            _ => ("badge-weak", "Weak"),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            candidate_name: meta.candidate_name.clone(),
            position_title: meta.position_title.clone(),
            organization: meta.organization.clone(),
            generated_at: report.generated_at_display(),
            has_match: m.is_some(),
            match_percentage: m.map(|m| m.match_percentage.clone()).unwrap_or_default(),
            match_class: match_class.to_string(),
            match_label: match_label.to_string(),
            match_verdict: m.map(|m| if m.is_match { "yes" } else { "no" }).unwrap_or_default().to_string(),
            strengths: m.map(|m| m.strengths.clone()).unwrap_or_default(),
            gaps: m
                .map(|m| {
                    m.skill_gaps
                        .iter()
                        .map(|gap| HtmlGap {
                            skill: gap.skill.clone(),
                            category: gap.category.to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            has_recommendation: report.recommendation.is_some(),
            recommendation: report.recommendation.clone().unwrap_or_default(),
            has_coverage: coverage.is_some(),
            ats_percentage: coverage.map(|c| c.ats_percentage.clone()).unwrap_or_default(),
            matched_count: coverage.map(|c| c.matched_count).unwrap_or(0),
            keyword_count: coverage.map(|c| c.keyword_count).unwrap_or(0),
            matched_keywords: coverage.map(|c| join_or_none(&c.matched_keywords)).unwrap_or_default(),
            missing_keywords: coverage.map(|c| join_or_none(&c.missing_keywords)).unwrap_or_default(),
            has_verdict: report.ready_to_apply.is_some(),
            verdict: report.ready_to_apply.map(verdict_text).unwrap_or_default().to_string(),
            has_resume: report.optimized_resume.is_some(),
            optimized_resume: report.optimized_resume.clone().unwrap_or_default(),
            version: meta.version.clone(),
            generator: meta.generator.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &FitReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| FitError::OutputFormatting(e.to_string()))
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &FitReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
