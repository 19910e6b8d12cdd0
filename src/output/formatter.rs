//! Output formatters for analysis results

use crate::client::{AnalysisResult, Suggestions};
use crate::config::OutputFormat;
use crate::error::{Result, SmartResumeError};
use crate::output::report::*;
use crate::ui::{Badge, BadgeVariant, Card};
use askama::Template;
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

const GAUGE_CELLS: usize = 20;
const BADGES_PER_LINE: usize = 6;

const NO_MATCHED_SKILLS: &str = "No direct skill matches found.";
const NO_MISSING_SKILLS: &str = "No missing critical skills detected!";

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and card layout
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with the score ring drawn as SVG
pub struct HtmlFormatter {
    include_styles: bool,
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SmartResume Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1e293b;
            max-width: 880px;
            margin: 0 auto;
            padding: 24px;
            background: #f8fafc;
        }
        .card {
            background: white;
            padding: 24px;
            border-radius: 16px;
            box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
            margin-bottom: 20px;
        }
        .score { text-align: center; }
        .score h3 { text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.75em; color: #64748b; }
        .ring { position: relative; display: inline-block; }
        .ring svg { transform: rotate(-90deg); }
        .ring .value {
            position: absolute;
            inset: 0;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            font-size: 2.5em;
            font-weight: 800;
        }
        .ring .value small { font-size: 0.3em; color: #94a3b8; }
        .band-favorable { color: #10b981; }
        .band-neutral { color: #f59e0b; }
        .band-unfavorable { color: #f43f5e; }
        .skills { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
        .matched { border-left: 4px solid #34d399; }
        .missing { border-left: 4px solid #fb7185; }
        .badge {
            display: inline-block;
            padding: 4px 12px;
            margin: 3px;
            border-radius: 999px;
            font-size: 0.875em;
            border: 1px solid;
        }
        .badge-success { background: #d1fae5; color: #047857; border-color: #a7f3d0; }
        .badge-error { background: #ffe4e6; color: #be123c; border-color: #fecdd3; }
        .empty { color: #94a3b8; font-style: italic; }
        .suggestion { padding: 16px; border-radius: 12px; border: 1px solid; margin: 10px 0; }
        .suggestion h5 { margin: 0 0 4px 0; }
        .suggestion p { margin: 0; }
        .suggestion-critical { background: #fff1f2; border-color: #ffe4e6; color: #9f1239; }
        .suggestion-warning { background: #fffbeb; border-color: #fef3c7; color: #92400e; }
        .suggestion-success { background: #ecfdf5; border-color: #d1fae5; color: #065f46; }
        .suggestion-info { background: #eef2ff; border-color: #e0e7ff; color: #3730a3; }
        .legacy { background: #f8fafc; border-color: #f1f5f9; color: #475569; }
        .metadata { font-size: 0.85em; color: #64748b; }
    </style>
    {% endif %}
</head>
<body>
    <div class="card score">
        <h3>ATScore Analysis</h3>
        <div class="ring">
            <svg width="160" height="160">
                <circle cx="80" cy="80" r="70" stroke="#f1f5f9" stroke-width="10" fill="transparent"></circle>
                <circle cx="80" cy="80" r="70" stroke="currentColor" stroke-width="10" fill="transparent"
                        stroke-linecap="round" class="{{ band_class }}"
                        stroke-dasharray="{{ circumference }}" stroke-dashoffset="{{ dash_offset }}"></circle>
            </svg>
            <div class="value {{ band_class }}">{{ match_percentage }}%<small>MATCH</small></div>
        </div>
        <p>{{ verdict }}</p>
    </div>

    <div class="skills">
        <div class="card matched">
            <h4>Matched Skills ({{ matched_skills.len() }})</h4>
            {% if matched_skills.is_empty() %}
            <span class="empty">No direct skill matches found.</span>
            {% else %}
            {% for skill in matched_skills %}<span class="badge badge-success">{{ skill }}</span>{% endfor %}
            {% endif %}
        </div>
        <div class="card missing">
            <h4>Missing Keywords ({{ missing_skills.len() }})</h4>
            {% if missing_skills.is_empty() %}
            <span class="empty">No missing critical skills detected!</span>
            {% else %}
            {% for skill in missing_skills %}<span class="badge badge-error">{{ skill }}</span>{% endfor %}
            {% endif %}
        </div>
    </div>

    <div class="card">
        <h4>✨ Strategic Recommendations</h4>
        {% for item in suggestions %}
        <div class="suggestion {{ item.css_class }}">
            <h5>{{ item.icon }} {{ item.title }}</h5>
            <p>{{ item.message }}</p>
        </div>
        {% endfor %}
        {% if has_legacy_suggestions %}
        <div class="suggestion legacy">{{ legacy_suggestions }}</div>
        {% endif %}
    </div>

    {% if include_metadata %}
    <p class="metadata">Generated {{ generated_at }} by SmartResume v{{ version }} via {{ service_url }}{% if has_resume_file %} for {{ resume_file }}{% endif %}</p>
    {% endif %}
</body>
</html>"##, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    include_metadata: bool,
    match_percentage: String,
    band_class: String,
    verdict: String,
    circumference: String,
    dash_offset: String,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    suggestions: Vec<HtmlSuggestion>,
    has_legacy_suggestions: bool,
    legacy_suggestions: String,
    generated_at: String,
    version: String,
    service_url: String,
    has_resume_file: bool,
    resume_file: String,
}

#[derive(Debug, Clone)]
struct HtmlSuggestion {
    icon: String,
    css_class: String,
    title: String,
    message: String,
}

/// Server value as-is: `72` stays `72`, `41.67` stays `41.67`.
pub fn format_percentage(value: f64) -> String {
    format!("{}", value)
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
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

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_gauge(&self, score: f64, band: ScoreBand) -> String {
        let filled = ((score.clamp(0.0, 100.0) / 100.0) * GAUGE_CELLS as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_CELLS - filled));
        let value = format!("{}%", format_percentage(score));

        if self.use_colors {
            format!("{}  {} {}", bar.color(band.color()), value.color(band.color()).bold(), "MATCH".bright_black())
        } else {
            format!("{}  {} MATCH", bar, value)
        }
    }

    fn format_skills(&self, title: &str, skills: &[String], variant: BadgeVariant, accent: Color, empty: &str) -> String {
        let mut card = Card::new()
            .title(format!("{} ({})", title, skills.len()))
            .accent(accent);

        if skills.is_empty() {
            card.push_line(self.colorize(empty, Color::BrightBlack));
        } else {
            card.push_line(Badge::render_row(skills.iter().cloned(), variant, BADGES_PER_LINE, self.use_colors));
        }
        card.render(self.use_colors)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let band = report.score_band();
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ANALYSIS RESULTS"));
        if self.detailed {
            output.push_str(&format!("Generated: {}\n", format_timestamp(report)));
        }
        output.push('\n');

        // Score
        let score_card = Card::new()
            .title("ATScore Analysis")
            .accent(band.color())
            .line(self.format_gauge(result.match_percentage, band))
            .line(self.colorize(band.verdict(), Color::Cyan));
        output.push_str(&score_card.render(self.use_colors));

        // Skills
        output.push_str(&self.format_skills(
            "✔ Matched Skills",
            &result.matched_skills,
            BadgeVariant::Success,
            Color::Green,
            NO_MATCHED_SKILLS,
        ));
        output.push_str(&self.format_skills(
            "✖ Missing Keywords",
            &result.missing_skills,
            BadgeVariant::Error,
            Color::Red,
            NO_MISSING_SKILLS,
        ));

        // Suggestions
        output.push_str(&self.format_header("✨ Strategic Recommendations"));
        match &result.suggestions {
            Suggestions::Items(items) => {
                for item in items {
                    let category = item.category();
                    let card = Card::new()
                        .title(format!("{} {}", item.icon(), self.colorize(&item.title, category.color())))
                        .accent(category.color())
                        .line(item.message.clone());
                    output.push_str(&card.render(self.use_colors));
                }
            }
            Suggestions::Text(text) => {
                output.push_str(&Card::new().line(text.clone()).render(self.use_colors));
            }
        }

        if self.detailed {
            output.push_str(&format!(
                "\n{} SmartResume v{} | Service: {}{}\n",
                self.colorize("ℹ️", Color::Blue),
                report.metadata.client_version,
                report.metadata.service_url,
                report.metadata.resume_file.as_deref().map(|f| format!(" | Resume: {}", f)).unwrap_or_default()
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

/// JSON view of a report; the band is computed from the score at write time.
#[derive(Serialize)]
struct JsonReport<'a> {
    result: &'a AnalysisResult,
    score_band: ScoreBand,
    metadata: &'a ReportMetadata,
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let view = JsonReport {
            result: &report.result,
            score_band: report.score_band(),
            metadata: &report.metadata,
        };
        if self.pretty {
            Ok(serde_json::to_string_pretty(&view)?)
        } else {
            Ok(serde_json::to_string(&view)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_band_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Favorable => "🟢",
            ScoreBand::Neutral => "🟡",
            ScoreBand::Unfavorable => "🔴",
        }
    }

    fn markdown_skills(skills: &[String], empty: &str) -> String {
        if skills.is_empty() {
            format!("_{}_\n\n", empty)
        } else {
            format!(
                "{}\n\n",
                skills.iter().map(|s| format!("`{}`", s)).collect::<Vec<_>>().join(" ")
            )
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# 📊 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}", format_timestamp(report)));
            if let Some(resume) = &report.metadata.resume_file {
                output.push_str(&format!(" | **Resume:** `{}`", resume));
            }
            output.push_str("\n\n");
        }

        output.push_str("## ATScore Analysis\n\n");
        output.push_str(&format!(
            "**Match:** {}% {}\n\n",
            format_percentage(result.match_percentage),
            Self::markdown_band_badge(report.score_band())
        ));
        output.push_str(&format!("> {}\n\n", report.score_band().verdict()));

        output.push_str(&format!("## ✅ Matched Skills ({})\n\n", result.matched_skills.len()));
        output.push_str(&Self::markdown_skills(&result.matched_skills, NO_MATCHED_SKILLS));

        output.push_str(&format!("## ❌ Missing Keywords ({})\n\n", result.missing_skills.len()));
        output.push_str(&Self::markdown_skills(&result.missing_skills, NO_MISSING_SKILLS));

        output.push_str("## ✨ Strategic Recommendations\n\n");
        match &result.suggestions {
            Suggestions::Items(items) => {
                for item in items {
                    output.push_str(&format!("- {} **{}**: {}\n", item.icon(), item.title, item.message));
                }
                output.push('\n');
            }
            Suggestions::Text(text) => output.push_str(&format!("{}\n\n", text)),
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by SmartResume v{} via {}*\n",
                report.metadata.client_version, report.metadata.service_url
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, include_metadata: bool) -> Self {
        Self { include_styles, include_metadata }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let result = &report.result;

        let (suggestions, legacy_suggestions) = match &result.suggestions {
            Suggestions::Items(items) => (
                items
                    .iter()
                    .map(|item| HtmlSuggestion {
                        icon: item.icon().to_string(),
                        css_class: item.category().css_class().to_string(),
                        title: item.title.clone(),
                        message: item.message.clone(),
                    })
                    .collect(),
                None,
            ),
            Suggestions::Text(text) => (Vec::new(), Some(text.clone())),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            include_metadata: self.include_metadata,
            match_percentage: format_percentage(result.match_percentage),
            band_class: report.score_band().css_class().to_string(),
            verdict: report.score_band().verdict().to_string(),
            circumference: format!("{:.0}", SCORE_RING_CIRCUMFERENCE),
            dash_offset: format!("{:.1}", result.ring_dash_offset()),
            matched_skills: result.matched_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            suggestions,
            has_legacy_suggestions: legacy_suggestions.is_some(),
            legacy_suggestions: legacy_suggestions.unwrap_or_default(),
            generated_at: format_timestamp(report),
            version: report.metadata.client_version.clone(),
            service_url: report.metadata.service_url.clone(),
            has_resume_file: report.metadata.resume_file.is_some(),
            resume_file: report.metadata.resume_file.clone().unwrap_or_default(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        template_data
            .render()
            .map_err(|e| SmartResumeError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles, include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_analysis{}.html", base_name, timestamp_suffix),
    }
}
