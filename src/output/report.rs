//! Presentation model derived from an analysis result

use crate::client::{AnalysisResult, Suggestion};
use chrono::{DateTime, Utc};
use colored::Color;
use serde::Serialize;

/// Circumference of the score ring (r = 70).
pub const SCORE_RING_CIRCUMFERENCE: f64 = 440.0;

/// Colour band for a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Favorable,
    Neutral,
    Unfavorable,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Favorable
        } else if score >= 50.0 {
            ScoreBand::Neutral
        } else {
            ScoreBand::Unfavorable
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            ScoreBand::Favorable => "Excellent! Your resume is highly optimized for this role.",
            ScoreBand::Neutral => "Good start. Address the missing skills to improve your ranking.",
            ScoreBand::Unfavorable => "Significant gaps found. Requires major tailored updates.",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ScoreBand::Favorable => Color::Green,
            ScoreBand::Neutral => Color::Yellow,
            ScoreBand::Unfavorable => Color::Red,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Favorable => "band-favorable",
            ScoreBand::Neutral => "band-neutral",
            ScoreBand::Unfavorable => "band-unfavorable",
        }
    }
}

/// Styling group for a suggestion card, keyed off its `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionCategory {
    Critical,
    Warning,
    Success,
    Info,
}

impl SuggestionCategory {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "critical" => SuggestionCategory::Critical,
            "warning" | "skill_gap" => SuggestionCategory::Warning,
            "success" => SuggestionCategory::Success,
            _ => SuggestionCategory::Info,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SuggestionCategory::Critical => Color::Red,
            SuggestionCategory::Warning => Color::Yellow,
            SuggestionCategory::Success => Color::Green,
            SuggestionCategory::Info => Color::Blue,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SuggestionCategory::Critical => "suggestion-critical",
            SuggestionCategory::Warning => "suggestion-warning",
            SuggestionCategory::Success => "suggestion-success",
            SuggestionCategory::Info => "suggestion-info",
        }
    }
}

impl Suggestion {
    pub fn category(&self) -> SuggestionCategory {
        SuggestionCategory::from_kind(&self.kind)
    }

    // Icons follow the raw tag: `warning` shares the amber colour with
    // `skill_gap` but keeps the default sparkle.
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            "critical" => "⚠️",
            "skill_gap" => "📈",
            "success" => "✅",
            _ => "✨",
        }
    }
}

impl AnalysisResult {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.match_percentage)
    }

    /// Fraction of the ring left undrawn; the score is clamped for drawing only.
    pub fn ring_dash_offset(&self) -> f64 {
        let clamped = self.match_percentage.clamp(0.0, 100.0);
        SCORE_RING_CIRCUMFERENCE - SCORE_RING_CIRCUMFERENCE * clamped / 100.0
    }
}

/// A result plus the context it was produced in.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: Option<String>,
    pub service_url: String,
    pub client_version: String,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, resume_file: Option<String>, service_url: impl Into<String>) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file,
                service_url: service_url.into(),
                client_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Always follows the score currently held in `result`.
    pub fn score_band(&self) -> ScoreBand {
        self.result.score_band()
    }
}
