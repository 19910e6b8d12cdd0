//! Controlled multi-line input for the job description

use crate::ui::{paint, Card};
use colored::Color;
use unicode_segmentation::UnicodeSegmentation;

pub const PLACEHOLDER: &str =
    "Paste the job description here (e.g., from LinkedIn or Company Website)...";

/// The value lives in the controller; this widget only renders it.
#[derive(Debug, Clone)]
pub struct JobDescriptionInput {
    preview_lines: usize,
}

impl JobDescriptionInput {
    pub fn new() -> Self {
        Self { preview_lines: 6 }
    }

    pub fn with_preview_lines(mut self, preview_lines: usize) -> Self {
        self.preview_lines = preview_lines;
        self
    }

    /// Live count of user-perceived characters.
    pub fn char_count(value: &str) -> usize {
        value.graphemes(true).count()
    }

    pub fn render(&self, value: &str, error: Option<&str>, use_colors: bool) -> String {
        let accent = if error.is_some() { Color::Red } else { Color::White };
        let mut card = Card::new()
            .title(format!(
                "Job Description  {}",
                paint(&format!("{} characters", Self::char_count(value)), Color::BrightBlack, use_colors)
            ))
            .accent(accent);

        if value.is_empty() {
            card.push_line(paint(PLACEHOLDER, Color::BrightBlack, use_colors));
        } else {
            let lines: Vec<&str> = value.lines().collect();
            for line in lines.iter().take(self.preview_lines) {
                card.push_line(*line);
            }
            if lines.len() > self.preview_lines {
                card.push_line(paint(
                    &format!("... {} more lines", lines.len() - self.preview_lines),
                    Color::BrightBlack,
                    use_colors,
                ));
            }
        }

        if let Some(error) = error {
            card.push_line(paint(error, Color::Red, use_colors));
        }
        card.render(use_colors)
    }
}

impl Default for JobDescriptionInput {
    fn default() -> Self {
        Self::new()
    }
}
