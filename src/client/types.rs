//! Wire types for the matching service

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// Structured result of `/analyze`, kept exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0-100; older servers send fractional values.
    pub match_percentage: f64,

    #[serde(default)]
    pub matched_skills: Vec<String>,

    #[serde(default)]
    pub missing_skills: Vec<String>,

    #[serde(default)]
    pub suggestions: Suggestions,
}

/// Suggestions are a list of cards, or one plain string from legacy servers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Suggestions {
    Items(Vec<Suggestion>),
    Text(String),
}

impl Default for Suggestions {
    fn default() -> Self {
        Suggestions::Items(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub message: String,
}
