//! Loading a job description from disk or stdin

use crate::error::{Result, SmartResumeError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;
use tokio::io::AsyncReadExt;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a job description. `-` reads standard input.
    pub async fn load_job_description(&self, path: &Path) -> Result<String> {
        if path == Path::new("-") {
            info!("Reading job description from stdin");
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            return Ok(buffer);
        }

        if !path.exists() {
            return Err(SmartResumeError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        match FileType::from_path(path) {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Pdf | FileType::Unknown => Err(SmartResumeError::UnsupportedFormat(
                format!("Job descriptions must be .txt or .md: {}", path.display())
            )),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
