//! Configuration management for the SmartResume client

use crate::error::{Result, SmartResumeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// MIME type the upload endpoint accepts.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// 5 MB upload ceiling.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub upload: UploadConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_file_bytes: u64,
    pub accepted_mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Pause before a fresh result is shown so the loading state doesn't flicker.
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 60,
            },
            upload: UploadConfig {
                max_file_bytes: MAX_UPLOAD_BYTES,
                accepted_mime_type: PDF_MIME_TYPE.to_string(),
            },
            analysis: AnalysisConfig {
                settle_delay_ms: 800,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SmartResumeError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SmartResumeError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("smart-resume")
            .join("config.toml")
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.analysis.settle_delay_ms)
    }

    /// Apply a `section.key` assignment from the command line.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "service.base_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(SmartResumeError::Configuration(format!(
                        "base_url must start with http:// or https://, got '{}'",
                        value
                    )));
                }
                self.service.base_url = value.trim_end_matches('/').to_string();
            }
            "service.timeout_secs" => self.service.timeout_secs = parse_number(key, value)?,
            "upload.max_file_bytes" => self.upload.max_file_bytes = parse_number(key, value)?,
            "analysis.settle_delay_ms" => self.analysis.settle_delay_ms = parse_number(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(SmartResumeError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            _ => {
                return Err(SmartResumeError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| SmartResumeError::Configuration(format!("{} expects a number, got '{}'", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(SmartResumeError::Configuration(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}
