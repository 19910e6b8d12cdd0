//! Root controller: owns the client state and runs the two service calls

use crate::app::state::{AppState, Pending};
use crate::client::{AnalysisResult, AnalyzeRequest, ResumeService};
use crate::config::{Config, MAX_UPLOAD_BYTES, PDF_MIME_TYPE};
use crate::error::{Result, SmartResumeError};
use crate::input::SelectedFile;
use log::{error, info, warn};
use std::time::Duration;

const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(800);

/// Checks applied before a file is sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_file_bytes: u64,
    pub accepted_mime_type: String,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_UPLOAD_BYTES,
            accepted_mime_type: PDF_MIME_TYPE.to_string(),
        }
    }
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_bytes: config.upload.max_file_bytes,
            accepted_mime_type: config.upload.accepted_mime_type.clone(),
        }
    }

    pub fn max_size_mb(&self) -> u64 {
        self.max_file_bytes / (1024 * 1024)
    }

    pub fn check(&self, file: &SelectedFile) -> Result<()> {
        if file.mime_type() != self.accepted_mime_type {
            return Err(SmartResumeError::InvalidFileType(file.mime_type().to_string()));
        }
        if file.size() > self.max_file_bytes {
            return Err(SmartResumeError::FileTooLarge {
                size: file.size(),
                limit_mb: self.max_size_mb(),
            });
        }
        Ok(())
    }
}

pub struct Controller<S> {
    service: S,
    state: AppState,
    limits: UploadLimits,
    settle_delay: Duration,
}

impl<S: ResumeService> Controller<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: AppState::default(),
            limits: UploadLimits::default(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn from_config(service: S, config: &Config) -> Self {
        Self::new(service)
            .with_limits(UploadLimits::from_config(config))
            .with_settle_delay(config.settle_delay())
    }

    pub fn with_limits(mut self, limits: UploadLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn set_job_description(&mut self, value: impl Into<String>) {
        self.state.job_description = value.into();
        self.state.error = None;
    }

    /// Validate a picked file and send it for text extraction.
    ///
    /// A rejected file leaves the current selection, text, and result untouched.
    /// A failed upload drops the selection so the user has to pick again.
    pub async fn select_file(&mut self, file: SelectedFile) -> Result<()> {
        if let Err(err) = self.limits.check(&file) {
            warn!("Rejected {} ({}, {} bytes): {}", file.name(), file.mime_type(), file.size(), err);
            return Err(self.fail(err));
        }

        self.state.error = None;
        self.state.result = None;
        self.state.pending = Some(Pending::Upload);

        let file = self.state.file.insert(file);
        let outcome = self.service.upload(file).await;
        self.state.pending = None;

        match outcome {
            Ok(text) => {
                info!("Extracted {} characters from resume", text.len());
                self.state.resume_text = text;
                Ok(())
            }
            Err(err) => {
                let err = match err {
                    err @ SmartResumeError::UploadFailed(_) => err,
                    other => SmartResumeError::UploadFailed(other.to_string()),
                };
                error!("Resume upload failed: {}", err.detail().unwrap_or_default());
                self.state.file = None;
                Err(self.fail(err))
            }
        }
    }

    /// Score the extracted resume text against the job description.
    pub async fn analyze(&mut self) -> Result<&AnalysisResult> {
        if self.state.resume_text.is_empty() {
            warn!("Analyze requested before a resume was uploaded");
            return Err(self.fail(SmartResumeError::MissingResume));
        }
        if self.state.job_description.trim().is_empty() {
            warn!("Analyze requested with an empty job description");
            return Err(self.fail(SmartResumeError::MissingJobDescription));
        }

        self.state.pending = Some(Pending::Analyze);
        self.state.error = None;

        let request = AnalyzeRequest {
            resume_text: self.state.resume_text.clone(),
            job_description: self.state.job_description.clone(),
        };
        let outcome = match self.service.analyze(&request).await {
            Ok(result) => {
                if !self.settle_delay.is_zero() {
                    tokio::time::sleep(self.settle_delay).await;
                }
                Ok(result)
            }
            Err(err) => Err(err),
        };
        self.state.pending = None;

        match outcome {
            Ok(result) => {
                info!(
                    "Analysis complete: {}% match, {} matched, {} missing",
                    result.match_percentage,
                    result.matched_skills.len(),
                    result.missing_skills.len()
                );
                Ok(&*self.state.result.insert(result))
            }
            Err(err) => {
                let err = match err {
                    err @ SmartResumeError::AnalysisFailed(_) => err,
                    other => SmartResumeError::AnalysisFailed(other.to_string()),
                };
                error!("Analysis failed: {}", err.detail().unwrap_or_default());
                Err(self.fail(err))
            }
        }
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) {
        self.state = AppState::default();
    }

    fn fail(&mut self, err: SmartResumeError) -> SmartResumeError {
        self.state.error = Some(err.to_string());
        err
    }
}
