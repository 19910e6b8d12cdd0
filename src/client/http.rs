//! `reqwest` implementation of the service calls

use crate::client::types::{AnalysisResult, AnalyzeRequest, UploadResponse};
use crate::client::ResumeService;
use crate::config::ServiceConfig;
use crate::error::{Result, SmartResumeError};
use crate::input::SelectedFile;
use anyhow::Context;
use log::{debug, info};
use reqwest::multipart::{Form, Part};

pub const UPLOAD_ENDPOINT: &str = "/upload";
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Form field the server reads the PDF from.
const FILE_FIELD: &str = "file";

pub struct HttpResumeService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResumeService {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SmartResumeError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_upload(&self, file: &SelectedFile) -> anyhow::Result<UploadResponse> {
        let url = self.endpoint(UPLOAD_ENDPOINT);

        let form = Form::new().part(
            FILE_FIELD,
            Part::bytes(file.bytes().to_vec())
                .file_name(file.name().to_string())
                .mime_str(file.mime_type())
                .context("Failed to create multipart")?,
        );

        info!("Uploading {} ({} bytes) to {}", file.name(), file.size(), url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        debug!("Upload response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Upload service returned status {}: {}", status, error_text);
        }

        response
            .json::<UploadResponse>()
            .await
            .context("Failed to parse upload response")
    }

    async fn post_analyze(&self, request: &AnalyzeRequest) -> anyhow::Result<AnalysisResult> {
        let url = self.endpoint(ANALYZE_ENDPOINT);

        info!(
            "Requesting analysis from {} (resume: {} chars, job description: {} chars)",
            url,
            request.resume_text.len(),
            request.job_description.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to call analysis service")?;

        let status = response.status();
        debug!("Analyze response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Analysis service returned status {}: {}", status, error_text);
        }

        response
            .json::<AnalysisResult>()
            .await
            .context("Failed to parse analysis response")
    }
}

impl ResumeService for HttpResumeService {
    async fn upload(&self, file: &SelectedFile) -> Result<String> {
        self.post_upload(file)
            .await
            .map(|response| response.text)
            .map_err(|e| SmartResumeError::UploadFailed(format!("{:#}", e)))
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.post_analyze(request)
            .await
            .map_err(|e| SmartResumeError::AnalysisFailed(format!("{:#}", e)))
    }
}
