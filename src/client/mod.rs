//! Access to the external matching service
//! `/upload` turns a PDF into text, `/analyze` scores text against a job description

pub mod http;
pub mod types;

pub use http::HttpResumeService;
pub use types::{AnalysisResult, AnalyzeRequest, Suggestion, Suggestions, UploadResponse};

use crate::error::Result;
use crate::input::SelectedFile;

/// The two calls the client makes. Failures come back as
/// `UploadFailed` / `AnalysisFailed` with the diagnostic detail inside.
pub trait ResumeService {
    fn upload(&self, file: &SelectedFile) -> impl std::future::Future<Output = Result<String>> + Send;

    fn analyze(
        &self,
        request: &AnalyzeRequest,
    ) -> impl std::future::Future<Output = Result<AnalysisResult>> + Send;
}
