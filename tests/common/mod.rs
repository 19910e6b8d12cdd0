//! Shared test doubles

#![allow(dead_code)]

use smart_resume::client::{AnalysisResult, AnalyzeRequest, ResumeService, Suggestion, Suggestions};
use smart_resume::error::{Result, SmartResumeError};
use smart_resume::input::SelectedFile;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory service that records every call it receives.
pub struct StubService {
    pub extracted_text: String,
    pub result: AnalysisResult,
    pub fail_upload: bool,
    pub fail_analyze: bool,
    pub uploads: Mutex<Vec<String>>,
    pub requests: Mutex<Vec<AnalyzeRequest>>,
    calls: AtomicUsize,
}

impl StubService {
    pub fn new(extracted_text: &str, result: AnalysisResult) -> Self {
        Self {
            extracted_text: extracted_text.to_string(),
            result,
            fail_upload: false,
            fail_analyze: false,
            uploads: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_upload(mut self) -> Self {
        self.fail_upload = true;
        self
    }

    pub fn failing_analyze(mut self) -> Self {
        self.fail_analyze = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<AnalyzeRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl ResumeService for StubService {
    async fn upload(&self, file: &SelectedFile) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.uploads.lock().unwrap().push(file.name().to_string());
        if self.fail_upload {
            return Err(SmartResumeError::UploadFailed("status 500: no text layer".into()));
        }
        Ok(self.extracted_text.clone())
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if self.fail_analyze {
            return Err(SmartResumeError::AnalysisFailed("status 502: upstream timeout".into()));
        }
        Ok(self.result.clone())
    }
}

pub fn sample_result(match_percentage: f64) -> AnalysisResult {
    AnalysisResult {
        match_percentage,
        matched_skills: vec!["Python".into(), "Flask".into()],
        missing_skills: vec!["Docker".into()],
        suggestions: Suggestions::Items(vec![Suggestion {
            kind: "skill_gap".into(),
            title: "Add Docker".into(),
            message: "Mention containerization experience.".into(),
        }]),
    }
}

pub fn pdf(name: &str, size: usize) -> SelectedFile {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    bytes.resize(size.max(bytes.len()), b' ');
    SelectedFile::new(name, "application/pdf", bytes)
}
