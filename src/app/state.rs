//! Everything the client remembers during a session

use crate::client::AnalysisResult;
use crate::input::SelectedFile;

/// Which network call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Upload,
    Analyze,
}

/// Where the user is in the upload → analyze → result cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading,
    ReadyToAnalyze,
    Analyzing,
    ShowingResult,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub(crate) file: Option<SelectedFile>,
    pub(crate) resume_text: String,
    pub(crate) job_description: String,
    pub(crate) pending: Option<Pending>,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<AnalysisResult>,
}

impl AppState {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(Pending::Upload) => Phase::Uploading,
            Some(Pending::Analyze) => Phase::Analyzing,
            None if self.result.is_some() => Phase::ShowingResult,
            None if !self.resume_text.is_empty() => Phase::ReadyToAnalyze,
            None => Phase::Idle,
        }
    }

    /// The analyze button is live only with a file, some text, and nothing in flight.
    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && !self.job_description.is_empty() && !self.is_loading()
    }

    /// The error belongs next to the upload widget while no file is held.
    pub fn upload_error(&self) -> Option<&str> {
        self.error().filter(|_| self.file.is_none())
    }

    /// The error belongs next to the text field while it is empty.
    pub fn job_description_error(&self) -> Option<&str> {
        self.error().filter(|_| self.job_description.is_empty())
    }

    /// An error neither input claims, such as a failed analysis.
    pub fn form_error(&self) -> Option<&str> {
        if self.upload_error().is_some() || self.job_description_error().is_some() {
            None
        } else {
            self.error()
        }
    }
}
