//! Error handling for the SmartResume client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartResumeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Only PDF files are allowed.")]
    InvalidFileType(String),

    #[error("File size must be less than {limit_mb}MB.")]
    FileTooLarge { size: u64, limit_mb: u64 },

    #[error("Please upload a resume first.")]
    MissingResume,

    #[error("Please enter a job description.")]
    MissingJobDescription,

    /// Detail is kept for the log; the displayed message is uniform.
    #[error("Failed to extract text from PDF. Please try again.")]
    UploadFailed(String),

    #[error("Analysis failed. Please try again.")]
    AnalysisFailed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl SmartResumeError {
    /// True for errors raised before anything is sent to the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SmartResumeError::InvalidFileType(_)
                | SmartResumeError::FileTooLarge { .. }
                | SmartResumeError::MissingResume
                | SmartResumeError::MissingJobDescription
        )
    }

    /// Diagnostic detail behind a uniform service failure, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SmartResumeError::UploadFailed(detail) | SmartResumeError::AnalysisFailed(detail) => {
                Some(detail)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SmartResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            SmartResumeError::InvalidFileType("text/plain".into()).to_string(),
            "Only PDF files are allowed."
        );
        assert_eq!(
            SmartResumeError::FileTooLarge { size: 6_000_000, limit_mb: 5 }.to_string(),
            "File size must be less than 5MB."
        );
        assert!(SmartResumeError::MissingResume.is_validation());
        assert!(!SmartResumeError::AnalysisFailed("boom".into()).is_validation());
    }

    #[test]
    fn test_service_failures_hide_detail() {
        let err = SmartResumeError::UploadFailed("status 500: traceback".into());
        assert_eq!(err.to_string(), "Failed to extract text from PDF. Please try again.");
        assert_eq!(err.detail(), Some("status 500: traceback"));
    }
}
