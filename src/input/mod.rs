//! Input widgets and file handling
//! Covers file type detection, resume selection, and the job description field

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod selected_file;
pub mod upload_zone;
pub mod job_description;

pub use job_description::JobDescriptionInput;
pub use selected_file::SelectedFile;
pub use upload_zone::UploadZone;
