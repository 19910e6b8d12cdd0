//! Interactive session tests driven by scripted input

mod common;

use common::{sample_result, StubService};
use smart_resume::app::Controller;
use smart_resume::session::{Session, SessionOptions};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn session(service: StubService) -> Session<StubService> {
    let controller = Controller::new(service).with_settle_delay(Duration::ZERO);
    Session::new(
        controller,
        SessionOptions {
            use_colors: false,
            show_spinner: false,
            service_url: "http://localhost:5000".to_string(),
        },
    )
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

async fn run_script(session: &mut Session<StubService>, script: &str) -> String {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_first_page_shows_empty_form() {
    let mut session = session(StubService::new("text", sample_result(80.0)));
    let out = run_script(&mut session, "quit\n").await;

    assert!(out.contains("SmartResume"));
    assert!(out.contains("How it works · Features"));
    assert!(out.contains("Upload your Resume"));
    assert!(out.contains("Max size: 5MB"));
    assert!(out.contains("Job Description  0 characters"));
    assert!(out.contains("Paste the job description here"));
    assert!(out.contains("[ Analyze Resume → ]"));
}

#[tokio::test]
async fn test_open_then_analyze_shows_result() {
    let dir = tempfile::tempdir().unwrap();
    let resume = write_file(&dir, "resume.pdf", b"%PDF-1.4\n");

    let mut session = session(StubService::new("Jane Doe\nPython", sample_result(72.0)));
    let script = format!(
        "open {}\njd Looking for a Python developer\nanalyze\nquit\n",
        resume.display()
    );
    let out = run_script(&mut session, &script).await;

    assert!(out.contains("✔ resume.pdf"));
    assert!(out.contains("Analysis Results"));
    assert!(out.contains("72% MATCH"));
    assert!(out.contains("Good start. Address the missing skills to improve your ranking."));
    assert!(out.contains("(Python)"));
    assert!(out.contains("(Docker)"));
    assert!(out.contains("Add Docker"));

    let request = session.controller().service().last_request().unwrap();
    assert_eq!(request.resume_text, "Jane Doe\nPython");
    assert_eq!(request.job_description, "Looking for a Python developer");
}

#[tokio::test]
async fn test_pasted_path_selects_file() {
    let dir = tempfile::tempdir().unwrap();
    let resume = write_file(&dir, "My CV.pdf", b"%PDF-1.4\n");

    let mut session = session(StubService::new("text", sample_result(80.0)));
    let script = format!("'{}'\nquit\n", resume.display());
    run_script(&mut session, &script).await;

    let state = session.controller().state();
    assert_eq!(state.file().map(|f| f.name()), Some("My CV.pdf"));
    assert_eq!(state.resume_text(), "text");
}

#[tokio::test]
async fn test_drag_and_drop_flow() {
    let dir = tempfile::tempdir().unwrap();
    let resume = write_file(&dir, "resume.pdf", b"%PDF-1.4\n");

    let mut session = session(StubService::new("text", sample_result(80.0)));
    let script = format!("drop\n{}\nquit\n", resume.display());
    let out = run_script(&mut session, &script).await;

    assert!(out.contains("Drop to upload"));
    assert!(out.contains("drop> "));
    assert_eq!(session.controller().state().file().map(|f| f.name()), Some("resume.pdf"));
}

#[tokio::test]
async fn test_rejected_file_shows_error_in_upload_zone() {
    let dir = tempfile::tempdir().unwrap();
    let notes = write_file(&dir, "notes.txt", b"not a pdf");

    let mut session = session(StubService::new("text", sample_result(80.0)));
    let script = format!("open {}\nquit\n", notes.display());
    let out = run_script(&mut session, &script).await;

    assert!(out.contains("✖ Only PDF files are allowed."));
    assert!(session.controller().state().file().is_none());
    assert_eq!(session.controller().service().calls(), 0);
}

#[tokio::test]
async fn test_multiline_job_description() {
    let mut session = session(StubService::new("text", sample_result(80.0)));
    let out = run_script(&mut session, "jd\nBackend Engineer\nPython and Flask\n.\nquit\n").await;

    assert_eq!(
        session.controller().state().job_description(),
        "Backend Engineer\nPython and Flask"
    );
    assert!(out.contains("Job Description  33 characters"));
}

#[tokio::test]
async fn test_analyze_before_inputs_only_hints() {
    let mut session = session(StubService::new("text", sample_result(80.0)));
    let out = run_script(&mut session, "analyze\nquit\n").await;

    assert!(out.contains("Select a resume and enter a job description first."));
    assert_eq!(session.controller().service().calls(), 0);
}

#[tokio::test]
async fn test_analysis_failure_is_shown_and_inputs_kept() {
    let dir = tempfile::tempdir().unwrap();
    let resume = write_file(&dir, "resume.pdf", b"%PDF-1.4\n");

    let mut session = session(StubService::new("text", sample_result(80.0)).failing_analyze());
    let script = format!("open {}\njd Rust\nanalyze\nquit\n", resume.display());
    let out = run_script(&mut session, &script).await;

    assert!(out.contains("Analysis failed. Please try again."));
    assert!(session.controller().state().result().is_none());
    assert_eq!(session.controller().state().job_description(), "Rust");
}

#[tokio::test]
async fn test_reset_after_result() {
    let dir = tempfile::tempdir().unwrap();
    let resume = write_file(&dir, "resume.pdf", b"%PDF-1.4\n");

    let mut session = session(StubService::new("text", sample_result(90.0)));
    let script = format!("open {}\njd Python\nanalyze\nanother\nquit\n", resume.display());
    let out = run_script(&mut session, &script).await;

    assert!(out.contains("Excellent! Your resume is highly optimized for this role."));
    assert!(session.controller().state().result().is_none());
    assert!(session.controller().state().file().is_none());
    assert!(out.trim_end().ends_with("resume>"));
}

#[tokio::test]
async fn test_landing_sections_and_unknown_commands() {
    let mut session = session(StubService::new("text", sample_result(80.0)));
    let out = run_script(&mut session, "features\nhow it works\ndance\n").await;

    assert!(out.contains("Unknown command: dance"));
    // End of input ends the session like quit.
    assert!(out.trim_end().ends_with("resume>"));
}

#[tokio::test]
async fn test_job_description_file_command() {
    let mut session = session(StubService::new("text", sample_result(80.0)));
    run_script(&mut session, "jd-file tests/fixtures/job_description.txt\nquit\n").await;

    assert!(session
        .controller()
        .state()
        .job_description()
        .contains("Python developer with Flask and Docker"));
}

#[tokio::test]
async fn test_quit_ends_session_during_drag() {
    let mut session = session(StubService::new("text", sample_result(80.0)));
    let out = run_script(&mut session, "drop\nquit\nshow\n").await;

    assert!(!out.contains("Could not open"));
    assert!(out.trim_end().ends_with("drop>"));
    assert!(session.controller().state().file().is_none());
}
