//! HTTP client tests against a loopback stub server

use smart_resume::client::{AnalyzeRequest, HttpResumeService, ResumeService, Suggestions};
use smart_resume::config::Config;
use smart_resume::error::SmartResumeError;
use smart_resume::input::SelectedFile;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Serve exactly one request with a canned reply and hand back what was received.
async fn serve_once(status: &'static str, reply: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).await.unwrap();

        let mut headers: Vec<(String, String)> = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        let mut captured = CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: Vec::new(),
        };

        if let Some(length) = captured.header("content-length") {
            let mut body = vec![0; length.parse::<usize>().unwrap()];
            reader.read_exact(&mut body).await.unwrap();
            captured.body = body;
        } else if captured
            .header("transfer-encoding")
            .is_some_and(|value| value.contains("chunked"))
        {
            loop {
                let mut size_line = String::new();
                reader.read_line(&mut size_line).await.unwrap();
                let size = usize::from_str_radix(size_line.trim(), 16).unwrap();
                // Chunk data is followed by CRLF.
                let mut chunk = vec![0; size + 2];
                reader.read_exact(&mut chunk).await.unwrap();
                if size == 0 {
                    break;
                }
                captured.body.extend_from_slice(&chunk[..size]);
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reply.len(),
            reply
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        captured
    });

    (base_url, handle)
}

fn service_for(base_url: &str) -> HttpResumeService {
    let mut config = Config::default();
    config.service.base_url = base_url.to_string();
    config.service.timeout_secs = 5;
    HttpResumeService::new(&config.service).unwrap()
}

fn resume() -> SelectedFile {
    SelectedFile::new("jane_doe.pdf", "application/pdf", b"%PDF-1.4 fake resume".to_vec())
}

fn request() -> AnalyzeRequest {
    AnalyzeRequest {
        resume_text: "Jane Doe\nPython developer".to_string(),
        job_description: "Looking for a Python developer".to_string(),
    }
}

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let (base_url, server) = serve_once("200 OK", r#"{"text": "Jane Doe\nPython developer"}"#).await;

    let text = service_for(&base_url).upload(&resume()).await.unwrap();
    assert_eq!(text, "Jane Doe\nPython developer");

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /upload HTTP/1.1");
    assert!(captured
        .header("content-type")
        .is_some_and(|value| value.starts_with("multipart/form-data")));

    let body = captured.body_text();
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="jane_doe.pdf""#));
    assert!(body.contains("application/pdf"));
    assert!(body.contains("%PDF-1.4 fake resume"));
}

#[tokio::test]
async fn test_upload_server_error_is_upload_failure() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error": "no text layer"}"#).await;

    let err = service_for(&base_url).upload(&resume()).await.unwrap_err();
    assert!(matches!(err, SmartResumeError::UploadFailed(_)));
    assert_eq!(err.to_string(), "Failed to extract text from PDF. Please try again.");
    assert!(err.detail().is_some_and(|detail| detail.contains("500")));

    server.await.unwrap();
}

#[tokio::test]
async fn test_upload_malformed_reply_is_upload_failure() {
    let (base_url, server) = serve_once("200 OK", r#"{"content": "wrong field"}"#).await;

    let err = service_for(&base_url).upload(&resume()).await.unwrap_err();
    assert!(matches!(err, SmartResumeError::UploadFailed(_)));

    server.await.unwrap();
}

#[tokio::test]
async fn test_analyze_posts_json_and_parses_result() {
    let reply = r#"{
        "match_percentage": 72,
        "matched_skills": ["Python", "Flask"],
        "missing_skills": ["Docker", "AWS"],
        "suggestions": [
            {"type": "skill_gap", "title": "Add Docker", "message": "Mention containers."}
        ]
    }"#;
    let (base_url, server) = serve_once("200 OK", reply).await;

    let result = service_for(&base_url).analyze(&request()).await.unwrap();
    assert_eq!(result.match_percentage, 72.0);
    assert_eq!(result.matched_skills, vec!["Python", "Flask"]);
    assert_eq!(result.missing_skills, vec!["Docker", "AWS"]);
    match &result.suggestions {
        Suggestions::Items(items) => assert_eq!(items[0].kind, "skill_gap"),
        Suggestions::Text(_) => panic!("expected structured suggestions"),
    }

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /analyze HTTP/1.1");
    assert!(captured
        .header("content-type")
        .is_some_and(|value| value.starts_with("application/json")));

    let sent: serde_json::Value = serde_json::from_slice(&captured.body).unwrap();
    assert_eq!(sent["resume_text"], "Jane Doe\nPython developer");
    assert_eq!(sent["job_description"], "Looking for a Python developer");
}

#[tokio::test]
async fn test_analyze_accepts_legacy_string_suggestions() {
    let reply = r#"{"match_percentage": 41.67, "matched_skills": [], "missing_skills": ["Go"], "suggestions": "Learn Go."}"#;
    let (base_url, server) = serve_once("200 OK", reply).await;

    let result = service_for(&base_url).analyze(&request()).await.unwrap();
    assert_eq!(result.match_percentage, 41.67);
    assert_eq!(result.suggestions, Suggestions::Text("Learn Go.".into()));

    server.await.unwrap();
}

#[tokio::test]
async fn test_analyze_server_error_is_analysis_failure() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"error": "Missing data"}"#).await;

    let err = service_for(&base_url).analyze(&request()).await.unwrap_err();
    assert!(matches!(err, SmartResumeError::AnalysisFailed(_)));
    assert_eq!(err.to_string(), "Analysis failed. Please try again.");
    assert!(err.detail().is_some_and(|detail| detail.contains("Missing data")));

    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_service_is_upload_failure() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = service_for(&base_url).upload(&resume()).await.unwrap_err();
    assert!(matches!(err, SmartResumeError::UploadFailed(_)));
}
