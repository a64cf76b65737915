// End-to-end tests for BackendClient against a canned local HTTP server
use std::time::Duration;

use spacebio_api::{ApiError, BackendClient, SearchRequest};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the stub server saw
#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    body: String,
}

/// Serve exactly one canned response on a random loopback port
async fn serve_once(
    status: &str,
    body: &str,
    delay: Option<Duration>,
) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let captured = read_request(&mut stream).await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        // The client may already have hung up after a timeout
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.flush().await;
        captured
    });

    (format!("http://127.0.0.1:{}", port), handle)
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    CapturedRequest {
        request_line: head.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    }
}

const SEARCH_BODY: &str = r#"{
    "organism_name": "Escherichia coli",
    "condition": "Cosmic Radiation",
    "description": "Gram-negative bacterium studied aboard the ISS",
    "scientific_details": {
        "classification": "Bacteria; Proteobacteria",
        "response_mechanisms": ["SOS response", "RecA-mediated repair"],
        "experimental_findings": "DNA repair genes upregulated fourfold",
        "applications": "Radiation shielding biology"
    },
    "relevant_chunks": ["chunk one", "chunk two"]
}"#;

#[tokio::test]
async fn test_search_posts_query_and_decodes_result() {
    let (base_url, server) = serve_once("200 OK", SEARCH_BODY, None).await;
    let client = BackendClient::new(base_url).unwrap();

    let request = SearchRequest {
        query: "E. coli radiation".to_string(),
        condition: Some("Cosmic Radiation".to_string()),
    };
    let response = client.search(&request).await.unwrap();

    assert_eq!(response.organism_name, "Escherichia coli");
    assert_eq!(response.condition.as_deref(), Some("Cosmic Radiation"));
    assert_eq!(
        response.scientific_details.response_mechanisms,
        vec!["SOS response", "RecA-mediated repair"]
    );
    assert_eq!(response.relevant_chunks.len(), 2);

    // Structurally equal to what the server sent
    let expected: serde_json::Value = serde_json::from_str(SEARCH_BODY).unwrap();
    assert_eq!(serde_json::to_value(&response).unwrap(), expected);

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "POST /search HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        sent,
        serde_json::json!({"query": "E. coli radiation", "condition": "Cosmic Radiation"})
    );
}

#[tokio::test]
async fn test_http_error_uses_detail_field() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"detail":"overloaded"}"#, None).await;
    let client = BackendClient::new(base_url).unwrap();

    let err = client
        .search(&SearchRequest {
            query: "yeast".to_string(),
            condition: None,
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "overloaded");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_without_detail_falls_back_to_status() {
    let (base_url, _server) = serve_once("503 Service Unavailable", "not json", None).await;
    let client = BackendClient::new(base_url).unwrap();

    let err = client.health().await.unwrap_err();
    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "HTTP error! status: 503");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_detail_falls_back_to_status() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"detail":""}"#, None).await;
    let client = BackendClient::new(base_url).unwrap();

    let err = client.health().await.unwrap_err();
    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP error! status: 500");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_detail_is_preserved() {
    let (base_url, _server) = serve_once(
        "404 Not Found",
        r#"{"detail":"No relevant organism data found for the given query and condition"}"#,
        None,
    )
    .await;
    let client = BackendClient::new(base_url).unwrap();

    let err = client
        .search(&SearchRequest {
            query: "unicorn".to_string(),
            condition: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().starts_with("No relevant organism data"));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let (base_url, _server) = serve_once("200 OK", r#"{"organism_name": 42}"#, None).await;
    let client = BackendClient::new(base_url).unwrap();

    let err = client
        .search(&SearchRequest {
            query: "arabidopsis".to_string(),
            condition: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn test_health_decodes_fields() {
    let body = r#"{"api":"healthy","mongodb":"disconnected","openai":"healthy"}"#;
    let (base_url, server) = serve_once("200 OK", body, None).await;
    let client = BackendClient::new(base_url).unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.api, "healthy");
    assert_eq!(health.mongodb, "disconnected");
    assert_eq!(health.openai, "healthy");

    let captured = server.await.unwrap();
    assert_eq!(captured.request_line, "GET /health HTTP/1.1");
}

#[tokio::test]
async fn test_root_and_test_llm_endpoints() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"message":"NASA Hackathon API is running","status":"healthy"}"#,
        None,
    )
    .await;
    let client = BackendClient::new(base_url).unwrap();
    let root = client.root().await.unwrap();
    assert_eq!(root.status, "healthy");
    assert_eq!(server.await.unwrap().request_line, "GET / HTTP/1.1");

    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"status":"error","error":"no key","llm_response":null,"response_length":0,"is_json":false}"#,
        None,
    )
    .await;
    let client = BackendClient::new(base_url).unwrap();
    let llm = client.test_llm().await.unwrap();
    assert_eq!(llm.status, "error");
    assert_eq!(llm.error.as_deref(), Some("no key"));
    assert!(llm.llm_response.is_none());
    assert_eq!(server.await.unwrap().request_line, "GET /test-llm HTTP/1.1");
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let (base_url, _server) = serve_once(
        "200 OK",
        r#"{"api":"healthy","mongodb":"healthy","openai":"healthy"}"#,
        Some(Duration::from_millis(500)),
    )
    .await;
    let client = BackendClient::with_timeout(base_url, Some(Duration::from_millis(50))).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout), "{:?}", err);
}
