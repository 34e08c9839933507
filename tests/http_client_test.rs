/// Tests for the HTTP adapter against a canned local server
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use supply_trace::prelude::*;

/// Serves exactly one request with a canned response and hands back the request line
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                break;
            }
        }

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        let _ = tx.send(request_line.trim_end().to_string());
    });

    (base, rx)
}

fn client(base: &str) -> HttpTraceabilityClient {
    HttpTraceabilityClient::new(base).unwrap()
}

#[tokio::test]
async fn test_health_ok() {
    let (base, requests) = serve_once("200 OK", r#"{"ok":true}"#);

    let status = client(&base).check_health().await;

    assert_eq!(status, HealthStatus::Ok);
    assert_eq!(requests.recv().unwrap(), "GET /api/health HTTP/1.1");
}

#[tokio::test]
async fn test_health_non_json_is_unexpected_response() {
    let (base, _requests) = serve_once("200 OK", "<html>proxy page</html>");

    let status = client(&base).check_health().await;

    assert!(matches!(
        status,
        HealthStatus::Error(ref f) if f.kind == HealthFailureKind::UnexpectedResponse
    ));
}

#[tokio::test]
async fn test_health_server_error_is_unreachable() {
    let (base, _requests) = serve_once("500 Internal Server Error", r#"{"ok":true}"#);

    let status = client(&base).check_health().await;

    assert!(matches!(
        status,
        HealthStatus::Error(ref f) if f.kind == HealthFailureKind::Unreachable
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind and drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let result = client(&format!("http://127.0.0.1:{}", port))
        .fetch_supplier_quality()
        .await;

    assert!(matches!(result, Err(ApiError::Network { .. })));
}

#[tokio::test]
async fn test_supplier_quality_rows() {
    let body = r#"[
        {"supplier":"Acme Castings","supplierId":"SUP-1","total":120,"rejected":18,"rejectRatePercent":15},
        {"supplier":"Borealis","supplierId":"SUP-2","total":80,"rejected":0,"rejectRatePercent":null}
    ]"#;
    let (base, requests) = serve_once("200 OK", body);

    let rows = client(&base).fetch_supplier_quality().await.unwrap();

    assert_eq!(requests.recv().unwrap(), "GET /api/suppliers/quality HTTP/1.1");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].supplier.as_deref(), Some("Acme Castings"));
    assert_eq!(rows[0].reject_rate_percent, Some(15.0));
    assert_eq!(rows[1].reject_rate_percent, None);
}

#[tokio::test]
async fn test_supplier_quality_404_is_http_error() {
    let (base, _requests) = serve_once("404 Not Found", "{}");

    let result = client(&base).fetch_supplier_quality().await;

    assert_eq!(result, Err(ApiError::Http { status: 404 }));
}

#[tokio::test]
async fn test_trace_encodes_serial_and_decodes_result() {
    let body = r#"{"serial":"SN 1/2","status":"OK","batchId":"B-1","supplierId":"SUP-1","supplierName":"Acme","affectedSerials":["SN-2"]}"#;
    let (base, requests) = serve_once("200 OK", body);
    let serial = SerialNumber::parse("SN 1/2").unwrap();

    let result = client(&base).fetch_serial_trace(&serial).await.unwrap();

    assert_eq!(
        requests.recv().unwrap(),
        "GET /api/serial/SN%201%2F2/trace HTTP/1.1"
    );
    assert_eq!(result.batch_id.as_deref(), Some("B-1"));
    assert_eq!(result.affected(), ["SN-2".to_string()]);
}

#[tokio::test]
async fn test_trace_404_is_not_found() {
    let (base, _requests) = serve_once("404 Not Found", r#"{"error":"not found"}"#);
    let serial = SerialNumber::parse("SN-404").unwrap();

    let result = client(&base).fetch_serial_trace(&serial).await;

    assert_eq!(result, Err(ApiError::NotFound));
}

#[tokio::test]
async fn test_trace_500_is_http_error() {
    let (base, _requests) = serve_once("500 Internal Server Error", "");
    let serial = SerialNumber::parse("SN-1").unwrap();

    let result = client(&base).fetch_serial_trace(&serial).await;

    assert_eq!(result, Err(ApiError::Http { status: 500 }));
}

#[tokio::test]
async fn test_random_serials_missing_list_is_empty() {
    let (base, requests) = serve_once("200 OK", "{}");

    let serials = client(&base).fetch_random_serials().await.unwrap();

    assert_eq!(requests.recv().unwrap(), "GET /api/serial/random HTTP/1.1");
    assert!(serials.is_empty());
}

#[tokio::test]
async fn test_random_serials_list() {
    let (base, _requests) = serve_once("200 OK", r#"{"serials":["SN-1","SN-2"]}"#);

    let serials = client(&base).fetch_random_serials().await.unwrap();

    assert_eq!(serials, ["SN-1", "SN-2"]);
}

#[tokio::test]
async fn test_admin_clear_posts_and_returns_body() {
    let (base, requests) = serve_once("200 OK", r#"{"deleted":42}"#);

    let body = client(&base).clear_database().await.unwrap();

    assert_eq!(requests.recv().unwrap(), "POST /api/admin/clear HTTP/1.1");
    assert_eq!(body["deleted"], 42);
}

#[tokio::test]
async fn test_admin_seed_empty_body_is_null() {
    let (base, requests) = serve_once("200 OK", "");

    let body = client(&base).seed_database().await.unwrap();

    assert_eq!(requests.recv().unwrap(), "POST /api/admin/seed HTTP/1.1");
    assert!(body.is_null());
}

#[tokio::test]
async fn test_admin_seed_failure_status() {
    let (base, _requests) = serve_once("503 Service Unavailable", "");

    let result = client(&base).seed_database().await;

    assert_eq!(result, Err(ApiError::Http { status: 503 }));
}
