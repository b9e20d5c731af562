//! Server integration tests that test the actual server behavior.
//!
//! These tests start a real TCP server and talk raw HTTP to it.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use swatchlab::models::AppConfig;
use swatchlab::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let state = create_app_state(AppConfig::default());
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    port
}

/// Send one request with `Connection: close` and read the whole response.
async fn raw_request(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timed out waiting for response")
    .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server().await;

    let response = raw_request(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("OK"), "{response}");
}

#[tokio::test]
async fn test_json_api_over_tcp() {
    let port = start_test_server().await;

    let body = r##"{"foreground":"#000","background":"#fff"}"##;
    let request = format!(
        "POST /api/contrast HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let response = raw_request(port, &request).await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    let (_, body) = response
        .split_once("\r\n\r\n")
        .expect("Response should have a body");
    let json: serde_json::Value = serde_json::from_str(body).expect("JSON body");
    assert_eq!(json["ratio"], 21.0);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let port = start_test_server().await;

    let response = raw_request(
        port,
        "GET /api/nothing HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 404"), "{response}");
}
