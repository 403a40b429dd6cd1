use agk::domain::constants::{DEFAULT_PORT, PORT_ENV};
use agk_server::Server;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serial_test::serial;
use tower::ServiceExt;

fn test_server() -> Server {
    // Port 0 keeps real-bind tests off fixed ports.
    Server::builder().port(0).build().expect("server builds")
}

#[allow(unsafe_code)]
fn set_port_env(value: Option<&str>) {
    // SAFETY: every test in this file is serialized via #[serial].
    unsafe {
        match value {
            Some(v) => std::env::set_var(PORT_ENV, v),
            None => std::env::remove_var(PORT_ENV),
        }
    }
}

fn test_router() -> Router {
    test_server().router().expect("router assembles")
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

async fn post_json(router: Router, uri: &str, payload: &serde_json::Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

#[tokio::test]
#[serial]
async fn artifact_is_byte_for_byte_deterministic() {
    let (first_status, first) = get(test_router(), "/api-json").await;
    let (second_status, second) = get(test_router(), "/api-json").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second, "independent assemblies must produce identical artifacts");
}

#[tokio::test]
#[serial]
async fn artifact_carries_metadata_and_tag_groups() {
    let (status, body) = get(test_router(), "/api-json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: serde_json::Value = serde_json::from_str(&body).expect("artifact is JSON");

    assert_eq!(doc["info"]["title"], "Agramkow API");
    assert_eq!(doc["info"]["version"], "1.0");
    assert_eq!(
        doc["info"]["description"],
        "API documentation for Agramkow transaction tracking and analysis"
    );

    let tag_names: Vec<_> = doc["tags"]
        .as_array()
        .expect("declared tags")
        .iter()
        .map(|tag| tag["name"].as_str().expect("tag name"))
        .collect();
    assert!(tag_names.contains(&"transactions"));
    assert!(tag_names.contains(&"summation"));

    let paths = doc["paths"].as_object().expect("paths object");
    assert_eq!(paths["/transactions"]["get"]["tags"][0], "transactions");
    assert_eq!(paths["/transactions"]["post"]["tags"][0], "transactions");
    assert_eq!(paths["/transactions/{id}"]["get"]["tags"][0], "transactions");
    assert_eq!(paths["/summation"]["get"]["tags"][0], "summation");

    // The documentation endpoints themselves stay out of the artifact.
    assert!(!paths.contains_key("/api"));
    assert!(!paths.contains_key("/api-json"));
}

#[tokio::test]
#[serial]
async fn docs_browser_is_mounted() {
    let (status, body) = get(test_router(), "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"), "docs browser should serve an HTML page");
}

#[tokio::test]
#[serial]
async fn health_endpoint_reports_up() {
    let (status, body) = get(test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = serde_json::from_str(&body).expect("health is JSON");
    assert_eq!(health["status"], "up");
}

#[tokio::test]
#[serial]
async fn transaction_flow_feeds_summation() {
    let router = test_router();

    let (status, body) = post_json(
        router.clone(),
        "/transactions",
        &serde_json::json!({ "description": "salary", "amount": 1500.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: serde_json::Value = serde_json::from_str(&body).expect("transaction JSON");
    let id = created["id"].as_str().expect("assigned id").to_owned();

    let (status, _) = post_json(
        router.clone(),
        "/transactions",
        &serde_json::json!({ "description": "coffee", "amount": -3.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(router.clone(), &format!("/transactions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: serde_json::Value = serde_json::from_str(&body).expect("transaction JSON");
    assert_eq!(fetched["description"], "salary");

    let (status, body) = get(router.clone(), "/transactions").await;
    assert_eq!(status, StatusCode::OK);
    let listed: serde_json::Value = serde_json::from_str(&body).expect("list JSON");
    assert_eq!(listed.as_array().expect("array").len(), 2);

    let (status, body) = get(router, "/summation").await;
    assert_eq!(status, StatusCode::OK);
    let report: serde_json::Value = serde_json::from_str(&body).expect("report JSON");
    assert_eq!(report["count"], 2);
    assert!((report["total"].as_f64().expect("total") - 1496.5).abs() < f64::EPSILON);
    assert!((report["credits"].as_f64().expect("credits") - 1500.0).abs() < f64::EPSILON);
    assert!((report["debits"].as_f64().expect("debits") - 3.5).abs() < f64::EPSILON);
}

#[tokio::test]
#[serial]
async fn unknown_transaction_is_not_found() {
    let (status, _) = get(test_router(), "/transactions/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
#[serial]
fn port_override_applies_to_builder() {
    set_port_env(Some("8080"));
    let server = Server::builder().build().expect("server builds");
    set_port_env(None);

    assert_eq!(server.state().config.server.port, 8080);
}

#[test]
#[serial]
fn malformed_port_override_falls_back_to_default() {
    set_port_env(Some("not-a-number"));
    let server = Server::builder().build().expect("server builds");
    set_port_env(None);

    assert_eq!(server.state().config.server.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn missing_port_override_uses_default() {
    set_port_env(None);
    let server = Server::builder().build().expect("server builds");

    assert_eq!(server.state().config.server.port, DEFAULT_PORT);
}

#[tokio::test]
#[serial]
async fn listening_server_serves_artifact_immediately() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let server = test_server();
    let handle = axum_server::Handle::<std::net::SocketAddr>::new();
    let task = tokio::spawn(server.serve(handle.clone()));

    let addr = handle.listening().await.expect("server should bind");

    let mut stream = tokio::net::TcpStream::connect(("127.0.0.1", addr.port()))
        .await
        .expect("connection accepted");
    stream
        .write_all(b"GET /api-json HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n")
        .await
        .expect("request written");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("response read");
    let response = String::from_utf8(response).expect("utf8 response");

    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
    assert!(response.contains("\"openapi\""), "artifact body expected");

    handle.shutdown();
    task.await.expect("serve task").expect("serve result");
}
