//! End-to-end tests of the HTTP surface over a real socket.

use reqwest::{Method, StatusCode};
use serde_json::Value;
use status_server::ServerConfig;

mod common;

#[tokio::test]
async fn test_root_and_health() {
    let server = common::start_server(ServerConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_query_string_is_not_part_of_path() {
    let server = common::start_server(ServerConfig::default()).await;

    let res = common::client()
        .get(server.url("/health?verbose=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_unknown_routes_echo_path_and_method() {
    let server = common::start_server(ServerConfig::default()).await;
    let client = common::client();

    let cases = [
        (Method::GET, "/missing"),
        (Method::POST, "/"),
        (Method::DELETE, "/health"),
        (Method::GET, "/health/"),
        (Method::PUT, "/api/v1/items"),
    ];

    for (method, path) in cases {
        let res = client
            .request(method.clone(), server.url(path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {path}");
        assert_eq!(res.headers()["access-control-allow-origin"], "*");

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Not Found");
        assert_eq!(body["path"], path);
        assert_eq!(body["method"], method.as_str());
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_preflight_on_any_path() {
    let server = common::start_server(ServerConfig::default()).await;
    let client = common::client();

    for path in ["/", "/health", "/nowhere"] {
        let res = client
            .request(Method::OPTIONS, server.url(path))
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            res.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert!(res.text().await.unwrap().is_empty());
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = common::start_server(ServerConfig::default()).await;

    let res = common::client()
        .post(server.url("/"))
        .header("content-type", "application/json")
        .body("{\"unterminated\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "status": "error", "message": "Internal server error" })
    );

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_environment_is_reported() {
    let config = ServerConfig {
        app_env: "production".into(),
        ..ServerConfig::default()
    };
    let server = common::start_server(config).await;

    let body: Value = common::client()
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["environment"], "production");

    server.stop().await.unwrap();
}
