use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::any;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

// =============================================================================
// URL + HEADER MAPPING
// =============================================================================

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(upstream_url("http://localhost:8000", "auth/me", None), "http://localhost:8000/api/auth/me");
    assert_eq!(upstream_url("http://localhost:8000/", "/plans/", None), "http://localhost:8000/api/plans/");
}

#[test]
fn upstream_url_preserves_query() {
    assert_eq!(
        upstream_url("http://backend", "products/designs", Some("category_id=3&limit=10")),
        "http://backend/api/products/designs?category_id=3&limit=10"
    );
    assert_eq!(upstream_url("http://backend", "plans", Some("")), "http://backend/api/plans");
}

#[test]
fn forwarded_headers_keeps_only_allow_list() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    headers.insert(header::HOST, HeaderValue::from_static("cookieflix.example"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn proxied_path_keeps_percent_encoding() {
    assert_eq!(proxied_path("/api/auth/me"), Some("auth/me"));
    assert_eq!(proxied_path("/api/products/categories/a%2Fb"), Some("products/categories/a%2Fb"));
    assert_eq!(proxied_path("/api/products/categories/a%3Fb%3Dc"), Some("products/categories/a%3Fb%3Dc"));
    assert_eq!(proxied_path("/api/plans/v1.2"), Some("plans/v1.2"));
}

#[test]
fn proxied_path_refuses_dot_segments_in_any_encoding() {
    for path in [
        "/api/../docs",
        "/api/x/..%2F..%2Fdocs",
        "/api/%2e%2e/docs",
        "/api/x/.%2E/docs",
        "/api/x/..%5Cdocs",
        "/api/./plans",
        "/docs",
    ] {
        assert_eq!(proxied_path(path), None, "{path} should be refused");
    }
}

// =============================================================================
// END TO END
// =============================================================================

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let status = if uri.path().ends_with("/missing") { StatusCode::NOT_FOUND } else { StatusCode::OK };
    (
        status,
        Json(serde_json::json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "authorization": auth,
            "body": String::from_utf8_lossy(&body),
        })),
    )
}

fn host_config(upstream: SocketAddr) -> ServerConfig {
    ServerConfig { port: 0, api_upstream_url: format!("http://{upstream}"), proxy_timeout: Duration::from_secs(5) }
}

#[tokio::test]
async fn forwards_method_query_headers_and_body() {
    let upstream = serve(Router::new().route("/api/{*rest}", any(echo))).await;
    let state = AppState::new(host_config(upstream)).unwrap();
    let host = serve(api_routes(state)).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{host}/api/products/designs/vote?source=catalog"))
        .header(header::AUTHORIZATION, "Bearer abc")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"design_id":7}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/products/designs/vote");
    assert_eq!(echoed["query"], "source=catalog");
    assert_eq!(echoed["authorization"], "Bearer abc");
    assert_eq!(echoed["body"], r#"{"design_id":7}"#);
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let upstream = serve(Router::new().route("/api/{*rest}", any(echo))).await;
    let state = AppState::new(host_config(upstream)).unwrap();
    let host = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{host}/api/users/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let state = AppState::new(host_config(closed)).unwrap();
    let host = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{host}/api/plans")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Backend unavailable");
}

#[tokio::test]
async fn encoded_separators_stay_inside_their_segment() {
    let upstream = serve(Router::new().route("/api/{*rest}", any(echo))).await;
    let state = AppState::new(host_config(upstream)).unwrap();
    let host = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{host}/api/products/categories/a%3Fb%3Dc")).await.unwrap();
    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["path"], "/api/products/categories/a%3Fb%3Dc");
    assert_eq!(echoed["query"], serde_json::Value::Null);

    let resp = reqwest::get(format!("http://{host}/api/products/categories/a%2Fb")).await.unwrap();
    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed["path"], "/api/products/categories/a%2Fb");
}

#[tokio::test]
async fn encoded_dot_segments_never_reach_upstream() {
    let upstream = serve(Router::new().fallback(any(echo))).await;
    let state = AppState::new(host_config(upstream)).unwrap();
    let host = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{host}/api/x/..%2F..%2Fdocs")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid path");
}

#[tokio::test]
async fn healthz_is_ok() {
    let state = AppState::new(host_config("127.0.0.1:9".parse().unwrap())).unwrap();
    let host = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
