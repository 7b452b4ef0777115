//! Integration tests for the informational endpoints and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get, FakeGenerator, RENDERER_WRITES_VIDEO};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET / returns the fixed greeting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_hello_world() {
    let app = build_test_app(FakeGenerator::replying(""), RENDERER_WRITES_VIDEO).await;
    let response = get(app.router.clone(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"Hello": "World"}));
    assert_eq!(app.generator.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Test: GET /health returns status and version
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(FakeGenerator::replying(""), RENDERER_WRITES_VIDEO).await;
    let response = get(app.router.clone(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(FakeGenerator::replying(""), RENDERER_WRITES_VIDEO).await;
    let response = get(app.router.clone(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: GET /render is not allowed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_render_is_method_not_allowed() {
    let app = build_test_app(FakeGenerator::replying(""), RENDERER_WRITES_VIDEO).await;
    let response = get(app.router.clone(), "/render").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(FakeGenerator::replying(""), RENDERER_WRITES_VIDEO).await;
    let response = get(app.router.clone(), "/").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a valid UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = build_test_app(FakeGenerator::replying(""), RENDERER_WRITES_VIDEO).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/render")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
