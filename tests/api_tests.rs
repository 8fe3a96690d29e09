// HTTP API tests, run against the router with in-memory providers
// Run with: cargo test --test api_tests

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use trip_planner::AppState;

fn test_app() -> Router {
    let planner = create_test_planner(
        Arc::new(FakePlaceSource::new(delhi_places())),
        Arc::new(FakeRouter::working()),
        Some(rainy_weather()),
    );
    trip_planner::routes::create_router(Arc::new(AppState { planner }))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/debug/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["routing"], "ok");
    assert_eq!(json["checks"]["weather"], "ok");
    assert_eq!(json["checks"]["max_duration_days"], 30);
    assert_eq!(json["checks"]["default_budget"], "Medium");
}

#[tokio::test]
async fn test_plan_endpoint_returns_itinerary() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/trips/plan",
            json!({"destination": "Delhi", "duration_days": 2, "budget": "Low"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["destination"], "Delhi");
    assert_eq!(json["budget"], "Low");

    let itinerary = json["itinerary"].as_array().unwrap();
    assert!(!itinerary.is_empty());
    assert!(itinerary[0]["name"].is_string());
    assert!(itinerary[0]["route_to_next"]["distance_km"].is_number());
    assert!(itinerary.last().unwrap().get("route_to_next").is_none());

    assert_eq!(json["daily_breakdown"].as_array().unwrap().len(), 2);
    assert_eq!(json["weather"]["condition"], "Rain");
}

#[tokio::test]
async fn test_plan_endpoint_rejects_zero_days() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/trips/plan",
            json!({"destination": "Delhi", "duration_days": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Bad Request");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("duration_days must be between 1 and 30"));
}

#[tokio::test]
async fn test_plan_endpoint_unknown_destination() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/trips/plan",
            json!({"destination": "Atlantis", "duration_days": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_export_endpoint_sets_download_headers() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/trips/export?format=html",
            json!({"destination": "Delhi", "duration_days": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert_eq!(content_type, "text/html; charset=utf-8");

    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"trip_plan_Delhi_"));
    assert!(disposition.ends_with(".html\""));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Delhi"));
}

#[tokio::test]
async fn test_export_endpoint_defaults_to_mobile_text() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/trips/export?format=pdf",
            json!({"destination": "Delhi", "duration_days": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "text/plain; charset=utf-8"
    );
}
