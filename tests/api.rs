//! HTTP surface tests
//!
//! Fits a small pipeline in-process and drives the router with in-memory
//! requests via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use homeprice::pipeline::PricePipeline;
use homeprice::schema::HouseRecord;
use homeprice::{create_router, AppState};

fn sample_records() -> Vec<HouseRecord> {
    vec![
        HouseRecord {
            location: "A".to_string(),
            size: 50.0,
            bedrooms: 2,
            price: 100_000.0,
        },
        HouseRecord {
            location: "B".to_string(),
            size: 80.0,
            bedrooms: 3,
            price: 150_000.0,
        },
        HouseRecord {
            location: "A".to_string(),
            size: 60.0,
            bedrooms: 2,
            price: 110_000.0,
        },
    ]
}

fn test_app() -> Router {
    let pipeline = PricePipeline::fit(&sample_records()).expect("fit should succeed");
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };
    create_router(state)
}

async fn request(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_status_is_fixed_and_repeatable() {
    for _ in 0..3 {
        let (status, body) = request(test_app(), "GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "API status": "ready" }));
    }
}

#[tokio::test]
async fn predict_returns_integer_within_training_range() {
    let (status, body) = request(test_app(), "POST", "/predict/?location=A&size=55&bedrooms=2").await;

    assert_eq!(status, StatusCode::OK);
    let prediction = body["prediction"].as_i64().expect("integer prediction");
    assert!(
        (100_000..=150_000).contains(&prediction),
        "prediction = {prediction}"
    );
}

#[tokio::test]
async fn unknown_location_still_predicts() {
    let (status, body) = request(test_app(), "POST", "/predict/?location=Z&size=70&bedrooms=4").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["prediction"].is_i64());
}

#[tokio::test]
async fn rejects_size_below_minimum() {
    let (status, body) = request(test_app(), "POST", "/predict/?location=A&size=9.9").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn rejects_bedrooms_out_of_range() {
    let (status, _) = request(test_app(), "POST", "/predict/?location=A&size=55&bedrooms=51").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(test_app(), "POST", "/predict/?location=A&size=55&bedrooms=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejects_empty_location() {
    let (status, _) = request(test_app(), "POST", "/predict/?location=&size=55").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejects_missing_required_parameters() {
    let (status, _) = request(test_app(), "POST", "/predict/?location=A").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn omitted_bedrooms_defaults_to_two() {
    let app = test_app();
    let (_, defaulted) = request(app.clone(), "POST", "/predict/?location=A&size=55").await;
    let (_, explicit) = request(app, "POST", "/predict/?location=A&size=55&bedrooms=2").await;

    assert_eq!(defaulted["prediction"], explicit["prediction"]);
}

#[tokio::test]
async fn identical_requests_yield_identical_predictions() {
    let app = test_app();
    let uri = "/predict/?location=B&size=75&bedrooms=3";

    let (_, first) = request(app.clone(), "POST", uri).await;
    let (_, second) = request(app, "POST", uri).await;

    assert_eq!(first["prediction"], second["prediction"]);
}
