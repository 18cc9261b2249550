use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gridiron_predictor::{MODEL_VERSION, predict_router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_predict(payload: Value) -> (StatusCode, Value) {
    let (router, _api) = predict_router::<()>().split_for_parts();

    let response = router
        .oneshot(
            Request::post("/api/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn sample_payload() -> Value {
    json!({
        "home_team": "KC",
        "away_team": "BUF",
        "week": 3,
        "season": 2024,
        "features": { "home_offense": 7.2, "away_offense": 6.8 }
    })
}

#[tokio::test]
async fn predict_end_to_end() {
    let (status, body) = post_predict(sample_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["prediction"]["point_diff"].as_f64().unwrap() - 0.28).abs() < 1e-12);
    assert!((body["prediction"]["win_prob_home"].as_f64().unwrap() - 0.5175).abs() < 1e-3);
    assert_eq!(body["model_version"], MODEL_VERSION);
    assert!(body["latency_ms"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn empty_feature_bag_yields_even_odds() {
    let mut payload = sample_payload();
    payload["features"] = json!({});

    let (status, body) = post_predict(payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"]["point_diff"].as_f64().unwrap(), 0.0);
    assert_eq!(body["prediction"]["win_prob_home"].as_f64().unwrap(), 0.5);
}

#[tokio::test]
async fn out_of_range_week_is_rejected_server_side() {
    // Defense in depth: the client clamps, the server does not trust it.
    let mut payload = sample_payload();
    payload["week"] = json!(23);

    let (status, body) = post_predict(payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "week");
}

#[tokio::test]
async fn short_team_code_is_rejected_with_field_detail() {
    let mut payload = sample_payload();
    payload["home_team"] = json!("K");

    let (status, body) = post_predict(payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "home_team");
}

#[tokio::test]
async fn all_violations_are_reported_at_once() {
    let mut payload = sample_payload();
    payload["away_team"] = json!("B");
    payload["season"] = json!(2099);

    let (status, body) = post_predict(payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> =
        body["detail"].as_array().unwrap().iter().map(|v| v["field"].as_str().unwrap()).collect();
    assert_eq!(fields, ["away_team", "season"]);
}
