use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use immo_core::errors::PredictionError;
use immo_core::traits::PricePredictor;
use immo_core::FeatureVector;
use immo_features::{FeaturePipeline, GeoResolver};
use immo_server::{health, predict, predict_usage, AppState, LinearPriceModel, PredictReply};

fn fixture_state() -> AppState {
    let model = LinearPriceModel::load(&test_fixtures::linear_model_path()).unwrap();
    let pipeline = FeaturePipeline::new(GeoResolver::with_table(test_fixtures::geo_table_path()));
    AppState::new(pipeline, Arc::new(model))
}

async fn post(state: AppState, body: Value) -> (StatusCode, Value) {
    post_raw(state, body.to_string()).await
}

async fn post_raw(state: AppState, body: impl Into<Bytes>) -> (StatusCode, Value) {
    let (status, Json(reply)): (StatusCode, Json<PredictReply>) =
        predict(State(state), body.into()).await;
    (status, serde_json::to_value(reply).unwrap())
}

#[tokio::test]
async fn root_reports_alive() {
    let (status, Json(body)) = health().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "alive");
}

#[tokio::test]
async fn get_predict_explains_usage() {
    let (status, Json(body)) = predict_usage().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.message.contains("POST"));
}

#[tokio::test]
async fn successful_prediction_carries_advisory() {
    let body = json!({"data": {
        "area": 120,
        "property-type": "HOUSE",
        "bedrooms-number": 3,
        "zip-code": 1000,
        "garden": true
    }});
    let (status, reply) = post(fixture_state(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["status_code"], 200);

    // 60000 + 3*12000 + 120*1450 + 9000 + 4*-7500 + 2*-4000 + 45000 + 20000
    assert_eq!(reply["prediction"].as_f64(), Some(306_000.0));
    let warning = reply["warning"].as_str().unwrap();
    assert_eq!(warning.split('|').count(), 2);
}

#[tokio::test]
async fn fully_specified_request_has_no_warning() {
    let body = json!({"data": {
        "area": 85,
        "property_type": "APARTMENT",
        "bedrooms_number": 2,
        "zip_code": 2000,
        "building_state": "NEW",
        "epc_score": "A"
    }});
    let (status, reply) = post(fixture_state(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(reply.get("warning").is_none());
}

#[tokio::test]
async fn missing_data_is_bad_request() {
    for body in [json!({}), json!({"data": {}}), json!({"data": [1, 2]}), json!({"data": null})] {
        let (status, reply) = post(fixture_state(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["detail"], "Missing 'data' field");
        assert_eq!(reply["status_code"], 400);
        assert!(reply.get("error_code").is_none());
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, reply) = post_raw(fixture_state(), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["detail"], "Missing 'data' field");
}

#[tokio::test]
async fn validation_error_is_bad_request_with_code() {
    let body = json!({"data": {
        "area": -50,
        "property_type": "CASTLE",
        "bedrooms_number": 2,
        "zip_code": 12345
    }});
    let (status, reply) = post(fixture_state(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["error_code"], "INVALID_AREA");
    assert!(reply["detail"].as_str().unwrap().contains("Area"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_share_a_freshly_loaded_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("postal_codes.csv");
    std::fs::copy(test_fixtures::geo_table_path(), &table).unwrap();
    let model = LinearPriceModel::load(&test_fixtures::linear_model_path()).unwrap();
    let state = AppState::new(
        FeaturePipeline::new(GeoResolver::with_table(&table)),
        Arc::new(model),
    );

    let body = json!({"data": {
        "area": 95,
        "property_type": "APARTMENT",
        "bedrooms_number": 2,
        "zip_code": 9000,
        "building_state": "GOOD",
        "epc_score": "B"
    }});
    let requests: Vec<_> = (0..16)
        .map(|_| tokio::spawn(post(state.clone(), body.clone())))
        .collect();
    for request in requests {
        let (status, reply) = request.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(reply.get("warning").is_none(), "exact location expected: {reply}");
    }
}

struct BrokenModel;

impl PricePredictor for BrokenModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictionError> {
        Err(PredictionError::NonFiniteOutput { value: f64::NAN })
    }
}

#[tokio::test]
async fn predictor_failure_is_internal_error() {
    let state = AppState::new(FeaturePipeline::default(), Arc::new(BrokenModel));
    let body = json!({"data": {
        "area": 100,
        "property_type": "HOUSE",
        "bedrooms_number": 2,
        "zip_code": 4000
    }});
    let (status, reply) = post(state, body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply["detail"], "Internal server error");
    assert_eq!(reply["status_code"], 500);
}

#[test]
fn missing_model_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = LinearPriceModel::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PredictionError::ModelNotFound { .. }));
}

#[test]
fn fixture_model_weights() {
    let model = LinearPriceModel::load(&test_fixtures::linear_model_path()).unwrap();
    assert_eq!(model.intercept(), 60_000.0);
    assert_eq!(model.weight("habitablesurface"), Some(1450.0));
    assert_eq!(model.weight("latitude"), Some(0.0));
    assert_eq!(model.weight("price"), None);
}
