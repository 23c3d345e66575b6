//! # immo-server
//!
//! HTTP boundary for the price service. Parses the request envelope, runs the
//! feature pipeline, calls the price model, and maps outcomes to status codes:
//! validation failures are 400, predictor failures are 500.

pub mod model;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use immo_core::errors::ErrorCode;
use immo_core::traits::PricePredictor;
use immo_core::RawAttributes;
use immo_features::FeaturePipeline;

pub use model::LinearPriceModel;

pub const MISSING_DATA_DETAIL: &str = "Missing 'data' field";
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

const USAGE: &str = "Send a POST request to /predict with a JSON body \
    {\"data\": {\"area\": int, \"property-type\": \"APARTMENT\" | \"HOUSE\" | \"OTHERS\", \
    \"bedrooms-number\": int, \"zip-code\": int, ...optional fields}} to get a price estimate.";

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<FeaturePipeline>,
    pub predictor: Arc<dyn PricePredictor>,
}

impl AppState {
    pub fn new(pipeline: FeaturePipeline, predictor: Arc<dyn PricePredictor>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            predictor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    pub status_code: u16,
}

impl ErrorResponse {
    fn new(status: StatusCode, detail: impl Into<String>, error_code: Option<&'static str>) -> Self {
        Self {
            detail: detail.into(),
            error_code,
            status_code: status.as_u16(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PredictReply {
    Prediction(PredictionResponse),
    Error(ErrorResponse),
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/predict", get(predict_usage).post(predict))
        .with_state(state)
}

pub async fn health() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::OK, Json(MessageResponse { message: "alive" }))
}

pub async fn predict_usage() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::OK, Json(MessageResponse { message: USAGE }))
}

pub async fn predict(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<PredictReply>) {
    let Some(raw) = extract_data(&body) else {
        tracing::debug!("request without a usable 'data' object");
        return error(StatusCode::BAD_REQUEST, MISSING_DATA_DETAIL, None);
    };

    // Assembly may read the postal-code table from disk on first use.
    let pipeline = Arc::clone(&state.pipeline);
    let assembled = match tokio::task::spawn_blocking(move || pipeline.assemble(&raw)).await {
        Ok(Ok(assembled)) => assembled,
        Ok(Err(err)) => {
            tracing::info!(error_code = err.error_code(), error = %err, "rejected prediction request");
            return error(StatusCode::BAD_REQUEST, err.to_string(), Some(err.error_code()));
        }
        Err(join_err) => {
            tracing::error!(error = %join_err, "feature assembly task failed");
            return error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL, None);
        }
    };

    match state.predictor.predict(&assembled.vector) {
        Ok(prediction) => {
            tracing::info!(
                prediction,
                warnings = assembled.warnings.len(),
                exact_location = assembled.exact_location,
                "served prediction"
            );
            (
                StatusCode::OK,
                Json(PredictReply::Prediction(PredictionResponse {
                    prediction,
                    status_code: StatusCode::OK.as_u16(),
                    warning: assembled.advisory(),
                })),
            )
        }
        Err(err) => {
            tracing::error!(error = %err.coded_string(), "prediction failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL, None)
        }
    }
}

/// The `data` object of the request envelope. Absent, empty, non-object, or
/// unparseable bodies all yield `None`.
fn extract_data(body: &[u8]) -> Option<RawAttributes> {
    let mut envelope: Value = serde_json::from_slice(body).ok()?;
    let data = envelope.get_mut("data")?.take();
    RawAttributes::from_value(data).filter(|raw| !raw.is_empty())
}

fn error(
    status: StatusCode,
    detail: impl Into<String>,
    error_code: Option<&'static str>,
) -> (StatusCode, Json<PredictReply>) {
    (
        status,
        Json(PredictReply::Error(ErrorResponse::new(status, detail, error_code))),
    )
}
