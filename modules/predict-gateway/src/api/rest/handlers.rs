use std::sync::Arc;

use anops_errors::Problem;
use anops_errors::problem::unprocessable_entity;
use axum::Json;
use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use http::Uri;

use crate::domain::Service;

use super::dto::{HealthResponse, PredictRequest, PredictResponse};
use super::error::service_error_to_problem;

/// `POST /predict`
///
/// Any body that does not deserialize into [`PredictRequest`] is answered
/// with 422 before the worker is contacted.
pub async fn predict(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, Problem> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::info!(reason = %rejection.body_text(), "rejecting malformed predict request");
        unprocessable_entity(rejection.body_text())
            .with_code("INVALID_REQUEST_BODY")
            .with_instance(uri.path())
    })?;

    tracing::info!(input_len = req.input_data.len(), "predict request received");

    let output_data = svc
        .predict(req.input_data)
        .await
        .map_err(|e| service_error_to_problem(&e, uri.path()))?;

    Ok(Json(PredictResponse { output_data }))
}

/// `GET /health`. Never touches the worker.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
