//! Route registration for the predict gateway

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use anops_errors::problem::internal_error;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::domain::Service;

use super::error::GENERIC_INTERNAL_DETAIL;
use super::handlers;

/// Build the gateway router.
///
/// Layers, outermost first: trace → catch panic → routes.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .layer(Extension(service))
        .layer(CatchPanicLayer::custom(
            |_payload: Box<dyn Any + Send + 'static>| -> Response {
                tracing::error!("request handler panicked");
                internal_error(GENERIC_INTERNAL_DETAIL).into_response()
            },
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &http::Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri().path(),
                        version = ?req.version(),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                }),
        )
}
