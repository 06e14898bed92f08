//! Wires the gRPC client into the router and serves HTTP.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use predictor_sdk::PredictorGrpcClient;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::api::rest::router;
use crate::config::GatewayConfig;
use crate::domain::Service;

/// Build the HTTP application for `cfg`.
///
/// The worker channel is lazy: nothing is dialed until the first request,
/// so the gateway starts and answers `/health` while the worker is down.
/// Must be called inside a tokio runtime.
///
/// # Errors
///
/// Returns an error if `model_service_url` is not a valid URI.
pub fn build_app(cfg: &GatewayConfig) -> anyhow::Result<Router> {
    let client_cfg = cfg.grpc_client_config();
    let client = PredictorGrpcClient::connect_lazy(&cfg.model_service_url, &client_cfg)
        .with_context(|| format!("invalid model_service_url '{}'", cfg.model_service_url))?;
    Ok(router(Arc::new(Service::new(Arc::new(client)))))
}

/// Serve the gateway on `listener` until `cancel` fires.
///
/// # Errors
///
/// Returns an error if the application cannot be built or the server fails.
pub async fn run(
    cfg: &GatewayConfig,
    listener: TcpListener,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let app = build_app(cfg)?;
    let bound_addr = listener.local_addr()?;
    tracing::info!(
        %bound_addr,
        model_service_url = %cfg.model_service_url,
        "HTTP server listening"
    );

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
