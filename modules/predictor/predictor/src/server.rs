//! Serves the predictor over gRPC.

use std::sync::Arc;

use anops_transport_grpc::serve_tcp;
use predictor_sdk::AnOpsServer;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;

use crate::api::grpc::AnOpsServiceImpl;
use crate::config::PredictorConfig;
use crate::domain::Service;

/// gRPC routes for a domain service.
#[must_use]
pub fn routes(service: Arc<Service>) -> Routes {
    Routes::new(AnOpsServer::new(AnOpsServiceImpl::new(service)))
}

/// Serve the worker on `listener` until `cancel` fires.
///
/// # Errors
///
/// Returns an error if the gRPC server fails.
pub async fn run(
    cfg: &PredictorConfig,
    listener: TcpListener,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let transform = cfg.build_transform();
    tracing::info!(
        service = predictor_sdk::SERVICE_NAME,
        transform = transform.name(),
        prefix = %cfg.prefix,
        "starting predictor"
    );

    let service = Arc::new(Service::new(transform));
    serve_tcp(listener, routes(service), cfg.max_concurrency, cancel).await
}
