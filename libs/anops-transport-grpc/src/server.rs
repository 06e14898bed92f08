//! TCP server runner for tonic services.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;
use tonic::transport::Server;
use tower::limit::GlobalConcurrencyLimitLayer;

/// Parse a TCP listen address such as `0.0.0.0:50051` or `[::]:50051`.
///
/// Port `0` asks the OS for an ephemeral port.
///
/// # Errors
///
/// Returns an error if `listen_addr` is not a socket address.
pub fn parse_listen_addr(listen_addr: &str) -> anyhow::Result<SocketAddr> {
    listen_addr
        .trim()
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid listen_addr '{listen_addr}'"))
}

/// Parse and bind a TCP listen address.
///
/// # Errors
///
/// Returns an error if the address is invalid or cannot be bound.
pub async fn bind_tcp(listen_addr: &str) -> anyhow::Result<TcpListener> {
    let addr = parse_listen_addr(listen_addr)?;
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serve `routes` on an already bound listener until `cancel` fires.
///
/// At most `max_concurrency` calls are in flight across all connections;
/// further calls wait for a free slot. A limit of `0` is treated as `1`.
///
/// # Errors
///
/// Returns an error if the listener fails or the server stops abnormally.
pub async fn serve_tcp(
    listener: TcpListener,
    routes: Routes,
    max_concurrency: usize,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    let max_concurrency = max_concurrency.max(1);
    tracing::info!(%bound_addr, transport = "tcp", max_concurrency, "gRPC server listening");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrency))
        .add_routes(routes)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!(%bound_addr, "gRPC server stopped");
    Ok(())
}
