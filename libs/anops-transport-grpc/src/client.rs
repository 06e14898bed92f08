//! gRPC client transport configuration and channel construction.
//!
//! This module provides the client side of the worker connection:
//! - Configurable connect and RPC timeouts
//! - HTTP/2 keepalive settings for connection health
//! - Lazy channels that connect on first use and reconnect on demand
//!
//! Channels built here are multiplexed: callers clone them per request and the
//! clone is released as soon as the call future is dropped. No retries happen
//! at this layer.

use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

fn duration_to_i64_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,

    /// Upper bound for a single RPC call, connection setup included.
    pub rpc_timeout: Duration,

    /// Service name for tracing.
    pub service_name: &'static str,

    /// Emit an info line once a channel is established.
    pub enable_tracing: bool,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(2),
            rpc_timeout: Duration::from_secs(5),
            service_name: "grpc_client",
            enable_tracing: true,
        }
    }
}

impl GrpcClientConfig {
    /// Create a new configuration with the given service name.
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    #[must_use]
    pub fn without_tracing(mut self) -> Self {
        self.enable_tracing = false;
        self
    }
}

/// Prepend `http://` to a bare `host:port` address.
///
/// Backend addresses are commonly given as `localhost:50051`, which tonic
/// would reject as a URI without a scheme.
#[must_use]
pub fn normalize_uri(uri: &str) -> String {
    let trimmed = uri.trim();
    if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("http://{trimmed}")
    }
}

/// Build a tonic `Endpoint` with timeouts and keepalive settings.
fn build_endpoint(uri: &str, cfg: &GrpcClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(normalize_uri(uri))?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Build a client over a lazily connected channel.
///
/// No network traffic happens here; the connection is opened by the first
/// call and re-opened by later calls if it drops. Connection failures surface
/// as call errors, so a process can start while its backend is still down.
///
/// # Errors
///
/// Returns an error if `uri` is not a valid URI.
pub fn connect_lazy<TClient>(uri: &str, cfg: &GrpcClientConfig) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let channel = build_endpoint(uri, cfg)?.connect_lazy();

    if cfg.enable_tracing {
        tracing::info!(
            service_name = cfg.service_name,
            uri = %normalize_uri(uri),
            connect_timeout_ms = duration_to_i64_ms(cfg.connect_timeout),
            rpc_timeout_ms = duration_to_i64_ms(cfg.rpc_timeout),
            "gRPC client channel configured (lazy)"
        );
    }

    Ok(TClient::from(channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = GrpcClientConfig::default();
        assert_eq!(cfg.connect_timeout, Duration::from_secs(2));
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(5));
        assert!(cfg.enable_tracing);
    }

    #[test]
    fn test_config_builder() {
        let cfg = GrpcClientConfig::new("predictor")
            .with_connect_timeout(Duration::from_millis(250))
            .with_rpc_timeout(Duration::from_secs(1))
            .without_tracing();

        assert_eq!(cfg.service_name, "predictor");
        assert_eq!(cfg.connect_timeout, Duration::from_millis(250));
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(1));
        assert!(!cfg.enable_tracing);
    }

    #[test]
    fn test_normalize_uri() {
        assert_eq!(normalize_uri("localhost:50051"), "http://localhost:50051");
        assert_eq!(normalize_uri(" http://model:50051 "), "http://model:50051");
        assert_eq!(normalize_uri("https://model:443"), "https://model:443");
    }

    #[test]
    fn test_build_endpoint_accepts_bare_host_port() {
        let cfg = GrpcClientConfig::default();
        assert!(build_endpoint("localhost:50051", &cfg).is_ok());
    }

    #[test]
    fn test_build_endpoint_rejects_garbage() {
        let cfg = GrpcClientConfig::default();
        assert!(build_endpoint("http://bad host:1", &cfg).is_err());
    }
}
