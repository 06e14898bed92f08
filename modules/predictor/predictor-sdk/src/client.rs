//! gRPC client implementation of `PredictorClient`

use std::time::Duration;

use anops_transport_grpc::GrpcClientConfig;
use async_trait::async_trait;
use tonic::transport::Channel;

use crate::SERVICE_NAME;
use crate::api::{PredictorClient, PredictorError};
use crate::proto::PredictRequest;
use crate::proto::an_ops_client::AnOpsClient;

/// gRPC client for the predictor worker.
///
/// Cheap to clone. Every call clones the underlying channel, so concurrent
/// predictions share one multiplexed HTTP/2 connection.
#[derive(Clone)]
pub struct PredictorGrpcClient {
    inner: AnOpsClient<Channel>,
    rpc_timeout: Duration,
}

impl PredictorGrpcClient {
    #[must_use]
    pub fn new(channel: Channel, rpc_timeout: Duration) -> Self {
        Self {
            inner: AnOpsClient::new(channel),
            rpc_timeout,
        }
    }

    /// Build a client without touching the network.
    ///
    /// The first call opens the connection. Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is not a valid URI.
    pub fn connect_lazy(uri: &str, cfg: &GrpcClientConfig) -> anyhow::Result<Self> {
        let channel: Channel = anops_transport_grpc::connect_lazy(uri, cfg)?;
        Ok(Self::new(channel, cfg.rpc_timeout))
    }
}

#[async_trait]
impl PredictorClient for PredictorGrpcClient {
    #[tracing::instrument(
        name = "predictor.predict",
        skip_all,
        fields(rpc.service = SERVICE_NAME, input_len = input_data.len())
    )]
    async fn predict(&self, input_data: String) -> Result<String, PredictorError> {
        let mut client = self.inner.clone();
        let request = tonic::Request::new(PredictRequest { input_data });

        match tokio::time::timeout(self.rpc_timeout, client.predict(request)).await {
            Ok(Ok(response)) => Ok(response.into_inner().output_data),
            Ok(Err(status)) => {
                let err = PredictorError::from_status(&status);
                tracing::debug!(error = %err, "predict call failed");
                Err(err)
            }
            Err(_) => {
                let timeout_ms = self.rpc_timeout.as_millis();
                tracing::debug!(%timeout_ms, "predict call timed out");
                Err(PredictorError::Transport(format!(
                    "no response within {timeout_ms}ms"
                )))
            }
        }
    }
}
