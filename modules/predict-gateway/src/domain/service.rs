//! Domain service for the predict gateway
//!
//! Forwards one prediction to the worker and folds the outcome into
//! [`ServiceError`]. No retries.

use std::sync::Arc;

use anops_errors::RpcStatus;
use predictor_sdk::{PredictorClient, PredictorError};
use tracing::{info, instrument, warn};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The worker answered with a non-OK status.
    #[error("model service returned {status}: {detail}")]
    Rpc { status: RpcStatus, detail: String },

    /// The worker could not be reached or did not answer in time.
    #[error("model service unreachable: {0}")]
    Unreachable(String),
}

impl From<PredictorError> for ServiceError {
    fn from(e: PredictorError) -> Self {
        match e {
            PredictorError::Rpc { status, detail } => Self::Rpc { status, detail },
            PredictorError::Transport(reason) => Self::Unreachable(reason),
        }
    }
}

pub struct Service {
    client: Arc<dyn PredictorClient>,
}

impl Service {
    #[must_use]
    pub fn new(client: Arc<dyn PredictorClient>) -> Self {
        Self { client }
    }

    /// Run one prediction on the worker.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Rpc`] for a worker-reported failure,
    /// [`ServiceError::Unreachable`] for a transport failure.
    #[instrument(
        name = "gateway.service.predict",
        skip_all,
        fields(input_len = input_data.len())
    )]
    pub async fn predict(&self, input_data: String) -> Result<String, ServiceError> {
        info!("dispatching predict RPC");

        match self.client.predict(input_data).await {
            Ok(output) => {
                info!(output_len = output.len(), "predict RPC succeeded");
                Ok(output)
            }
            Err(e) => {
                let err = ServiceError::from(e);
                match &err {
                    ServiceError::Rpc { status, detail } => {
                        info!(
                            code = status.name(),
                            %detail,
                            "predict RPC returned an error status"
                        );
                    }
                    ServiceError::Unreachable(reason) => {
                        warn!(error = %reason, "model service unreachable");
                    }
                }
                Err(err)
            }
        }
    }
}
