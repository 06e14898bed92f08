//! Predictor API trait and types

use anops_errors::RpcStatus;
use async_trait::async_trait;

/// Predictor API trait
///
/// One unary prediction per call. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait PredictorClient: Send + Sync {
    /// Run the model on `input_data` and return its output.
    async fn predict(&self, input_data: String) -> Result<String, PredictorError>;
}

/// Error type for predictor calls
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    /// The worker answered with a non-OK status.
    #[error("worker returned {status}: {detail}")]
    Rpc { status: RpcStatus, detail: String },

    /// The call never got an answer: connection refused, timeout, broken stream.
    #[error("gRPC transport error: {0}")]
    Transport(String),
}

impl PredictorError {
    /// Classify a failed tonic call.
    ///
    /// tonic attaches a source error only to statuses it synthesizes locally
    /// from a connection or timeout failure. A status decoded from the
    /// worker's response trailers never has one.
    #[must_use]
    pub fn from_status(status: &tonic::Status) -> Self {
        if std::error::Error::source(status).is_some() {
            return Self::Transport(status.message().to_owned());
        }
        Self::Rpc {
            status: RpcStatus::from_code(i32::from(status.code())),
            detail: status.message().to_owned(),
        }
    }
}
