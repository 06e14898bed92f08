//! Gateway configuration.

use std::path::Path;
use std::time::Duration;

use anops_bootstrap::{ConfigError, EnvAlias, LoggingConfig, load_layered};
use anops_transport_grpc::GrpcClientConfig;
use serde::{Deserialize, Serialize};

/// Plain environment variables accepted next to the `ANOPS_*` ones.
pub const ENV_ALIASES: &[EnvAlias] = &[EnvAlias::new("MODEL_SERVICE_URL", "model_service_url")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Address the HTTP server binds.
    pub bind_addr: String,
    /// Worker address, `http://host:port` or bare `host:port`.
    pub model_service_url: String,
    #[serde(with = "anops_bootstrap::humantime_duration")]
    pub connect_timeout: Duration,
    /// Upper bound for one predict call; elapsing it answers 503.
    #[serde(with = "anops_bootstrap::humantime_duration")]
    pub rpc_timeout: Duration,
    pub logging: LoggingConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_owned(),
            model_service_url: "http://localhost:50051".to_owned(),
            connect_timeout: Duration::from_secs(2),
            rpc_timeout: Duration::from_secs(5),
            logging: LoggingConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Load from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing or a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_layered(&Self::default(), path, ENV_ALIASES)
    }

    #[must_use]
    pub fn grpc_client_config(&self) -> GrpcClientConfig {
        GrpcClientConfig::new(predictor_sdk::SERVICE_NAME)
            .with_connect_timeout(self.connect_timeout)
            .with_rpc_timeout(self.rpc_timeout)
    }
}
