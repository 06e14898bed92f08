//! Worker configuration.

use std::path::Path;
use std::sync::Arc;

use anops_bootstrap::{ConfigError, EnvAlias, LoggingConfig, load_layered};
use serde::{Deserialize, Serialize};

use crate::domain::{Transform, TransformKind};

/// Plain environment variables accepted next to the `ANOPS_*` ones.
pub const ENV_ALIASES: &[EnvAlias] = &[EnvAlias::new("MODEL_PREFIX", "prefix")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Socket address the gRPC server binds, e.g. `[::]:50051`.
    pub listen_addr: String,
    /// Prepended to every output. May be empty.
    pub prefix: String,
    pub transform: TransformKind,
    /// Upper bound on in-flight `Predict` calls.
    pub max_concurrency: usize,
    pub logging: LoggingConfig,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            listen_addr: "[::]:50051".to_owned(),
            prefix: "MODEL_OUTPUT:".to_owned(),
            transform: TransformKind::PrefixUpper,
            max_concurrency: 10,
            logging: LoggingConfig::default(),
        }
    }
}

impl PredictorConfig {
    /// Load from defaults, the optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing or a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_layered(&Self::default(), path, ENV_ALIASES)
    }

    #[must_use]
    pub fn build_transform(&self) -> Arc<dyn Transform> {
        Arc::from(self.transform.build(&self.prefix))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    fn without_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars(
            [
                ("MODEL_PREFIX", None::<&str>),
                ("ANOPS_PREFIX", None),
                ("ANOPS_TRANSFORM", None),
                ("ANOPS_MAX_CONCURRENCY", None),
            ],
            f,
        )
    }

    #[test]
    fn defaults() {
        let cfg = without_env(|| PredictorConfig::load(None).unwrap());
        assert_eq!(cfg, PredictorConfig::default());
        assert_eq!(cfg.prefix, "MODEL_OUTPUT:");
        assert_eq!(cfg.max_concurrency, 10);
    }

    #[test]
    fn model_prefix_env_var() {
        let cfg = temp_env::with_vars(
            [
                ("MODEL_PREFIX", Some("TEST_PREFIX:")),
                ("ANOPS_PREFIX", None),
            ],
            || PredictorConfig::load(None).unwrap(),
        );
        assert_eq!(cfg.prefix, "TEST_PREFIX:");
        assert_eq!(
            cfg.build_transform().apply("abc").unwrap(),
            "TEST_PREFIX: ABC"
        );
    }

    #[test]
    fn yaml_selects_transform() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "transform: reverse\nmax_concurrency: 2\nprefix: P").unwrap();

        let cfg = without_env(|| PredictorConfig::load(Some(file.path())).unwrap());
        assert_eq!(cfg.transform, TransformKind::Reverse);
        assert_eq!(cfg.max_concurrency, 2);
        assert_eq!(cfg.build_transform().apply("abc").unwrap(), "P cba");
    }

    #[test]
    fn unknown_transform_is_rejected() {
        let err = temp_env::with_vars([("ANOPS_TRANSFORM", Some("shout"))], || {
            PredictorConfig::load(None).unwrap_err()
        });
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
