//! Layered configuration loading.
//!
//! Every process resolves its configuration once at start, in this order
//! (later layers win):
//! 1. compiled-in defaults
//! 2. YAML file given with `--config`
//! 3. plain environment aliases (e.g. `MODEL_PREFIX`)
//! 4. prefixed environment (`ANOPS_*`, nested keys separated by `__`)
//!
//! The resulting value is immutable for the lifetime of the process.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `ANOPS_BIND_ADDR` or `ANOPS_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "ANOPS_";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section shared by all binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `predictor=debug,info`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// A plain environment variable accepted as an alias for a top-level config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvAlias {
    pub var: &'static str,
    pub key: &'static str,
}

impl EnvAlias {
    #[must_use]
    pub const fn new(var: &'static str, key: &'static str) -> Self {
        Self { var, key }
    }
}

/// Resolve a configuration value from all layers.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `path` is given but is not a file,
/// and [`ConfigError::Invalid`] if the merged layers do not deserialize into `T`.
pub fn load_layered<T>(
    defaults: &T,
    path: Option<&Path>,
    aliases: &[EnvAlias],
) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let mut figment = Figment::new().merge(Serialized::defaults(defaults));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        figment = figment.merge(Yaml::file(path));
    }

    for alias in aliases {
        let EnvAlias { var, key } = *alias;
        let provider = Env::raw()
            .filter_map(move |k| k.as_str().eq_ignore_ascii_case(var).then(|| key.into()));
        figment = figment.merge(provider);
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .map_err(|e| ConfigError::Invalid(Box::new(e)))
}

/// Render the effective configuration for `--print-config`.
///
/// # Errors
///
/// Returns an error if `cfg` cannot be serialized.
pub fn to_pretty_json<T: Serialize>(cfg: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(cfg)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct TestConfig {
        addr: String,
        prefix: String,
        limit: usize,
        logging: LoggingConfig,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                addr: "127.0.0.1:1".to_owned(),
                prefix: "MODEL_OUTPUT:".to_owned(),
                limit: 10,
                logging: LoggingConfig::default(),
            }
        }
    }

    const ALIASES: &[EnvAlias] = &[EnvAlias::new("TEST_ANOPS_PREFIX_ALIAS", "prefix")];

    fn clean_env<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars(
            [
                ("TEST_ANOPS_PREFIX_ALIAS", None::<&str>),
                ("ANOPS_PREFIX", None),
                ("ANOPS_LIMIT", None),
                ("ANOPS_LOGGING__FORMAT", None),
            ],
            f,
        )
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = clean_env(|| load_layered(&TestConfig::default(), None, ALIASES).unwrap());
        assert_eq!(cfg, TestConfig::default());
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix: \"FROM_FILE:\"\nlimit: 3").unwrap();

        let cfg = clean_env(|| {
            load_layered(&TestConfig::default(), Some(file.path()), ALIASES).unwrap()
        });
        assert_eq!(cfg.prefix, "FROM_FILE:");
        assert_eq!(cfg.limit, 3);
        assert_eq!(cfg.addr, "127.0.0.1:1");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_layered(
            &TestConfig::default(),
            Some(Path::new("/definitely/not/here.yaml")),
            ALIASES,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn plain_alias_overrides_file_and_prefixed_env_overrides_alias() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix: \"FROM_FILE:\"").unwrap();

        let from_alias = temp_env::with_vars(
            [
                ("TEST_ANOPS_PREFIX_ALIAS", Some("FROM_ALIAS:")),
                ("ANOPS_PREFIX", None),
            ],
            || load_layered(&TestConfig::default(), Some(file.path()), ALIASES).unwrap(),
        );
        assert_eq!(from_alias.prefix, "FROM_ALIAS:");

        let from_prefixed = temp_env::with_vars(
            [
                ("TEST_ANOPS_PREFIX_ALIAS", Some("FROM_ALIAS:")),
                ("ANOPS_PREFIX", Some("FROM_PREFIXED:")),
            ],
            || load_layered(&TestConfig::default(), Some(file.path()), ALIASES).unwrap(),
        );
        assert_eq!(from_prefixed.prefix, "FROM_PREFIXED:");
    }

    #[test]
    fn empty_alias_value_is_kept() {
        let cfg = temp_env::with_vars(
            [
                ("TEST_ANOPS_PREFIX_ALIAS", Some("")),
                ("ANOPS_PREFIX", None),
            ],
            || load_layered(&TestConfig::default(), None, ALIASES).unwrap(),
        );
        assert_eq!(cfg.prefix, "");
    }

    #[test]
    fn nested_keys_use_double_underscore() {
        let cfg = temp_env::with_vars([("ANOPS_LOGGING__FORMAT", Some("json"))], || {
            load_layered(&TestConfig::default(), None, ALIASES).unwrap()
        });
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn invalid_value_is_reported() {
        let err = temp_env::with_vars([("ANOPS_LIMIT", Some("lots"))], || {
            load_layered(&TestConfig::default(), None, ALIASES).unwrap_err()
        });
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
