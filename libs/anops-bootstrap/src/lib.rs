#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Process bootstrap shared by the gateway and the worker binaries.

pub mod cli;
pub mod config;
pub mod humantime_duration;
pub mod logging;
pub mod signals;

pub use cli::CommonArgs;
pub use config::{ConfigError, EnvAlias, LogFormat, LoggingConfig, load_layered, to_pretty_json};
pub use logging::init_logging;
pub use signals::{shutdown_token, wait_for_shutdown};
