//! Process-wide `tracing` subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Raise the configured filter by the number of `-v` flags.
///
/// `-v` forces `debug`, `-vv` and more force `trace`. Without flags the
/// configured directive is used as is.
#[must_use]
pub fn effective_level(base: &str, verbose: u8) -> String {
    match verbose {
        0 => base.to_owned(),
        1 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the config when set.
///
/// Calling this twice is harmless: the second call leaves the first
/// subscriber in place.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let fallback = effective_level(&cfg.level, verbose);
    let filter = if verbose > 0 {
        EnvFilter::new(&fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback))
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match cfg.format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
