//! Serde adapter for `Duration` config fields in humantime form.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct ClientConfig {
//!     #[serde(with = "anops_bootstrap::humantime_duration")]
//!     timeout: Duration,
//! }
//! ```
//!
//! Accepts anything `humantime::parse_duration` does (`500ms`, `2s`, `1m 30s`)
//! and writes the canonical `humantime::format_duration` form.

use std::fmt;
use std::time::Duration;

use serde::{Deserializer, Serializer, de};

/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&humantime::format_duration(*d))
}

/// # Errors
///
/// Fails if the value is not a string or not a humantime duration.
pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    struct Visitor;

    impl de::Visitor<'_> for Visitor {
        type Value = Duration;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a duration such as `500ms` or `2s`")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
            humantime::parse_duration(v)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    d.deserialize_str(Visitor)
}
