//! Pure input → output transforms.

use serde::{Deserialize, Serialize};

/// Failure raised by a transform for an input that passed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransformError(pub String);

/// A deterministic string transform.
///
/// Implementations hold only read-only state and are shared across calls.
pub trait Transform: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns a [`TransformError`] if the input cannot be processed.
    fn apply(&self, input: &str) -> Result<String, TransformError>;
}

/// Transform selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    #[default]
    PrefixUpper,
    Reverse,
}

impl TransformKind {
    #[must_use]
    pub fn build(self, prefix: &str) -> Box<dyn Transform> {
        match self {
            Self::PrefixUpper => Box::new(PrefixUpper::new(prefix)),
            Self::Reverse => Box::new(Reverse::new(prefix)),
        }
    }
}

fn with_prefix(prefix: &str, body: &str) -> String {
    format!("{prefix} {body}")
}

/// `"{prefix} {INPUT IN UPPER CASE}"`
#[derive(Debug, Clone)]
pub struct PrefixUpper {
    prefix: String,
}

impl PrefixUpper {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Transform for PrefixUpper {
    fn name(&self) -> &'static str {
        "prefix_upper"
    }

    fn apply(&self, input: &str) -> Result<String, TransformError> {
        Ok(with_prefix(&self.prefix, &input.to_uppercase()))
    }
}

/// `"{prefix} {input reversed by characters}"`
#[derive(Debug, Clone)]
pub struct Reverse {
    prefix: String,
}

impl Reverse {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Transform for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn apply(&self, input: &str) -> Result<String, TransformError> {
        let reversed: String = input.chars().rev().collect();
        Ok(with_prefix(&self.prefix, &reversed))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn prefix_upper() {
        let t = PrefixUpper::new("MODEL_OUTPUT:");
        assert_eq!(t.apply("test input").unwrap(), "MODEL_OUTPUT: TEST INPUT");
    }

    #[test]
    fn empty_prefix_keeps_the_separator() {
        let t = PrefixUpper::new("");
        assert_eq!(t.apply("abc").unwrap(), " ABC");
    }

    #[test]
    fn reverse() {
        let t = Reverse::new("P");
        assert_eq!(t.apply("abc").unwrap(), "P cba");
    }

    #[test]
    fn kind_builds_the_matching_transform() {
        assert_eq!(TransformKind::default().build("x").name(), "prefix_upper");
        assert_eq!(TransformKind::Reverse.build("x").name(), "reverse");
    }

    #[test]
    fn deterministic() {
        let t = PrefixUpper::new("P");
        assert_eq!(t.apply("same").unwrap(), t.apply("same").unwrap());
    }
}
