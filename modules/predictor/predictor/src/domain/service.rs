//! Domain service for the predictor
//!
//! Validates the input and runs the configured transform.

use std::sync::Arc;

use tracing::instrument;

use super::transform::{Transform, TransformError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Execution(#[from] TransformError),
}

/// Stateless apart from the read-only transform it was built with.
#[derive(Clone)]
pub struct Service {
    transform: Arc<dyn Transform>,
}

impl Service {
    #[must_use]
    pub fn new(transform: Arc<dyn Transform>) -> Self {
        Self { transform }
    }

    /// Run the model on `input`.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Validation`] for empty input, [`ServiceError::Execution`]
    /// if the transform fails.
    #[instrument(
        name = "predictor.service.predict",
        skip_all,
        fields(transform = self.transform.name(), input_len = input.len())
    )]
    pub fn predict(&self, input: &str) -> Result<String, ServiceError> {
        if input.is_empty() {
            tracing::debug!("rejecting empty input");
            return Err(ServiceError::Validation(
                "Input data cannot be empty.".to_owned(),
            ));
        }

        let output = self.transform.apply(input)?;
        tracing::debug!(output_len = output.len(), "transform applied");
        Ok(output)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::transform::PrefixUpper;

    struct Failing;

    impl Transform for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn apply(&self, _input: &str) -> Result<String, TransformError> {
            Err(TransformError("weights not loaded".to_owned()))
        }
    }

    #[test]
    fn test_predict() {
        let service = Service::new(Arc::new(PrefixUpper::new("MODEL_OUTPUT:")));
        assert_eq!(
            service.predict("test input").unwrap(),
            "MODEL_OUTPUT: TEST INPUT"
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let service = Service::new(Arc::new(PrefixUpper::new("P")));
        let err = service.predict("").unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("Input data cannot be empty.".to_owned())
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let service = Service::new(Arc::new(PrefixUpper::new("P")));
        assert_eq!(service.predict(" ").unwrap(), "P  ");
    }

    #[test]
    fn test_transform_failure() {
        let service = Service::new(Arc::new(Failing));
        let err = service.predict("x").unwrap_err();
        assert!(matches!(err, ServiceError::Execution(_)));
        assert_eq!(err.to_string(), "weights not loaded");
    }

    #[test]
    fn test_validation_runs_before_transform() {
        let service = Service::new(Arc::new(Failing));
        assert!(matches!(
            service.predict(""),
            Err(ServiceError::Validation(_))
        ));
    }
}
