//! gRPC servicer for `anops.v1.AnOps`
//!
//! Delegates to the domain [`Service`] and owns the mapping from domain
//! failures to gRPC status codes. Nothing but a `Status` leaves this layer.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use predictor_sdk::{AnOps, PredictRequest, PredictResponse};
use tonic::{Request, Response, Status};

use crate::domain::{Service, ServiceError, TransformError};

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct AnOpsServiceImpl {
    service: Arc<Service>,
}

impl AnOpsServiceImpl {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AnOps for AnOpsServiceImpl {
    async fn predict(
        &self,
        request: Request<PredictRequest>,
    ) -> Result<Response<PredictResponse>, Status> {
        let input = request.into_inner().input_data;
        tracing::info!(input_len = input.len(), "predict request received");

        let service = &self.service;
        let outcome = catch_unwind(AssertUnwindSafe(|| service.predict(&input)))
            .unwrap_or_else(|payload| Err(TransformError(panic_reason(payload.as_ref())).into()));

        match outcome {
            Ok(output_data) => {
                tracing::info!(output_len = output_data.len(), "predict succeeded");
                Ok(Response::new(PredictResponse { output_data }))
            }
            Err(err) => {
                let status = to_status(&err);
                tracing::warn!(
                    code = i32::from(status.code()),
                    detail = status.message(),
                    "predict failed"
                );
                Err(status)
            }
        }
    }
}

/// Domain error → gRPC status.
fn to_status(err: &ServiceError) -> Status {
    match err {
        ServiceError::Validation(msg) => Status::invalid_argument(format!("Invalid input: {msg}")),
        ServiceError::Execution(e) => {
            Status::internal(format!("Internal model execution error: {e}"))
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "transform panicked".to_owned()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::{PrefixUpper, Transform};

    struct Panicking;

    impl Transform for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn apply(&self, _input: &str) -> Result<String, TransformError> {
            panic!("tensor shape mismatch")
        }
    }

    fn servicer(transform: Arc<dyn Transform>) -> AnOpsServiceImpl {
        AnOpsServiceImpl::new(Arc::new(Service::new(transform)))
    }

    fn request(input: &str) -> Request<PredictRequest> {
        Request::new(PredictRequest {
            input_data: input.to_owned(),
        })
    }

    #[tokio::test]
    async fn success_returns_output() {
        let svc = servicer(Arc::new(PrefixUpper::new("MODEL_OUTPUT:")));
        let resp = svc.predict(request("test input")).await.unwrap();
        assert_eq!(resp.into_inner().output_data, "MODEL_OUTPUT: TEST INPUT");
    }

    #[tokio::test]
    async fn empty_input_is_invalid_argument() {
        let svc = servicer(Arc::new(PrefixUpper::new("P")));
        let status = svc.predict(request("")).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(
            status.message(),
            "Invalid input: Input data cannot be empty."
        );
    }

    #[tokio::test]
    async fn panic_becomes_internal() {
        let svc = servicer(Arc::new(Panicking));
        let status = svc.predict(request("x")).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(
            status.message(),
            "Internal model execution error: tensor shape mismatch"
        );
    }

    #[test]
    fn execution_error_maps_to_internal() {
        let status = to_status(&ServiceError::Execution(TransformError("boom".to_owned())));
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(status.message(), "Internal model execution error: boom");
    }

    #[test]
    fn non_string_panic_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_reason(payload.as_ref()), "transform panicked");
    }
}
