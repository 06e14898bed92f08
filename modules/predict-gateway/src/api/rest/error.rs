//! Domain error → RFC 9457 Problem

use anops_errors::problem::{bad_request, internal_error, service_unavailable};
use anops_errors::{Problem, RpcStatus, TRANSPORT_FAILURE_STATUS};

use crate::domain::ServiceError;

/// Detail for any failure the handler cannot classify, panics included.
pub const GENERIC_INTERNAL_DETAIL: &str = "Internal server error";

/// Map a domain error to the Problem returned to the caller.
///
/// Transport failures never expose their raw error text; it is logged by the
/// domain service instead.
pub fn service_error_to_problem(e: &ServiceError, instance: &str) -> Problem {
    let problem = match e {
        ServiceError::Rpc { status, detail } => rpc_status_to_problem(*status, detail),
        ServiceError::Unreachable(_) => Problem::new(
            TRANSPORT_FAILURE_STATUS,
            "Service Unavailable",
            "Model service unavailable: the model service could not be reached",
        )
        .with_code(RpcStatus::Unavailable.name()),
    };
    problem.with_instance(instance)
}

fn rpc_status_to_problem(status: RpcStatus, detail: &str) -> Problem {
    let problem = match status {
        RpcStatus::InvalidArgument => bad_request(detail),
        RpcStatus::Unavailable => {
            service_unavailable(format!("Model service unavailable: {detail}"))
        }
        // A failed call carrying OK is a protocol violation by the worker.
        RpcStatus::Internal | RpcStatus::Other(_) | RpcStatus::Ok => {
            internal_error(format!("Model service gRPC error: {detail}"))
        }
    };
    problem.with_code(status.name())
}
