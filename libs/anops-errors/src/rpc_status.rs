//! RPC outcome codes and the fixed RPC-to-HTTP status table
//!
//! The gateway never branches on open-ended error types coming back from the
//! worker. Every RPC outcome is first folded into [`RpcStatus`], a closed sum
//! type, and the HTTP status is then read off [`RpcStatus::http_status`].

use std::fmt;

use http::StatusCode;

/// HTTP status for failures below the RPC application layer: connection
/// refused, timeout, broken HTTP/2 stream. These never carry an `RpcStatus`.
pub const TRANSPORT_FAILURE_STATUS: StatusCode = StatusCode::SERVICE_UNAVAILABLE;

/// Outcome of a worker RPC call.
///
/// The variants the pipeline acts on are named; every other canonical gRPC
/// code lands in `Other` with its raw numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcStatus {
    Ok,
    InvalidArgument,
    Unavailable,
    Internal,
    Other(OtherCode),
}

/// A gRPC code without a named [`RpcStatus`] variant.
///
/// Only [`RpcStatus::from_code`] builds one, so it never holds 0, 3, 13 or 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OtherCode(i32);

impl OtherCode {
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl RpcStatus {
    /// Fold a canonical gRPC status code into an `RpcStatus`.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            3 => Self::InvalidArgument,
            13 => Self::Internal,
            14 => Self::Unavailable,
            other => Self::Other(OtherCode(other)),
        }
    }

    /// The fixed mapping table.
    ///
    /// | RPC status         | HTTP |
    /// |--------------------|------|
    /// | `OK`               | 200  |
    /// | `INVALID_ARGUMENT` | 400  |
    /// | `UNAVAILABLE`      | 503  |
    /// | `INTERNAL`         | 500  |
    /// | anything else      | 500  |
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `SCREAMING_SNAKE_CASE` name of the code, as used in the `code` field
    /// of error bodies.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Unavailable => "UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::Other(code) => other_code_name(code.get()),
        }
    }
}

const fn other_code_name(code: i32) -> &'static str {
    match code {
        1 => "CANCELLED",
        2 => "UNKNOWN",
        4 => "DEADLINE_EXCEEDED",
        5 => "NOT_FOUND",
        6 => "ALREADY_EXISTS",
        7 => "PERMISSION_DENIED",
        8 => "RESOURCE_EXHAUSTED",
        9 => "FAILED_PRECONDITION",
        10 => "ABORTED",
        11 => "OUT_OF_RANGE",
        12 => "UNIMPLEMENTED",
        15 => "DATA_LOSS",
        16 => "UNAUTHENTICATED",
        _ => "UNRECOGNIZED",
    }
}

impl fmt::Display for RpcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
