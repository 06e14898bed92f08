//! Predictor SDK
//!
//! Everything needed to talk to the predictor worker:
//! - API trait (`PredictorClient`)
//! - Error type (`PredictorError`)
//! - gRPC client (`PredictorGrpcClient`)
//! - Proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use predictor_sdk::{PredictorClient, PredictorGrpcClient};
//!
//! let client = PredictorGrpcClient::connect_lazy("localhost:50051", cfg)?;
//! let output = client.predict("hello".to_owned()).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{PredictorClient, PredictorError};

// === GRPC CLIENT ===
mod client;
pub use client::PredictorGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for the `anops.v1.AnOps` service
#[allow(clippy::pedantic)]
pub mod proto {
    tonic::include_proto!("anops.v1");
}

// Re-export proto types needed by server
pub use proto::an_ops_server::{AnOps, AnOpsServer};
pub use proto::{PredictRequest, PredictResponse};

/// Fully qualified gRPC service name
pub const SERVICE_NAME: &str = "anops.v1.AnOps";
