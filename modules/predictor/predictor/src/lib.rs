//! Predictor Module
//!
//! The model worker: one gRPC method, `anops.v1.AnOps/Predict`, that
//! validates its input and runs the configured transform.
//!
//! ## Architecture
//!
//! - `domain/transform.rs` - Pluggable pure transforms
//! - `domain/service.rs` - Validation and execution
//! - `api/grpc/server.rs` - gRPC servicer, maps domain errors to status codes
//! - `server.rs` - Serves the servicer on a TCP listener
//!
//! Consumers should use the `predictor-sdk` crate for the client side.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod server;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;

pub use config::PredictorConfig;
pub use server::{routes, run};
