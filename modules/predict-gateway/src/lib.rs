//! Predict Gateway Module
//!
//! Public HTTP/JSON surface of the pipeline. `POST /predict` is forwarded as
//! one gRPC call to the predictor worker and the outcome is translated back
//! to HTTP through the fixed status table in `anops-errors`.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Dispatches the RPC through a `PredictorClient`
//! - `api/rest/` - DTOs, handlers, routes and the error → Problem mapping
//! - `server.rs` - Wires the gRPC client and serves the router

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod server;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;

pub use config::GatewayConfig;
pub use server::{build_app, run};
