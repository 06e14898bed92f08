//! Shared error contract for the predict pipeline
//!
//! This crate holds pure data types with no dependency on the RPC stack:
//! - RFC 9457 Problem Details (`Problem`), the JSON envelope every failed
//!   HTTP response carries
//! - The closed set of RPC outcomes (`RpcStatus`) and the fixed table that
//!   maps them to HTTP status codes
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod problem;
pub mod rpc_status;

pub use problem::{APPLICATION_PROBLEM_JSON, Problem};
pub use rpc_status::{OtherCode, RpcStatus, TRANSPORT_FAILURE_STATUS};
