//! Domain layer for the predict gateway

pub mod service;

pub use service::{Service, ServiceError};
