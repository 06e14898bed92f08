//! Domain layer for the predictor module

pub mod service;
pub mod transform;

pub use service::{Service, ServiceError};
pub use transform::{PrefixUpper, Reverse, Transform, TransformError, TransformKind};
