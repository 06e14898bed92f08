#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod server;

pub use client::{GrpcClientConfig, connect_lazy, normalize_uri};
pub use server::{bind_tcp, parse_listen_addr, serve_tcp};
