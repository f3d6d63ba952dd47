//! Core application primitives (transport surfaces)

pub mod http;

pub use http::*;
