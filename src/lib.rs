//! Selective Response-Header Advice Service Library

pub mod advice;
pub mod config;
pub mod http;

pub use advice::{HeaderValueProvider, StaticMessageProvider, CUSTOM_HEADER};
pub use config::ServiceConfig;
pub use http::HttpServer;
