//! HTTP client types for Creem API communication.
//!
//! This module provides the transport layer underneath the resource methods:
//! the engine capability that performs one exchange, the request/response
//! records it consumes and produces, the per-call [`Context`] and the
//! [`Logger`] capability used for DEBUG output.
//!
//! # Overview
//!
//! - [`CreemClient`]: The client context and request pipeline
//! - [`HttpEngine`]: Performs one request/response exchange
//! - [`ReqwestEngine`]: The default rustls-backed engine
//! - [`HttpRequest`] / [`HttpResponse`]: Prepared request and buffered response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Context`] / [`CancelHandle`]: Per-call cancellation and deadline
//! - [`Logger`] / [`TracingLogger`]: DEBUG line sink
//! - [`TransportError`]: Why an exchange produced no response
//!
//! # Example
//!
//! ```rust,ignore
//! use creem::clients::{Context, HttpMethod};
//! use creem::CreemClient;
//!
//! let client = CreemClient::new("creem_test_key", "whsec_secret", true, [])?;
//!
//! // Any endpoint can be reached through the raw pipeline
//! let response = client
//!     .exchange::<()>(&Context::background(), HttpMethod::Get, "/v1/products/prod_1", None)
//!     .await?;
//! println!("{} {}", response.status, response.text());
//! ```

mod context;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod logger;
pub mod rest;

pub use context::{CancelHandle, Context};
pub use errors::TransportError;
pub use http_client::{HttpEngine, ReqwestEngine, SDK_VERSION, USER_AGENT};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use logger::{Logger, TracingLogger};

pub use rest::CreemClient;
