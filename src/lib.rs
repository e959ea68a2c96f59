//! # Creem API Rust SDK
//!
//! A Rust SDK for the Creem commerce API: products, checkout sessions,
//! customers, customer portals, subscriptions, transactions, licenses and
//! discount codes over authenticated JSON-over-HTTPS.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A shared client context, [`CreemClient`], carrying credentials, base URL,
//!   custom headers and a pluggable HTTP engine and logger
//! - A request pipeline that attaches `x-api-key`, serializes bodies and races
//!   each exchange against a per-call [`Context`](clients::Context)
//! - A response binder that reports service rejections in-band via
//!   [`ApiResponse::code`](rest::ApiResponse::code)
//! - Strongly typed entities and request records in [`rest::resources`]
//! - Named status, currency and type literals in [`constants`]
//!
//! ## Quick Start
//!
//! ```rust
//! use creem::CreemClient;
//!
//! let client = CreemClient::new("creem_test_key", "whsec_secret", true, []).unwrap();
//! assert_eq!(client.base_url(), "https://api.creem.io");
//! ```
//!
//! ## Making a Request
//!
//! ```rust,ignore
//! use creem::clients::Context;
//! use creem::rest::resources::CheckoutSessionCreateRequest;
//! use creem::CreemClient;
//! use std::time::Duration;
//!
//! let client = CreemClient::new("creem_test_key", "whsec_secret", true, [])?;
//! let ctx = Context::with_timeout(Duration::from_secs(10));
//!
//! let request = CheckoutSessionCreateRequest {
//!     product_id: "prod_1".to_string(),
//!     return_url: "https://shop.example/return".to_string(),
//!     cancel_url: "https://shop.example/cancel".to_string(),
//!     success_url: "https://shop.example/thanks".to_string(),
//!     ..Default::default()
//! };
//!
//! match client.create_checkout_session(&ctx, &request).await {
//!     Err(e) => eprintln!("could not reach Creem: {e}"),
//!     Ok(rsp) if rsp.is_success() => println!("checkout {}", rsp.id),
//!     Ok(rsp) => eprintln!("rejected ({}): {}", rsp.code, rsp.error_message().unwrap_or_default()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration lives on the client instance
//! - **Fail-fast validation**: Required fields are checked before any I/O
//! - **Thread-safe**: [`CreemClient`] is `Send + Sync` and meant to be shared
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No hidden retries**: One call is one HTTP exchange

pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use clients::{
    CancelHandle, Context, CreemClient, HttpEngine, HttpMethod, HttpRequest, HttpResponse, Logger,
    ReqwestEngine, TracingLogger, TransportError,
};
pub use config::{ApiKey, ClientOption, DebugSwitch, SecretKey};
pub use error::{CreemError, Param};
pub use rest::{ApiResponse, ErrorResponse, ListPage, ListParams};
