//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version, matching the `/v1` path prefix
//! used by the service:
//!
//! ```text
//! resources/
//!   mod.rs      <- This file (re-exports the current version)
//!   v1/
//!     mod.rs    <- Entities, request records and endpoint methods
//! ```
//!
//! The current version is re-exported at this level:
//!
//! ```rust
//! use creem::rest::resources::{CheckoutSessionCreateRequest, Product};
//! // or explicitly
//! use creem::rest::resources::v1::Customer;
//! ```

pub mod v1;

pub use v1::*;
