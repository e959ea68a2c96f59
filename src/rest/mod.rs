//! REST resource infrastructure for the Creem API.
//!
//! This module provides the pieces every resource method is assembled from:
//!
//! - **[`ApiResponse<T>`]**: The typed response with in-band status fields
//! - **Binders**: [`bind`], [`bind_data`] and [`bind_no_content`] turn a raw
//!   [`HttpResponse`](crate::clients::HttpResponse) into an `ApiResponse`
//! - **[`ListParams`]**: Pagination and filters for list endpoints
//! - **[`validate_id`]**: Rejects ids that would alter the request path
//! - **[`resources`]**: The domain entities, request records and the typed
//!   endpoint methods on [`CreemClient`](crate::CreemClient)
//!
//! # Example: Calling an endpoint
//!
//! ```rust,ignore
//! use creem::clients::Context;
//! use creem::rest::ListParams;
//! use creem::CreemClient;
//!
//! let client = CreemClient::new("creem_test_key", "whsec_secret", true, [])?;
//! let ctx = Context::background();
//!
//! let response = client.list_products(&ctx, Some(&ListParams::new().limit(20))).await?;
//! if response.is_success() {
//!     for product in &response.items {
//!         println!("{} {} {}", product.id, product.price, product.currency);
//!     }
//! } else {
//!     eprintln!("rejected: {}", response.error_message().unwrap_or_default());
//! }
//! ```

mod path;
mod response;

pub mod resources;

pub use path::{validate_id, ListParams};
pub use response::{bind, bind_data, bind_no_content, ApiResponse, DataEnvelope, ErrorResponse, ListPage};

pub(crate) use path::{resource_path, ListScope};
pub(crate) use response::null_as_default;

use crate::error::{CreemError, Param};

pub(crate) const STATUS_OK: u16 = 200;
pub(crate) const STATUS_CREATED: u16 = 201;
pub(crate) const STATUS_NO_CONTENT: u16 = 204;

/// Fails with [`CreemError::MissingParameter`] when `value` is empty.
pub(crate) fn require(param: Param, value: &str) -> Result<(), CreemError> {
    if value.is_empty() {
        return Err(CreemError::MissingParameter(param));
    }
    Ok(())
}

/// Fails with [`CreemError::MissingParameter`] unless `value` is a positive number.
pub(crate) fn require_positive(param: Param, value: f64) -> Result<(), CreemError> {
    if value.is_nan() || value <= 0.0 {
        return Err(CreemError::MissingParameter(param));
    }
    Ok(())
}
