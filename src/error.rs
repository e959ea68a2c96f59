//! Error types for the Creem API SDK.
//!
//! Every fallible operation in the SDK returns [`CreemError`]. The variants
//! split failures into three groups callers usually want to tell apart:
//!
//! - **Preflight**: [`CreemError::MissingParameter`] and
//!   [`CreemError::InvalidParameter`] are raised before any network I/O.
//! - **Transport**: [`CreemError::Http`] wraps a [`TransportError`] from the
//!   HTTP engine (connection failure, cancellation, deadline, body limit).
//! - **Decode**: [`CreemError::Unmarshal`] when the response body is not the
//!   JSON shape the endpoint promises.
//!
//! A non-2xx response from the service is *not* an error at this level. It is
//! reported through [`ApiResponse::code`](crate::rest::ApiResponse::code).
//!
//! # Example
//!
//! ```rust
//! use creem::{CreemClient, CreemError, Param};
//!
//! let result = CreemClient::new("", "secret", true, []);
//! assert!(matches!(
//!     result,
//!     Err(CreemError::MissingParameter(Param::ApiKey))
//! ));
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::TransportError;

/// Names of the request fields and arguments the SDK validates locally.
///
/// The `Display` output is the lowercase human-readable field name used in
/// [`CreemError::MissingParameter`] messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    /// The API key passed to the client constructor.
    ApiKey,
    /// The secret key passed to the client constructor.
    SecretKey,
    /// A checkout session id.
    CheckoutSessionId,
    /// A product id (also used for `new_product_id` on upgrades).
    ProductId,
    /// A customer id.
    CustomerId,
    /// A subscription id.
    SubscriptionId,
    /// A discount code id.
    DiscountCodeId,
    /// The `return_url` of a checkout or portal session.
    ReturnUrl,
    /// The `cancel_url` of a checkout session.
    CancelUrl,
    /// The `success_url` of a checkout session.
    SuccessUrl,
    /// A customer email.
    Email,
    /// A customer or product name.
    Name,
    /// A product description.
    Description,
    /// A product type.
    ProductType,
    /// A product price (must be greater than zero).
    Price,
    /// A currency code.
    Currency,
    /// A license key.
    LicenseKey,
    /// The code of a discount code.
    DiscountCode,
    /// The type of a discount code.
    DiscountType,
    /// The value of a discount code (must be greater than zero).
    DiscountValue,
}

impl Param {
    /// Returns the human-readable name of the parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "api key",
            Self::SecretKey => "secret key",
            Self::CheckoutSessionId => "checkout session id",
            Self::ProductId => "product id",
            Self::CustomerId => "customer id",
            Self::SubscriptionId => "subscription id",
            Self::DiscountCodeId => "discount code id",
            Self::ReturnUrl => "return url",
            Self::CancelUrl => "cancel url",
            Self::SuccessUrl => "success url",
            Self::Email => "email",
            Self::Name => "name",
            Self::Description => "description",
            Self::ProductType => "product type",
            Self::Price => "price",
            Self::Currency => "currency",
            Self::LicenseKey => "license key",
            Self::DiscountCode => "discount code",
            Self::DiscountType => "discount type",
            Self::DiscountValue => "discount value",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the Creem API SDK.
#[derive(Debug, Error)]
pub enum CreemError {
    /// A required field or argument was empty (or, for amounts, not positive).
    ///
    /// Raised before any network I/O.
    #[error("missing {0}")]
    MissingParameter(Param),

    /// An id contains characters that would alter the request path.
    ///
    /// Ids are interpolated into path templates without escaping, so `/`,
    /// `?`, `#` and whitespace are rejected. Raised before any network I/O.
    #[error("invalid {param} '{value}': ids must not contain '/', '?', '#' or whitespace")]
    InvalidParameter {
        /// The parameter that failed validation.
        param: Param,
        /// The rejected value.
        value: String,
    },

    /// The response body could not be decoded into the endpoint's success shape.
    #[error("unmarshal error: {source}, bytes: {body}")]
    Unmarshal {
        /// The underlying JSON error.
        source: serde_json::Error,
        /// The raw response body, lossily decoded as UTF-8.
        body: String,
    },

    /// The HTTP exchange itself failed.
    #[error("http.Do Error: {0}")]
    Http(#[from] TransportError),
}

impl CreemError {
    /// Returns `true` if the error was raised by local validation.
    #[must_use]
    pub const fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidParameter { .. }
        )
    }

    /// Returns the transport error, if this is a transport failure.
    #[must_use]
    pub const fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}
