//! Named literals used by the Creem API.
//!
//! Status fields on the domain entities are plain strings so that values the
//! service adds later still decode. The constants here are the literals the
//! SDK knows about today, grouped by the field they appear in.
//!
//! # Example
//!
//! ```rust
//! use creem::constants::{currency, status, subscription_status};
//! use creem::rest::ListParams;
//!
//! let params = ListParams::new().status(status::COMPLETED);
//! assert_eq!(params.status.as_deref(), Some("completed"));
//! assert_eq!(subscription_status::PAST_DUE, "past_due");
//! assert!(currency::is_recognized("EUR"));
//! ```

/// SDK protocol version.
pub const VERSION: &str = "v1.0.0";

/// `code` value of a successful [`ApiResponse`](crate::rest::ApiResponse).
pub const SUCCESS: u16 = 0;

/// Header carrying the API key.
pub const HEADER_API_KEY: &str = "x-api-key";

/// Content type header name.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Content type of every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Resource-agnostic status literals.
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";
    pub const PENDING: &str = "pending";
    pub const CANCELED: &str = "canceled";
    pub const COMPLETED: &str = "completed";
    pub const FAILED: &str = "failed";
    pub const REFUNDED: &str = "refunded";
    pub const PAUSED: &str = "paused";
    pub const RESUMED: &str = "resumed";
}

/// Payment status literals.
pub mod payment_status {
    pub const PENDING: &str = "pending";
    pub const SUCCEEDED: &str = "succeeded";
    pub const FAILED: &str = "failed";
    pub const CANCELED: &str = "canceled";
    pub const REFUNDED: &str = "refunded";
}

/// [`Subscription::status`](crate::rest::resources::Subscription::status) literals.
pub mod subscription_status {
    pub const ACTIVE: &str = "active";
    pub const CANCELED: &str = "canceled";
    pub const PAUSED: &str = "paused";
    pub const PAST_DUE: &str = "past_due";
    pub const UNPAID: &str = "unpaid";
    pub const TRIALING: &str = "trialing";
}

/// [`Order::status`](crate::rest::resources::Order::status) literals.
pub mod order_status {
    pub const PENDING: &str = "pending";
    pub const COMPLETED: &str = "completed";
    pub const CANCELED: &str = "canceled";
    pub const REFUNDED: &str = "refunded";
    pub const FAILED: &str = "failed";
}

/// [`Invoice::status`](crate::rest::resources::Invoice::status) literals.
pub mod invoice_status {
    pub const DRAFT: &str = "draft";
    pub const OPEN: &str = "open";
    pub const PAID: &str = "paid";
    pub const VOID: &str = "void";
    pub const UNCOLLECTIBLE: &str = "uncollectible";
}

/// [`Refund::status`](crate::rest::resources::Refund::status) literals.
pub mod refund_status {
    pub const PENDING: &str = "pending";
    pub const SUCCEEDED: &str = "succeeded";
    pub const FAILED: &str = "failed";
    pub const CANCELED: &str = "canceled";
}

/// ISO 4217 currency codes the SDK recognizes.
pub mod currency {
    pub const USD: &str = "USD";
    pub const EUR: &str = "EUR";
    pub const GBP: &str = "GBP";
    pub const JPY: &str = "JPY";
    pub const CAD: &str = "CAD";
    pub const AUD: &str = "AUD";
    pub const CHF: &str = "CHF";
    pub const CNY: &str = "CNY";

    /// Every recognized code.
    pub const RECOGNIZED: [&str; 8] = [USD, EUR, GBP, JPY, CAD, AUD, CHF, CNY];

    /// Returns `true` if `code` is one of [`RECOGNIZED`].
    ///
    /// The service may accept other codes; this is informational only.
    #[must_use]
    pub fn is_recognized(code: &str) -> bool {
        RECOGNIZED.contains(&code)
    }
}

/// [`PaymentMethod::kind`](crate::rest::resources::PaymentMethod::kind) literals.
pub mod payment_method_type {
    pub const CARD: &str = "card";
    pub const BANK: &str = "bank";
    pub const PAYPAL: &str = "paypal";
    pub const APPLE_PAY: &str = "apple_pay";
    pub const GOOGLE_PAY: &str = "google_pay";
}

/// Subscription billing cycle literals.
pub mod billing_cycle {
    pub const DAILY: &str = "daily";
    pub const WEEKLY: &str = "weekly";
    pub const MONTHLY: &str = "monthly";
    pub const YEARLY: &str = "yearly";
}

/// [`Product::kind`](crate::rest::resources::Product::kind) literals.
pub mod product_type {
    pub const ONE_TIME: &str = "one_time";
    pub const RECURRING: &str = "recurring";
    pub const SERVICE: &str = "service";
    pub const DIGITAL: &str = "digital";
    pub const PHYSICAL: &str = "physical";
}

/// [`DiscountCode::kind`](crate::rest::resources::DiscountCode::kind) literals.
pub mod discount_type {
    pub const PERCENTAGE: &str = "percentage";
    pub const FIXED_AMOUNT: &str = "fixed_amount";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_currencies() {
        assert_eq!(currency::RECOGNIZED.len(), 8);
        assert!(currency::is_recognized("JPY"));
        assert!(!currency::is_recognized("usd"));
        assert!(!currency::is_recognized("BTC"));
    }

    #[test]
    fn test_header_literals() {
        assert_eq!(HEADER_API_KEY, "x-api-key");
        assert_eq!(CONTENT_TYPE_JSON, "application/json");
        assert_eq!(SUCCESS, 0);
    }
}
