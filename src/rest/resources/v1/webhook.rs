//! Webhook endpoint shapes.
//!
//! Delivery and signature verification are handled by the receiving
//! application; the SDK only models the registration records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::null_as_default;

/// A registered webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Webhook {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Endpoint the service posts events to.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// Event names the endpoint is subscribed to.
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Shape of a webhook registration.
///
/// # Example
///
/// ```rust
/// use creem::rest::resources::WebhookCreateRequest;
///
/// let request = WebhookCreateRequest::new("https://shop.example/hooks")
///     .event("checkout.completed")
///     .event("subscription.canceled");
/// assert_eq!(request.events.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WebhookCreateRequest {
    pub url: String,
    pub events: Vec<String>,
}

impl WebhookCreateRequest {
    /// Creates a registration for `url` with no events.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            events: Vec::new(),
        }
    }

    /// Subscribes to one more event.
    #[must_use]
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.events.push(event.into());
        self
    }
}

/// Shape of a webhook update. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WebhookUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
