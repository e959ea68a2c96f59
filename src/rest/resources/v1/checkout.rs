//! Checkout session resource.
//!
//! A checkout session is a hosted payment page for one product. Create one,
//! redirect the buyer to it, and read it back later to see how it ended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{
    bind_data, null_as_default, path, require, resource_path, ApiResponse, STATUS_CREATED,
    STATUS_OK,
};

use super::common::Metadata;

/// A hosted checkout session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckoutSession {
    /// Unique identifier of the session.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The product being bought.
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: String,

    /// The buyer, once known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Lifecycle state; see [`constants::status`](crate::constants::status).
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Amount charged in the major currency unit.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,

    /// ISO 4217 currency code.
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,

    /// Where the buyer lands after leaving the page.
    #[serde(deserialize_with = "null_as_default")]
    pub return_url: String,

    /// Where the buyer lands after abandoning payment.
    #[serde(deserialize_with = "null_as_default")]
    pub cancel_url: String,

    /// Where the buyer lands after paying.
    #[serde(deserialize_with = "null_as_default")]
    pub success_url: String,

    /// The payment method used, once paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,

    /// Merchant data attached at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// When the session was created.
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    /// When the session last changed.
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,

    /// When the hosted page stops accepting payment.
    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: DateTime<Utc>,
}

/// Body of [`CreemClient::create_checkout_session`].
///
/// `product_id`, `return_url`, `cancel_url` and `success_url` are required.
///
/// # Example
///
/// ```rust
/// use creem::rest::resources::CheckoutSessionCreateRequest;
///
/// let request = CheckoutSessionCreateRequest {
///     product_id: "prod_1".to_string(),
///     return_url: "https://shop.example/return".to_string(),
///     cancel_url: "https://shop.example/cancel".to_string(),
///     success_url: "https://shop.example/thanks".to_string(),
///     ..Default::default()
/// };
/// let json = serde_json::to_value(&request).unwrap();
/// assert!(json.get("customer_id").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckoutSessionCreateRequest {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub return_url: String,
    pub cancel_url: String,
    pub success_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Changes to an open checkout session. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckoutSessionUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CheckoutSessionCreateRequest {
    fn validate(&self) -> Result<(), CreemError> {
        require(Param::ProductId, &self.product_id)?;
        require(Param::ReturnUrl, &self.return_url)?;
        require(Param::CancelUrl, &self.cancel_url)?;
        require(Param::SuccessUrl, &self.success_url)
    }
}

impl CreemClient {
    /// Creates a checkout session (`POST /v1/checkout-sessions`, expects 201).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] for the first empty required
    /// field, in the order product id, return url, cancel url, success url.
    /// Transport and decode failures are returned as described on
    /// [`CreemError`].
    pub async fn create_checkout_session(
        &self,
        ctx: &Context,
        request: &CheckoutSessionCreateRequest,
    ) -> Result<ApiResponse<CheckoutSession>, CreemError> {
        request.validate()?;
        let response = self.post(ctx, path::CHECKOUT_SESSIONS, request).await?;
        bind_data(&response, STATUS_CREATED)
    }

    /// Retrieves a checkout session (`GET /v1/checkout-sessions/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `session_id`.
    pub async fn get_checkout_session(
        &self,
        ctx: &Context,
        session_id: &str,
    ) -> Result<ApiResponse<CheckoutSession>, CreemError> {
        let path = resource_path(path::CHECKOUT_SESSIONS, Param::CheckoutSessionId, session_id)?;
        let response = self.get(ctx, &path).await?;
        bind_data(&response, STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CheckoutSessionCreateRequest {
        CheckoutSessionCreateRequest {
            product_id: "prod_1".to_string(),
            return_url: "https://a".to_string(),
            cancel_url: "https://b".to_string(),
            success_url: "https://c".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_order() {
        assert!(valid_request().validate().is_ok());

        let mut request = valid_request();
        request.return_url.clear();
        request.success_url.clear();
        assert!(matches!(
            request.validate(),
            Err(CreemError::MissingParameter(Param::ReturnUrl))
        ));

        let request = CheckoutSessionCreateRequest::default();
        assert!(matches!(
            request.validate(),
            Err(CreemError::MissingParameter(Param::ProductId))
        ));
    }

    #[test]
    fn test_session_deserializes_from_service_payload() {
        let json = r#"{
            "id": "cs_1",
            "product_id": "prod_1",
            "status": "pending",
            "amount": 0,
            "currency": "USD",
            "return_url": "https://a",
            "cancel_url": "https://b",
            "success_url": "https://c",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "expires_at": "2024-01-01T01:00:00Z"
        }"#;

        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "cs_1");
        assert_eq!(session.status, "pending");
        assert!(session.customer_id.is_none());
        assert_eq!(
            session.expires_at.to_rfc3339(),
            "2024-01-01T01:00:00+00:00"
        );
    }

    #[test]
    fn test_update_request_serializes_only_set_fields() {
        let request = CheckoutSessionUpdateRequest {
            amount: Some(19.5),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"amount":19.5}"#);
    }
}
