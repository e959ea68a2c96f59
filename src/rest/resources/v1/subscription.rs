//! Subscription resource.
//!
//! Subscriptions are created by the service when a recurring product is
//! bought through checkout. The SDK reads, updates, upgrades and cancels
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{
    bind_data, null_as_default, path, require, resource_path, ApiResponse, STATUS_OK,
};

use super::common::{Metadata, OperationResult};

/// A recurring billing agreement.
///
/// See [`constants::subscription_status`](crate::constants::subscription_status)
/// and [`constants::billing_cycle`](crate::constants::billing_cycle).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Subscription {
    /// Unique identifier of the subscription.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The paying customer.
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,

    /// The recurring product subscribed to.
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: String,

    /// Lifecycle state; see
    /// [`constants::subscription_status`](crate::constants::subscription_status).
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Amount billed each cycle in the major currency unit.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,

    /// ISO 4217 currency code.
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,

    /// Billing interval; see [`constants::billing_cycle`](crate::constants::billing_cycle).
    #[serde(deserialize_with = "null_as_default")]
    pub billing_cycle: String,

    /// Length of the trial in days.
    #[serde(deserialize_with = "null_as_default")]
    pub trial_days: u32,

    /// Start of the period already paid for.
    #[serde(deserialize_with = "null_as_default")]
    pub current_period_start: DateTime<Utc>,

    /// End of the period already paid for.
    #[serde(deserialize_with = "null_as_default")]
    pub current_period_end: DateTime<Utc>,

    /// When cancellation was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,

    /// When the subscription stopped billing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Shape of a subscription creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SubscriptionCreateRequest {
    pub customer_id: String,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub billing_cycle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body of [`CreemClient::update_subscription`]. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SubscriptionUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body of [`CreemClient::upgrade_subscription`]. `new_product_id` is required.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SubscriptionUpgradeRequest {
    pub new_product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

fn subscription_path(subscription_id: &str) -> Result<String, CreemError> {
    resource_path(path::SUBSCRIPTIONS, Param::SubscriptionId, subscription_id)
}

impl CreemClient {
    /// Retrieves a subscription (`GET /v1/subscriptions/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `subscription_id`.
    pub async fn get_subscription(
        &self,
        ctx: &Context,
        subscription_id: &str,
    ) -> Result<ApiResponse<Subscription>, CreemError> {
        let path = subscription_path(subscription_id)?;
        let response = self.get(ctx, &path).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Updates a subscription (`POST /v1/subscriptions/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `subscription_id`.
    pub async fn update_subscription(
        &self,
        ctx: &Context,
        subscription_id: &str,
        request: &SubscriptionUpdateRequest,
    ) -> Result<ApiResponse<Subscription>, CreemError> {
        let path = subscription_path(subscription_id)?;
        let response = self.post(ctx, &path, request).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Moves a subscription to another product
    /// (`POST /v1/subscriptions/{id}/upgrade`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if `subscription_id` or
    /// `new_product_id` is empty, checked in that order.
    pub async fn upgrade_subscription(
        &self,
        ctx: &Context,
        subscription_id: &str,
        request: &SubscriptionUpgradeRequest,
    ) -> Result<ApiResponse<Subscription>, CreemError> {
        let path = subscription_path(subscription_id)?;
        require(Param::ProductId, &request.new_product_id)?;
        let response = self.post(ctx, &format!("{path}/upgrade"), request).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Cancels a subscription (`POST /v1/subscriptions/{id}/cancel`, expects 200).
    ///
    /// The request carries no body.
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `subscription_id`.
    pub async fn cancel_subscription(
        &self,
        ctx: &Context,
        subscription_id: &str,
    ) -> Result<ApiResponse<OperationResult>, CreemError> {
        let path = subscription_path(subscription_id)?;
        let response = self.post_empty(ctx, &format!("{path}/cancel")).await?;
        bind_data(&response, STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_path() {
        assert_eq!(subscription_path("sub_1").unwrap(), "/v1/subscriptions/sub_1");
        assert!(matches!(
            subscription_path(""),
            Err(CreemError::MissingParameter(Param::SubscriptionId))
        ));
    }

    #[test]
    fn test_active_subscription_round_trips() {
        let json = r#"{
            "id": "sub_1",
            "customer_id": "cust_1",
            "product_id": "prod_1",
            "status": "trialing",
            "amount": 29.0,
            "currency": "USD",
            "billing_cycle": "monthly",
            "trial_days": 14,
            "current_period_start": "2024-02-01T00:00:00Z",
            "current_period_end": "2024-03-01T00:00:00Z",
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-01T00:00:00Z"
        }"#;

        let subscription: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(subscription.trial_days, 14);
        assert!(subscription.canceled_at.is_none());

        let encoded = serde_json::to_string(&subscription).unwrap();
        let decoded: Subscription = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, subscription);
    }
}
